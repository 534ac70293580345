pub mod generate_escape_values;
pub mod generate_pixel_buffer;
pub mod render_frame;
