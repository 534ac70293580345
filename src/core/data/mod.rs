pub mod colour;
pub mod complex;
pub mod escape_values;
pub mod pixel_buffer;
pub mod sample_grid;
pub mod viewport;
