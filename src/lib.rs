mod controllers;
mod core;

pub use crate::controllers::viewport::{
    ControllerConfig, ControllerError, GenerationStatus, ViewportController,
};
pub use crate::core::actions::generate_escape_values::generate_escape_values::{
    ESCAPE_CHUNK_SAMPLES, generate_escape_values, generate_escape_values_serial,
};
pub use crate::core::actions::generate_escape_values::ports::escape_time_algorithm::EscapeTimeAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    colourize, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_palette::ColourPalette;
pub use crate::core::actions::render_frame::render_frame;
pub use crate::core::data::colour::{NormalisedRgb, Rgb};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_values::{EscapeValues, EscapeValuesError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::sample_grid::SampleGrid;
pub use crate::core::data::viewport::{
    MAX_GRID_SIZE, MIN_GRID_SIZE, Selection, Viewport, ViewportError,
};
pub use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm, mandelbrot, mandelbrot_formula,
    normalise_escape,
};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::palette::kinds::BaseColour;
pub use crate::core::palette::standard::StandardPalette;
