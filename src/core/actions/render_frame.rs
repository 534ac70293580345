use std::time::Instant;

use tracing::debug;

use crate::core::actions::generate_escape_values::generate_escape_values::generate_escape_values;
use crate::core::actions::generate_escape_values::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::colour::NormalisedRgb;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::viewport::Viewport;

/// Samples `viewport`, runs the escape-time pass and colours the result.
pub fn render_frame<Alg>(
    viewport: &Viewport,
    grid_size: u32,
    colour: NormalisedRgb,
    algorithm: &Alg,
) -> PixelBuffer
where
    Alg: EscapeTimeAlgorithm + Sync,
{
    let start = Instant::now();
    let grid = SampleGrid::new(viewport, grid_size);
    let sampled = start.elapsed();

    let values = generate_escape_values(&grid, algorithm);
    drop(grid);
    let escaped = start.elapsed();

    let buffer = generate_pixel_buffer(&values, colour);
    let total = start.elapsed();

    debug!(
        grid_size,
        xmin = viewport.xmin(),
        ymin = viewport.ymin(),
        scale = viewport.scale(),
        sample_us = sampled.as_micros() as u64,
        escape_us = (escaped - sampled).as_micros() as u64,
        colour_us = (total - escaped).as_micros() as u64,
        "rendered frame"
    );

    buffer
}
