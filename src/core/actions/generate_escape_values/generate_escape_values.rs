use rayon::prelude::*;

use crate::core::actions::generate_escape_values::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::escape_values::EscapeValues;
use crate::core::data::sample_grid::SampleGrid;

/// Number of samples handed to one rayon task.
pub const ESCAPE_CHUNK_SAMPLES: usize = 1024;

/// Computes one escape value per sample in parallel.
///
/// The output is split into disjoint chunks of [`ESCAPE_CHUNK_SAMPLES`] and
/// each chunk is filled from the matching slice of the grid, so the result is
/// in the same order as `grid.points()`.
pub fn generate_escape_values<Alg>(grid: &SampleGrid, algorithm: &Alg) -> EscapeValues
where
    Alg: EscapeTimeAlgorithm + Sync,
{
    let points = grid.points();
    let mut values = vec![0u8; points.len()];

    values
        .par_chunks_mut(ESCAPE_CHUNK_SAMPLES)
        .zip(points.par_chunks(ESCAPE_CHUNK_SAMPLES))
        .for_each(|(out, samples)| {
            for (slot, &z0) in out.iter_mut().zip(samples) {
                *slot = algorithm.escape_value(z0);
            }
        });

    EscapeValues::for_grid(grid, values)
}

/// Single-threaded reference used to check the parallel path.
pub fn generate_escape_values_serial<Alg>(grid: &SampleGrid, algorithm: &Alg) -> EscapeValues
where
    Alg: EscapeTimeAlgorithm,
{
    let values = grid
        .points()
        .iter()
        .map(|&z0| algorithm.escape_value(z0))
        .collect();

    EscapeValues::for_grid(grid, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::viewport::{Selection, Viewport};
    use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, mandelbrot_formula};

    struct StubAlgorithm {}

    impl EscapeTimeAlgorithm for StubAlgorithm {
        fn escape_value(&self, z0: Complex) -> u8 {
            (z0.real + z0.imag) as u8
        }
    }

    fn grid(grid_size: u32) -> SampleGrid {
        let viewport =
            Viewport::from_selection(Selection::new(-2.0, -1.5, 3.0, 3.0), grid_size).unwrap();
        SampleGrid::new(&viewport, grid_size)
    }

    #[test]
    fn test_parallel_matches_serial() {
        let algorithm = MandelbrotAlgorithm::default();

        for grid_size in [2, 7, 33, 100] {
            let grid = grid(grid_size);

            assert_eq!(
                generate_escape_values(&grid, &algorithm),
                generate_escape_values_serial(&grid, &algorithm)
            );
        }
    }

    #[test]
    fn test_output_has_one_value_per_sample() {
        // 40² = 1600 spans a partial second chunk
        let grid = grid(40);
        let values = generate_escape_values(&grid, &MandelbrotAlgorithm::default());

        assert_eq!(values.len(), 1600);
        assert_eq!(values.grid_size(), 40);
    }

    #[test]
    fn test_values_line_up_with_samples() {
        let viewport =
            Viewport::from_selection(Selection::new(0.0, 0.0, 101.0, 101.0), 100).unwrap();
        let grid = SampleGrid::new(&viewport, 100);

        let values = generate_escape_values(&grid, &StubAlgorithm {});

        for (x, y) in [(0, 0), (3, 7), (99, 0), (42, 99)] {
            assert_eq!(values.at(x, y), Some((x + y) as u8));
        }
    }

    #[test]
    fn test_values_match_formula() {
        let grid = grid(16);
        let values = generate_escape_values(&grid, &MandelbrotAlgorithm::default());

        for (value, &z0) in values.values().iter().zip(grid.points()) {
            assert_eq!(*value, mandelbrot_formula(z0, 50));
        }
    }
}
