use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// The complex points sampled for one frame.
///
/// Stored column-major: index `x * grid_size + y` holds the sample at column
/// `x`, row `y`. The same mapping is used by [`EscapeValues`].
///
/// [`EscapeValues`]: crate::core::data::escape_values::EscapeValues
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    grid_size: u32,
    points: Vec<Complex>,
}

impl SampleGrid {
    #[must_use]
    pub fn new(viewport: &Viewport, grid_size: u32) -> Self {
        let mut points = Vec::with_capacity(grid_size as usize * grid_size as usize);

        for x in 0..grid_size {
            for y in 0..grid_size {
                points.push(viewport.sample(x, y));
            }
        }

        Self { grid_size, points }
    }

    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[must_use]
    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        x as usize * self.grid_size as usize + y as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Selection;

    fn viewport(grid_size: u32) -> Viewport {
        Viewport::from_selection(Selection::new(-2.0, -1.5, 3.0, 3.0), grid_size).unwrap()
    }

    #[test]
    fn test_grid_has_size_squared_points() {
        for grid_size in [2, 3, 17, 64] {
            let grid = SampleGrid::new(&viewport(grid_size), grid_size);

            assert_eq!(grid.len(), (grid_size * grid_size) as usize);
            assert_eq!(grid.grid_size(), grid_size);
        }
    }

    #[test]
    fn test_points_follow_column_major_mapping() {
        let viewport = viewport(5);
        let grid = SampleGrid::new(&viewport, 5);

        for x in 0..5 {
            for y in 0..5 {
                assert_eq!(grid.points()[grid.index_of(x, y)], viewport.sample(x, y));
            }
        }
    }

    #[test]
    fn test_first_and_last_points_hit_viewport_corners() {
        let viewport = viewport(10);
        let grid = SampleGrid::new(&viewport, 10);

        assert_eq!(
            grid.points().first(),
            Some(&Complex::new(viewport.xmin(), viewport.ymin()))
        );
        assert_eq!(
            grid.points().last(),
            Some(&Complex::new(viewport.xmax(), viewport.ymax()))
        );
    }

    #[test]
    fn test_inner_loop_walks_imaginary_axis() {
        let viewport = viewport(4);
        let grid = SampleGrid::new(&viewport, 4);

        assert_eq!(grid.points()[0].real, grid.points()[1].real);
        assert!(grid.points()[1].imag > grid.points()[0].imag);
        assert!(grid.points()[4].real > grid.points()[0].real);
    }
}
