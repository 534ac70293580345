use crate::core::data::complex::Complex;
use thiserror::Error;

/// Smallest grid that still spans a non-empty region.
pub const MIN_GRID_SIZE: u32 = 2;

/// Largest grid accepted; its sample grid alone is about 1 GiB.
pub const MAX_GRID_SIZE: u32 = 8192;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("grid size must be between 2 and 8192: {0}")]
    InvalidGridSize(u32),
    #[error("selection size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("selection origin must be finite: ({x}, {y})")]
    NonFiniteOrigin { x: f64, y: f64 },
}

/// A rectangle picked on the complex plane, before it is fitted to a grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Selection {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Selection {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The region of the complex plane sampled by one frame.
///
/// Samples are spaced `scale` apart on both axes starting at `(xmin, ymin)`;
/// the last sample sits at `(xmax, ymax)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    scale: f64,
}

impl Viewport {
    pub fn from_selection(selection: Selection, grid_size: u32) -> Result<Self, ViewportError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(ViewportError::InvalidGridSize(grid_size));
        }

        let Selection {
            x,
            y,
            width,
            height,
        } = selection;

        if !x.is_finite() || !y.is_finite() {
            return Err(ViewportError::NonFiniteOrigin { x, y });
        }

        // `!(w > 0.0)` also catches NaN.
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ViewportError::InvalidSize { width, height });
        }

        let scale = width / (f64::from(grid_size) + 1.0);
        let span = scale * (f64::from(grid_size) - 1.0);

        // A width too small to survive the division collapses the region.
        if !(scale > 0.0 && scale.is_finite()) || x + span <= x || y + span <= y {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            xmin: x,
            xmax: x + span,
            ymin: y,
            ymax: y + span,
            scale,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sample at column `x`, row `y` of the grid.
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> Complex {
        Complex {
            real: self.xmin + self.scale * f64::from(x),
            imag: self.ymin + self.scale * f64::from(y),
        }
    }
}
