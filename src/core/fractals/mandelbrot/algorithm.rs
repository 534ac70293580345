use crate::core::actions::generate_escape_values::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z = z² + z0` from `z0` and returns the step at which `|z|² > 4`,
/// or `max` if the orbit stays bounded.
#[must_use]
pub fn mandelbrot(z0: Complex, max: u32) -> u32 {
    let mut z = z0;

    for iteration in 0..max {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + z0;
    }

    max
}

/// Maps a raw escape count onto `0..=255` with a square-root curve, which
/// lifts the fast-escaping outer bands.
#[must_use]
pub fn normalise_escape(value: u32, max: u32) -> u8 {
    if value >= max {
        return 0;
    }

    let brightness = (f64::from(value) / f64::from(max)).sqrt() * 255.0;
    brightness.round() as u8
}

#[must_use]
pub fn mandelbrot_formula(z0: Complex, max: u32) -> u8 {
    normalise_escape(mandelbrot(z0, max), max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for MandelbrotAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn escape_value(&self, z0: Complex) -> u8 {
        mandelbrot_formula(z0, self.max_iterations)
    }
}
