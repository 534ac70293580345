use std::time::Duration;

use crate::controllers::viewport::errors::ControllerError;
use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Iteration budget per sample.
    pub max_iterations: u32,
    /// Longest the idle worker sleeps before re-checking the status.
    pub poll_interval: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ControllerConfig {
    pub(crate) fn algorithm(&self) -> Result<MandelbrotAlgorithm, ControllerError> {
        if self.poll_interval.is_zero() {
            return Err(ControllerError::ZeroPollInterval);
        }

        Ok(MandelbrotAlgorithm::new(self.max_iterations)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::errors::MandelbrotError;

    #[test]
    fn defaults() {
        let config = ControllerConfig::default();

        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.poll_interval, Duration::from_millis(1));
        assert_eq!(config.algorithm().unwrap().max_iterations(), 50);
    }

    #[test]
    fn zero_iterations_rejected() {
        let config = ControllerConfig {
            max_iterations: 0,
            ..ControllerConfig::default()
        };

        assert!(matches!(
            config.algorithm(),
            Err(ControllerError::Algorithm(MandelbrotError::ZeroMaxIterations))
        ));
    }

    #[test]
    fn zero_poll_interval_rejected() {
        let config = ControllerConfig {
            poll_interval: Duration::ZERO,
            ..ControllerConfig::default()
        };

        assert!(matches!(
            config.algorithm(),
            Err(ControllerError::ZeroPollInterval)
        ));
    }
}
