use thiserror::Error;

use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("invalid algorithm settings: {0}")]
    Algorithm(#[from] MandelbrotError),
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
    #[error("background worker is already running")]
    AlreadySimulating,
    #[error("controller has been shut down")]
    ShutDown,
    #[error("failed to spawn background worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),
    #[error("background worker panicked")]
    WorkerPanicked,
}
