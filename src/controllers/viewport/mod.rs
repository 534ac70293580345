//! Viewport controller for background fractal regeneration.
//!
//! The owner thread renders the first frame synchronously, then a single
//! worker regenerates the frame whenever a new viewport is accepted. The
//! display loop polls [`ViewportController::is_updated`] once per tick and
//! fetches the frame when it reports `true`.

pub mod config;
mod controller;
pub mod errors;
pub mod status;

pub use config::ControllerConfig;
pub use controller::ViewportController;
pub use errors::ControllerError;
pub use status::GenerationStatus;
