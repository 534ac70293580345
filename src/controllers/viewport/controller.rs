use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::controllers::viewport::config::ControllerConfig;
use crate::controllers::viewport::errors::ControllerError;
use crate::controllers::viewport::status::{FrameState, GenerationStatus};
use crate::core::actions::generate_pixel_buffer::ports::colour_palette::ColourPalette;
use crate::core::actions::render_frame::render_frame;
use crate::core::data::colour::NormalisedRgb;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::{Selection, Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::palette::kinds::BaseColour;
use crate::core::palette::standard::StandardPalette;

const WORKER_THREAD_NAME: &str = "viewport-worker";

struct SharedState {
    state: Mutex<FrameState>,
    wake: Condvar,
}

impl SharedState {
    // Every transition leaves `FrameState` consistent, so a panic elsewhere
    // never strands it half-written.
    fn lock(&self) -> MutexGuard<'_, FrameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// What the worker needs to regenerate a frame.
#[derive(Clone, Copy)]
struct FrameRecipe {
    grid_size: u32,
    colour: NormalisedRgb,
    algorithm: MandelbrotAlgorithm,
}

impl FrameRecipe {
    fn render(&self, viewport: &Viewport) -> PixelBuffer {
        render_frame(viewport, self.grid_size, self.colour, &self.algorithm)
    }
}

pub struct ViewportController {
    shared: Arc<SharedState>,
    recipe: FrameRecipe,
    poll_interval: Duration,
    worker: Option<JoinHandle<()>>,
}

impl ViewportController {
    /// Builds a controller with the default configuration and palette.
    ///
    /// Blocks until the first frame for `selection` is rendered.
    pub fn new(
        selection: Selection,
        grid_size: u32,
        colour: BaseColour,
    ) -> Result<Self, ControllerError> {
        Self::with_palette(
            selection,
            grid_size,
            colour,
            &StandardPalette,
            ControllerConfig::default(),
        )
    }

    pub fn with_palette<P: ColourPalette>(
        selection: Selection,
        grid_size: u32,
        colour: P::Token,
        palette: &P,
        config: ControllerConfig,
    ) -> Result<Self, ControllerError> {
        let algorithm = config.algorithm()?;
        let viewport = Viewport::from_selection(selection, grid_size)?;
        let recipe = FrameRecipe {
            grid_size,
            colour: palette.normalise(colour),
            algorithm,
        };

        let start = Instant::now();
        let first_frame = recipe.render(&viewport);
        info!(
            grid_size,
            max_iterations = algorithm.max_iterations(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "first frame ready"
        );

        Ok(Self {
            shared: Arc::new(SharedState {
                state: Mutex::new(FrameState::new(viewport, first_frame)),
                wake: Condvar::new(),
            }),
            recipe,
            poll_interval: config.poll_interval,
            worker: None,
        })
    }

    /// Starts the background worker and waits for viewport changes.
    ///
    /// Only one worker runs per controller; a second call fails.
    pub fn simulate(&mut self) -> Result<(), ControllerError> {
        if self.worker.is_some() {
            return Err(ControllerError::AlreadySimulating);
        }

        if !self.shared.lock().arm() {
            return Err(ControllerError::ShutDown);
        }

        let shared = Arc::clone(&self.shared);
        let recipe = self.recipe;
        let poll_interval = self.poll_interval;

        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_owned())
            .spawn(move || Self::worker_loop(&shared, recipe, poll_interval))
            .map_err(ControllerError::WorkerSpawn)?;

        self.worker = Some(worker);
        info!(grid_size = self.recipe.grid_size, "worker started");

        Ok(())
    }

    /// Asks the worker to regenerate for `selection`.
    ///
    /// Returns `Ok(false)` when the request is dropped because a frame is
    /// pending or ready but not yet consumed. Dropped requests are not queued.
    pub fn request_viewport_change(&self, selection: Selection) -> Result<bool, ViewportError> {
        let viewport = Viewport::from_selection(selection, self.recipe.grid_size)?;
        let accepted = self.shared.lock().request(viewport);

        if accepted {
            self.shared.wake.notify_one();
            debug!(
                xmin = viewport.xmin(),
                ymin = viewport.ymin(),
                scale = viewport.scale(),
                "viewport change accepted"
            );
        } else {
            debug!("viewport change dropped, controller busy");
        }

        Ok(accepted)
    }

    /// Reports whether a new frame is ready, consuming the signal.
    ///
    /// Returns `true` at most once per generated frame.
    #[must_use]
    pub fn is_updated(&self) -> bool {
        self.shared.lock().consume()
    }

    /// A copy of the latest complete frame.
    #[must_use]
    pub fn pixel_buffer(&self) -> PixelBuffer {
        let frame = self.shared.lock().frame();
        PixelBuffer::clone(&frame)
    }

    #[must_use]
    pub fn status(&self) -> GenerationStatus {
        self.shared.lock().status()
    }

    /// The viewport of the pending frame if one is requested, otherwise of
    /// the latest frame.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.shared.lock().viewport()
    }

    #[must_use]
    pub fn frames_generated(&self) -> u64 {
        self.shared.lock().frames_generated()
    }

    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.recipe.grid_size
    }

    #[must_use]
    pub fn colour(&self) -> NormalisedRgb {
        self.recipe.colour
    }

    /// Marks the controller done and waits for the worker to exit.
    ///
    /// A regeneration already in progress runs to completion first. Calling
    /// this more than once is harmless.
    pub fn shutdown(&mut self) -> Result<(), ControllerError> {
        self.shared.lock().finish();
        self.shared.wake.notify_all();

        if let Some(handle) = self.worker.take() {
            handle.join().map_err(|_| ControllerError::WorkerPanicked)?;
            info!("worker stopped");
        }

        Ok(())
    }

    fn worker_loop(shared: &SharedState, recipe: FrameRecipe, poll_interval: Duration) {
        loop {
            let viewport = {
                let mut state = shared.lock();
                loop {
                    if state.status() == GenerationStatus::Done {
                        return;
                    }

                    if let Some(viewport) = state.pending() {
                        break viewport;
                    }

                    state = match shared.wake.wait_timeout(state, poll_interval) {
                        Ok((guard, _)) => guard,
                        Err(poisoned) => poisoned.into_inner().0,
                    };
                }
            };

            let start = Instant::now();
            let frame = Arc::new(recipe.render(&viewport));
            let elapsed_ms = start.elapsed().as_millis() as u64;

            if shared.lock().publish(frame) {
                debug!(elapsed_ms, "frame ready to display");
            } else {
                debug!(elapsed_ms, "frame discarded, controller shutting down");
            }
        }
    }
}

impl Drop for ViewportController {
    fn drop(&mut self) {
        if let Err(err) = self.shutdown() {
            error!(%err, "viewport controller shutdown failed");
        }
    }
}
