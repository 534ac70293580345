use std::sync::Arc;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    WaitingForUpdate,
    NeedToUpdate,
    ReadyToDisplay,
    Done,
}

impl GenerationStatus {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WaitingForUpdate => "waiting for update",
            Self::NeedToUpdate => "need to update",
            Self::ReadyToDisplay => "ready to display",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Everything the owner and the worker share, kept behind one lock.
///
/// The methods below are the only way to change the status, and each one is
/// a single transition. The published frame is swapped in by the same call
/// that marks it ready.
#[derive(Debug)]
pub(crate) struct FrameState {
    status: GenerationStatus,
    viewport: Viewport,
    frame: Arc<PixelBuffer>,
    frames_generated: u64,
}

impl FrameState {
    pub(crate) fn new(viewport: Viewport, first_frame: PixelBuffer) -> Self {
        Self {
            status: GenerationStatus::ReadyToDisplay,
            viewport,
            frame: Arc::new(first_frame),
            frames_generated: 1,
        }
    }

    pub(crate) fn status(&self) -> GenerationStatus {
        self.status
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub(crate) fn frame(&self) -> Arc<PixelBuffer> {
        Arc::clone(&self.frame)
    }

    pub(crate) fn frames_generated(&self) -> u64 {
        self.frames_generated
    }

    /// Live state -> `WaitingForUpdate`, except that a request accepted
    /// before the worker started stays `NeedToUpdate`. Fails once done.
    pub(crate) fn arm(&mut self) -> bool {
        match self.status {
            GenerationStatus::Done => false,
            GenerationStatus::NeedToUpdate => true,
            _ => {
                self.status = GenerationStatus::WaitingForUpdate;
                true
            }
        }
    }

    /// `WaitingForUpdate` -> `NeedToUpdate`, storing the new viewport.
    /// Requests in any other state are dropped.
    pub(crate) fn request(&mut self, viewport: Viewport) -> bool {
        if self.status != GenerationStatus::WaitingForUpdate {
            return false;
        }

        self.viewport = viewport;
        self.status = GenerationStatus::NeedToUpdate;
        true
    }

    /// The viewport to regenerate, if an update is pending.
    pub(crate) fn pending(&self) -> Option<Viewport> {
        (self.status == GenerationStatus::NeedToUpdate).then_some(self.viewport)
    }

    /// `NeedToUpdate` -> `ReadyToDisplay`, publishing `frame`.
    pub(crate) fn publish(&mut self, frame: Arc<PixelBuffer>) -> bool {
        if self.status != GenerationStatus::NeedToUpdate {
            return false;
        }

        self.frame = frame;
        self.frames_generated += 1;
        self.status = GenerationStatus::ReadyToDisplay;
        true
    }

    /// `ReadyToDisplay` -> `WaitingForUpdate`.
    pub(crate) fn consume(&mut self) -> bool {
        if self.status != GenerationStatus::ReadyToDisplay {
            return false;
        }

        self.status = GenerationStatus::WaitingForUpdate;
        true
    }

    pub(crate) fn finish(&mut self) {
        self.status = GenerationStatus::Done;
    }
}
