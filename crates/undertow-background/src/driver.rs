//! Frame loop driving the uniform state
//!
//! The driver never sleeps or spins. It asks a [`FrameScheduler`] for one
//! display-refresh callback at a time; the owner calls [`AnimationDriver::tick`]
//! when that callback fires, renders, then asks for the next one.

use crate::constants::{HOVER_EASING, MOUSE_EASING, TIME_STEP};
use crate::easing::ease_toward;
use crate::error::HostError;
use crate::math::{Size, Vec2};
use crate::pointer::PointerState;
use crate::uniforms::UniformState;

/// Handle of a scheduled frame callback (`requestAnimationFrame` id on the web)
pub type FrameHandle = i32;

/// Display-refresh scheduling primitive
pub trait FrameScheduler {
    /// Schedule exactly one callback for the next display frame
    fn request_frame(&mut self) -> Result<FrameHandle, HostError>;

    /// Cancel a scheduled callback. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Per-surface animation loop state
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    state: UniformState,
    pending: Option<FrameHandle>,
    running: bool,
    ticks: u64,
}

impl AnimationDriver {
    /// Create a stopped driver for a container of the given size
    pub fn new(resolution: Size) -> Self {
        Self {
            state: UniformState::new(resolution),
            pending: None,
            running: false,
            ticks: 0,
        }
    }

    /// Start the loop by scheduling the first frame
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> Result<(), HostError> {
        if self.running {
            return Ok(());
        }
        self.running = true;
        self.schedule_next(scheduler)
    }

    /// Schedule the next frame if the loop is still running
    pub fn schedule_next<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> Result<(), HostError> {
        if !self.running || self.pending.is_some() {
            return Ok(());
        }
        match scheduler.request_frame() {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.running = false;
                Err(e)
            }
        }
    }

    /// Advance one frame.
    ///
    /// Returns `false` without touching any state when the driver has been
    /// cancelled, so a late callback can never reach a disposed surface.
    pub fn tick(&mut self, pointer: &PointerState) -> bool {
        self.pending = None;
        if !self.running {
            return false;
        }

        self.ticks += 1;
        self.state.time += TIME_STEP;
        self.state.mouse = Vec2::new(
            ease_toward(self.state.mouse.x, pointer.position.x, MOUSE_EASING),
            ease_toward(self.state.mouse.y, pointer.position.y, MOUSE_EASING),
        );
        self.state.hover_strength = ease_toward(
            self.state.hover_strength,
            pointer.hover_target(),
            HOVER_EASING,
        )
        .clamp(0.0, 1.0);
        true
    }

    /// Stop scheduling. Safe to call repeatedly.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    /// Stop scheduling without a scheduler (render failure path)
    pub fn halt(&mut self) {
        self.running = false;
    }

    /// Whether frames are still being scheduled
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Currently scheduled frame, if any
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Number of ticks processed
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current uniform state
    pub fn state(&self) -> &UniformState {
        &self.state
    }

    /// Update the resolution uniform
    pub fn set_resolution(&mut self, resolution: Size) {
        self.state.resolution = resolution;
    }
}
