//! Host abstraction for the background engine
//!
//! A mount never touches the DOM or the GPU directly. Everything it needs
//! from the page goes through [`BackgroundHost`], which lets the same mount
//! logic run in the browser and against an in-memory host in tests.
//!
//! # Implementations
//!
//! - **Browser**: `undertow-web` (`requestAnimationFrame`, `ResizeObserver`,
//!   a wgpu-backed canvas)
//! - **Tests**: `undertow-host-mock` (manual frames, simulated clock)

use crate::driver::FrameScheduler;
use crate::error::{HostError, SurfaceError};
use crate::math::Size;
use crate::options::SurfaceConfig;
use crate::pointer::{Ripple, RippleAppearance, RippleId};
use crate::shaders::CausticProgram;
use crate::uniforms::Uniforms;

/// Page events a mount subscribes to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// `ResizeObserver` on the container
    ResizeObserver,
    /// `resize` on the window, used when `ResizeObserver` is missing
    WindowResize,
    /// `mousemove` on the container
    PointerMove,
    /// `touchmove` on the container
    TouchMove,
    /// `mouseenter` on the container
    PointerEnter,
    /// `mouseleave` on the container
    PointerLeave,
    /// `click` on the container (ripples)
    Click,
    /// `touchstart` on the container (ripples)
    TouchStart,
}

impl ListenerKind {
    /// DOM event name, or `None` for the observer
    pub fn event_name(&self) -> Option<&'static str> {
        match self {
            ListenerKind::ResizeObserver => None,
            ListenerKind::WindowResize => Some("resize"),
            ListenerKind::PointerMove => Some("mousemove"),
            ListenerKind::TouchMove => Some("touchmove"),
            ListenerKind::PointerEnter => Some("mouseenter"),
            ListenerKind::PointerLeave => Some("mouseleave"),
            ListenerKind::Click => Some("click"),
            ListenerKind::TouchStart => Some("touchstart"),
        }
    }
}

/// A drawable area appended to the container
pub trait RenderSurface {
    /// Set the drawable size in physical pixels. Calling twice with the
    /// same size is a no-op; zero sizes are ignored.
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame
    ///
    /// # Returns
    /// * `Ok(())` - Frame drawn, or skipped because the backend is still
    ///   initializing
    /// * `Err(SurfaceError)` - The surface cannot draw; the mount stops
    fn render(&mut self, uniforms: &Uniforms) -> Result<(), SurfaceError>;

    /// Release GPU resources and remove the canvas from the container.
    ///
    /// Must be idempotent and must not fail when the container is already
    /// detached.
    fn dispose(&mut self);
}

/// Everything a mount needs from its page
pub trait BackgroundHost: FrameScheduler {
    /// Surface type this host creates
    type Surface: RenderSurface;

    // === Container ===

    /// Current container size in CSS pixels.
    ///
    /// Returns `None` once the container is gone or detached.
    fn container_size(&self) -> Option<Size>;

    /// `window.devicePixelRatio`
    fn device_pixel_ratio(&self) -> f64;

    /// Whether the device is touch-first (no hover)
    fn touch_capable(&self) -> bool;

    // === Surface ===

    /// Create the output surface and append it to the container
    ///
    /// # Arguments
    /// * `program` - Shader program to build the pipeline from
    /// * `config` - Blend mode, transparency, pixel ratio cap
    /// * `physical` - Initial drawable size in physical pixels
    ///
    /// # Returns
    /// * `Ok(Surface)` - Canvas appended; GPU setup may still be pending
    /// * `Err(SurfaceError::ContainerDetached)` - No container to append to
    /// * `Err(SurfaceError::ContextUnavailable)` - No GPU context at all
    fn create_surface(
        &mut self,
        program: &CausticProgram,
        config: &SurfaceConfig,
        physical: (u32, u32),
    ) -> Result<Self::Surface, SurfaceError>;

    // === Events ===

    /// Subscribe to a page event
    ///
    /// # Returns
    /// * `Err(HostError::NotSupported)` - The primitive does not exist here
    ///   (for example `ResizeObserver` in old browsers)
    fn attach_listener(&mut self, kind: ListenerKind) -> Result<(), HostError>;

    /// Unsubscribe. Unknown kinds are ignored.
    fn detach_listener(&mut self, kind: ListenerKind);

    // === Ripple markers ===

    /// Add a ripple marker element to the container
    fn show_ripple(&mut self, ripple: &Ripple, appearance: RippleAppearance);

    /// Restyle a live ripple marker
    fn update_ripple(&mut self, id: RippleId, appearance: RippleAppearance);

    /// Remove a ripple marker. Unknown ids are ignored.
    fn hide_ripple(&mut self, id: RippleId);

    // === Time & Debug ===

    /// Monotonic time in milliseconds (`performance.now()` on the web)
    fn now_ms(&self) -> f64;

    /// Write a debug message to the platform's console
    fn debug_write(&self, msg: &str);
}
