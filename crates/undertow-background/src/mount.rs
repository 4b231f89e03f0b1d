//! One mounted background: surface, driver, listeners and ripples
//!
//! ```text
//! Mounting ──► Running ⇄ Resizing
//!    │            │
//!    ▼            ▼
//! Degraded ──► Disposing ──► Unmounted
//! ```
//!
//! Nothing here returns an error to the caller. Failures are logged through
//! the host and the mount drops to [`MountState::Degraded`], where every
//! operation is a no-op until it is disposed.

use crate::caustics::CausticField;
use crate::driver::AnimationDriver;
use crate::error::HostError;
use crate::host::{BackgroundHost, ListenerKind, RenderSurface};
use crate::math::{effective_pixel_ratio, Size, Vec2};
use crate::options::MountOptions;
use crate::pointer::{PointerState, RippleSet};
use crate::shaders::CausticProgram;
use crate::uniforms::UniformState;

/// Lifecycle state of a mount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MountState {
    /// Building the surface and subscribing to events
    Mounting,
    /// Animating
    Running,
    /// Applying a new container size (synchronous)
    Resizing,
    /// Failed closed; nothing renders
    Degraded,
    /// Tearing down
    Disposing,
    /// Fully released
    Unmounted,
}

impl MountState {
    /// Name exposed to JavaScript
    pub fn as_str(&self) -> &'static str {
        match self {
            MountState::Mounting => "mounting",
            MountState::Running => "running",
            MountState::Resizing => "resizing",
            MountState::Degraded => "degraded",
            MountState::Disposing => "disposing",
            MountState::Unmounted => "unmounted",
        }
    }
}

/// A procedural background attached to one container
pub struct BackgroundMount<H: BackgroundHost> {
    host: H,
    options: MountOptions,
    program: CausticProgram,
    surface: Option<H::Surface>,
    driver: AnimationDriver,
    pointer: PointerState,
    ripples: RippleSet,
    listeners: Vec<ListenerKind>,
    state: MountState,
}

impl<H: BackgroundHost> BackgroundMount<H> {
    /// Mount a background into the host's container.
    ///
    /// Always returns a mount; check [`BackgroundMount::state`] to see
    /// whether it is running or degraded.
    pub fn mount(host: H, options: MountOptions) -> Self {
        let program = CausticProgram::from_field(CausticField::from_options(&options));
        let pointer = PointerState::for_device(host.touch_capable());
        let mut mount = Self {
            host,
            options,
            program,
            surface: None,
            driver: AnimationDriver::new(Size::ZERO),
            pointer,
            ripples: RippleSet::new(),
            listeners: Vec::new(),
            state: MountState::Mounting,
        };

        let size = match mount.host.container_size() {
            Some(size) => size,
            None => {
                mount.degrade("container is detached");
                return mount;
            }
        };
        mount.driver.set_resolution(size);

        let physical = size.to_physical(mount.pixel_ratio());
        match mount
            .host
            .create_surface(&mount.program, &mount.options.surface, physical)
        {
            Ok(surface) => mount.surface = Some(surface),
            Err(e) => {
                mount.degrade(&format!("surface creation failed: {}", e));
                return mount;
            }
        }

        if let Err(e) = mount.driver.start(&mut mount.host) {
            mount.release_surface();
            mount.degrade(&format!("cannot schedule frames: {}", e));
            return mount;
        }

        mount.attach_resize_listener();
        if mount.options.interaction.tracks_pointer() {
            mount.attach(ListenerKind::PointerMove);
            mount.attach(ListenerKind::TouchMove);
            mount.attach(ListenerKind::PointerEnter);
            mount.attach(ListenerKind::PointerLeave);
        }
        if mount.options.interaction.spawns_ripples() {
            mount.attach(ListenerKind::Click);
            mount.attach(ListenerKind::TouchStart);
        }

        mount.state = MountState::Running;
        mount.host.debug_write(&format!(
            "mounted {}x{} ({}, {} listeners)",
            size.width,
            size.height,
            mount.program.label(),
            mount.listeners.len()
        ));
        mount
    }

    fn attach_resize_listener(&mut self) {
        match self.host.attach_listener(ListenerKind::ResizeObserver) {
            Ok(()) => self.listeners.push(ListenerKind::ResizeObserver),
            Err(HostError::NotSupported(_)) => self.attach(ListenerKind::WindowResize),
            Err(e) => self.host.debug_write(&format!("resize observer failed: {}", e)),
        }
    }

    fn attach(&mut self, kind: ListenerKind) {
        match self.host.attach_listener(kind) {
            Ok(()) => self.listeners.push(kind),
            Err(e) => self
                .host
                .debug_write(&format!("listener {:?} not attached: {}", kind, e)),
        }
    }

    fn degrade(&mut self, reason: &str) {
        self.host.debug_write(&format!("degraded: {}", reason));
        self.state = MountState::Degraded;
    }

    fn release_surface(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.dispose();
        }
    }

    fn pixel_ratio(&self) -> f64 {
        effective_pixel_ratio(
            self.host.device_pixel_ratio(),
            self.options.surface.pixel_ratio_cap,
        )
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Handle a display-frame callback: advance, render, schedule the next
    pub fn on_frame(&mut self) {
        if self.state != MountState::Running {
            return;
        }
        if !self.driver.tick(&self.pointer) {
            return;
        }

        let now = self.host.now_ms();
        for expired in self.ripples.prune(now) {
            self.host.hide_ripple(expired.id);
        }
        for ripple in self.ripples.iter() {
            self.host.update_ripple(ripple.id, ripple.appearance(now));
        }

        let uniforms = self.driver.state().to_uniforms();
        let rendered = match self.surface.as_mut() {
            Some(surface) => surface.render(&uniforms),
            None => Ok(()),
        };
        if let Err(e) = rendered {
            self.fail_closed(&format!("render failed: {}", e));
            return;
        }

        if let Err(e) = self.driver.schedule_next(&mut self.host) {
            self.fail_closed(&format!("cannot schedule frames: {}", e));
        }
    }

    /// Stop a running mount and take its canvas and ripple markers out of
    /// the container, leaving the page's own background visible.
    /// Listeners stay attached until `dispose`.
    fn fail_closed(&mut self, reason: &str) {
        self.driver.halt();
        for ripple in self.ripples.clear() {
            self.host.hide_ripple(ripple.id);
        }
        self.release_surface();
        self.degrade(reason);
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Resize to an explicit container size in CSS pixels
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.state != MountState::Running {
            return;
        }
        self.state = MountState::Resizing;

        let size = Size::new(width, height);
        self.driver.set_resolution(size);
        let (w, h) = size.to_physical(self.pixel_ratio());
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(w, h);
        }

        self.state = MountState::Running;
    }

    /// Re-read the container size (resize observer / window resize)
    pub fn on_container_resize(&mut self) {
        if self.state != MountState::Running {
            return;
        }
        match self.host.container_size() {
            Some(size) if !size.is_empty() => self.resize(size.width, size.height),
            _ => {}
        }
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Pointer or touch moved, top-left-origin container coordinates in [0, 1]²
    pub fn on_pointer_move(&mut self, position: Vec2) {
        if self.state != MountState::Running || !self.options.interaction.tracks_pointer() {
            return;
        }
        self.pointer.move_to(position);
    }

    /// Pointer entered the container
    pub fn on_pointer_enter(&mut self) {
        if self.state == MountState::Running {
            self.pointer.hovering = true;
        }
    }

    /// Pointer left the container
    pub fn on_pointer_leave(&mut self) {
        if self.state == MountState::Running {
            self.pointer.hovering = false;
        }
    }

    /// Click or tap; spawns a ripple in pointer-reveal mode
    pub fn on_tap(&mut self, position: Vec2) {
        if self.state != MountState::Running || !self.options.interaction.spawns_ripples() {
            return;
        }
        self.pointer.move_to(position);
        let now = self.host.now_ms();
        let ripple = self.ripples.spawn(position, now);
        self.host.show_ripple(&ripple, ripple.appearance(now));
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Release everything this mount created. Safe to call any number of times.
    pub fn dispose(&mut self) {
        if matches!(self.state, MountState::Disposing | MountState::Unmounted) {
            return;
        }
        self.state = MountState::Disposing;

        while let Some(kind) = self.listeners.pop() {
            self.host.detach_listener(kind);
        }
        self.driver.cancel(&mut self.host);
        for ripple in self.ripples.clear() {
            self.host.hide_ripple(ripple.id);
        }
        self.release_surface();

        self.state = MountState::Unmounted;
        self.host.debug_write("unmounted");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current lifecycle state
    pub fn state(&self) -> MountState {
        self.state
    }

    /// Whether frames are still being produced
    pub fn is_running(&self) -> bool {
        self.state == MountState::Running && self.driver.is_running()
    }

    /// Current uniform values
    pub fn uniforms(&self) -> &UniformState {
        self.driver.state()
    }

    /// Pointer targets
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Number of live ripples
    pub fn ripple_count(&self) -> usize {
        self.ripples.len()
    }

    /// Listeners currently attached, in attach order
    pub fn listeners(&self) -> &[ListenerKind] {
        &self.listeners
    }

    /// Resolved options
    pub fn options(&self) -> &MountOptions {
        &self.options
    }

    /// Program the surface was built from
    pub fn program(&self) -> &CausticProgram {
        &self.program
    }
}

impl<H: BackgroundHost> Drop for BackgroundMount<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}
