//! Mock background host for testing undertow mounts
//!
//! This provides an in-memory implementation of `BackgroundHost` so mount
//! lifecycle logic can be tested without a browser or a GPU. Frames are
//! fired by hand and time only moves when the test says so.
//!
//! `MockHost` is a cheap handle: clones share one simulated page, so a test
//! can keep a probe after moving the host into a mount.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use undertow_background::{
    BackgroundHost, CausticProgram, FrameHandle, FrameScheduler, HostError, ListenerKind,
    RenderSurface, Ripple, RippleAppearance, RippleId, Size, SurfaceConfig, SurfaceError,
    Uniforms,
};

/// Child element of the simulated container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockChild {
    /// Output canvas of a surface
    Canvas(u32),
    /// Ripple marker
    Ripple(RippleId),
}

/// What happened to one created surface
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceRecord {
    /// Drawable size in physical pixels
    pub size: (u32, u32),
    /// Every size change applied, in order
    pub resizes: Vec<(u32, u32)>,
    /// Frames drawn
    pub renders: u32,
    /// Uniforms of the last frame drawn
    pub last_uniforms: Option<Uniforms>,
    /// Times `dispose` was called
    pub dispose_calls: u32,
    /// Times resources were actually released (must end at 1)
    pub releases: u32,
    /// WGSL the surface was built from
    pub wgsl: String,
}

/// Simulated page state
#[derive(Debug)]
struct MockPage {
    container: Option<Size>,
    device_pixel_ratio: f64,
    touch: bool,
    resize_observer: bool,
    context_available: bool,
    scheduler_available: bool,
    render_failure: Option<SurfaceError>,

    children: Vec<MockChild>,
    listeners: Vec<ListenerKind>,
    attach_order: Vec<ListenerKind>,
    detach_order: Vec<ListenerKind>,

    next_frame: FrameHandle,
    pending_frames: Vec<FrameHandle>,
    cancelled_frames: Vec<FrameHandle>,

    surfaces: Vec<SurfaceRecord>,
    ripples: BTreeMap<RippleId, RippleAppearance>,

    time_ms: f64,
    debug_log: Vec<String>,
}

impl MockPage {
    fn new() -> Self {
        Self {
            container: Some(Size::new(800.0, 600.0)),
            device_pixel_ratio: 1.0,
            touch: false,
            resize_observer: true,
            context_available: true,
            scheduler_available: true,
            render_failure: None,
            children: Vec::new(),
            listeners: Vec::new(),
            attach_order: Vec::new(),
            detach_order: Vec::new(),
            next_frame: 0,
            pending_frames: Vec::new(),
            cancelled_frames: Vec::new(),
            surfaces: Vec::new(),
            ripples: BTreeMap::new(),
            time_ms: 0.0,
            debug_log: Vec::new(),
        }
    }
}

/// Mock host for unit testing
///
/// Defaults: 800x600 container, pixel ratio 1, mouse device,
/// `ResizeObserver` available, GPU context available.
#[derive(Clone)]
pub struct MockHost {
    page: Rc<RefCell<MockPage>>,
}

impl MockHost {
    /// Create a new mock host
    pub fn new() -> Self {
        Self {
            page: Rc::new(RefCell::new(MockPage::new())),
        }
    }

    /// Create a mock host with a specific container size
    pub fn with_size(width: f32, height: f32) -> Self {
        let host = Self::new();
        host.set_container_size(width, height);
        host
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set `devicePixelRatio`
    pub fn set_pixel_ratio(&self, ratio: f64) {
        self.page.borrow_mut().device_pixel_ratio = ratio;
    }

    /// Make the device touch-first
    pub fn set_touch(&self, touch: bool) {
        self.page.borrow_mut().touch = touch;
    }

    /// Simulate a browser without `ResizeObserver`
    pub fn disable_resize_observer(&self) {
        self.page.borrow_mut().resize_observer = false;
    }

    /// Simulate a browser without WebGPU or WebGL
    pub fn disable_context(&self) {
        self.page.borrow_mut().context_available = false;
    }

    /// Simulate a missing `requestAnimationFrame`
    pub fn disable_scheduler(&self) {
        self.page.borrow_mut().scheduler_available = false;
    }

    /// Make every following render fail with `error`
    pub fn fail_renders(&self, error: SurfaceError) {
        self.page.borrow_mut().render_failure = Some(error);
    }

    /// Change the container size
    pub fn set_container_size(&self, width: f32, height: f32) {
        self.page.borrow_mut().container = Some(Size::new(width, height));
    }

    /// Remove the container from the document
    pub fn detach_container(&self) {
        self.page.borrow_mut().container = None;
    }

    /// Advance the simulated clock
    pub fn advance_time(&self, ms: f64) {
        self.page.borrow_mut().time_ms += ms;
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Fire the oldest pending frame; returns `false` if none was pending.
    ///
    /// The caller is responsible for invoking the mount's frame handler.
    pub fn fire_frame(&self) -> bool {
        let mut page = self.page.borrow_mut();
        if page.pending_frames.is_empty() {
            return false;
        }
        page.pending_frames.remove(0);
        true
    }

    /// Frame callbacks currently scheduled
    pub fn pending_frames(&self) -> usize {
        self.page.borrow().pending_frames.len()
    }

    /// Frame handles passed to `cancel_frame`
    pub fn cancelled_frames(&self) -> Vec<FrameHandle> {
        self.page.borrow().cancelled_frames.clone()
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Children currently in the container
    pub fn children(&self) -> Vec<MockChild> {
        self.page.borrow().children.clone()
    }

    /// Number of children currently in the container
    pub fn child_count(&self) -> usize {
        self.page.borrow().children.len()
    }

    /// Number of canvases currently in the container
    pub fn canvas_count(&self) -> usize {
        self.page
            .borrow()
            .children
            .iter()
            .filter(|c| matches!(c, MockChild::Canvas(_)))
            .count()
    }

    /// Listeners currently attached
    pub fn listeners(&self) -> Vec<ListenerKind> {
        self.page.borrow().listeners.clone()
    }

    /// Every successful attach, in order
    pub fn attach_order(&self) -> Vec<ListenerKind> {
        self.page.borrow().attach_order.clone()
    }

    /// Every detach, in order
    pub fn detach_order(&self) -> Vec<ListenerKind> {
        self.page.borrow().detach_order.clone()
    }

    /// Record of the `index`-th surface created
    pub fn surface(&self, index: usize) -> Option<SurfaceRecord> {
        self.page.borrow().surfaces.get(index).cloned()
    }

    /// Number of surfaces created
    pub fn surface_count(&self) -> usize {
        self.page.borrow().surfaces.len()
    }

    /// Live ripple markers and their last appearance
    pub fn ripples(&self) -> Vec<(RippleId, RippleAppearance)> {
        self.page
            .borrow()
            .ripples
            .iter()
            .map(|(id, a)| (*id, *a))
            .collect()
    }

    /// Get all captured debug messages
    pub fn get_debug_log(&self) -> Vec<String> {
        self.page.borrow().debug_log.clone()
    }

    /// Check if a specific message was logged
    pub fn has_log_containing(&self, substr: &str) -> bool {
        self.page
            .borrow()
            .debug_log
            .iter()
            .any(|msg| msg.contains(substr))
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for MockHost {
    fn request_frame(&mut self) -> Result<FrameHandle, HostError> {
        let mut page = self.page.borrow_mut();
        if !page.scheduler_available {
            return Err(HostError::SchedulerUnavailable);
        }
        page.next_frame += 1;
        let handle = page.next_frame;
        page.pending_frames.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut page = self.page.borrow_mut();
        page.cancelled_frames.push(handle);
        page.pending_frames.retain(|h| *h != handle);
    }
}

impl BackgroundHost for MockHost {
    type Surface = MockSurface;

    fn container_size(&self) -> Option<Size> {
        self.page.borrow().container
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.page.borrow().device_pixel_ratio
    }

    fn touch_capable(&self) -> bool {
        self.page.borrow().touch
    }

    fn create_surface(
        &mut self,
        program: &CausticProgram,
        _config: &SurfaceConfig,
        physical: (u32, u32),
    ) -> Result<MockSurface, SurfaceError> {
        let mut page = self.page.borrow_mut();
        if page.container.is_none() {
            return Err(SurfaceError::ContainerDetached);
        }
        if !page.context_available {
            return Err(SurfaceError::ContextUnavailable(
                "no WebGPU or WebGL2".to_string(),
            ));
        }

        let id = page.surfaces.len() as u32;
        page.surfaces.push(SurfaceRecord {
            size: physical,
            wgsl: program.wgsl(),
            ..Default::default()
        });
        page.children.push(MockChild::Canvas(id));

        Ok(MockSurface {
            id,
            page: Rc::clone(&self.page),
        })
    }

    fn attach_listener(&mut self, kind: ListenerKind) -> Result<(), HostError> {
        let mut page = self.page.borrow_mut();
        if kind == ListenerKind::ResizeObserver && !page.resize_observer {
            return Err(HostError::NotSupported("ResizeObserver"));
        }
        page.listeners.push(kind);
        page.attach_order.push(kind);
        Ok(())
    }

    fn detach_listener(&mut self, kind: ListenerKind) {
        let mut page = self.page.borrow_mut();
        if let Some(pos) = page.listeners.iter().position(|k| *k == kind) {
            page.listeners.remove(pos);
        }
        page.detach_order.push(kind);
    }

    fn show_ripple(&mut self, ripple: &Ripple, appearance: RippleAppearance) {
        let mut page = self.page.borrow_mut();
        page.ripples.insert(ripple.id, appearance);
        page.children.push(MockChild::Ripple(ripple.id));
    }

    fn update_ripple(&mut self, id: RippleId, appearance: RippleAppearance) {
        if let Some(a) = self.page.borrow_mut().ripples.get_mut(&id) {
            *a = appearance;
        }
    }

    fn hide_ripple(&mut self, id: RippleId) {
        let mut page = self.page.borrow_mut();
        page.ripples.remove(&id);
        page.children.retain(|c| *c != MockChild::Ripple(id));
    }

    fn now_ms(&self) -> f64 {
        self.page.borrow().time_ms
    }

    fn debug_write(&self, msg: &str) {
        self.page
            .borrow_mut()
            .debug_log
            .push(format!("[mock-host] {}", msg));
    }
}

/// Surface created by [`MockHost`]
pub struct MockSurface {
    id: u32,
    page: Rc<RefCell<MockPage>>,
}

impl RenderSurface for MockSurface {
    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let mut page = self.page.borrow_mut();
        if let Some(record) = page.surfaces.get_mut(self.id as usize) {
            if record.size != (width, height) {
                record.size = (width, height);
                record.resizes.push((width, height));
            }
        }
    }

    fn render(&mut self, uniforms: &Uniforms) -> Result<(), SurfaceError> {
        let mut page = self.page.borrow_mut();
        if let Some(err) = page.render_failure.clone() {
            return Err(err);
        }
        if let Some(record) = page.surfaces.get_mut(self.id as usize) {
            record.renders += 1;
            record.last_uniforms = Some(*uniforms);
        }
        Ok(())
    }

    fn dispose(&mut self) {
        let mut page = self.page.borrow_mut();
        let id = self.id;
        let released = match page.surfaces.get_mut(id as usize) {
            Some(record) => {
                record.dispose_calls += 1;
                if record.releases == 0 {
                    record.releases = 1;
                    true
                } else {
                    false
                }
            }
            None => false,
        };
        if released {
            page.children.retain(|c| *c != MockChild::Canvas(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use undertow_background::{FieldVariant, PalettePreset, ShaderTuning};

    fn program() -> CausticProgram {
        CausticProgram::new(
            PalettePreset::Ocean.palette(),
            ShaderTuning::default(),
            FieldVariant::Plain,
        )
    }

    #[test]
    fn test_mock_host_creation() {
        let host = MockHost::new();
        assert_eq!(host.container_size(), Some(Size::new(800.0, 600.0)));
        assert_eq!(host.now_ms(), 0.0);
        assert_eq!(host.child_count(), 0);
    }

    #[test]
    fn test_time_advancement() {
        let host = MockHost::new();
        host.advance_time(16.5);
        host.advance_time(16.5);
        assert!((host.now_ms() - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_clones_share_page() {
        let mut host = MockHost::new();
        let probe = host.clone();
        host.request_frame().unwrap();
        assert_eq!(probe.pending_frames(), 1);
        assert!(probe.fire_frame());
        assert!(!probe.fire_frame());
    }

    #[test]
    fn test_surface_dispose_releases_once() {
        let mut host = MockHost::new();
        let mut surface = host
            .create_surface(&program(), &SurfaceConfig::default(), (800, 600))
            .unwrap();
        assert_eq!(host.canvas_count(), 1);

        surface.dispose();
        surface.dispose();

        let record = host.surface(0).unwrap();
        assert_eq!(record.dispose_calls, 2);
        assert_eq!(record.releases, 1);
        assert_eq!(host.canvas_count(), 0);
    }

    #[test]
    fn test_surface_resize_ignores_zero_and_repeats() {
        let mut host = MockHost::new();
        let mut surface = host
            .create_surface(&program(), &SurfaceConfig::default(), (800, 600))
            .unwrap();
        surface.resize(0, 10);
        surface.resize(400, 300);
        surface.resize(400, 300);
        assert_eq!(host.surface(0).unwrap().resizes, vec![(400, 300)]);
    }

    #[test]
    fn test_detached_container_refuses_surface() {
        let mut host = MockHost::new();
        host.detach_container();
        let result = host.create_surface(&program(), &SurfaceConfig::default(), (1, 1));
        assert!(matches!(result, Err(SurfaceError::ContainerDetached)));
    }

    #[test]
    fn test_missing_resize_observer() {
        let mut host = MockHost::new();
        host.disable_resize_observer();
        assert_eq!(
            host.attach_listener(ListenerKind::ResizeObserver),
            Err(HostError::NotSupported("ResizeObserver"))
        );
        assert!(host.attach_listener(ListenerKind::WindowResize).is_ok());
        assert_eq!(host.listeners(), vec![ListenerKind::WindowResize]);
    }

    #[test]
    fn test_debug_log() {
        let host = MockHost::new();
        host.debug_write("hello");
        assert!(host.has_log_containing("hello"));
        assert_eq!(host.get_debug_log().len(), 1);
    }
}
