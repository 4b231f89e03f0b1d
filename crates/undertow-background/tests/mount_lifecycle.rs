//! Integration tests for BackgroundMount
//!
//! These tests drive full mounts against the mock host:
//! - Mount/unmount symmetry (children, listeners, frames)
//! - Idempotent disposal
//! - Resize handling and pixel ratio capping
//! - Degraded mounts
//! - Pointer easing and click/tap ripples

use undertow_background::{
    BackgroundMount, InteractionMode, ListenerKind, MountOptions, MountState, PalettePreset,
    Size, SurfaceError, Vec2,
};
use undertow_host_mock::{MockChild, MockHost};

fn options(mode: InteractionMode) -> MountOptions {
    MountOptions::preset(PalettePreset::Ocean).with_interaction(mode)
}

fn mount(mode: InteractionMode) -> (BackgroundMount<MockHost>, MockHost) {
    let host = MockHost::new();
    let probe = host.clone();
    (BackgroundMount::mount(host, options(mode)), probe)
}

/// Fire `frames` display frames, 16ms apart
fn pump(mount: &mut BackgroundMount<MockHost>, probe: &MockHost, frames: usize) {
    for _ in 0..frames {
        if !probe.fire_frame() {
            break;
        }
        mount.on_frame();
        probe.advance_time(16.0);
    }
}

// =============================================================================
// Mount / Unmount Symmetry
// =============================================================================

#[test]
fn test_mount_appends_one_canvas() {
    let host = MockHost::new();
    let probe = host.clone();
    assert_eq!(probe.child_count(), 0);

    let mount = BackgroundMount::mount(host, options(InteractionMode::None));

    assert_eq!(mount.state(), MountState::Running);
    assert!(mount.is_running());
    assert_eq!(probe.children(), vec![MockChild::Canvas(0)]);
    assert_eq!(probe.pending_frames(), 1);
}

#[test]
fn test_unmount_restores_container() {
    let (mut mount, probe) = mount(InteractionMode::PointerReveal);
    pump(&mut mount, &probe, 10);
    mount.on_tap(Vec2::new(0.5, 0.5));

    mount.dispose();

    assert_eq!(mount.state(), MountState::Unmounted);
    assert!(!mount.is_running());
    assert_eq!(probe.child_count(), 0);
    assert!(probe.listeners().is_empty());
    assert_eq!(probe.pending_frames(), 0);
}

#[test]
fn test_listeners_detached_in_reverse_order() {
    let (mut mount, probe) = mount(InteractionMode::PointerReveal);

    let attached = probe.attach_order();
    assert_eq!(
        attached,
        vec![
            ListenerKind::ResizeObserver,
            ListenerKind::PointerMove,
            ListenerKind::TouchMove,
            ListenerKind::PointerEnter,
            ListenerKind::PointerLeave,
            ListenerKind::Click,
            ListenerKind::TouchStart,
        ]
    );
    assert_eq!(mount.listeners(), attached.as_slice());

    mount.dispose();

    let mut expected = attached;
    expected.reverse();
    assert_eq!(probe.detach_order(), expected);
}

#[test]
fn test_listeners_per_interaction_mode() {
    let (_none, probe) = mount(InteractionMode::None);
    assert_eq!(probe.listeners(), vec![ListenerKind::ResizeObserver]);

    let (_passive, probe) = mount(InteractionMode::PassiveMouse);
    let listeners = probe.listeners();
    assert_eq!(listeners.len(), 5);
    assert!(listeners.contains(&ListenerKind::PointerMove));
    assert!(!listeners.contains(&ListenerKind::Click));
    assert!(!listeners.contains(&ListenerKind::TouchStart));
}

#[test]
fn test_window_resize_fallback() {
    let host = MockHost::new();
    host.disable_resize_observer();
    let probe = host.clone();

    let mut mount = BackgroundMount::mount(host, options(InteractionMode::None));
    assert_eq!(probe.listeners(), vec![ListenerKind::WindowResize]);

    mount.dispose();
    assert!(probe.listeners().is_empty());
}

// =============================================================================
// Idempotent Disposal
// =============================================================================

#[test]
fn test_dispose_twice_releases_once() {
    let (mut mount, probe) = mount(InteractionMode::PassiveMouse);
    pump(&mut mount, &probe, 3);

    mount.dispose();
    mount.dispose();
    drop(mount);

    let surface = probe.surface(0).unwrap();
    assert_eq!(surface.dispose_calls, 1);
    assert_eq!(surface.releases, 1);
    assert_eq!(probe.cancelled_frames().len(), 1);
    assert_eq!(probe.detach_order().len(), 5);
}

#[test]
fn test_drop_disposes() {
    let probe = {
        let (mount, probe) = mount(InteractionMode::PointerReveal);
        assert_eq!(mount.state(), MountState::Running);
        probe
    };
    assert_eq!(probe.child_count(), 0);
    assert!(probe.listeners().is_empty());
    assert_eq!(probe.pending_frames(), 0);
    assert_eq!(probe.surface(0).unwrap().releases, 1);
}

#[test]
fn test_dispose_with_detached_container() {
    let (mut mount, probe) = mount(InteractionMode::PassiveMouse);
    probe.detach_container();
    mount.dispose();
    assert_eq!(mount.state(), MountState::Unmounted);
    assert_eq!(probe.surface(0).unwrap().releases, 1);
}

// =============================================================================
// Frame Loop
// =============================================================================

#[test]
fn test_frames_advance_time() {
    let (mut mount, probe) = mount(InteractionMode::None);
    pump(&mut mount, &probe, 100);

    let surface = probe.surface(0).unwrap();
    assert_eq!(surface.renders, 100);
    let uniforms = surface.last_uniforms.unwrap();
    assert!((uniforms.time - 1.0).abs() < 1e-3);
    assert!((mount.uniforms().time - 1.0).abs() < 1e-3);
    assert_eq!(probe.pending_frames(), 1);
}

#[test]
fn test_no_ticks_after_dispose() {
    let (mut mount, probe) = mount(InteractionMode::None);
    pump(&mut mount, &probe, 5);
    let time = mount.uniforms().time;

    mount.dispose();
    assert!(!probe.fire_frame());

    // A callback that slipped past cancellation is ignored
    mount.on_frame();
    assert_eq!(mount.uniforms().time, time);
    assert_eq!(probe.surface(0).unwrap().renders, 5);
}

#[test]
fn test_render_error_stops_loop() {
    let (mut mount, probe) = mount(InteractionMode::None);
    pump(&mut mount, &probe, 2);

    probe.fail_renders(SurfaceError::OutOfMemory);
    pump(&mut mount, &probe, 1);

    assert_eq!(mount.state(), MountState::Degraded);
    assert!(!mount.is_running());
    assert_eq!(probe.pending_frames(), 0);
    assert!(probe.has_log_containing("render failed"));
    assert_eq!(probe.canvas_count(), 0);
    assert_eq!(probe.surface(0).unwrap().releases, 1);

    mount.dispose();
    assert_eq!(mount.state(), MountState::Unmounted);
    assert_eq!(probe.surface(0).unwrap().releases, 1);
}

#[test]
fn test_render_error_removes_ripples_and_canvas() {
    let (mut mount, probe) = mount(InteractionMode::PointerReveal);
    pump(&mut mount, &probe, 2);
    mount.on_tap(Vec2::new(0.5, 0.5));
    assert_eq!(probe.ripples().len(), 1);

    probe.fail_renders(SurfaceError::OutOfMemory);
    pump(&mut mount, &probe, 1);
    assert_eq!(mount.state(), MountState::Degraded);

    // No frame callbacks fire once degraded; nothing may be left behind
    probe.advance_time(5000.0);
    mount.on_frame();
    assert_eq!(mount.ripple_count(), 0);
    assert!(probe.ripples().is_empty());
    assert_eq!(probe.canvas_count(), 0);
    assert!(probe.children().is_empty());
}

// =============================================================================
// Resize
// =============================================================================

#[test]
fn test_resize_sets_resolution_exactly() {
    let (mut mount, probe) = mount(InteractionMode::None);
    mount.resize(1024.0, 768.0);

    assert_eq!(mount.state(), MountState::Running);
    assert_eq!(mount.uniforms().resolution, Size::new(1024.0, 768.0));
    assert_eq!(probe.surface(0).unwrap().size, (1024, 768));

    pump(&mut mount, &probe, 1);
    let uniforms = probe.surface(0).unwrap().last_uniforms.unwrap();
    assert_eq!(uniforms.resolution, [1024.0, 768.0]);
}

#[test]
fn test_resize_idempotent() {
    let (mut mount, probe) = mount(InteractionMode::None);
    mount.resize(640.0, 480.0);
    mount.resize(640.0, 480.0);
    assert_eq!(probe.surface(0).unwrap().resizes, vec![(640, 480)]);
}

#[test]
fn test_pixel_ratio_scaling_and_cap() {
    let host = MockHost::with_size(400.0, 300.0);
    host.set_pixel_ratio(1.5);
    let probe = host.clone();
    let mut mount = BackgroundMount::mount(host, options(InteractionMode::None));
    assert_eq!(probe.surface(0).unwrap().size, (600, 450));

    probe.set_pixel_ratio(3.0);
    mount.resize(400.0, 300.0);
    assert_eq!(probe.surface(0).unwrap().size, (800, 600));
    assert_eq!(mount.uniforms().resolution, Size::new(400.0, 300.0));
}

#[test]
fn test_container_resize_reads_host() {
    let (mut mount, probe) = mount(InteractionMode::None);
    probe.set_container_size(500.0, 250.0);
    mount.on_container_resize();
    assert_eq!(mount.uniforms().resolution, Size::new(500.0, 250.0));
}

#[test]
fn test_container_resize_skips_stale_container() {
    let (mut mount, probe) = mount(InteractionMode::None);
    probe.detach_container();
    mount.on_container_resize();
    assert_eq!(mount.uniforms().resolution, Size::new(800.0, 600.0));
    assert_eq!(mount.state(), MountState::Running);
}

// =============================================================================
// Degraded Mounts
// =============================================================================

#[test]
fn test_context_unavailable_degrades() {
    let host = MockHost::new();
    host.disable_context();
    let probe = host.clone();

    let mut mount = BackgroundMount::mount(host, options(InteractionMode::PointerReveal));

    assert_eq!(mount.state(), MountState::Degraded);
    assert!(!mount.is_running());
    assert_eq!(probe.child_count(), 0);
    assert!(probe.listeners().is_empty());
    assert_eq!(probe.pending_frames(), 0);
    assert!(probe.has_log_containing("degraded"));

    // Everything is a no-op
    mount.resize(100.0, 100.0);
    mount.on_frame();
    mount.on_pointer_move(Vec2::new(0.1, 0.1));
    mount.on_tap(Vec2::new(0.1, 0.1));
    assert_eq!(probe.child_count(), 0);
    assert_eq!(mount.ripple_count(), 0);

    mount.dispose();
    assert_eq!(mount.state(), MountState::Unmounted);
}

#[test]
fn test_detached_container_degrades() {
    let host = MockHost::new();
    host.detach_container();
    let probe = host.clone();

    let mount = BackgroundMount::mount(host, options(InteractionMode::None));
    assert_eq!(mount.state(), MountState::Degraded);
    assert_eq!(probe.surface_count(), 0);
}

#[test]
fn test_missing_scheduler_releases_surface() {
    let host = MockHost::new();
    host.disable_scheduler();
    let probe = host.clone();

    let mount = BackgroundMount::mount(host, options(InteractionMode::None));
    assert_eq!(mount.state(), MountState::Degraded);
    assert_eq!(probe.canvas_count(), 0);
    assert_eq!(probe.surface(0).unwrap().releases, 1);
}

// =============================================================================
// Pointer
// =============================================================================

#[test]
fn test_pointer_move_eases_mouse_uniform() {
    let (mut mount, probe) = mount(InteractionMode::PassiveMouse);
    mount.on_pointer_move(Vec2::new(1.0, 0.0));
    assert_eq!(mount.pointer().position, Vec2::new(1.0, 1.0));

    pump(&mut mount, &probe, 1);
    let mouse = mount.uniforms().mouse;
    assert!((mouse.x - 0.55).abs() < 1e-5);
    assert!((mouse.y - 0.55).abs() < 1e-5);

    pump(&mut mount, &probe, 200);
    let mouse = mount.uniforms().mouse;
    assert!((mouse.x - 1.0).abs() < 1e-3);
    assert!((mouse.y - 1.0).abs() < 1e-3);
}

#[test]
fn test_pointer_ignored_without_interaction() {
    let (mut mount, _probe) = mount(InteractionMode::None);
    mount.on_pointer_move(Vec2::new(0.0, 0.0));
    assert_eq!(mount.pointer().position, Vec2::HALF);
}

#[test]
fn test_hover_strength_follows_enter_leave() {
    let (mut mount, probe) = mount(InteractionMode::PointerReveal);
    mount.on_pointer_enter();
    pump(&mut mount, &probe, 200);
    let h = mount.uniforms().hover_strength;
    assert!(h > 0.99 && h <= 1.0);

    mount.on_pointer_leave();
    pump(&mut mount, &probe, 200);
    assert!(mount.uniforms().hover_strength < 0.01);
}

#[test]
fn test_touch_device_starts_revealed() {
    let host = MockHost::new();
    host.set_touch(true);
    let mount = BackgroundMount::mount(host, options(InteractionMode::PointerReveal));
    assert!(mount.pointer().hovering);
}

// =============================================================================
// Ripples
// =============================================================================

#[test]
fn test_ripple_lives_900ms() {
    let (mut mount, probe) = mount(InteractionMode::PointerReveal);
    mount.on_tap(Vec2::new(0.25, 0.75));

    assert_eq!(mount.ripple_count(), 1);
    assert_eq!(probe.child_count(), 2);
    let (_, start) = probe.ripples()[0];
    assert!((start.opacity - 0.45).abs() < 1e-6);

    probe.advance_time(450.0);
    assert!(probe.fire_frame());
    mount.on_frame();
    let (_, mid) = probe.ripples()[0];
    assert!(mid.opacity < start.opacity);
    assert!(mid.scale > start.scale);

    probe.advance_time(449.0);
    assert!(probe.fire_frame());
    mount.on_frame();
    assert_eq!(mount.ripple_count(), 1);

    probe.advance_time(1.0);
    assert!(probe.fire_frame());
    mount.on_frame();
    assert_eq!(mount.ripple_count(), 0);
    assert!(probe.ripples().is_empty());
    assert_eq!(probe.children(), vec![MockChild::Canvas(0)]);
}

#[test]
fn test_tap_moves_reveal() {
    let (mut mount, _probe) = mount(InteractionMode::PointerReveal);
    mount.on_tap(Vec2::new(0.2, 0.2));
    let p = mount.pointer().position;
    assert!((p.x - 0.2).abs() < 1e-6);
    assert!((p.y - 0.8).abs() < 1e-6);
}

#[test]
fn test_no_ripples_in_passive_mode() {
    let (mut mount, probe) = mount(InteractionMode::PassiveMouse);
    mount.on_tap(Vec2::new(0.5, 0.5));
    assert_eq!(mount.ripple_count(), 0);
    assert_eq!(probe.child_count(), 1);
}

#[test]
fn test_dispose_removes_live_ripples() {
    let (mut mount, probe) = mount(InteractionMode::PointerReveal);
    mount.on_tap(Vec2::new(0.1, 0.1));
    mount.on_tap(Vec2::new(0.9, 0.9));
    assert_eq!(probe.child_count(), 3);

    mount.dispose();
    assert_eq!(probe.child_count(), 0);
    assert!(probe.ripples().is_empty());
}

// =============================================================================
// Program
// =============================================================================

#[test]
fn test_surface_built_from_mode_program() {
    let (reveal, probe) = mount(InteractionMode::PointerReveal);
    assert_eq!(reveal.options().interaction, InteractionMode::PointerReveal);
    assert_eq!(probe.surface(0).unwrap().wgsl, reveal.program().wgsl());
    assert!(probe.surface(0).unwrap().wgsl.contains("fog_reveal"));

    let (_plain, probe) = mount(InteractionMode::None);
    assert!(!probe.surface(0).unwrap().wgsl.contains("fog_reveal"));
}

#[test]
fn test_mounts_share_nothing() {
    let (mut a, probe_a) = mount(InteractionMode::None);
    let (b, probe_b) = mount(InteractionMode::None);

    pump(&mut a, &probe_a, 10);
    a.dispose();

    assert_eq!(b.state(), MountState::Running);
    assert_eq!(probe_b.canvas_count(), 1);
    assert_eq!(probe_b.pending_frames(), 1);
    assert_eq!(b.uniforms().time, 0.0);
}
