//! Pointer tracking and click/tap ripples

use crate::constants::RIPPLE_LIFETIME_MS;
use crate::easing::ease_out_cubic;
use crate::math::Vec2;

/// Container bounds in client (viewport) coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    /// Position relative to the container, top-left origin, in [0, 1]².
    ///
    /// Returns `None` for an empty rect, which happens while the container
    /// is detached or collapsed.
    pub fn normalize(&self, client_x: f32, client_y: f32) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let x = (client_x - self.left) / self.width;
        let y = (client_y - self.top) / self.height;
        Some(Vec2::new(x, y).clamp_unit())
    }
}

/// Convert a top-left-origin position into shader UV space (y up)
#[inline]
pub fn to_uv(top_left: Vec2) -> Vec2 {
    Vec2::new(top_left.x, 1.0 - top_left.y)
}

/// Targets the driver eases the pointer uniforms toward
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// Last pointer position in UV space
    pub position: Vec2,
    /// Pointer is over the container (or the device is touch-first)
    pub hovering: bool,
}

impl PointerState {
    /// Centered, not hovering
    pub fn new() -> Self {
        Self {
            position: Vec2::HALF,
            hovering: false,
        }
    }

    /// Initial state for a host; touch devices have no hover so they
    /// start with the reveal engaged
    pub fn for_device(touch_capable: bool) -> Self {
        Self {
            hovering: touch_capable,
            ..Self::new()
        }
    }

    /// Record a move in top-left-origin container coordinates
    pub fn move_to(&mut self, top_left: Vec2) {
        self.position = to_uv(top_left.clamp_unit());
    }

    /// Target for the eased `hover_strength` uniform
    pub fn hover_target(&self) -> f32 {
        if self.hovering {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier of a live ripple
pub type RippleId = u64;

/// Transient marker spawned by a click or tap
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    /// Position in container coordinates, top-left origin, [0, 1]²
    pub position: Vec2,
    /// Host timestamp when spawned (ms)
    pub born_ms: f64,
}

/// How a ripple marker looks at a point in its life
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleAppearance {
    /// Scale of the marker (0.4 growing to 2.4)
    pub scale: f32,
    /// Opacity (0.45 fading to 0)
    pub opacity: f32,
}

impl Ripple {
    /// Life progress in [0, 1]
    pub fn progress(&self, now_ms: f64) -> f32 {
        ((now_ms - self.born_ms) / RIPPLE_LIFETIME_MS).clamp(0.0, 1.0) as f32
    }

    /// Whether the ripple has outlived its fixed lifetime
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.born_ms >= RIPPLE_LIFETIME_MS
    }

    /// Marker look at `now_ms`
    pub fn appearance(&self, now_ms: f64) -> RippleAppearance {
        let t = ease_out_cubic(self.progress(now_ms));
        RippleAppearance {
            scale: 0.4 + 2.0 * t,
            opacity: 0.45 * (1.0 - t),
        }
    }

    /// Position as CSS percentages (left, top)
    pub fn percent(&self) -> (f32, f32) {
        (self.position.x * 100.0, self.position.y * 100.0)
    }
}

/// Live ripples of one mount
#[derive(Clone, Debug, Default)]
pub struct RippleSet {
    live: Vec<Ripple>,
    next_id: RippleId,
}

impl RippleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ripple at `position` (top-left origin)
    pub fn spawn(&mut self, position: Vec2, now_ms: f64) -> Ripple {
        self.next_id += 1;
        let ripple = Ripple {
            id: self.next_id,
            position: position.clamp_unit(),
            born_ms: now_ms,
        };
        self.live.push(ripple);
        ripple
    }

    /// Remove and return every expired ripple
    pub fn prune(&mut self, now_ms: f64) -> Vec<Ripple> {
        let (expired, live): (Vec<_>, Vec<_>) =
            self.live.drain(..).partition(|r| r.is_expired(now_ms));
        self.live = live;
        expired
    }

    /// Remove and return all ripples
    pub fn clear(&mut self) -> Vec<Ripple> {
        std::mem::take(&mut self.live)
    }

    /// Iterate live ripples
    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.live.iter()
    }

    /// Number of live ripples
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// No live ripples
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
