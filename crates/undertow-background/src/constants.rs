//! Engine-wide tuning constants
//!
//! Visual constants here are tuned by eye. Only the qualitative behaviour
//! they produce is relied upon by the rest of the crate.

/// Amount added to the `time` uniform on every animation frame
pub const TIME_STEP: f64 = 0.01;

/// Default cap applied to `devicePixelRatio` when sizing the drawable
pub const DEFAULT_PIXEL_RATIO_CAP: f64 = 2.0;

/// Per-frame easing factor for the pointer position uniform
pub const MOUSE_EASING: f32 = 0.1;

/// Per-frame easing factor for the hover strength uniform
pub const HOVER_EASING: f32 = 0.05;

/// Lifetime of a click/tap ripple marker in milliseconds
pub const RIPPLE_LIFETIME_MS: f64 = 900.0;

/// Diameter of a ripple marker in CSS pixels
pub const RIPPLE_SIZE_PX: u32 = 140;

/// Number of fBm octaves
pub const FBM_OCTAVES: usize = 5;

/// Spatial scale applied to UVs before sampling the caustic field
pub const FIELD_SCALE: f32 = 3.0;

/// Base radius of the pointer reveal hole
pub const FOG_BASE_RADIUS: f32 = 0.25;

/// Smoothstep half-width around the reveal radius
pub const FOG_FALLOFF: f32 = 0.3;

/// Width of the reveal edge mask band along the x axis (UV units)
pub const EDGE_MASK_X: f32 = 0.15;

/// Width of the reveal edge mask band along the y axis (UV units)
pub const EDGE_MASK_Y: f32 = 0.1;

/// Falloff of the passive mouse glow (`exp(-d² * k)`)
pub const MOUSE_GLOW_FALLOFF: f32 = 10.0;

/// Strength of the passive mouse glow added to the water pattern
pub const MOUSE_GLOW_STRENGTH: f32 = 0.1;
