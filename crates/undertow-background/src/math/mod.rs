//! Geometry types and the shader-language scalar helpers used by the
//! host-side evaluation of the caustic field.

mod size;
mod vec2;

pub use size::{effective_pixel_ratio, fit_within, Size};
pub use vec2::Vec2;

/// RGB triple with components in [0, 1]
pub type Rgb = [f32; 3];

/// GLSL/WGSL `fract`: `x - floor(x)`
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// GLSL/WGSL `mix`
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Component-wise `mix` for colors
#[inline]
pub fn mix_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    [mix(a[0], b[0], t), mix(a[1], b[1], t), mix(a[2], b[2], t)]
}

/// WGSL `smoothstep(low, high, x)` for `low < high`
#[inline]
pub fn smoothstep(low: f32, high: f32, x: f32) -> f32 {
    let t = ((x - low) / (high - low)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
