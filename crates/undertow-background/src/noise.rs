//! Value noise and fractal Brownian motion
//!
//! Host-side twins of the WGSL functions emitted by [`crate::shaders`].
//! Everything here is a pure function of its input coordinate.

use crate::constants::FBM_OCTAVES;
use crate::math::{fract, mix, Vec2};

const HASH_DIR: Vec2 = Vec2::new(12.9898, 78.233);
const HASH_SCALE: f32 = 43758.5453;

/// Deterministic pseudo-random scalar in [0, 1] for a lattice coordinate
#[inline]
pub fn hash_noise(p: Vec2) -> f32 {
    fract(p.dot(HASH_DIR).sin() * HASH_SCALE)
}

/// Bilinearly interpolated value noise with Hermite smoothing
pub fn smooth_noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p.fract();
    let u = Vec2::new(f.x * f.x * (3.0 - 2.0 * f.x), f.y * f.y * (3.0 - 2.0 * f.y));

    let a = hash_noise(i);
    let b = hash_noise(i + Vec2::new(1.0, 0.0));
    let c = hash_noise(i + Vec2::new(0.0, 1.0));
    let d = hash_noise(i + Vec2::new(1.0, 1.0));

    mix(mix(a, b, u.x), mix(c, d, u.x), u.y)
}

/// Five-octave fBm: amplitude starts at 0.5 and halves, frequency starts at
/// 2.0 and doubles. Bounded by `1 - 0.5^5`.
pub fn fbm(p: Vec2) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 2.0;

    for _ in 0..FBM_OCTAVES {
        value += amplitude * smooth_noise(p * frequency);
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    value
}

/// Upper bound of [`fbm`] given the fixed amplitude series
pub const FBM_MAX: f32 = 1.0 - 0.03125;
