//! The caustic field: palette + tuning + variant → per-pixel color.
//!
//! [`CausticField::shade`] evaluates on the CPU exactly what the generated
//! WGSL evaluates on the GPU. It backs the unit tests and lets callers
//! sample a representative color (for a static fallback, say) without a GPU.

use crate::constants::{
    EDGE_MASK_X, EDGE_MASK_Y, FIELD_SCALE, FOG_BASE_RADIUS, FOG_FALLOFF, MOUSE_GLOW_FALLOFF,
    MOUSE_GLOW_STRENGTH,
};
use crate::math::{mix, mix_rgb, smoothstep, Rgb, Vec2};
use crate::noise::{fbm, hash_noise};
use crate::options::{InteractionMode, MountOptions};
use crate::palette::{Palette, ShaderTuning};
use crate::uniforms::UniformState;

/// Which optional terms the program includes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldVariant {
    /// Caustics only
    #[default]
    Plain,
    /// Adds a soft glow under the pointer
    PassiveMouse,
    /// Fog that clears around the pointer, faded out at the edges
    PointerReveal,
}

impl From<InteractionMode> for FieldVariant {
    fn from(mode: InteractionMode) -> Self {
        match mode {
            InteractionMode::None => FieldVariant::Plain,
            InteractionMode::PassiveMouse => FieldVariant::PassiveMouse,
            InteractionMode::PointerReveal => FieldVariant::PointerReveal,
        }
    }
}

/// Intermediate water terms at one pixel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaterSample {
    pub caustics: f32,
    pub waves: f32,
    pub distorted: f32,
    pub pattern: f32,
}

/// Water terms for a field coordinate `p` (UV scaled by [`FIELD_SCALE`])
pub fn water_sample(p: Vec2, t: f32) -> WaterSample {
    let caustic1 = fbm(p + t * 0.2 + Vec2::new(0.0, t * 0.15));
    let caustic2 = fbm(p * 1.5 - t * 0.15 + Vec2::new(t * 0.1, 0.0));
    let caustic3 = fbm(p * 2.2 + Vec2::new(t * 0.12, -t * 0.08));
    let caustics = (caustic1 * 0.5 + caustic2 * 0.3 + caustic3 * 0.2).powf(1.5);

    let wave1 = (p.x * 3.5 + t * 0.7).sin() * (p.y * 2.8 - t * 0.5).cos();
    let wave2 = (p.x * 5.2 - t * 0.9).sin() * (p.y * 4.1 + t * 0.6).sin();
    let wave3 = (p.x * 2.1 + t * 0.4).cos() * (p.y * 3.3 - t * 0.8).sin();
    let waves = (wave1 + wave2 * 0.7 + wave3 * 0.5) * 0.3 + 0.5;

    let distortion = Vec2::new(
        (p.y * 4.0 + t * 0.5).sin() * 0.02,
        (p.x * 3.5 + t * 0.6).cos() * 0.02,
    );
    let distorted = fbm(p + distortion + t * 0.1);

    let pattern = mix(mix(caustics, waves, 0.3), distorted, 0.4);

    WaterSample {
        caustics,
        waves,
        distorted,
        pattern,
    }
}

/// Alpha multiplier of the pointer reveal at `uv`.
///
/// 1.0 means fully fogged (no reveal). With zero hover strength, or at the
/// container edges, the result is always 1.0.
pub fn fog_reveal(uv: Vec2, mouse: Vec2, hover_strength: f32, t: f32) -> f32 {
    let fog1 = fbm(uv * 4.0 + t * 0.1);
    let fog2 = fbm(uv * 6.0 - t * 0.08 + Vec2::new(t * 0.05, 0.0));
    let fog = (fog1 + fog2) * 0.5;

    let flow = Vec2::new(
        (uv.y * 5.0 + t * 0.5).sin() * 0.1,
        (uv.x * 4.0 + t * 0.4).cos() * 0.1,
    );
    let dist = (uv - mouse + flow).length();

    let radius = FOG_BASE_RADIUS + fog * 0.1;
    let mut reveal = smoothstep(radius - FOG_FALLOFF, radius + FOG_FALLOFF, dist);
    reveal = mix(reveal, reveal * (0.8 + fog * 0.4), 0.6);

    let edge = edge_mask(uv);
    let hovered = mix(1.0, reveal, hover_strength);
    mix(1.0, hovered, edge)
}

/// 0 at the container border, 1 inside the masked bands
pub fn edge_mask(uv: Vec2) -> f32 {
    let x = smoothstep(0.0, EDGE_MASK_X, uv.x) * (1.0 - smoothstep(1.0 - EDGE_MASK_X, 1.0, uv.x));
    let y = smoothstep(0.0, EDGE_MASK_Y, uv.y) * (1.0 - smoothstep(1.0 - EDGE_MASK_Y, 1.0, uv.y));
    x * y
}

/// Per-frame inputs to [`CausticField::shade`]
pub type ShadeInputs = UniformState;

/// A palette bound to tuning and a variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CausticField {
    pub palette: Palette,
    pub tuning: ShaderTuning,
    pub variant: FieldVariant,
}

impl CausticField {
    /// Create a field
    pub fn new(palette: Palette, tuning: ShaderTuning, variant: FieldVariant) -> Self {
        Self {
            palette,
            tuning,
            variant,
        }
    }

    /// Field described by mount options
    pub fn from_options(options: &MountOptions) -> Self {
        Self::new(options.palette, options.tuning, options.interaction.into())
    }

    /// RGBA at `uv` (y up, [0, 1]²) for the given uniforms
    pub fn shade(&self, uv: Vec2, uniforms: &ShadeInputs) -> [f32; 4] {
        let t = uniforms.time as f32;
        let p = uv * FIELD_SCALE;
        let water = water_sample(p, t);

        let mut pattern = water.pattern;
        if self.variant == FieldVariant::PassiveMouse {
            let to_mouse = uv - uniforms.mouse;
            pattern += (-to_mouse.dot(to_mouse) * MOUSE_GLOW_FALLOFF).exp() * MOUSE_GLOW_STRENGTH;
        }

        let pal = &self.palette;
        let mut color = mix_rgb(pal.deep_water, pal.mid_water, pattern);
        color = mix_rgb(color, pal.caustic_highlight, water.caustics * 0.5);

        let shimmer1 = ((uv.x * 25.0 + uv.y * 20.0 + t * 4.0).sin() * 0.5 + 0.5).powi(3);
        let shimmer2 = ((uv.x * 18.0 - uv.y * 22.0 - t * 3.5).sin() * 0.5 + 0.5).powi(4);
        color = mix_rgb(
            color,
            pal.shimmer_highlight,
            (shimmer1 + shimmer2) * self.tuning.shimmer_weight,
        );

        let depth = 1.0 - uv.distance(Vec2::HALF) * self.tuning.vignette_strength;
        color = scale_rgb(color, depth);

        if self.tuning.grain_strength > 0.0 {
            let res = Vec2::new(uniforms.resolution.width, uniforms.resolution.height);
            let grain = hash_noise(uv * res * 0.5 + t * 10.0) * self.tuning.grain_strength;
            color = [color[0] + grain, color[1] + grain, color[2] + grain];
        }

        let mut alpha = if self.tuning.opaque {
            1.0
        } else {
            self.tuning.base_alpha + pattern * self.tuning.alpha_range
        };
        if self.variant == FieldVariant::PointerReveal {
            alpha *= fog_reveal(uv, uniforms.mouse, uniforms.hover_strength, t);
        }

        [color[0], color[1], color[2], alpha]
    }
}

#[inline]
fn scale_rgb(c: Rgb, s: f32) -> Rgb {
    [c[0] * s, c[1] * s, c[2] * s]
}
