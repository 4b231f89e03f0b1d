//! WGSL generation for the caustic program
//!
//! One program template serves every palette. Palette colors and tuning are
//! baked into the source as module-scope constants, so the uniform block
//! only carries what changes per frame.
//!
//! ## Layout of the generated module
//!
//! - Uniform block and fullscreen-triangle vertex stage
//! - Palette, tuning and engine constants
//! - Noise and fBm
//! - Water terms (plus fog terms for the pointer-reveal variant)
//! - `fs_main`, assembled from the pieces the variant needs

mod caustic;
mod noise;
mod vertex;

use crate::caustics::{CausticField, FieldVariant};
use crate::constants::{
    EDGE_MASK_X, EDGE_MASK_Y, FBM_OCTAVES, FIELD_SCALE, FOG_BASE_RADIUS, FOG_FALLOFF,
    MOUSE_GLOW_FALLOFF, MOUSE_GLOW_STRENGTH,
};
use crate::math::Rgb;
use crate::palette::{Palette, ShaderTuning};

pub use vertex::VERTEX_SHADER;

/// Vertex entry point of every generated module
pub const VERTEX_ENTRY: &str = "vs_main";

/// Fragment entry point of every generated module
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// A caustic field ready to be compiled for the GPU
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CausticProgram {
    field: CausticField,
}

impl CausticProgram {
    /// Program for a palette, tuning and variant
    pub fn new(palette: Palette, tuning: ShaderTuning, variant: FieldVariant) -> Self {
        Self {
            field: CausticField::new(palette, tuning, variant),
        }
    }

    /// Program for an existing field
    pub fn from_field(field: CausticField) -> Self {
        Self { field }
    }

    /// The field this program evaluates
    pub fn field(&self) -> &CausticField {
        &self.field
    }

    /// Debug label for GPU objects
    pub fn label(&self) -> &'static str {
        match self.field.variant {
            FieldVariant::Plain => "Caustics",
            FieldVariant::PassiveMouse => "Caustics (passive mouse)",
            FieldVariant::PointerReveal => "Caustics (pointer reveal)",
        }
    }

    /// Full WGSL module source
    pub fn wgsl(&self) -> String {
        let field = &self.field;
        let mut src = String::with_capacity(8 * 1024);

        src.push_str(VERTEX_SHADER);
        src.push_str(&constants(&field.palette, &field.tuning));
        src.push_str(noise::NOISE_FUNCTIONS);
        src.push_str(caustic::WATER_FUNCTIONS);
        if field.variant == FieldVariant::PointerReveal {
            src.push_str(caustic::FOG_FUNCTIONS);
        }

        src.push_str(caustic::FRAGMENT_HEAD);
        if field.variant == FieldVariant::PassiveMouse {
            src.push_str(caustic::MOUSE_GLOW);
        }
        src.push_str(caustic::FRAGMENT_COLOR);
        if field.tuning.grain_strength > 0.0 {
            src.push_str(caustic::GRAIN);
        }
        if field.tuning.opaque {
            src.push_str(caustic::ALPHA_OPAQUE);
        } else {
            src.push_str(caustic::ALPHA_TRANSLUCENT);
        }
        if field.variant == FieldVariant::PointerReveal {
            src.push_str(caustic::FOG_APPLY);
        }
        src.push_str(caustic::FRAGMENT_TAIL);

        src
    }
}

fn float(v: f32) -> String {
    format!("{:.6}", v)
}

fn vec3(c: Rgb) -> String {
    format!(
        "vec3<f32>({}, {}, {})",
        float(c[0]),
        float(c[1]),
        float(c[2])
    )
}

fn constants(palette: &Palette, tuning: &ShaderTuning) -> String {
    let mut out = String::from("\n");
    let mut rgb = |name: &str, c: Rgb| {
        out.push_str(&format!("const {}: vec3<f32> = {};\n", name, vec3(c)));
    };
    rgb("DEEP_WATER", palette.deep_water);
    rgb("MID_WATER", palette.mid_water);
    rgb("CAUSTIC_HIGHLIGHT", palette.caustic_highlight);
    rgb("SHIMMER_HIGHLIGHT", palette.shimmer_highlight);

    let scalars = [
        ("SHIMMER_WEIGHT", tuning.shimmer_weight),
        ("VIGNETTE_STRENGTH", tuning.vignette_strength),
        ("BASE_ALPHA", tuning.base_alpha),
        ("ALPHA_RANGE", tuning.alpha_range),
        ("GRAIN_STRENGTH", tuning.grain_strength),
        ("FIELD_SCALE", FIELD_SCALE),
        ("FOG_BASE_RADIUS", FOG_BASE_RADIUS),
        ("FOG_FALLOFF", FOG_FALLOFF),
        ("EDGE_MASK_X", EDGE_MASK_X),
        ("EDGE_MASK_Y", EDGE_MASK_Y),
        ("MOUSE_GLOW_FALLOFF", MOUSE_GLOW_FALLOFF),
        ("MOUSE_GLOW_STRENGTH", MOUSE_GLOW_STRENGTH),
    ];
    for (name, value) in scalars {
        out.push_str(&format!("const {}: f32 = {};\n", name, float(value)));
    }
    out.push_str(&format!("const FBM_OCTAVES: i32 = {};\n", FBM_OCTAVES));
    out
}
