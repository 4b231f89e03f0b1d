//! Color palettes and per-palette shader tuning

use serde::{Deserialize, Serialize};

use crate::math::Rgb;

/// Four-color theme of one background instance
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Color of the darkest water
    pub deep_water: Rgb,
    /// Color the water pattern blends toward
    pub mid_water: Rgb,
    /// Bright caustic light
    pub caustic_highlight: Rgb,
    /// Color of the fast shimmer bands
    pub shimmer_highlight: Rgb,
}

/// Visual constants that differ between call sites.
///
/// None of these are load-bearing; they only shape the look.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShaderTuning {
    /// Weight of the shimmer bands in the final color
    pub shimmer_weight: f32,
    /// How much the corners darken (`1 - dist * strength`)
    pub vignette_strength: f32,
    /// Alpha at a water pattern of zero
    pub base_alpha: f32,
    /// Extra alpha scaled by the water pattern
    pub alpha_range: f32,
    /// Per-pixel film grain added to the color
    pub grain_strength: f32,
    /// Force alpha to 1.0
    pub opaque: bool,
}

impl Default for ShaderTuning {
    fn default() -> Self {
        Self {
            shimmer_weight: 0.15,
            vignette_strength: 0.3,
            base_alpha: 0.85,
            alpha_range: 0.15,
            grain_strength: 0.0,
            opaque: false,
        }
    }
}

/// Built-in palettes used across the site
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalettePreset {
    /// Cyan/teal water behind the hero banner
    #[default]
    Ocean,
    /// Near-black blue page background with grain
    Abyss,
    /// Orange/red embers
    Fire,
    /// Gold
    Gold,
    /// Crimson to pink
    Rose,
    /// Green/teal
    Emerald,
    /// Purple/pink
    Amethyst,
    /// Teal lagoon
    Lagoon,
}

impl PalettePreset {
    /// Get all presets
    pub fn all() -> &'static [PalettePreset] {
        &[
            PalettePreset::Ocean,
            PalettePreset::Abyss,
            PalettePreset::Fire,
            PalettePreset::Gold,
            PalettePreset::Rose,
            PalettePreset::Emerald,
            PalettePreset::Amethyst,
            PalettePreset::Lagoon,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            PalettePreset::Ocean => "Ocean",
            PalettePreset::Abyss => "Abyss",
            PalettePreset::Fire => "Fire",
            PalettePreset::Gold => "Gold",
            PalettePreset::Rose => "Rose",
            PalettePreset::Emerald => "Emerald",
            PalettePreset::Amethyst => "Amethyst",
            PalettePreset::Lagoon => "Lagoon",
        }
    }

    /// String ID used in mount options
    pub fn id(&self) -> &'static str {
        match self {
            PalettePreset::Ocean => "ocean",
            PalettePreset::Abyss => "abyss",
            PalettePreset::Fire => "fire",
            PalettePreset::Gold => "gold",
            PalettePreset::Rose => "rose",
            PalettePreset::Emerald => "emerald",
            PalettePreset::Amethyst => "amethyst",
            PalettePreset::Lagoon => "lagoon",
        }
    }

    /// Parse from string ID (case-insensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.to_lowercase();
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// The four colors of this preset
    pub fn palette(&self) -> Palette {
        match self {
            PalettePreset::Ocean => Palette {
                deep_water: [0.0, 0.15, 0.2],
                mid_water: [0.0, 0.25, 0.3],
                caustic_highlight: [0.2, 0.6, 0.7],
                shimmer_highlight: [0.3, 0.8, 0.9],
            },
            PalettePreset::Abyss => Palette {
                deep_water: [0.0, 0.10, 0.16],
                mid_water: [0.0, 0.24, 0.30],
                caustic_highlight: [0.2, 0.7, 0.8],
                shimmer_highlight: [0.3, 0.9, 1.0],
            },
            PalettePreset::Fire => Palette {
                deep_water: [0.10, 0.03, 0.0],
                mid_water: [0.28, 0.10, 0.02],
                caustic_highlight: [1.0, 0.55, 0.18],
                shimmer_highlight: [1.0, 0.85, 0.40],
            },
            PalettePreset::Gold => Palette {
                deep_water: [0.15, 0.12, 0.0],
                mid_water: [0.3, 0.25, 0.0],
                caustic_highlight: [0.7, 0.6, 0.1],
                shimmer_highlight: [0.9, 0.8, 0.2],
            },
            PalettePreset::Rose => Palette {
                deep_water: [0.08, 0.0, 0.02],
                mid_water: [0.22, 0.02, 0.08],
                caustic_highlight: [0.85, 0.25, 0.35],
                shimmer_highlight: [1.0, 0.45, 0.55],
            },
            PalettePreset::Emerald => Palette {
                deep_water: [0.0, 0.15, 0.1],
                mid_water: [0.0, 0.3, 0.2],
                caustic_highlight: [0.2, 0.7, 0.4],
                shimmer_highlight: [0.4, 0.9, 0.6],
            },
            PalettePreset::Amethyst => Palette {
                deep_water: [0.15, 0.0, 0.15],
                mid_water: [0.3, 0.0, 0.3],
                caustic_highlight: [0.7, 0.2, 0.7],
                shimmer_highlight: [0.9, 0.4, 0.9],
            },
            PalettePreset::Lagoon => Palette {
                deep_water: [0.0, 0.15, 0.15],
                mid_water: [0.0, 0.3, 0.28],
                caustic_highlight: [0.2, 0.7, 0.65],
                shimmer_highlight: [0.3, 0.9, 0.85],
            },
        }
    }

    /// Tuning the preset was designed with
    pub fn tuning(&self) -> ShaderTuning {
        match self {
            PalettePreset::Ocean => ShaderTuning {
                base_alpha: 0.95,
                ..ShaderTuning::default()
            },
            PalettePreset::Abyss => ShaderTuning {
                shimmer_weight: 0.12,
                vignette_strength: 0.25,
                grain_strength: 0.03,
                opaque: true,
                ..ShaderTuning::default()
            },
            PalettePreset::Fire => ShaderTuning {
                shimmer_weight: 0.18,
                base_alpha: 0.86,
                alpha_range: 0.14,
                ..ShaderTuning::default()
            },
            _ => ShaderTuning::default(),
        }
    }
}

impl Palette {
    /// Every color component lies in [0, 1]
    pub fn is_valid(&self) -> bool {
        [
            self.deep_water,
            self.mid_water,
            self.caustic_highlight,
            self.shimmer_highlight,
        ]
        .iter()
        .flatten()
        .all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for Palette {
    fn default() -> Self {
        PalettePreset::default().palette()
    }
}

impl From<PalettePreset> for Palette {
    fn from(preset: PalettePreset) -> Self {
        preset.palette()
    }
}
