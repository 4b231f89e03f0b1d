//! Mount configuration
//!
//! Options arrive from JavaScript as camelCase JSON:
//!
//! ```json
//! { "palette": "fire", "interactionMode": "pointer-reveal", "pixelRatioCap": 2 }
//! ```
//!
//! `palette` is either a preset id or an object with the four colors.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PIXEL_RATIO_CAP;
use crate::error::OptionsError;
use crate::palette::{Palette, PalettePreset, ShaderTuning};

/// How the background reacts to the pointer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionMode {
    /// Purely decorative, no listeners
    #[default]
    None,
    /// Subtle glow that follows the pointer
    PassiveMouse,
    /// Fog that clears around the pointer, plus ripples on click/tap
    PointerReveal,
}

impl InteractionMode {
    /// Whether pointer listeners are needed at all
    pub fn tracks_pointer(&self) -> bool {
        !matches!(self, InteractionMode::None)
    }

    /// Whether clicks and taps spawn ripples
    pub fn spawns_ripples(&self) -> bool {
        matches!(self, InteractionMode::PointerReveal)
    }
}

/// Color blending of the background plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Standard source-over alpha blending
    #[default]
    Normal,
    /// Additive blending, brightens whatever is behind the canvas
    Additive,
}

/// Configuration owned by one render surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Upper bound for `devicePixelRatio`
    pub pixel_ratio_cap: f64,
    /// Blend state of the fullscreen pass
    pub blend: BlendMode,
    /// Composite the canvas with page content behind it
    pub transparent: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            pixel_ratio_cap: DEFAULT_PIXEL_RATIO_CAP,
            blend: BlendMode::Normal,
            transparent: true,
        }
    }
}

/// Fully resolved options for one mount
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MountOptions {
    pub palette: Palette,
    pub tuning: ShaderTuning,
    pub interaction: InteractionMode,
    pub surface: SurfaceConfig,
}

impl MountOptions {
    /// Options for a preset with its own tuning and no interaction
    pub fn preset(preset: PalettePreset) -> Self {
        Self {
            palette: preset.palette(),
            tuning: preset.tuning(),
            interaction: InteractionMode::None,
            surface: SurfaceConfig::default(),
        }
    }

    /// Builder-style interaction override
    pub fn with_interaction(mut self, interaction: InteractionMode) -> Self {
        self.interaction = interaction;
        self
    }

    /// Parse camelCase JSON options
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let raw: RawMountOptions =
            serde_json::from_str(json).map_err(|e| OptionsError::InvalidJson(e.to_string()))?;
        raw.resolve()
    }
}

impl Default for MountOptions {
    fn default() -> Self {
        Self::preset(PalettePreset::default())
    }
}

/// Palette as written in options: a preset id or explicit colors
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteChoice {
    Preset(String),
    Custom(Palette),
}

impl Default for PaletteChoice {
    fn default() -> Self {
        PaletteChoice::Preset(PalettePreset::default().id().to_string())
    }
}

/// Wire form of [`MountOptions`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMountOptions {
    pub palette: PaletteChoice,
    pub tuning: Option<ShaderTuning>,
    pub interaction_mode: InteractionMode,
    pub pixel_ratio_cap: Option<f64>,
    pub blend: Option<BlendMode>,
    pub transparent: Option<bool>,
}

impl RawMountOptions {
    /// Validate and fill in defaults
    pub fn resolve(self) -> Result<MountOptions, OptionsError> {
        let (palette, preset_tuning) = match self.palette {
            PaletteChoice::Preset(id) => {
                let preset = PalettePreset::from_id(&id).ok_or(OptionsError::UnknownPalette(id))?;
                (preset.palette(), preset.tuning())
            }
            PaletteChoice::Custom(palette) => {
                if !palette.is_valid() {
                    return Err(OptionsError::PaletteOutOfRange);
                }
                (palette, ShaderTuning::default())
            }
        };

        let defaults = SurfaceConfig::default();
        let pixel_ratio_cap = self
            .pixel_ratio_cap
            .filter(|cap| cap.is_finite() && *cap > 0.0)
            .unwrap_or(defaults.pixel_ratio_cap);

        Ok(MountOptions {
            palette,
            tuning: self.tuning.unwrap_or(preset_tuning),
            interaction: self.interaction_mode,
            surface: SurfaceConfig {
                pixel_ratio_cap,
                blend: self.blend.unwrap_or(defaults.blend),
                transparent: self.transparent.unwrap_or(defaults.transparent),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = MountOptions::default();
        assert_eq!(opts.palette, PalettePreset::Ocean.palette());
        assert_eq!(opts.interaction, InteractionMode::None);
        assert!((opts.surface.pixel_ratio_cap - 2.0).abs() < f64::EPSILON);
        assert!(opts.surface.transparent);
    }

    #[test]
    fn test_from_json_preset() {
        let opts = MountOptions::from_json(
            r#"{"palette": "fire", "interactionMode": "pointer-reveal", "blend": "additive"}"#,
        )
        .unwrap();
        assert_eq!(opts.palette, PalettePreset::Fire.palette());
        assert_eq!(opts.tuning, PalettePreset::Fire.tuning());
        assert_eq!(opts.interaction, InteractionMode::PointerReveal);
        assert_eq!(opts.surface.blend, BlendMode::Additive);
    }

    #[test]
    fn test_from_json_custom_palette() {
        let opts = MountOptions::from_json(
            r#"{
                "palette": {
                    "deepWater": [0.0, 0.0, 0.1],
                    "midWater": [0.0, 0.0, 0.2],
                    "causticHighlight": [0.5, 0.5, 0.9],
                    "shimmerHighlight": [0.8, 0.8, 1.0]
                },
                "pixelRatioCap": 1.5
            }"#,
        )
        .unwrap();
        assert_eq!(opts.palette.deep_water, [0.0, 0.0, 0.1]);
        assert_eq!(opts.tuning, ShaderTuning::default());
        assert!((opts.surface.pixel_ratio_cap - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_empty_object() {
        let opts = MountOptions::from_json("{}").unwrap();
        assert_eq!(opts, MountOptions::default());
    }

    #[test]
    fn test_from_json_unknown_palette() {
        let err = MountOptions::from_json(r#"{"palette": "lava"}"#).unwrap_err();
        assert_eq!(err, OptionsError::UnknownPalette("lava".to_string()));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = MountOptions::from_json("not json").unwrap_err();
        assert!(matches!(err, OptionsError::InvalidJson(_)));
    }

    #[test]
    fn test_from_json_out_of_range_palette() {
        let err = MountOptions::from_json(
            r#"{"palette": {
                "deepWater": [2.0, 0.0, 0.0],
                "midWater": [0.0, 0.0, 0.0],
                "causticHighlight": [0.0, 0.0, 0.0],
                "shimmerHighlight": [0.0, 0.0, 0.0]
            }}"#,
        )
        .unwrap_err();
        assert_eq!(err, OptionsError::PaletteOutOfRange);
    }

    #[test]
    fn test_bad_pixel_ratio_cap_falls_back() {
        let opts = MountOptions::from_json(r#"{"pixelRatioCap": -3}"#).unwrap();
        assert!((opts.surface.pixel_ratio_cap - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interaction_mode_serde() {
        let mode: InteractionMode = serde_json::from_str("\"passive-mouse\"").unwrap();
        assert_eq!(mode, InteractionMode::PassiveMouse);
        assert!(mode.tracks_pointer());
        assert!(!mode.spawns_ripples());
        assert!(!InteractionMode::None.tracks_pointer());
        assert!(InteractionMode::PointerReveal.spawns_ripples());
    }
}
