//! Procedural underwater caustics backgrounds
//!
//! This crate renders an animated, palette-driven caustic field into a
//! container element:
//! - Value noise and fBm shared between host code and generated WGSL
//! - A caustic field parameterized by palette, tuning and interaction mode
//! - A frame-driven animation loop with eased pointer uniforms
//! - A mount lifecycle that degrades instead of failing
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`) and shader scalar helpers
//! - [`noise`]: Hash noise, smooth noise, fBm
//! - [`palette`]: Palettes, presets and shader tuning
//! - [`caustics`]: The caustic field evaluated on the CPU
//! - [`shaders`]: WGSL generation for the GPU
//! - [`driver`]: Frame scheduling and uniform easing
//! - [`host`]: The page abstraction a mount runs against
//! - [`mount`]: Mount/dispose lifecycle
//!
//! ## Example
//!
//! ```rust
//! use undertow_background::{CausticField, MountOptions, PalettePreset, UniformState, Size, Vec2};
//!
//! let field = CausticField::from_options(&MountOptions::preset(PalettePreset::Lagoon));
//! let rgba = field.shade(Vec2::new(0.5, 0.5), &UniformState::new(Size::new(800.0, 600.0)));
//! assert!(rgba[3] > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Host Abstraction**: DOM, scheduling and GPU sit behind [`BackgroundHost`]
//! 3. **One Engine**: Call sites differ only by palette and options

pub mod caustics;
pub mod constants;
pub mod driver;
pub mod easing;
pub mod error;
pub mod host;
pub mod math;
pub mod mount;
pub mod noise;
pub mod options;
pub mod palette;
pub mod pointer;
pub mod shaders;
pub mod uniforms;

// GPU renderer (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod gpu;

pub use caustics::{CausticField, FieldVariant, ShadeInputs};
pub use driver::{AnimationDriver, FrameHandle, FrameScheduler};
pub use error::{HostError, OptionsError, SurfaceError};
pub use host::{BackgroundHost, ListenerKind, RenderSurface};
pub use math::{effective_pixel_ratio, fit_within, Size, Vec2};
pub use mount::{BackgroundMount, MountState};
pub use options::{BlendMode, InteractionMode, MountOptions, SurfaceConfig};
pub use palette::{Palette, PalettePreset, ShaderTuning};
pub use pointer::{ClientRect, PointerState, Ripple, RippleAppearance, RippleId};
pub use shaders::CausticProgram;
pub use uniforms::{UniformState, Uniforms};
