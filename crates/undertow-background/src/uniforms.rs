//! Per-frame shader inputs

use crate::math::{Size, Vec2};

/// Uniform data sent to the caustic shader.
/// NOTE: This struct must match the WGSL `Uniforms` block!
/// Total size is 32 bytes (two 16-byte rows).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub time: f32,             // offset 0
    pub hover_strength: f32,   // offset 4
    pub resolution: [f32; 2],  // offset 8
    pub mouse: [f32; 2],       // offset 16
    pub _pad: [f32; 2],        // offset 24 - padding to 32 bytes
}

impl Uniforms {
    /// Size of the uniform block in bytes
    pub const SIZE: usize = 32;
}

/// Logical uniform state owned by the animation driver
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformState {
    /// Monotonic animation clock; only ever increases.
    /// Accumulated in f64; only the GPU copy is narrowed to f32.
    pub time: f64,
    /// Container size in CSS pixels
    pub resolution: Size,
    /// Eased pointer position, normalized with a bottom-left origin
    pub mouse: Vec2,
    /// Eased reveal strength in [0, 1]
    pub hover_strength: f32,
}

impl UniformState {
    /// Fresh state for a container of the given size
    pub fn new(resolution: Size) -> Self {
        Self {
            time: 0.0,
            resolution,
            mouse: Vec2::HALF,
            hover_strength: 0.0,
        }
    }

    /// Pack into the GPU layout
    pub fn to_uniforms(&self) -> Uniforms {
        Uniforms {
            time: self.time as f32,
            hover_strength: self.hover_strength,
            resolution: self.resolution.to_array(),
            mouse: self.mouse.to_array(),
            _pad: [0.0, 0.0],
        }
    }
}

impl Default for UniformState {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_size() {
        assert_eq!(std::mem::size_of::<Uniforms>(), Uniforms::SIZE);
        assert_eq!(Uniforms::SIZE % 16, 0);
    }

    #[test]
    fn test_uniforms_byte_layout() {
        let state = UniformState {
            time: 1.5,
            resolution: Size::new(800.0, 600.0),
            mouse: Vec2::new(0.25, 0.75),
            hover_strength: 0.5,
        };
        let uniforms = state.to_uniforms();
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&uniforms));
        assert_eq!(floats, &[1.5, 0.5, 800.0, 600.0, 0.25, 0.75, 0.0, 0.0]);
    }

    #[test]
    fn test_new_state_starts_centered() {
        let state = UniformState::new(Size::new(100.0, 100.0));
        assert_eq!(state.time, 0.0);
        assert_eq!(state.mouse, Vec2::HALF);
        assert_eq!(state.hover_strength, 0.0);
    }
}
