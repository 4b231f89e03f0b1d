//! WebGPU/WebGL2 renderer for the caustic program
//!
//! - Full-screen triangle rendered via vertex shader (no geometry needed)
//! - All procedural, no textures
//! - One pipeline per mount, built from the mount's generated WGSL

mod init;
mod render;
mod renderer;

pub use renderer::CausticRenderer;
