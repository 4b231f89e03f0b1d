//! Error types for the background engine
//!
//! Nothing here ever reaches the page as a thrown error. Mount code logs
//! these through the host and degrades instead.

use std::fmt;

/// Errors raised by a render surface
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceError {
    /// The host cannot provide a GPU-backed drawing context
    ContextUnavailable(String),

    /// The container element is gone or detached from the document
    ContainerDetached,

    /// The swapchain was lost; the frame is skipped
    SurfaceLost,

    /// GPU memory exhausted
    OutOfMemory,

    /// Anything else the backend reports
    Other(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::ContextUnavailable(msg) => {
                write!(f, "Rendering context unavailable: {}", msg)
            }
            SurfaceError::ContainerDetached => write!(f, "Container is detached"),
            SurfaceError::SurfaceLost => write!(f, "Surface lost"),
            SurfaceError::OutOfMemory => write!(f, "Out of GPU memory"),
            SurfaceError::Other(msg) => write!(f, "Surface error: {}", msg),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Errors raised by host primitives (listeners, scheduling)
#[derive(Clone, Debug, PartialEq)]
pub enum HostError {
    /// The primitive does not exist in this environment
    NotSupported(&'static str),

    /// Registering an event listener or observer failed
    ListenerFailed(String),

    /// No frame scheduler is available
    SchedulerUnavailable,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NotSupported(what) => write!(f, "Not supported: {}", what),
            HostError::ListenerFailed(msg) => write!(f, "Listener registration failed: {}", msg),
            HostError::SchedulerUnavailable => write!(f, "Frame scheduler unavailable"),
        }
    }
}

impl std::error::Error for HostError {}

/// Errors while parsing mount options
#[derive(Clone, Debug, PartialEq)]
pub enum OptionsError {
    /// Options JSON did not parse
    InvalidJson(String),

    /// `palette` named a preset that does not exist
    UnknownPalette(String),

    /// A custom palette color component is outside [0, 1]
    PaletteOutOfRange,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidJson(msg) => write!(f, "Invalid options JSON: {}", msg),
            OptionsError::UnknownPalette(id) => write!(f, "Unknown palette: {}", id),
            OptionsError::PaletteOutOfRange => {
                write!(f, "Palette color components must lie in [0, 1]")
            }
        }
    }
}

impl std::error::Error for OptionsError {}
