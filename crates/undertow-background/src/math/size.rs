//! 2D size type for container and drawable dimensions

use serde::{Deserialize, Serialize};

/// Width and height in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Drawable size in device pixels for a given pixel ratio.
    ///
    /// Rounds to the nearest pixel and never returns a zero dimension, so
    /// the result is always a valid surface size.
    pub fn to_physical(self, pixel_ratio: f64) -> (u32, u32) {
        let ratio = pixel_ratio.max(0.0) as f32;
        let w = (self.width.max(0.0) * ratio).round() as u32;
        let h = (self.height.max(0.0) * ratio).round() as u32;
        (w.max(1), h.max(1))
    }

    /// As a plain array, the layout uniforms use
    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.width, self.height]
    }
}

/// Effective device pixel ratio: `min(device_ratio, cap)`, never below 1/16
pub fn effective_pixel_ratio(device_ratio: f64, cap: f64) -> f64 {
    let device = if device_ratio.is_finite() && device_ratio > 0.0 {
        device_ratio
    } else {
        1.0
    };
    device.min(cap).max(1.0 / 16.0)
}

/// Shrink a physical drawable size so neither side exceeds `max_dimension`,
/// keeping the aspect ratio. Sizes already within the limit are unchanged.
pub fn fit_within(physical: (u32, u32), max_dimension: u32) -> (u32, u32) {
    let (w, h) = (physical.0.max(1), physical.1.max(1));
    let limit = max_dimension.max(1);
    let longest = w.max(h);
    if longest <= limit {
        return (w, h);
    }
    let fit = |side: u32| (u64::from(side) * u64::from(limit) / u64::from(longest)).max(1) as u32;
    (fit(w), fit(h))
}
