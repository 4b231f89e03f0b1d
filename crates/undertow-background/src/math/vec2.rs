//! 2D vector type for UVs, pointer positions and noise lattice points

use serde::{Deserialize, Serialize};

/// 2D vector mirroring WGSL `vec2<f32>` semantics
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Center of the unit square
    pub const HALF: Vec2 = Vec2 { x: 0.5, y: 0.5 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector with both components set to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Distance to another point
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Length of the vector
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Component-wise floor
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Component-wise GLSL `fract` (`x - floor(x)`, always in [0, 1))
    #[inline]
    pub fn fract(self) -> Self {
        Self::new(super::fract(self.x), super::fract(self.y))
    }

    /// Component-wise clamp into the unit square
    #[inline]
    pub fn clamp_unit(self) -> Self {
        Self::new(self.x.clamp(0.0, 1.0), self.y.clamp(0.0, 1.0))
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    /// As a plain array, the layout uniforms use
    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Add<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, s: f32) -> Vec2 {
        Vec2::new(self.x + s, self.y + s)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Sub<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, s: f32) -> Vec2 {
        Vec2::new(self.x - s, self.y - s)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl std::ops::Mul for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x * other.x, self.y * other.y)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        let sum = a + b;
        assert!((sum.x - 4.0).abs() < 0.001);
        assert!((sum.y - 6.0).abs() < 0.001);

        let shifted = a + 0.5;
        assert!((shifted.x - 1.5).abs() < 0.001);
        assert!((shifted.y - 2.5).abs() < 0.001);

        let product = a * b;
        assert!((product.x - 3.0).abs() < 0.001);
        assert!((product.y - 8.0).abs() < 0.001);

        let neg = -a;
        assert!((neg.x + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_dot_and_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((b.dot(b) - 25.0).abs() < 0.001);
        assert!((a.distance(b) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_fract_negative() {
        let v = Vec2::new(-0.25, 1.75).fract();
        assert!((v.x - 0.75).abs() < 0.0001);
        assert!((v.y - 0.75).abs() < 0.0001);
    }

    #[test]
    fn test_vec2_clamp_unit() {
        let v = Vec2::new(-1.0, 2.0).clamp_unit();
        assert_eq!(v, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_vec2_lerp() {
        let mid = Vec2::lerp(Vec2::ZERO, Vec2::new(10.0, 20.0), 0.5);
        assert!((mid.x - 5.0).abs() < 0.001);
        assert!((mid.y - 10.0).abs() < 0.001);
    }
}
