//! Easing functions for animations

/// One step of exponential easing: move `factor` of the remaining distance.
///
/// With `factor` in (0, 1] this approaches `target` monotonically and never
/// crosses it.
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor.clamp(0.0, 1.0)
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_toward_step() {
        assert!((ease_toward(0.0, 1.0, 0.1) - 0.1).abs() < 0.0001);
        assert!((ease_toward(1.0, 0.0, 0.5) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_ease_toward_never_overshoots() {
        let mut v = 0.0;
        for _ in 0..1000 {
            let next = ease_toward(v, 1.0, 0.05);
            assert!(next >= v);
            assert!(next <= 1.0);
            v = next;
        }
        assert!((1.0 - v).abs() < 1e-3);
    }

    #[test]
    fn test_ease_toward_clamps_factor() {
        assert!((ease_toward(0.0, 1.0, 4.0) - 1.0).abs() < 0.0001);
        assert!((ease_toward(0.3, 1.0, -1.0) - 0.3).abs() < 0.0001);
    }

    #[test]
    fn test_ease_out_cubic() {
        assert!((ease_out_cubic(0.0) - 0.0).abs() < 0.001);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 0.001);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
