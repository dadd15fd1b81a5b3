//! Shared curve math for camera flights

use bevy::prelude::*;

/// Cubic ease-in-out on [0, 1]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Quadratic Bezier: P(t) = (1-t)^2 * p0 + 2(1-t)t * p1 + t^2 * p2
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    u * u * p0 + 2.0 * u * t * p1 + t * t * p2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ease_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let eased = ease_in_out_cubic(i as f32 / 100.0);
            assert!(eased >= last);
            last = eased;
        }
    }

    #[test]
    fn test_bezier_endpoints() {
        let p0 = Vec3::new(1.0, 2.0, 3.0);
        let p1 = Vec3::new(0.0, 10.0, 0.0);
        let p2 = Vec3::new(-4.0, 1.6, 7.0);
        assert_eq!(quadratic_bezier(p0, p1, p2, 0.0), p0);
        assert_eq!(quadratic_bezier(p0, p1, p2, 1.0), p2);
    }

    #[test]
    fn test_bezier_midpoint_pulls_toward_control() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(0.0, 8.0, 0.0);
        let p2 = Vec3::new(10.0, 0.0, 0.0);
        let mid = quadratic_bezier(p0, p1, p2, 0.5);
        // At t=0.5 the curve sits halfway between the chord and the control point
        assert!((mid.y - 4.0).abs() < 1e-6);
        assert!((mid.x - 2.5).abs() < 1e-6);
    }
}
