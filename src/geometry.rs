//! Planar geometry over normalized landmark coordinates.

use crate::landmark::{Coord, Normalized};

/// Interior angle at vertex `b` between rays `b→a` and `b→c`, in degrees.
///
/// The result is always in `[0, 180]`. Collinear points give 0 (same side)
/// or 180 (opposite sides). Coincident points don't panic; `atan2(0, 0)` is
/// 0, so the angle is merely meaningless.
///
/// ```
/// use yogaform::geometry::angle;
/// use yogaform::landmark::Coord;
///
/// let a = Coord::new(1.0, 0.0);
/// let b = Coord::new(0.0, 0.0);
/// let c = Coord::new(0.0, 1.0);
/// assert!((angle(a, b, c) - 90.0).abs() < 1e-9);
/// ```
pub fn angle(a: Coord<Normalized>, b: Coord<Normalized>, c: Coord<Normalized>) -> f64 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let degrees = radians.to_degrees().abs();

    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

/// Absolute difference between an angle and a target, in degrees.
#[inline]
pub fn deviation(angle: f64, target: f64) -> f64 {
    (angle - target).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Coord<Normalized> {
        Coord::new(x, y)
    }

    #[test]
    fn test_right_angle() {
        assert!((angle(p(0.5, 0.2), p(0.5, 0.5), p(0.8, 0.5)) - 90.0).abs() < 0.5);
    }

    #[test]
    fn test_straight_line_is_180() {
        assert!((angle(p(0.1, 0.1), p(0.5, 0.5), p(0.9, 0.9)) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_side_collinear_is_zero() {
        assert!(angle(p(0.6, 0.5), p(0.5, 0.5), p(0.9, 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_reflex_difference_is_folded() {
        // Rays at -135 and +135 degrees: raw difference 270, interior 90.
        let b = p(0.5, 0.5);
        let a = p(0.4, 0.4);
        let c = p(0.4, 0.6);
        assert!((angle(a, b, c) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_points_do_not_panic() {
        let q = p(0.3, 0.3);
        let result = angle(q, q, q);
        assert!((0.0..=180.0).contains(&result));
    }
}
