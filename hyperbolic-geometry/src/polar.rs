//! Points in the hyperbolic plane, stored as geodesic polar coordinates
//! about a fixed origin.

use std::f64::consts::{PI, TAU};

use crate::trig;

/// A point given by its geodesic distance from the origin and the angle its
/// radius makes with the reference axis, in `[0, 2π)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarPoint {
    pub radius: f64,
    pub angle: f64,
}

impl PolarPoint {
    /// Builds a point, folding `angle` into `[0, 2π)`.
    pub fn new(radius: f64, angle: f64) -> Self {
        Self {
            radius,
            angle: normalize_angle(angle),
        }
    }
}

/// Maps any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid rounds up to TAU itself for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

/// Geodesic distance between two points, by the hyperbolic law of cosines.
pub fn distance(p: PolarPoint, q: PolarPoint) -> f64 {
    if p == q {
        return 0.0;
    }
    // fold the angular difference into [0, π]
    let delta = PI - (PI - (p.angle - q.angle).abs()).abs();
    let arg = trig::cosh(p.radius) * trig::cosh(q.radius)
        - trig::sinh(p.radius) * trig::sinh(q.radius) * delta.cos();
    trig::acosh(arg)
}

/// Angle between the triangle sides of lengths `r1` and `r2`, given the
/// length of the side facing it. NaN when no such triangle exists, including
/// the zero-length-side cases.
pub fn theta(r1: f64, r2: f64, opposite: f64) -> f64 {
    let ratio = (trig::cosh(r1) * trig::cosh(r2) - trig::cosh(opposite))
        / (trig::sinh(r1) * trig::sinh(r2));
    ratio.acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    #[test]
    fn constructor_folds_angle() {
        let p = PolarPoint::new(2.0, -FRAC_PI_2);
        assert!((p.angle - 3.0 * FRAC_PI_2).abs() < 1e-12);
        let q = PolarPoint::new(1.0, TAU + 0.25);
        assert!((q.angle - 0.25).abs() < 1e-12);
    }

    #[test]
    fn normalize_angle_half_open_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert_eq!(normalize_angle(-TAU), 0.0);
        // a negative value tiny enough that the remainder rounds to TAU
        assert_eq!(normalize_angle(-1e-18), 0.0);
        assert!((normalize_angle(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        assert!((normalize_angle(7.0 * PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn distance_identity_and_symmetry() {
        let p = PolarPoint::new(1.7, 0.3);
        let q = PolarPoint::new(0.4, 4.0);
        assert_eq!(distance(p, p), 0.0);
        assert_eq!(distance(p, q), distance(q, p));
        assert!(distance(p, q) > 0.0);
    }

    #[test]
    fn distance_along_one_ray() {
        let p = PolarPoint::new(3.0, 1.1);
        let q = PolarPoint::new(1.0, 1.1);
        assert!((distance(p, q) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn distance_through_origin() {
        let p = PolarPoint::new(1.0, 0.0);
        let q = PolarPoint::new(1.0, PI);
        assert!((distance(p, q) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn distance_right_angle_pythagoras() {
        // cosh c = cosh a * cosh b when the angle at the origin is π/2
        let p = PolarPoint::new(1.0, 0.0);
        let q = PolarPoint::new(2.0, FRAC_PI_2);
        let c = distance(p, q);
        let expected = trig::acosh(trig::cosh(1.0) * trig::cosh(2.0));
        assert!((c - expected).abs() < 1e-12);
    }

    #[test]
    fn distance_survives_large_radii() {
        let p = PolarPoint::new(100.0, 0.0);
        let q = PolarPoint::new(100.0, PI);
        assert!((distance(p, q) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn distance_triangle_inequality() {
        let a = PolarPoint::new(0.8, 0.1);
        let b = PolarPoint::new(2.5, 2.0);
        let m = PolarPoint::new(1.2, 5.5);
        assert!(distance(a, b) <= distance(a, m) + distance(m, b) + 1e-12);
    }

    #[test]
    fn theta_inverts_the_law_of_cosines() {
        let p = PolarPoint::new(2.0, 0.0);
        let q = PolarPoint::new(3.0, 1.0);
        let side = distance(p, q);
        let angle = theta(p.radius, q.radius, side);
        assert!((angle - 1.0).abs() < 1e-10);
    }

    #[test]
    fn theta_equilateral_is_thinner_than_euclidean() {
        let angle = theta(1.0, 1.0, 1.0);
        assert!(angle > 0.0 && angle < FRAC_PI_3);
    }

    #[test]
    fn theta_degenerate_inputs_are_nan() {
        // a side from the origin has zero length
        assert!(theta(0.0, 1.0, 1.0).is_nan());
        // opposite side too long / too short to close a triangle
        assert!(theta(1.0, 1.0, 5.0).is_nan());
        assert!(theta(3.0, 1.0, 0.5).is_nan());
    }
}
