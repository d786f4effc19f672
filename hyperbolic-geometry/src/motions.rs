//! Rigid motions of the plane in polar coordinates.
//!
//! Two generators are enough for the samplers: rotation about the origin and
//! translation along the reference axis. Everything else is composed from
//! them and their inverses (`rotate(-a)`, `translate_horizontal(-d)`).

use std::f64::consts::{PI, TAU};

use crate::polar::{distance, theta, PolarPoint};

/// Rotates a point about the origin by `angle` radians.
pub fn rotate(p: PolarPoint, angle: f64) -> PolarPoint {
    PolarPoint::new(p.radius, p.angle + angle)
}

/// Translates a point by hyperbolic distance `d` along the reference axis,
/// positive toward the zero-angle direction.
pub fn translate_horizontal(p: PolarPoint, d: f64) -> PolarPoint {
    if d == 0.0 {
        return p;
    }
    if p.radius == 0.0 || p.angle == 0.0 || p.angle == PI {
        // stay on the axis: signed coordinate arithmetic, switching sides
        // when the motion carries the point across the origin
        let signed = if p.angle == PI { -p.radius } else { p.radius };
        let moved = signed + d;
        let angle = if moved < 0.0 { PI } else { 0.0 };
        return PolarPoint::new(moved.abs(), angle);
    }

    // the translation commutes with reflection through the axis, so work in
    // the upper half-plane and mirror back at the end
    let mirrored = p.angle > PI;
    let work = if mirrored {
        PolarPoint::new(p.radius, TAU - p.angle)
    } else {
        p
    };

    // the moved radius is the distance from the origin's preimage, and the
    // triangle spanned with the axis image of the origin fixes the angle
    let preimage = PolarPoint::new(d.abs(), if d > 0.0 { PI } else { 0.0 });
    let radius = distance(preimage, work);
    let raw = theta(d.abs(), radius, work.radius);
    let mut angle = if raw.is_nan() { 0.0 } else { raw };
    if d < 0.0 {
        angle = PI - angle;
    }
    if mirrored {
        angle = TAU - angle;
    }
    PolarPoint::new(radius, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(p: PolarPoint, q: PolarPoint) {
        assert!(
            (p.radius - q.radius).abs() < 1e-9 && (p.angle - q.angle).abs() < 1e-9,
            "{p:?} != {q:?}"
        );
    }

    #[test]
    fn rotate_wraps_full_turns() {
        let p = PolarPoint::new(2.0, 0.5);
        assert_close(rotate(p, TAU), p);
        assert_close(rotate(rotate(p, PI), PI), p);
        assert_eq!(rotate(p, 1.0).radius, p.radius);
    }

    #[test]
    fn translate_zero_is_identity() {
        let p = PolarPoint::new(1.7, 3.9);
        assert_eq!(translate_horizontal(p, 0.0), p);
    }

    #[test]
    fn translate_on_axis_adds_signed_lengths() {
        let p = translate_horizontal(PolarPoint::new(1.0, 0.0), 2.0);
        assert_eq!(p.radius, 3.0);
        assert_eq!(p.angle, 0.0);

        let q = translate_horizontal(PolarPoint::new(5.0, PI), 2.0);
        assert_eq!(q.radius, 3.0);
        assert_eq!(q.angle, PI);
    }

    #[test]
    fn translate_across_origin_switches_side() {
        let p = translate_horizontal(PolarPoint::new(1.0, 0.0), -3.0);
        assert_eq!(p.radius, 2.0);
        assert_eq!(p.angle, PI);

        let origin = translate_horizontal(PolarPoint::new(0.0, 0.0), 1.5);
        assert_eq!(origin.radius, 1.5);
        assert_eq!(origin.angle, 0.0);
    }

    #[test]
    fn translate_then_back_is_identity() {
        for (p, d) in [
            (PolarPoint::new(1.3, 1.1), 0.8),
            (PolarPoint::new(2.0, 4.5), -1.7),
            (PolarPoint::new(0.2, FRAC_PI_2), 6.0),
        ] {
            let back = translate_horizontal(translate_horizontal(p, d), -d);
            assert_close(back, p);
        }
    }

    #[test]
    fn translate_preserves_distances() {
        let p = PolarPoint::new(0.9, 0.4);
        let q = PolarPoint::new(2.1, 2.8);
        let before = distance(p, q);
        for d in [0.5, -2.3, 11.0] {
            let after = distance(translate_horizontal(p, d), translate_horizontal(q, d));
            assert!((after - before).abs() < 1e-9, "d = {d}");
        }
    }

    #[test]
    fn translate_commutes_with_axis_mirror() {
        let upper = translate_horizontal(PolarPoint::new(1.4, 1.0), 2.0);
        let lower = translate_horizontal(PolarPoint::new(1.4, TAU - 1.0), 2.0);
        assert_eq!(upper.radius, lower.radius);
        assert!((upper.angle - (TAU - lower.angle)).abs() < 1e-12);
    }

    #[test]
    fn translate_perpendicular_foot_obeys_pythagoras() {
        let a = 0.75;
        let d = 1.25;
        let moved = translate_horizontal(PolarPoint::new(a, FRAC_PI_2), d);
        let expected = trig::acosh(trig::cosh(a) * trig::cosh(d));
        assert!((moved.radius - expected).abs() < 1e-12);
    }
}
