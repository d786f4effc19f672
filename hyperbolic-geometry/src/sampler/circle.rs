use std::f64::consts::{PI, TAU};

use constants::sketch_settings::{FACETING_REFINEMENT, FACETING_WINDOW, MIN_SWEEP_STEP};

use crate::frame::{CanvasPoint, ReferenceFrame};
use crate::motions::rotate;
use crate::polar::{distance, theta, PolarPoint};
use crate::sampler::Polyline;

/// Samples the circle centered on one canvas point and passing through
/// another into a closed polyline.
///
/// A circle about the origin is a true canvas circle and is emitted
/// directly. Any other circle occupies a distance-from-origin interval
/// `[r_min, r_max]`; the sweep walks that interval from the far axis
/// crossing to the near one, solving the triangle with the center for the
/// angle at each radius, then mirrors the half across the center axis.
pub fn sample_circle(
    frame: &ReferenceFrame,
    center: CanvasPoint,
    rim: CanvasPoint,
    resolution: usize,
) -> Polyline {
    let steps = resolution.max(1);
    let c = frame.to_native(center);
    let radius = distance(c, frame.to_native(rim));

    if c.radius == 0.0 {
        let mut points = Vec::with_capacity(steps);
        for i in 0..steps {
            let angle = TAU * (i as f64 / steps as f64);
            points.push(frame.from_native(PolarPoint::new(radius, angle)));
        }
        return Polyline {
            points,
            closed: true,
        };
    }

    let r_max = c.radius + radius;
    let r_min = (c.radius - radius).abs();
    let step = ((r_max - r_min) / steps as f64).max(MIN_SWEEP_STEP);

    // upper half, far crossing toward near crossing; each radius meets the
    // circle at exactly one angle on this side of the center axis
    let mut half = Vec::new();
    let mut rho = r_max;
    let mut prev_angle = 0.0;
    while rho > r_min {
        let raw = theta(c.radius, rho, radius);
        let angle = if raw.is_nan() { prev_angle } else { raw };
        prev_angle = angle;
        half.push(PolarPoint::new(rho, angle));

        // tighten the stride near the inner crossing where the curve bends
        // hardest
        let remaining = rho - r_min;
        let dr = if remaining <= step {
            step / (FACETING_REFINEMENT * 2.0)
        } else if remaining <= FACETING_WINDOW * step {
            step / FACETING_REFINEMENT
        } else {
            step
        };
        rho -= dr;
    }

    // the near crossing sits on the far side of the origin only when the
    // circle encloses it
    let closing = if c.radius < radius {
        PI
    } else {
        let raw = theta(c.radius, r_min, radius);
        if raw.is_nan() { prev_angle } else { raw }
    };
    half.push(PolarPoint::new(r_min, closing));

    if half.len() > 2 {
        let mirrored: Vec<PolarPoint> = half[1..half.len() - 1]
            .iter()
            .rev()
            .map(|p| PolarPoint::new(p.radius, TAU - p.angle))
            .collect();
        half.extend(mirrored);
    }

    let points = half
        .into_iter()
        .map(|p| frame.from_native(rotate(p, c.angle)))
        .collect();
    Polyline {
        points,
        closed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::sketch_settings::SAMPLE_RESOLUTION;

    fn frame() -> ReferenceFrame {
        ReferenceFrame::from_segment(CanvasPoint::new(64.0, 64.0), CanvasPoint::new(128.0, 64.0))
            .unwrap()
    }

    #[test]
    fn origin_centered_circle_is_a_canvas_circle() {
        let f = frame();
        let center = CanvasPoint::new(64.0, 64.0);
        // canvas distance 160 is hyperbolic radius 10 at scale 16
        let rim = CanvasPoint::new(224.0, 64.0);
        let circle = sample_circle(&f, center, rim, SAMPLE_RESOLUTION);
        assert!(circle.closed);
        assert_eq!(circle.points.len(), SAMPLE_RESOLUTION);
        assert_ne!(circle.points[0], circle.points[SAMPLE_RESOLUTION - 1]);
        for p in &circle.points {
            assert!((p.distance(center) - 160.0).abs() < 1e-9, "{p:?}");
        }
    }

    #[test]
    fn off_center_samples_stay_on_the_circle() {
        let f = frame();
        let center = CanvasPoint::new(100.0, 64.0);
        let rim = CanvasPoint::new(120.0, 64.0);
        let radius = distance(f.to_native(center), f.to_native(rim));
        let circle = sample_circle(&f, center, rim, SAMPLE_RESOLUTION);
        assert!(circle.closed);
        for p in &circle.points {
            let d = distance(f.to_native(*p), f.to_native(center));
            assert!((d - radius).abs() < 1e-6, "{p:?}");
        }
    }

    #[test]
    fn off_center_halves_mirror_across_the_axis() {
        let f = frame();
        // center on the frame axis, so the mirror line is y = 64
        let circle = sample_circle(
            &f,
            CanvasPoint::new(100.0, 64.0),
            CanvasPoint::new(112.0, 64.0),
            SAMPLE_RESOLUTION,
        );
        let n = circle.points.len();
        for j in 1..n / 2 {
            let p = circle.points[j];
            let q = circle.points[n - j];
            assert!((p.x - q.x).abs() < 1e-6, "{j}");
            assert!((p.y - 64.0 + (q.y - 64.0)).abs() < 1e-6, "{j}");
        }
    }

    #[test]
    fn enclosing_circle_closes_through_the_far_side() {
        let f = frame();
        // center half a unit out, radius two units: the origin is inside
        let circle = sample_circle(
            &f,
            CanvasPoint::new(72.0, 64.0),
            CanvasPoint::new(104.0, 64.0),
            SAMPLE_RESOLUTION,
        );
        assert!(circle.points[0].distance(CanvasPoint::new(104.0, 64.0)) < 1e-9);
        let leftmost = circle
            .points
            .iter()
            .cloned()
            .reduce(|a, b| if b.x < a.x { b } else { a })
            .unwrap();
        assert!(leftmost.distance(CanvasPoint::new(40.0, 64.0)) < 1e-6);
    }

    #[test]
    fn degenerate_radius_collapses_to_the_center() {
        let center = CanvasPoint::new(90.0, 70.0);
        let circle = sample_circle(&frame(), center, center, SAMPLE_RESOLUTION);
        assert_eq!(circle.points.len(), 1);
        assert!(circle.points[0].distance(center) < 1e-9);
    }

    #[test]
    fn circle_through_the_origin_reaches_it() {
        let f = frame();
        let circle = sample_circle(
            &f,
            CanvasPoint::new(96.0, 64.0),
            CanvasPoint::new(64.0, 64.0),
            SAMPLE_RESOLUTION,
        );
        let near = circle.points[circle.points.len() / 2];
        assert!(near.distance(CanvasPoint::new(64.0, 64.0)) < 1e-9);
    }

    #[test]
    fn sweep_never_strides_below_the_floor() {
        // a tiny circle at high resolution stays coarse in the radius sweep
        let circle = sample_circle(
            &frame(),
            CanvasPoint::new(80.0, 64.0),
            CanvasPoint::new(84.0, 64.0),
            10_000,
        );
        assert!(circle.points.len() < 200);
    }

    #[test]
    fn stride_tightens_toward_the_inner_crossing() {
        let f = frame();
        // center three units out, radius one unit
        let circle = sample_circle(
            &f,
            CanvasPoint::new(112.0, 64.0),
            CanvasPoint::new(128.0, 64.0),
            50,
        );
        let radii: Vec<f64> = circle.points[..circle.points.len() / 2 + 1]
            .iter()
            .map(|p| f.to_native(*p).radius)
            .collect();
        let first_gap = radii[0] - radii[1];
        let last_gap = radii[radii.len() - 2] - radii[radii.len() - 1];
        assert!(first_gap > 0.03, "{first_gap}");
        assert!(last_gap < first_gap / 5.0, "{last_gap} vs {first_gap}");
    }
}
