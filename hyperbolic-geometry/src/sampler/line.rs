use crate::frame::{CanvasPoint, ReferenceFrame};
use crate::motions::{rotate, translate_horizontal};
use crate::polar::PolarPoint;
use crate::sampler::Polyline;

/// Samples the geodesic segment between two canvas points into
/// `resolution + 1` points, endpoints included.
///
/// The segment is normalized onto the reference axis first: a rotation
/// carries `a` onto the axis, a translation moves it into the origin, and a
/// second rotation lays `b` along the zero-angle direction. The sweep then
/// runs over plain radii and every sample is carried back through the
/// inverse motions in reverse order.
pub fn sample_segment(
    frame: &ReferenceFrame,
    a: CanvasPoint,
    b: CanvasPoint,
    resolution: usize,
) -> Polyline {
    let steps = resolution.max(1);
    let na = frame.to_native(a);
    let nb = frame.to_native(b);
    if na == nb {
        return Polyline {
            points: vec![a; steps + 1],
            closed: false,
        };
    }

    let aligned = translate_horizontal(rotate(nb, -na.angle), -na.radius);
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = aligned.radius * (i as f64 / steps as f64);
        let native = rotate(
            translate_horizontal(rotate(PolarPoint::new(t, 0.0), aligned.angle), na.radius),
            na.angle,
        );
        points.push(frame.from_native(native));
    }
    Polyline {
        points,
        closed: false,
    }
}
