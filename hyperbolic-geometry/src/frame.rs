//! Reference frame tying canvas coordinates to the native polar model.
//!
//! A frame is fixed by a drawn axis segment: its start is the hyperbolic
//! origin, the segment direction is the zero-angle axis, and its canvas
//! length spans a fixed number of hyperbolic units.

use constants::frame_settings::AXIS_UNITS;
use thiserror::Error;

use crate::polar::{normalize_angle, PolarPoint};

/// Position on the drawing canvas.
pub type CanvasPoint = glam::DVec2;

#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("reference axis endpoints coincide or are not finite")]
    DegenerateAxis,
}

/// Canvas anchor for the hyperbolic model. `scale` is canvas pixels per
/// hyperbolic unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceFrame {
    pub origin: CanvasPoint,
    pub target: CanvasPoint,
    pub scale: f64,
}

impl ReferenceFrame {
    /// Builds a frame from a drawn axis segment. The segment length maps to
    /// `AXIS_UNITS` hyperbolic units; a zero-length or non-finite axis is
    /// rejected.
    pub fn from_segment(origin: CanvasPoint, target: CanvasPoint) -> Result<Self, FrameError> {
        let scale = origin.distance(target) / AXIS_UNITS;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FrameError::DegenerateAxis);
        }
        Ok(Self {
            origin,
            target,
            scale,
        })
    }

    fn axis_angle(&self) -> f64 {
        let axis = self.target - self.origin;
        axis.y.atan2(axis.x)
    }

    /// Converts a canvas position to polar coordinates in this frame.
    pub fn to_native(&self, p: CanvasPoint) -> PolarPoint {
        let offset = p - self.origin;
        let radius = offset.length() / self.scale;
        let angle = offset.y.atan2(offset.x) - self.axis_angle();
        PolarPoint::new(radius, normalize_angle(angle))
    }

    /// Converts polar coordinates back to a canvas position.
    pub fn from_native(&self, p: PolarPoint) -> CanvasPoint {
        let world = p.angle + self.axis_angle();
        self.origin + self.scale * p.radius * CanvasPoint::new(world.cos(), world.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn horizontal_axis_frame() {
        let frame =
            ReferenceFrame::from_segment(CanvasPoint::new(64.0, 64.0), CanvasPoint::new(128.0, 64.0))
                .unwrap();
        assert_eq!(frame.scale, 16.0);

        let target = frame.to_native(CanvasPoint::new(128.0, 64.0));
        assert!((target.radius - AXIS_UNITS).abs() < 1e-12);
        assert!(target.angle.abs() < 1e-12);

        let above = frame.to_native(CanvasPoint::new(64.0, 128.0));
        assert!((above.radius - 4.0).abs() < 1e-12);
        assert!((above.angle - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn origin_maps_to_zero_radius() {
        let origin = CanvasPoint::new(-3.0, 12.5);
        let frame = ReferenceFrame::from_segment(origin, CanvasPoint::new(9.0, -1.0)).unwrap();
        let native = frame.to_native(origin);
        assert_eq!(native.radius, 0.0);
        assert_eq!(frame.from_native(PolarPoint::new(0.0, 2.2)), origin);
    }

    #[test]
    fn slanted_axis_round_trip() {
        let frame =
            ReferenceFrame::from_segment(CanvasPoint::new(10.0, 20.0), CanvasPoint::new(-14.0, 52.0))
                .unwrap();
        for p in [
            CanvasPoint::new(5.2, 2.1),
            CanvasPoint::new(-30.0, 40.0),
            CanvasPoint::new(10.0, 21.0),
        ] {
            let back = frame.from_native(frame.to_native(p));
            assert!(back.distance(p) < 1e-9, "{p:?} -> {back:?}");
        }
    }

    #[test]
    fn angles_fold_into_full_turn() {
        let frame =
            ReferenceFrame::from_segment(CanvasPoint::new(0.0, 0.0), CanvasPoint::new(-4.0, 0.0))
                .unwrap();
        // axis points along -x, so +x sits half a turn from it
        let native = frame.to_native(CanvasPoint::new(7.0, 0.0));
        assert!((native.angle - PI).abs() < 1e-12);
    }

    #[test]
    fn degenerate_axis_is_rejected() {
        let p = CanvasPoint::new(3.0, 3.0);
        assert_eq!(
            ReferenceFrame::from_segment(p, p),
            Err(FrameError::DegenerateAxis)
        );
        let bad = CanvasPoint::new(f64::NAN, 0.0);
        assert!(ReferenceFrame::from_segment(bad, p).is_err());
    }
}
