//! Polyline samplers for the drawable primitives.
//!
//! Geodesic segments and circles have no canvas-space closed form away from
//! the origin, so both are sampled into polylines: the segment by sweeping a
//! normalized axis segment through the inverse motions, the circle by
//! sweeping the distance-from-origin interval it occupies.

mod circle;
mod line;

pub use circle::sample_circle;
pub use line::sample_segment;

use crate::frame::CanvasPoint;

/// Canvas-space polyline ready for rendering. A `closed` polyline expects
/// the renderer to join the last point back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<CanvasPoint>,
    pub closed: bool,
}
