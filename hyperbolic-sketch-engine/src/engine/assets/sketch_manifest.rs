use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use hyperbolic_geometry::{CanvasPoint, FrameError, ReferenceFrame};

/// Reference axis segment as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameData {
    pub origin: [f64; 2],
    pub target: [f64; 2],
}

/// Geodesic segment anchors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentData {
    pub a: [f64; 2],
    pub b: [f64; 2],
}

/// Circle anchors: the center and one point on the rim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleData {
    pub center: [f64; 2],
    pub rim: [f64; 2],
}

/// Complete sketch manifest as a Bevy asset. Mirrors the JSON structure
/// exactly; everything except the frame is optional.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct SketchManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameData>,
    #[serde(default)]
    pub segments: Vec<SegmentData>,
    #[serde(default)]
    pub circles: Vec<CircleData>,
}

pub fn to_canvas(p: [f64; 2]) -> CanvasPoint {
    CanvasPoint::new(p[0], p[1])
}

impl SketchManifest {
    /// Builds the reference frame from the stored axis, if one is present.
    /// A degenerate axis surfaces as an error rather than a silent skip.
    pub fn reference_frame(&self) -> Option<Result<ReferenceFrame, FrameError>> {
        self.frame
            .as_ref()
            .map(|f| ReferenceFrame::from_segment(to_canvas(f.origin), to_canvas(f.target)))
    }

    pub fn drawable_count(&self) -> usize {
        self.segments.len() + self.circles.len()
    }
}
