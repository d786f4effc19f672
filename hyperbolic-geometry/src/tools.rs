//! Two-click sketch tools.
//!
//! The tools are plain state machines over canvas points, free of any
//! engine types, so the click/move/click cycle can be driven headlessly.
//! The first click arms the tool, pointer motion yields previews, and the
//! second click yields the final preview and disarms.

use crate::frame::{CanvasPoint, ReferenceFrame};
use crate::polar::distance;
use crate::sampler::{sample_circle, sample_segment, Polyline};

/// Sampled geometry plus its headline measurement, a geodesic length for
/// segments and a hyperbolic radius for circles.
#[derive(Clone, Debug)]
pub struct ToolPreview {
    pub polyline: Polyline,
    pub measure: f64,
}

/// Tool state between clicks. `None` anchors mean the tool is waiting for
/// its first click.
#[derive(Clone, Debug, PartialEq)]
pub enum SketchTool {
    Segment { anchor: Option<CanvasPoint> },
    Circle { center: Option<CanvasPoint> },
}

impl SketchTool {
    pub fn segment() -> Self {
        Self::Segment { anchor: None }
    }

    pub fn circle() -> Self {
        Self::Circle { center: None }
    }

    pub fn is_armed(&self) -> bool {
        self.anchor().is_some()
    }

    /// The armed first-click point: the segment start or the circle center.
    pub fn anchor(&self) -> Option<CanvasPoint> {
        match self {
            Self::Segment { anchor } => *anchor,
            Self::Circle { center } => *center,
        }
    }

    /// First click: arms the tool at the pointer.
    pub fn start(&mut self, pointer: CanvasPoint) {
        match self {
            Self::Segment { anchor } => *anchor = Some(pointer),
            Self::Circle { center } => *center = Some(pointer),
        }
    }

    /// Pointer motion: a preview from the armed anchor to the pointer, or
    /// `None` before the first click.
    pub fn update(
        &self,
        pointer: CanvasPoint,
        frame: &ReferenceFrame,
        resolution: usize,
    ) -> Option<ToolPreview> {
        match self {
            Self::Segment { anchor: Some(a) } => {
                Some(segment_preview(frame, *a, pointer, resolution))
            }
            Self::Circle { center: Some(c) } => {
                Some(circle_preview(frame, *c, pointer, resolution))
            }
            _ => None,
        }
    }

    /// Second click: the final preview, disarming the tool.
    pub fn finish(
        &mut self,
        pointer: CanvasPoint,
        frame: &ReferenceFrame,
        resolution: usize,
    ) -> Option<ToolPreview> {
        let preview = self.update(pointer, frame, resolution);
        if preview.is_some() {
            self.cancel();
        }
        preview
    }

    pub fn cancel(&mut self) {
        match self {
            Self::Segment { anchor } => *anchor = None,
            Self::Circle { center } => *center = None,
        }
    }
}

fn segment_preview(
    frame: &ReferenceFrame,
    a: CanvasPoint,
    b: CanvasPoint,
    resolution: usize,
) -> ToolPreview {
    ToolPreview {
        polyline: sample_segment(frame, a, b, resolution),
        measure: distance(frame.to_native(a), frame.to_native(b)),
    }
}

fn circle_preview(
    frame: &ReferenceFrame,
    center: CanvasPoint,
    rim: CanvasPoint,
    resolution: usize,
) -> ToolPreview {
    ToolPreview {
        polyline: sample_circle(frame, center, rim, resolution),
        measure: distance(frame.to_native(center), frame.to_native(rim)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> ReferenceFrame {
        ReferenceFrame::from_segment(CanvasPoint::new(64.0, 64.0), CanvasPoint::new(128.0, 64.0))
            .unwrap()
    }

    #[test]
    fn segment_tool_click_cycle() {
        let f = frame();
        let mut tool = SketchTool::segment();
        assert!(!tool.is_armed());
        assert!(tool.update(CanvasPoint::new(80.0, 64.0), &f, 50).is_none());

        tool.start(CanvasPoint::new(80.0, 64.0));
        assert!(tool.is_armed());

        let preview = tool.update(CanvasPoint::new(112.0, 64.0), &f, 50).unwrap();
        assert_eq!(preview.polyline.points.len(), 51);
        assert!(!preview.polyline.closed);
        // one unit out to three units out along the axis
        assert!((preview.measure - 2.0).abs() < 1e-9);
        assert!(tool.is_armed(), "preview must not consume the anchor");

        let done = tool.finish(CanvasPoint::new(112.0, 64.0), &f, 50).unwrap();
        assert!((done.measure - 2.0).abs() < 1e-9);
        assert!(!tool.is_armed());
        assert!(tool.update(CanvasPoint::new(90.0, 64.0), &f, 50).is_none());
    }

    #[test]
    fn circle_tool_click_cycle() {
        let f = frame();
        let mut tool = SketchTool::circle();
        tool.start(CanvasPoint::new(64.0, 64.0));

        let preview = tool.update(CanvasPoint::new(96.0, 64.0), &f, 50).unwrap();
        assert!(preview.polyline.closed);
        assert!((preview.measure - 2.0).abs() < 1e-9);

        let done = tool.finish(CanvasPoint::new(96.0, 64.0), &f, 50).unwrap();
        assert!(done.polyline.closed);
        assert!(!tool.is_armed());
    }

    #[test]
    fn finish_without_start_is_a_no_op() {
        let f = frame();
        let mut tool = SketchTool::segment();
        assert!(tool.finish(CanvasPoint::new(70.0, 70.0), &f, 50).is_none());
        assert!(!tool.is_armed());
    }

    #[test]
    fn cancel_discards_the_anchor() {
        let f = frame();
        let mut tool = SketchTool::circle();
        tool.start(CanvasPoint::new(75.0, 75.0));
        tool.cancel();
        assert!(!tool.is_armed());
        assert!(tool.update(CanvasPoint::new(90.0, 64.0), &f, 50).is_none());
    }
}
