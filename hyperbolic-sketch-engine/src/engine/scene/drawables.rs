use bevy::prelude::*;
use constants::sketch_settings::SAMPLE_RESOLUTION;

use hyperbolic_geometry::{CanvasPoint, sample_circle, sample_segment};

use crate::engine::scene::polyline_mesh;
use crate::tools::frame_tool::ActiveFrame;

/// Geodesic segment frozen into the document, stored as its endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SegmentDrawable {
    pub a: CanvasPoint,
    pub b: CanvasPoint,
}

/// Circle frozen into the document, stored as its center and a rim point.
#[derive(Debug, Clone, Copy)]
pub struct CircleDrawable {
    pub center: CanvasPoint,
    pub rim: CanvasPoint,
}

/// All committed drawables. Only anchor points are stored; polylines are
/// re-sampled against the live frame on every revision change.
#[derive(Resource, Default)]
pub struct SketchDocument {
    segments: Vec<SegmentDrawable>,
    circles: Vec<CircleDrawable>,
    revision: u64,
}

impl SketchDocument {
    pub fn push_segment(&mut self, a: CanvasPoint, b: CanvasPoint) {
        self.segments.push(SegmentDrawable { a, b });
        self.revision += 1;
    }

    pub fn push_circle(&mut self, center: CanvasPoint, rim: CanvasPoint) {
        self.circles.push(CircleDrawable { center, rim });
        self.revision += 1;
    }

    pub fn segments(&self) -> &[SegmentDrawable] {
        &self.segments
    }

    pub fn circles(&self) -> &[CircleDrawable] {
        &self.circles
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drops every committed drawable. Counts as a revision so the spawned
    /// meshes get torn down on the next rebuild pass.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.circles.clear();
        self.revision += 1;
    }
}

/// Which `(document, frame)` revision pair the spawned meshes reflect.
#[derive(Resource, Default)]
pub struct RenderedSketch {
    built: Option<(u64, u64)>,
}

#[derive(Component)]
pub struct CommittedDrawableTag;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_tracks_every_mutation() {
        let mut document = SketchDocument::default();
        assert_eq!(document.revision(), 0);

        document.push_segment(CanvasPoint::new(0.0, 0.0), CanvasPoint::new(1.0, 0.0));
        document.push_circle(CanvasPoint::new(2.0, 2.0), CanvasPoint::new(3.0, 2.0));
        assert_eq!(document.revision(), 2);
        assert_eq!(document.segments().len(), 1);
        assert_eq!(document.circles().len(), 1);

        document.clear();
        assert_eq!(document.revision(), 3);
        assert!(document.segments().is_empty());
        assert!(document.circles().is_empty());
    }
}

// Despawn and re-sample every committed drawable when the document or the
// reference frame moved on
pub fn rebuild_sketch_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    document: Res<SketchDocument>,
    active_frame: Res<ActiveFrame>,
    mut rendered: ResMut<RenderedSketch>,
    existing: Query<Entity, With<CommittedDrawableTag>>,
) {
    let Some(frame) = active_frame.frame else {
        return;
    };
    let current = (document.revision(), active_frame.revision());
    if rendered.built == Some(current) {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let material = materials.add(ColorMaterial::from(Color::srgb(0.95, 0.95, 0.95)));
    for segment in document.segments() {
        let line = sample_segment(&frame, segment.a, segment.b, SAMPLE_RESOLUTION);
        commands.spawn((
            Mesh2d(meshes.add(polyline_mesh(&line))),
            MeshMaterial2d(material.clone()),
            CommittedDrawableTag,
        ));
    }
    for circle in document.circles() {
        let ring = sample_circle(&frame, circle.center, circle.rim, SAMPLE_RESOLUTION);
        commands.spawn((
            Mesh2d(meshes.add(polyline_mesh(&ring))),
            MeshMaterial2d(material.clone()),
            CommittedDrawableTag,
        ));
    }

    rendered.built = Some(current);
}
