use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::sketch_settings::{MARKER_RADIUS, SAMPLE_RESOLUTION};

use hyperbolic_geometry::{SketchTool, ToolPreview};

use crate::engine::camera::viewport_camera::cursor_canvas_position;
use crate::engine::scene::drawables::SketchDocument;
use crate::engine::scene::polyline_mesh;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::frame_tool::ActiveFrame;
use crate::tools::tool_manager::{ToolKind, ToolManager};

/// Geodesic segment tool state: the core click cycle plus its latest
/// preview for rendering and the status readout.
#[derive(Resource)]
pub struct SegmentTool {
    pub tool: SketchTool,
    pub preview: Option<ToolPreview>,
}

impl Default for SegmentTool {
    fn default() -> Self {
        Self {
            tool: SketchTool::segment(),
            preview: None,
        }
    }
}

impl SegmentTool {
    pub fn clear(&mut self) {
        self.tool.cancel();
        self.preview = None;
    }
}

#[derive(Component)]
pub struct SegmentPreview;

// Input/logic: click to start, move to preview, click to commit into the
// document. The commit stores anchor points only; the polyline is
// re-sampled from them whenever the frame changes.
pub fn segment_tool_system(
    mut segment_tool: ResMut<SegmentTool>,
    tool_manager: Res<ToolManager>,
    active_frame: Res<ActiveFrame>,
    mut document: ResMut<SketchDocument>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !tool_manager.is_tool_active(ToolKind::Segment) {
        return;
    }
    let Some(frame) = active_frame.frame else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(cursor) = cursor_canvas_position(window, camera, camera_transform) else {
        segment_tool.preview = None;
        return;
    };

    segment_tool.preview = segment_tool.tool.update(cursor, &frame, SAMPLE_RESOLUTION);

    if let Some(preview) = &segment_tool.preview {
        rpc_interface.send_notification(
            "segment_updated",
            serde_json::json!({ "length": preview.measure }),
        );
    }

    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    match segment_tool.tool.anchor() {
        None => {
            segment_tool.tool.start(cursor);
            rpc_interface.send_notification(
                "segment_started",
                serde_json::json!({ "a": [cursor.x, cursor.y] }),
            );
        }
        Some(anchor) => {
            if let Some(done) = segment_tool.tool.finish(cursor, &frame, SAMPLE_RESOLUTION) {
                document.push_segment(anchor, cursor);
                rpc_interface.send_notification(
                    "segment_completed",
                    serde_json::json!({
                        "a": [anchor.x, anchor.y],
                        "b": [cursor.x, cursor.y],
                        "length": done.measure,
                    }),
                );
            }
            segment_tool.preview = None;
        }
    }
}

// Renderer: clears the preview each frame and rebuilds it from state.
pub fn update_segment_render(
    mut commands: Commands,
    segment_tool: Res<SegmentTool>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    existing_preview: Query<Entity, With<SegmentPreview>>,
) {
    for entity in &existing_preview {
        commands.entity(entity).despawn();
    }

    let Some(preview) = &segment_tool.preview else {
        return;
    };
    let material = materials.add(ColorMaterial::from(Color::srgb(1.0, 1.0, 0.2)));

    commands.spawn((
        Mesh2d(meshes.add(polyline_mesh(&preview.polyline))),
        MeshMaterial2d(material.clone()),
        SegmentPreview,
    ));

    if let Some(anchor) = segment_tool.tool.anchor() {
        commands.spawn((
            Mesh2d(meshes.add(Circle::new(MARKER_RADIUS))),
            MeshMaterial2d(material),
            Transform::from_xyz(anchor.x as f32, anchor.y as f32, 0.0),
            SegmentPreview,
        ));
    }
}
