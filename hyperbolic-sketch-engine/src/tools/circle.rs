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

/// Circle tool state: the core click cycle plus its latest preview. The
/// measure carried in the preview is the hyperbolic radius.
#[derive(Resource)]
pub struct CircleTool {
    pub tool: SketchTool,
    pub preview: Option<ToolPreview>,
}

impl Default for CircleTool {
    fn default() -> Self {
        Self {
            tool: SketchTool::circle(),
            preview: None,
        }
    }
}

impl CircleTool {
    pub fn clear(&mut self) {
        self.tool.cancel();
        self.preview = None;
    }
}

#[derive(Component)]
pub struct CirclePreview;

// Input/logic: click the center, move to preview, click a rim point to
// commit into the document.
pub fn circle_tool_system(
    mut circle_tool: ResMut<CircleTool>,
    tool_manager: Res<ToolManager>,
    active_frame: Res<ActiveFrame>,
    mut document: ResMut<SketchDocument>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !tool_manager.is_tool_active(ToolKind::Circle) {
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
        circle_tool.preview = None;
        return;
    };

    circle_tool.preview = circle_tool.tool.update(cursor, &frame, SAMPLE_RESOLUTION);

    if let Some(preview) = &circle_tool.preview {
        rpc_interface.send_notification(
            "circle_updated",
            serde_json::json!({ "radius": preview.measure }),
        );
    }

    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    match circle_tool.tool.anchor() {
        None => {
            circle_tool.tool.start(cursor);
            rpc_interface.send_notification(
                "circle_started",
                serde_json::json!({ "center": [cursor.x, cursor.y] }),
            );
        }
        Some(center) => {
            if let Some(done) = circle_tool.tool.finish(cursor, &frame, SAMPLE_RESOLUTION) {
                document.push_circle(center, cursor);
                rpc_interface.send_notification(
                    "circle_completed",
                    serde_json::json!({
                        "center": [center.x, center.y],
                        "rim": [cursor.x, cursor.y],
                        "radius": done.measure,
                    }),
                );
            }
            circle_tool.preview = None;
        }
    }
}

// Renderer: clears the preview each frame and rebuilds it from state.
pub fn update_circle_render(
    mut commands: Commands,
    circle_tool: Res<CircleTool>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    existing_preview: Query<Entity, With<CirclePreview>>,
) {
    for entity in &existing_preview {
        commands.entity(entity).despawn();
    }

    let Some(preview) = &circle_tool.preview else {
        return;
    };
    let material = materials.add(ColorMaterial::from(Color::srgb(1.0, 1.0, 0.2)));

    commands.spawn((
        Mesh2d(meshes.add(polyline_mesh(&preview.polyline))),
        MeshMaterial2d(material.clone()),
        CirclePreview,
    ));

    if let Some(center) = circle_tool.tool.anchor() {
        commands.spawn((
            Mesh2d(meshes.add(Circle::new(MARKER_RADIUS))),
            MeshMaterial2d(material),
            Transform::from_xyz(center.x as f32, center.y as f32, 0.0),
            CirclePreview,
        ));
    }
}
