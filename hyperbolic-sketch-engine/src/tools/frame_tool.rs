use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::sketch_settings::MARKER_RADIUS;

use hyperbolic_geometry::{CanvasPoint, Polyline, ReferenceFrame};

use crate::engine::camera::viewport_camera::cursor_canvas_position;
use crate::engine::scene::polyline_mesh;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::tool_manager::{ToolKind, ToolManager};

/// The shared reference frame. The revision counter is how every derived
/// visual (grid, committed drawables) notices a replacement.
#[derive(Resource, Default)]
pub struct ActiveFrame {
    pub frame: Option<ReferenceFrame>,
    revision: u64,
}

impl ActiveFrame {
    pub fn set(&mut self, frame: ReferenceFrame) {
        self.frame = Some(frame);
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Event carrying an externally supplied axis segment (RPC `set_frame`).
#[derive(Event)]
pub struct SetFrameEvent {
    pub origin: CanvasPoint,
    pub target: CanvasPoint,
}

/// Two-click axis definition state.
#[derive(Resource, Default)]
pub struct FrameTool {
    pub anchor: Option<CanvasPoint>,
    pub preview_point: Option<CanvasPoint>,
}

impl FrameTool {
    pub fn clear(&mut self) {
        self.anchor = None;
        self.preview_point = None;
    }
}

#[derive(Component)]
pub struct FramePreview;

// Input/logic: click the origin, move to preview the axis, click to commit.
// Validation happens here, at the point of configuration, so the geometry
// calls never see a degenerate frame.
pub fn frame_tool_system(
    mut frame_tool: ResMut<FrameTool>,
    tool_manager: Res<ToolManager>,
    mut active_frame: ResMut<ActiveFrame>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !tool_manager.is_tool_active(ToolKind::Frame) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    frame_tool.preview_point = cursor_canvas_position(window, camera, camera_transform);
    let Some(cursor) = frame_tool.preview_point else {
        return;
    };

    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    match frame_tool.anchor {
        None => {
            frame_tool.anchor = Some(cursor);
            rpc_interface.send_notification(
                "frame_started",
                serde_json::json!({ "origin": [cursor.x, cursor.y] }),
            );
        }
        Some(origin) => {
            match ReferenceFrame::from_segment(origin, cursor) {
                Ok(frame) => {
                    rpc_interface.send_notification(
                        "frame_changed",
                        serde_json::json!({
                            "origin": [frame.origin.x, frame.origin.y],
                            "target": [frame.target.x, frame.target.y],
                            "scale": frame.scale,
                        }),
                    );
                    active_frame.set(frame);
                }
                Err(err) => {
                    warn!("Frame rejected: {err}");
                    rpc_interface.send_notification(
                        "frame_rejected",
                        serde_json::json!({ "reason": err.to_string() }),
                    );
                }
            }
            frame_tool.anchor = None;
        }
    }
}

/// Applies axis segments supplied over RPC, with the same validation as
/// the interactive path.
pub fn apply_set_frame_events(
    mut events: EventReader<SetFrameEvent>,
    mut active_frame: ResMut<ActiveFrame>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        match ReferenceFrame::from_segment(event.origin, event.target) {
            Ok(frame) => {
                rpc_interface.send_notification(
                    "frame_changed",
                    serde_json::json!({
                        "origin": [frame.origin.x, frame.origin.y],
                        "target": [frame.target.x, frame.target.y],
                        "scale": frame.scale,
                    }),
                );
                active_frame.set(frame);
            }
            Err(err) => {
                warn!("Frame rejected via RPC: {err}");
                rpc_interface.send_notification(
                    "frame_rejected",
                    serde_json::json!({ "reason": err.to_string() }),
                );
            }
        }
    }
}

// Renderer: clears the preview each frame and rebuilds it from state.
// The axis preview is a plain canvas segment; hyperbolic sampling only
// becomes meaningful once a frame exists.
pub fn update_frame_render(
    mut commands: Commands,
    frame_tool: Res<FrameTool>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    existing_preview: Query<Entity, With<FramePreview>>,
) {
    for entity in &existing_preview {
        commands.entity(entity).despawn();
    }

    let Some(anchor) = frame_tool.anchor else {
        return;
    };
    let material = materials.add(ColorMaterial::from(Color::srgb(0.3, 0.8, 1.0)));

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(MARKER_RADIUS))),
        MeshMaterial2d(material.clone()),
        Transform::from_xyz(anchor.x as f32, anchor.y as f32, 0.0),
        FramePreview,
    ));

    if let Some(cursor) = frame_tool.preview_point {
        let axis = Polyline {
            points: vec![anchor, cursor],
            closed: false,
        };
        commands.spawn((
            Mesh2d(meshes.add(polyline_mesh(&axis))),
            MeshMaterial2d(material),
            FramePreview,
        ));
    }
}
