use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::rpc::web_rpc::WebRpcInterface;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::{AppState, FpsText, StatusText};
#[cfg(not(target_arch = "wasm32"))]
use crate::tools::circle::CircleTool;
#[cfg(not(target_arch = "wasm32"))]
use crate::tools::segment::SegmentTool;
#[cfg(not(target_arch = "wasm32"))]
use crate::tools::tool_manager::{ToolKind, ToolManager};

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    // Send FPS every 0.5 seconds
    if current_time - *last_send_time >= 0.5 {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                rpc_interface.send_notification(
                    "fps_update",
                    serde_json::json!({
                        "fps": value as f32
                    }),
                );
                *last_send_time = current_time;
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

// Status line: active tool plus the live hyperbolic measurement
#[cfg(not(target_arch = "wasm32"))]
pub fn status_text_update_system(
    state: Res<State<AppState>>,
    tool_manager: Res<ToolManager>,
    segment_tool: Res<SegmentTool>,
    circle_tool: Res<CircleTool>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    let status = match state.get() {
        AppState::Loading => "loading".to_string(),
        AppState::FrameSetup => match tool_manager.active_tool() {
            Some(ToolKind::Frame) => "frame: click the origin, then the axis target".to_string(),
            _ => "press F to set the reference frame".to_string(),
        },
        AppState::Sketching => match tool_manager.active_tool() {
            Some(ToolKind::Frame) => "frame: click the origin, then the axis target".to_string(),
            Some(ToolKind::Segment) => match &segment_tool.preview {
                Some(preview) if preview.measure.is_finite() => {
                    format!("segment: length {:.4}", preview.measure)
                }
                Some(_) => "segment: degenerate".to_string(),
                None => "segment: click the start point".to_string(),
            },
            Some(ToolKind::Circle) => match &circle_tool.preview {
                Some(preview) if preview.measure.is_finite() => {
                    format!("circle: radius {:.4}", preview.measure)
                }
                Some(_) => "circle: degenerate".to_string(),
                None => "circle: click the center".to_string(),
            },
            None => "F frame / S segment / C circle, Esc clears".to_string(),
        },
    };

    for mut text in &mut query {
        text.0 = status.clone();
    }
}
