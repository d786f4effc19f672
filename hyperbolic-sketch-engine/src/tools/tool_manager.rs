use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::circle::CircleTool;
use crate::tools::frame_tool::FrameTool;
use crate::tools::segment::SegmentTool;

/// Enumeration of available tools in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Frame,
    Segment,
    Circle,
}

impl ToolKind {
    /// Convert string identifier to tool kind for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "frame" => Some(Self::Frame),
            "segment" => Some(Self::Segment),
            "circle" => Some(Self::Circle),
            _ => None,
        }
    }

    /// Convert tool kind to string identifier for frontend communication.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frame => "frame",
            Self::Segment => "segment",
            Self::Circle => "circle",
        }
    }
}

/// Resource tracking the currently active tool.
#[derive(Resource, Default)]
pub struct ToolManager {
    active_tool: Option<ToolKind>,
}

impl ToolManager {
    /// Activate specified tool, deactivating the previous tool if necessary.
    pub fn activate_tool(&mut self, kind: ToolKind) -> bool {
        if self.active_tool == Some(kind) {
            return false;
        }
        self.active_tool = Some(kind);
        info!("Tool manager activated: {}", kind.as_str());
        true
    }

    /// Deactivate the currently active tool.
    pub fn deactivate_current_tool(&mut self) -> Option<ToolKind> {
        let previous = self.active_tool.take();
        if let Some(tool) = previous {
            info!("Tool manager deactivated: {}", tool.as_str());
        }
        previous
    }

    pub fn active_tool(&self) -> Option<ToolKind> {
        self.active_tool
    }

    pub fn is_tool_active(&self, kind: ToolKind) -> bool {
        self.active_tool == Some(kind)
    }
}

/// Event fired when tool selection changes via RPC or keyboard shortcuts.
#[derive(Event)]
pub struct ToolSelectionEvent {
    pub kind: ToolKind,
    pub source: ToolSelectionSource,
}

/// Event requesting the active tool be dropped and its state cleared.
#[derive(Event)]
pub struct ClearToolEvent;

/// Source of tool selection for debugging and conditional logic.
#[derive(Debug, Clone, Copy)]
pub enum ToolSelectionSource {
    Rpc,
    Keyboard,
}

/// System handling tool selection events with proper state coordination.
pub fn handle_tool_selection_events(
    mut events: EventReader<ToolSelectionEvent>,
    mut tool_manager: ResMut<ToolManager>,
    mut frame_tool: ResMut<FrameTool>,
    mut segment_tool: ResMut<SegmentTool>,
    mut circle_tool: ResMut<CircleTool>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        let tool_changed = tool_manager.activate_tool(event.kind);
        if !tool_changed {
            continue;
        }

        // A half-finished click cycle must not survive a tool switch.
        frame_tool.clear();
        segment_tool.clear();
        circle_tool.clear();

        info!("{} tool activated via {:?}", event.kind.as_str(), event.source);
        rpc_interface.send_notification(
            "tool_state_changed",
            serde_json::json!({
                "tool": event.kind.as_str(),
                "active": true
            }),
        );
    }
}

/// System dropping the active tool in response to clear requests.
pub fn handle_clear_tool_events(
    mut events: EventReader<ClearToolEvent>,
    mut tool_manager: ResMut<ToolManager>,
    mut frame_tool: ResMut<FrameTool>,
    mut segment_tool: ResMut<SegmentTool>,
    mut circle_tool: ResMut<CircleTool>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for _ in events.read() {
        let previous = tool_manager.deactivate_current_tool();
        frame_tool.clear();
        segment_tool.clear();
        circle_tool.clear();

        if let Some(tool) = previous {
            rpc_interface.send_notification(
                "tool_state_changed",
                serde_json::json!({
                    "tool": tool.as_str(),
                    "active": false
                }),
            );
        }
    }
}

/// System handling keyboard shortcuts for tool selection (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_tool_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tool_events: EventWriter<ToolSelectionEvent>,
) {
    for (key, kind) in [
        (KeyCode::KeyF, ToolKind::Frame),
        (KeyCode::KeyS, ToolKind::Segment),
        (KeyCode::KeyC, ToolKind::Circle),
    ] {
        if keyboard.just_pressed(key) {
            tool_events.write(ToolSelectionEvent {
                kind,
                source: ToolSelectionSource::Keyboard,
            });
        }
    }
}

/// Placeholder system for WASM builds where keyboard shortcuts are disabled.
#[cfg(target_arch = "wasm32")]
pub fn handle_tool_keyboard_shortcuts() {
    // Tools are controlled via RPC only in WASM builds.
}

/// Escape drops the active tool (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn clear_tool_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut clear_events: EventWriter<ClearToolEvent>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        clear_events.write(ClearToolEvent);
    }
}
