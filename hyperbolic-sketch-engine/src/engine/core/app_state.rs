use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::frame_tool::ActiveFrame;
use crate::tools::tool_manager::ToolManager;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Resource)]
pub enum AppState {
    #[default]
    Loading,
    FrameSetup,
    Sketching,
}

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct StatusText;

// Route out of Loading once the manifest either loaded or failed
pub fn transition_after_manifest(
    loading_progress: Res<LoadingProgress>,
    active_frame: Res<ActiveFrame>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !loading_progress.manifest_resolved {
        return;
    }
    if active_frame.frame.is_some() {
        println!("→ Manifest frame accepted, transitioning to Sketching state");
        next_state.set(AppState::Sketching);
    } else {
        println!("→ No reference frame yet, transitioning to FrameSetup state");
        next_state.set(AppState::FrameSetup);
    }
}

// Leave FrameSetup as soon as a frame has been committed
pub fn transition_to_sketching(
    active_frame: Res<ActiveFrame>,
    mut tool_manager: ResMut<ToolManager>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if active_frame.frame.is_some() {
        println!("→ Reference frame set, transitioning to Sketching state");
        tool_manager.deactivate_current_tool();
        next_state.set(AppState::Sketching);
    }
}

pub fn update_loading_frontend(
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if loading_progress.is_changed() {
        rpc_interface.send_notification(
            "loading_progress",
            serde_json::json!({
                "manifest_resolved": loading_progress.manifest_resolved,
                "sketch_seeded": loading_progress.sketch_seeded,
            }),
        );
    }
}
