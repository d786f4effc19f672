use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::sketch_manifest::SketchManifest;
use crate::engine::camera::viewport_camera::{ViewportCamera, camera_controller};
use crate::engine::core::app_state::{
    AppState, FpsText, StatusText, transition_after_manifest, transition_to_sketching,
    update_loading_frontend,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, poll_manifest, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::drawables::{RenderedSketch, SketchDocument, rebuild_sketch_visuals};
use crate::engine::scene::grid::{GridBuilt, ensure_grid};
use crate::engine::systems::status_bar::fps_notification_system;
// Crate tools modules
use crate::tools::{
    circle::{CircleTool, circle_tool_system, update_circle_render},
    frame_tool::{
        ActiveFrame, FrameTool, SetFrameEvent, apply_set_frame_events, frame_tool_system,
        update_frame_render,
    },
    segment::{SegmentTool, segment_tool_system, update_segment_render},
    tool_manager::{
        ClearToolEvent, ToolManager, ToolSelectionEvent, handle_clear_tool_events,
        handle_tool_keyboard_shortcuts, handle_tool_selection_events,
    },
};
// Crate Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::status_bar::{fps_text_update_system, status_text_update_system};
#[cfg(not(target_arch = "wasm32"))]
use crate::tools::tool_manager::clear_tool_on_escape;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SketchManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SketchManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ActiveFrame>()
        .init_resource::<SketchDocument>()
        .init_resource::<RenderedSketch>()
        .init_resource::<GridBuilt>()
        .init_resource::<ToolManager>()
        .init_resource::<FrameTool>()
        .init_resource::<SegmentTool>()
        .init_resource::<CircleTool>()
        .init_resource::<ViewportCamera>()
        .add_event::<ToolSelectionEvent>()
        .add_event::<ClearToolEvent>()
        .add_event::<SetFrameEvent>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (poll_manifest, transition_after_manifest, update_loading_frontend)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (frame_tool_system, update_frame_render, transition_to_sketching)
                .chain()
                .run_if(in_state(AppState::FrameSetup)),
        )
        .add_systems(
            Update,
            (
                ensure_grid,
                rebuild_sketch_visuals,
                frame_tool_system,
                update_frame_render,
                segment_tool_system,
                update_segment_render,
                circle_tool_system,
                update_circle_render,
            )
                .run_if(in_state(AppState::Sketching)),
        );

    // Systems that stay live across states.
    app.add_systems(
        Update,
        (
            camera_controller,
            handle_tool_keyboard_shortcuts,
            handle_tool_selection_events,
            handle_clear_tool_events,
            apply_set_frame_events,
            fps_notification_system,
        ),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, (fps_text_update_system, status_text_update_system));
        app.add_systems(Update, clear_tool_on_escape);
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    println!("=== HYPERBOLIC SKETCH ENGINE ===");
    commands.spawn(Camera2d);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("loading"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                StatusText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
