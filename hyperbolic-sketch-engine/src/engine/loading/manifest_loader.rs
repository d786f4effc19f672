use bevy::prelude::*;
use constants::sketch_settings::DEFAULT_SKETCH_PATH;

use crate::engine::assets::sketch_manifest::{SketchManifest, to_canvas};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::drawables::SketchDocument;
use crate::tools::frame_tool::ActiveFrame;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SketchManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(DEFAULT_SKETCH_PATH));
}

// Seed the frame and document once the manifest resolves. A missing or
// broken manifest leaves both empty and lets the state machine fall back
// to FrameSetup instead of blocking in Loading.
pub fn poll_manifest(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<SketchManifest>>,
    asset_server: Res<AssetServer>,
    mut active_frame: ResMut<ActiveFrame>,
    mut document: ResMut<SketchDocument>,
) {
    if loading_progress.manifest_resolved {
        return;
    }
    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if matches!(
        asset_server.get_load_state(handle),
        Some(bevy::asset::LoadState::Failed(_))
    ) {
        warn!("Sketch manifest failed to load, starting with an empty sketch");
        loading_progress.manifest_resolved = true;
        return;
    }

    let Some(manifest) = manifests.get(handle) else {
        return;
    };

    match manifest.reference_frame() {
        Some(Ok(frame)) => {
            active_frame.set(frame);
            println!("✓ Reference frame restored from manifest");
        }
        Some(Err(err)) => {
            warn!("Stored reference frame rejected: {err}");
        }
        None => {}
    }

    // Anchor points only; polylines are re-sampled against the live frame.
    for segment in &manifest.segments {
        document.push_segment(to_canvas(segment.a), to_canvas(segment.b));
    }
    for circle in &manifest.circles {
        document.push_circle(to_canvas(circle.center), to_canvas(circle.rim));
    }
    if manifest.drawable_count() > 0 {
        println!("✓ Seeded {} drawables from manifest", manifest.drawable_count());
        loading_progress.sketch_seeded = true;
    }

    loading_progress.manifest_resolved = true;
}
