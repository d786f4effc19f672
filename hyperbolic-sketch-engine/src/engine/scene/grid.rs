use bevy::prelude::*;
use constants::sketch_settings::{
    GRID_RINGS, GRID_SPOKES, GRID_SPOKE_UNITS, SAMPLE_RESOLUTION,
};
use std::f64::consts::TAU;

use hyperbolic_geometry::{PolarPoint, sample_circle, sample_segment};

use crate::engine::scene::polyline_mesh;
use crate::tools::frame_tool::ActiveFrame;

#[derive(Component)]
pub struct GridLine;

/// Which frame revision the spawned grid reflects.
#[derive(Resource, Default)]
pub struct GridBuilt {
    frame_revision: Option<u64>,
}

/// Rebuilds the polar guide grid whenever the reference frame changes:
/// unit-spaced distance rings around the origin crossed by evenly spaced
/// geodesic spokes. Rings centered on the origin are true canvas circles,
/// so the ring radii read as the hyperbolic distance scale directly.
pub fn ensure_grid(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    active_frame: Res<ActiveFrame>,
    mut grid_built: ResMut<GridBuilt>,
    existing: Query<Entity, With<GridLine>>,
) {
    let Some(frame) = active_frame.frame else {
        return;
    };
    if grid_built.frame_revision == Some(active_frame.revision()) {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let material = materials.add(ColorMaterial::from(Color::srgba(1.0, 1.0, 1.0, 0.12)));
    let origin = frame.origin;

    for ring in 1..=GRID_RINGS {
        let rim = frame.from_native(PolarPoint::new(ring as f64, 0.0));
        let circle = sample_circle(&frame, origin, rim, SAMPLE_RESOLUTION);
        commands.spawn((
            Mesh2d(meshes.add(polyline_mesh(&circle))),
            MeshMaterial2d(material.clone()),
            GridLine,
        ));
    }

    for spoke in 0..GRID_SPOKES {
        let angle = TAU * spoke as f64 / GRID_SPOKES as f64;
        let tip = frame.from_native(PolarPoint::new(GRID_SPOKE_UNITS, angle));
        let line = sample_segment(&frame, origin, tip, SAMPLE_RESOLUTION);
        commands.spawn((
            Mesh2d(meshes.add(polyline_mesh(&line))),
            MeshMaterial2d(material.clone()),
            GridLine,
        ));
    }

    grid_built.frame_revision = Some(active_frame.revision());
}
