//! Canvas-space scene content rebuilt from sketch state.
//!
//! Nothing in here is retained geometry: the grid and every committed
//! drawable are re-sampled from their anchor points whenever the reference
//! frame or the document changes.

/// Committed drawables and their canvas meshes.
pub mod drawables;

/// Polar guide grid around the frame origin.
pub mod grid;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

use hyperbolic_geometry::Polyline;

/// Converts a sampled polyline into a line-strip mesh on the canvas plane,
/// joining a closed polyline back to its first point.
pub fn polyline_mesh(polyline: &Polyline) -> Mesh {
    let mut positions: Vec<[f32; 3]> = polyline
        .points
        .iter()
        .map(|p| [p.x as f32, p.y as f32, 0.0])
        .collect();
    if polyline.closed {
        if let Some(first) = positions.first().copied() {
            positions.push(first);
        }
    }
    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}
