//! Asset types for persisted sketches.
//!
//! Sketches are stored as JSON manifests holding the reference frame axis
//! and the anchor points of every drawable. Sampled polylines are never
//! persisted; they are recomputed from the anchors and the live frame.

/// Sketch manifest with frame axis and drawable anchor points.
pub mod sketch_manifest;
