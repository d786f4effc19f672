//! Cross-cutting frame-rate and status reporting systems.

/// Native status/FPS overlays and the RPC FPS notification stream.
pub mod status_bar;
