//! JSON-RPC 2.0 communication layer for frontend integration.
//!
//! Implements bidirectional messaging between the Bevy engine and a hosting
//! page via iframe postMessage: requests carry IDs and expect responses,
//! notifications are one-way. The sketch side exposes tool selection, frame
//! configuration, and document export; outbound notifications stream live
//! measurements, commits, and FPS.

pub mod web_rpc;
