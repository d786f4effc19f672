//! Sketch manifest loading at startup.
//!
//! Loads the default sketch JSON, seeds the reference frame and document
//! from it, and tracks progress for the state machine. A missing or broken
//! manifest falls back to an empty sketch rather than blocking startup.

/// Sketch manifest loading, frame seeding, and document seeding.
pub mod manifest_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
