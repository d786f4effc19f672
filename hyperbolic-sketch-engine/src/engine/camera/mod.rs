//! Viewport camera for canvas navigation.
//!
//! Provides pan and zoom controls with smooth interpolation and
//! cursor-to-canvas coordinate conversion for the sketch tools.

/// Viewport camera resource and controller system for canvas navigation.
pub mod viewport_camera;
