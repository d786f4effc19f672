//! Interactive sketch tools.
//!
//! Each tool is a two-click interaction: the first click arms it, pointer
//! motion drives a live preview, the second click commits. The hyperbolic
//! math lives in the geometry crate; these systems only route pointer
//! input, document state, and rendering around it.

/// Circle tool: click the center, click a rim point.
pub mod circle;

/// Frame tool: two clicks define the reference axis segment.
pub mod frame_tool;

/// Segment tool: click both geodesic endpoints.
pub mod segment;

/// Exclusive tool activation, shortcuts, and selection events.
pub mod tool_manager;
