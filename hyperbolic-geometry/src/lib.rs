//! Hyperbolic plane geometry in the native polar representation.
//!
//! Points are `(radius, angle)` pairs where radius is the hyperbolic distance
//! from a global origin and angle is measured against a reference axis. Under
//! this representation geodesics through the origin are rays of constant
//! angle, so the two rigid motions of the coordinate system (rotation about
//! the origin, translation along the axis geodesic) are enough to normalise
//! any two-point configuration into a straight radial sweep. The samplers use
//! exactly that to turn hyperbolic segments and circles into canvas polylines.

pub mod frame;
pub mod motions;
pub mod polar;
pub mod sampler;
pub mod tools;
pub mod trig;

pub use frame::{CanvasPoint, FrameError, ReferenceFrame};
pub use motions::{rotate, translate_horizontal};
pub use polar::{PolarPoint, distance, normalize_angle, theta};
pub use sampler::{Polyline, sample_circle, sample_segment};
pub use tools::{SketchTool, ToolPreview};
