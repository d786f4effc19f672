/// Hyperbolic length assigned to the frame's defining axis segment.
/// `ReferenceFrame::scale` is the canvas length of the segment divided by this.
pub const AXIS_UNITS: f64 = 4.0;
