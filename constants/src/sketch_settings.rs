/// Number of equally spaced steps per sampled primitive.
/// A segment emits `SAMPLE_RESOLUTION + 1` points.
pub const SAMPLE_RESOLUTION: usize = 50;

/// Floor for the circle sampler's radial sweep increment, in hyperbolic units.
pub const MIN_SWEEP_STEP: f64 = 0.01;

/// Subdivision factor applied to the sweep step near the inner sweep radius,
/// where the boundary angle changes fastest.
pub const FACETING_REFINEMENT: f64 = 5.0;

/// Width of the refined tail of the sweep, in multiples of the base step.
pub const FACETING_WINDOW: f64 = 5.0;

/// Startup sketch manifest, relative to the asset root.
pub const DEFAULT_SKETCH_PATH: &str = "sketches/default.json";

/// Radius of anchor and endpoint dots, in canvas pixels.
pub const MARKER_RADIUS: f32 = 4.0;

/// Polar grid extent around the frame origin.
pub const GRID_RINGS: usize = 6;
pub const GRID_SPOKES: usize = 12;
pub const GRID_SPOKE_UNITS: f64 = 6.0;
