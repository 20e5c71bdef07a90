//! Default style values shared across the sketch crate.

/// Fill color in effect when a sketch is created.
pub const DEFAULT_FILL: &str = "#000000";

/// Stroke color in effect when a sketch is created.
pub const DEFAULT_STROKE: &str = "black";

/// Stroke width in pixels in effect when a sketch is created.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
