//! Style frames: the unit saved and restored by the sketch's push/pop stack.

use crate::consts::{DEFAULT_FILL, DEFAULT_LINE_WIDTH, DEFAULT_STROKE};
use crate::transform::Transform;

/// One snapshot of drawing state: colors, stroke width, and the accumulated
/// transform.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleFrame {
    /// Fill color, any CSS color string.
    pub fill: String,
    /// Stroke color, any CSS color string.
    pub stroke: String,
    /// Stroke width in pixels.
    pub line_width: f64,
    /// Affine transform in effect when the frame was captured.
    pub transform: Transform,
}

impl Default for StyleFrame {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL.to_owned(),
            stroke: DEFAULT_STROKE.to_owned(),
            line_width: DEFAULT_LINE_WIDTH,
            transform: Transform::IDENTITY,
        }
    }
}
