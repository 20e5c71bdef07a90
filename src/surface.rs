//! The rendering-surface contract the sketch facade draws against.

use crate::error::SketchError;
use crate::transform::Transform;

/// A 2D drawing target.
///
/// Immediate-mode: every call mutates backend state or emits geometry right
/// away, in issue order. [`Sketch`](crate::sketch::Sketch) is generic over
/// this trait, so the same facade drives the browser canvas
/// ([`Canvas2dSurface`](crate::dom::Canvas2dSurface)) and the headless
/// recorder ([`RecordingSurface`](crate::record::RecordingSurface)) used in
/// tests.
///
/// Style setters and rectangle/path emission are infallible. `arc` and the
/// transform operations return `Result` because `Canvas2D` throws on them (a
/// negative radius, a broken transform); other backends keep the same split.
///
/// The facade owns its style/transform stack, so the trait carries no
/// save/restore; frames are reinstated through the style setters and
/// [`set_transform`](Self::set_transform).
pub trait RenderSurface {
    /// Set the fill color (CSS color string).
    fn set_fill_color(&mut self, color: &str);

    /// Set the stroke color (CSS color string).
    fn set_stroke_color(&mut self, color: &str);

    /// Set the stroke width in pixels.
    fn set_line_width(&mut self, width: f64);

    /// Fill an axis-aligned rectangle with the current fill color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Outline an axis-aligned rectangle with the current stroke.
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Start a new path, discarding any pending geometry.
    fn begin_path(&mut self);

    /// Move the path cursor to `(x, y)` without emitting a segment.
    fn move_to(&mut self, x: f64, y: f64);

    /// Emit a straight segment from the cursor to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Emit a circular arc centered at `(x, y)` from `start_angle` to
    /// `end_angle`, in radians.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Surface`] when the backend rejects the arc,
    /// notably for a negative `radius`.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), SketchError>;

    /// Close the current subpath back to its starting point.
    fn close_path(&mut self);

    /// Stroke the current path.
    fn stroke_path(&mut self);

    /// Fill the current path.
    fn fill_path(&mut self);

    /// Compose a translation by `(dx, dy)` onto the current transform.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Surface`] when the backend rejects the call.
    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), SketchError>;

    /// Compose a rotation by `angle` radians onto the current transform.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Surface`] when the backend rejects the call.
    fn rotate(&mut self, angle: f64) -> Result<(), SketchError>;

    /// Replace the current transform with `transform`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Surface`] when the backend rejects the call.
    fn set_transform(&mut self, transform: Transform) -> Result<(), SketchError>;
}
