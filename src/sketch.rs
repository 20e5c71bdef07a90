//! The sketch facade: immediate-mode drawing, style stacking, and input on
//! one rendering surface.

#[cfg(test)]
#[path = "sketch_test.rs"]
mod sketch_test;

use std::f64::consts::TAU;

use crate::error::SketchError;
use crate::input::InputState;
use crate::style::StyleFrame;
use crate::surface::RenderSurface;

/// Immediate-mode drawing facade over a [`RenderSurface`].
///
/// Owns the surface, its fixed pixel dimensions, the pointer/touch input
/// state, and an explicit style stack. Primitives draw with whatever fill,
/// stroke, and transform are current; nothing is saved or restored
/// implicitly. Style mutations mirror to the surface eagerly, so the mirror
/// in [`StyleFrame`] and the backend never disagree.
///
/// Construction seeds the stack with one copy of the defaults, so a sketch
/// can [`pop`](Self::pop) back to its initial state exactly once without a
/// prior [`push`](Self::push); the next unmatched pop underflows.
#[derive(Debug)]
pub struct Sketch<S: RenderSurface> {
    surface: S,
    width: u32,
    height: u32,
    input: InputState,
    current: StyleFrame,
    stack: Vec<StyleFrame>,
}

impl<S: RenderSurface> Sketch<S> {
    /// Bind `surface` at `width` x `height` pixels and apply the default
    /// style.
    pub fn new(mut surface: S, width: u32, height: u32) -> Self {
        let current = StyleFrame::default();
        surface.set_fill_color(&current.fill);
        surface.set_stroke_color(&current.stroke);
        surface.set_line_width(current.line_width);
        Self {
            surface,
            width,
            height,
            input: InputState::new(),
            stack: vec![current.clone()],
            current,
        }
    }

    // --- Style ---

    /// Set the fill color for subsequent drawing.
    pub fn fill(&mut self, color: &str) {
        self.current.fill = color.to_owned();
        self.surface.set_fill_color(color);
    }

    /// Set the stroke color for subsequent drawing.
    pub fn stroke(&mut self, color: &str) {
        self.current.stroke = color.to_owned();
        self.surface.set_stroke_color(color);
    }

    /// Set the stroke width in pixels for subsequent drawing.
    pub fn stroke_weight(&mut self, width: f64) {
        self.current.line_width = width;
        self.surface.set_line_width(width);
    }

    // --- Transform ---

    /// Shift the origin by `(dx, dy)` in the current local space.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Surface`] if the backend rejects the call; the
    /// mirrored transform is left untouched in that case.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<(), SketchError> {
        self.surface.translate(dx, dy)?;
        self.current.transform = self.current.transform.translated(dx, dy);
        Ok(())
    }

    /// Rotate the coordinate system by `angle` radians about the current
    /// origin.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Surface`] if the backend rejects the call; the
    /// mirrored transform is left untouched in that case.
    pub fn rotate(&mut self, angle: f64) -> Result<(), SketchError> {
        self.surface.rotate(angle)?;
        self.current.transform = self.current.transform.rotated(angle);
        Ok(())
    }

    // --- Style stack ---

    /// Save a snapshot of the current style and transform.
    pub fn push(&mut self) {
        self.stack.push(self.current.clone());
    }

    /// Restore the most recently saved style and transform.
    ///
    /// The saved transform is re-applied absolutely, then the saved colors
    /// and stroke width are re-sent to the surface.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::StackUnderflow`] when no saved frame remains,
    /// or [`SketchError::Surface`] if the backend rejects the transform
    /// restore (the current style is left unchanged in that case).
    pub fn pop(&mut self) -> Result<(), SketchError> {
        let frame = self.stack.pop().ok_or(SketchError::StackUnderflow)?;
        self.surface.set_transform(frame.transform)?;
        self.surface.set_fill_color(&frame.fill);
        self.surface.set_stroke_color(&frame.stroke);
        self.surface.set_line_width(frame.line_width);
        self.current = frame;
        Ok(())
    }

    /// Number of saved style frames.
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    // --- Primitives ---

    /// Paint the whole surface with `color`.
    ///
    /// Sets the fill color and fills the full `width` x `height` rectangle.
    /// The fill color stays set afterwards, and the rectangle goes through
    /// the current transform, exactly as if drawn by hand.
    pub fn background(&mut self, color: &str) {
        self.fill(color);
        self.surface
            .fill_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
    }

    /// Outline a rectangle with top-left corner `(x, y)`.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.surface.stroke_rect(x, y, width, height);
    }

    /// Fill a rectangle with top-left corner `(x, y)`.
    pub fn rect_filled(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.surface.fill_rect(x, y, width, height);
    }

    /// Stroke a straight segment from `(x1, y1)` to `(x2, y2)`.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.surface.begin_path();
        self.surface.move_to(x1, y1);
        self.surface.line_to(x2, y2);
        self.surface.stroke_path();
    }

    /// Stroke the closed triangle with vertices `(x1, y1)`, `(x2, y2)`,
    /// `(x3, y3)`.
    pub fn triangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.surface.begin_path();
        self.surface.move_to(x1, y1);
        self.surface.line_to(x2, y2);
        self.surface.line_to(x3, y3);
        self.surface.close_path();
        self.surface.stroke_path();
    }

    /// Outline a full circle centered at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Surface`] if the backend rejects the arc
    /// (negative `radius`).
    pub fn circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), SketchError> {
        self.surface.begin_path();
        self.surface.arc(x, y, radius, 0.0, TAU)?;
        self.surface.close_path();
        self.surface.stroke_path();
        Ok(())
    }

    /// Fill a full circle centered at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Surface`] if the backend rejects the arc
    /// (negative `radius`).
    pub fn circle_filled(&mut self, x: f64, y: f64, radius: f64) -> Result<(), SketchError> {
        self.surface.begin_path();
        self.surface.arc(x, y, radius, 0.0, TAU)?;
        self.surface.close_path();
        self.surface.fill_path();
        Ok(())
    }

    // --- Input events ---

    /// Record a pointer move at surface-local `(x, y)`.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.input.on_pointer_move(x, y);
    }

    /// Record a primary-button press.
    pub fn on_pointer_down(&mut self) {
        self.input.on_button_down();
    }

    /// Record a primary-button release.
    pub fn on_pointer_up(&mut self) {
        self.input.on_button_up();
    }

    /// Record a touch start at surface-local `(x, y)`: the touch point
    /// becomes the pointer position, then counts as a press.
    pub fn on_touch_start(&mut self, x: f64, y: f64) {
        self.input.on_pointer_move(x, y);
        self.input.on_button_down();
    }

    /// Record the end of a touch as a release.
    pub fn on_touch_end(&mut self) {
        self.input.on_button_up();
    }

    // --- Input queries ---

    /// Pointer x in surface-local pixels.
    #[must_use]
    pub fn pointer_x(&self) -> f64 {
        self.input.pointer_x
    }

    /// Pointer y in surface-local pixels.
    #[must_use]
    pub fn pointer_y(&self) -> f64 {
        self.input.pointer_y
    }

    /// Whether the button or a touch is currently held.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.input.is_down()
    }

    /// Whether the button was released since the last call (one-shot; see
    /// [`InputState::is_up`]).
    pub fn is_up(&mut self) -> bool {
        self.input.is_up()
    }

    // --- Accessors ---

    /// Surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The underlying surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the underlying surface, for callers that need
    /// backend operations the facade does not wrap.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
