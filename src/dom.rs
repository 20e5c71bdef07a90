//! Browser backend: a canvas-2d surface, input wiring, and the frame loop.
//!
//! Everything here touches `web-sys`; the rest of the crate stays
//! host-agnostic behind [`RenderSurface`]. Event closures and the animation
//! callback are handed to the browser with `Closure::forget`, so they live
//! for the page lifetime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SketchError;
use crate::factory::SharedSketch;
use crate::surface::RenderSurface;
use crate::transform::Transform;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

fn surface_err(op: &'static str, err: &JsValue) -> SketchError {
    SketchError::Surface { op, detail: format!("{err:?}") }
}

// --- Surface ---

/// [`RenderSurface`] backed by a `<canvas>` 2d context.
#[derive(Debug)]
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Sizes the canvas element and takes its 2d context.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::ContextUnavailable`] when the element refuses
    /// to hand out a 2d context.
    pub fn new(canvas: HtmlCanvasElement, width: u32, height: u32) -> Result<Self, SketchError> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| SketchError::ContextUnavailable)?
            .ok_or(SketchError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SketchError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    /// Looks the canvas up in the live document, then sizes it.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::WindowUnavailable`] outside a browser,
    /// [`SketchError::CanvasNotFound`] when the selector matches nothing or
    /// matches a non-canvas element, and [`SketchError::ContextUnavailable`]
    /// when the 2d context cannot be taken.
    pub fn from_selector(selector: &str, width: u32, height: u32) -> Result<Self, SketchError> {
        let document = web_sys::window()
            .ok_or(SketchError::WindowUnavailable)?
            .document()
            .ok_or(SketchError::WindowUnavailable)?;
        let canvas = document
            .query_selector(selector)
            .map_err(|err| surface_err("query_selector", &err))?
            .ok_or_else(|| SketchError::CanvasNotFound(selector.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SketchError::CanvasNotFound(selector.to_owned()))?;
        Self::new(canvas, width, height)
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl RenderSurface for Canvas2dSurface {
    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.stroke_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), SketchError> {
        self.ctx
            .arc(x, y, radius, start_angle, end_angle)
            .map_err(|err| surface_err("arc", &err))
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke_path(&mut self) {
        self.ctx.stroke();
    }

    fn fill_path(&mut self) {
        self.ctx.fill();
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), SketchError> {
        self.ctx
            .translate(dx, dy)
            .map_err(|err| surface_err("translate", &err))
    }

    fn rotate(&mut self, angle: f64) -> Result<(), SketchError> {
        self.ctx
            .rotate(angle)
            .map_err(|err| surface_err("rotate", &err))
    }

    fn set_transform(&mut self, transform: Transform) -> Result<(), SketchError> {
        self.ctx
            .set_transform(
                transform.a,
                transform.b,
                transform.c,
                transform.d,
                transform.e,
                transform.f,
            )
            .map_err(|err| surface_err("set_transform", &err))
    }
}

// --- Input wiring ---

fn add_listener<T: ?Sized>(
    target: &HtmlCanvasElement,
    event: &'static str,
    closure: &Closure<T>,
) -> Result<(), SketchError> {
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| SketchError::Surface {
            op: "add_event_listener",
            detail: format!("{event}: {err:?}"),
        })
}

/// Subscribes the sketch to mouse and touch events on its canvas.
///
/// Mouse coordinates come from the event's offset position. Touch
/// coordinates come from the first target touch, mapped into canvas space
/// through the element's bounding rect; `touchstart` also suppresses the
/// browser's synthetic mouse events via `preventDefault`.
///
/// # Errors
///
/// Returns [`SketchError::Surface`] when the browser rejects a listener
/// registration. Listeners registered before the failure stay attached.
pub fn attach_input_handlers(sketch: &SharedSketch<Canvas2dSurface>) -> Result<(), SketchError> {
    let canvas = sketch.borrow().surface().canvas().clone();

    {
        let sketch = Rc::clone(sketch);
        let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            sketch
                .borrow_mut()
                .on_pointer_move(f64::from(event.offset_x()), f64::from(event.offset_y()));
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        add_listener(&canvas, "mousemove", &closure)?;
        closure.forget();
    }

    {
        let sketch = Rc::clone(sketch);
        let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
            sketch.borrow_mut().on_pointer_down();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        add_listener(&canvas, "mousedown", &closure)?;
        closure.forget();
    }

    {
        let sketch = Rc::clone(sketch);
        let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
            sketch.borrow_mut().on_pointer_up();
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        add_listener(&canvas, "mouseup", &closure)?;
        closure.forget();
    }

    {
        let sketch = Rc::clone(sketch);
        let canvas_for_touch = canvas.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::TouchEvent| {
            event.prevent_default();
            let Some(touch) = event.target_touches().get(0) else {
                return;
            };
            let rect = canvas_for_touch.get_bounding_client_rect();
            let x = f64::from(touch.page_x()) - rect.left();
            let y = f64::from(touch.page_y()) - rect.top();
            sketch.borrow_mut().on_touch_start(x, y);
        }) as Box<dyn FnMut(web_sys::TouchEvent)>);
        add_listener(&canvas, "touchstart", &closure)?;
        closure.forget();
    }

    {
        let sketch = Rc::clone(sketch);
        let closure = Closure::wrap(Box::new(move |_event: web_sys::TouchEvent| {
            sketch.borrow_mut().on_touch_end();
        }) as Box<dyn FnMut(web_sys::TouchEvent)>);
        add_listener(&canvas, "touchend", &closure)?;
        closure.forget();
    }

    Ok(())
}

// --- Animation loop ---

/// Cancellation flag for a running animation loop. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
}

impl AnimationHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the loop before its next frame. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Schedules one animation frame; returns the browser's request id.
fn schedule_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, SketchError> {
    web_sys::window()
        .ok_or(SketchError::WindowUnavailable)?
        .request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(|err| surface_err("request_animation_frame", &err))
}

/// Runs `frame` once per animation frame until the returned handle is
/// cancelled.
///
/// The first call happens on the next scheduled frame, never synchronously.
/// `frame` receives the browser's frame timestamp in milliseconds. After
/// cancellation the callback drops itself, so the loop holds no references
/// past its final frame.
///
/// # Errors
///
/// Returns [`SketchError::WindowUnavailable`] outside a browser and
/// [`SketchError::Surface`] when the first frame cannot be scheduled. A
/// scheduling failure on a later frame stops the loop and is logged.
pub fn start_animation(
    mut frame: impl FnMut(f64) + 'static,
) -> Result<AnimationHandle, SketchError> {
    let handle = AnimationHandle::new();
    let handle_for_cb = handle.clone();

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);

    let cb = Closure::wrap(Box::new(move |timestamp: f64| {
        if handle_for_cb.is_cancelled() {
            tracing::debug!("animation loop cancelled");
            holder_for_cb.borrow_mut().take();
            return;
        }
        frame(timestamp);
        let guard = holder_for_cb.borrow();
        if let Some(cb) = guard.as_ref() {
            if let Err(err) = schedule_frame(cb) {
                tracing::warn!(error = %err, "frame scheduling failed; animation loop stopped");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    schedule_frame(&cb)?;
    *holder.borrow_mut() = Some(cb);

    tracing::debug!("animation loop started");
    Ok(handle)
}
