//! Lazy one-instance factory for [`Sketch`].
//!
//! The factory builds a sketch on first request and hands the same shared
//! instance to every later caller. Handing out `Rc<RefCell<_>>` lets event
//! closures and the animation loop hold the sketch at the same time.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SketchError;
use crate::sketch::Sketch;
use crate::surface::RenderSurface;

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

/// Shared handle to a factory-built sketch.
pub type SharedSketch<S> = Rc<RefCell<Sketch<S>>>;

/// Builds at most one [`Sketch`] and shares it.
#[derive(Debug)]
pub struct SketchFactory<S: RenderSurface> {
    instance: Option<SharedSketch<S>>,
}

impl<S: RenderSurface> Default for SketchFactory<S> {
    fn default() -> Self {
        Self { instance: None }
    }
}

impl<S: RenderSurface> SketchFactory<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared sketch, building it on the first call.
    ///
    /// Later calls return the existing instance and ignore the requested
    /// dimensions; a mismatch is logged, never an error. `make_surface` runs
    /// only when a sketch is actually built.
    ///
    /// # Errors
    ///
    /// Propagates the error when `make_surface` fails. The factory stays
    /// empty in that case, so a later call can try again.
    pub fn instance(
        &mut self,
        width: u32,
        height: u32,
        make_surface: impl FnOnce() -> Result<S, SketchError>,
    ) -> Result<SharedSketch<S>, SketchError> {
        if let Some(existing) = &self.instance {
            let (existing_width, existing_height) = {
                let sketch = existing.borrow();
                (sketch.width(), sketch.height())
            };
            if existing_width != width || existing_height != height {
                tracing::warn!(
                    existing_width,
                    existing_height,
                    requested_width = width,
                    requested_height = height,
                    "sketch already created; requested dimensions ignored"
                );
            }
            return Ok(Rc::clone(existing));
        }

        let sketch = Rc::new(RefCell::new(Sketch::new(make_surface()?, width, height)));
        self.instance = Some(Rc::clone(&sketch));
        tracing::debug!(width, height, "sketch created");
        Ok(sketch)
    }

    /// Returns the sketch if one has been built.
    #[must_use]
    pub fn get(&self) -> Option<SharedSketch<S>> {
        self.instance.as_ref().map(Rc::clone)
    }
}
