//! Immediate-mode 2d drawing facade for the browser canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It wraps a
//! host rendering surface behind a small processing-style API: draw calls
//! issue immediately, style and transform state live in a save/restore stack
//! owned by the facade, and pointer input is captured as edge-triggered
//! state the sketch polls each frame. Everything except [`dom`] is
//! host-agnostic and tests natively against a command-recording surface.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`sketch`] | Drawing facade: primitives, style stack, input queries |
//! | [`surface`] | [`surface::RenderSurface`] trait the facade draws through |
//! | [`dom`] | Canvas-2d surface, event wiring, and the animation loop |
//! | [`factory`] | Lazy one-instance factory for shared sketches |
//! | [`record`] | Command-recording surface for tests |
//! | [`input`] | Edge-triggered pointer state |
//! | [`style`] | Saved style frame (colors, line width, transform) |
//! | [`transform`] | 2d affine matrix mirroring the surface transform |
//! | [`vector`] | 2d vector math for sketch code |
//! | [`util`] | Random ranges and value clamping |
//! | [`error`] | Crate error type |
//! | [`consts`] | Default style values |

pub mod consts;
pub mod dom;
pub mod error;
pub mod factory;
pub mod input;
pub mod record;
pub mod sketch;
pub mod style;
pub mod surface;
pub mod transform;
pub mod util;
pub mod vector;
