//! Headless surface backend that records commands instead of producing
//! pixels.
//!
//! Tests drive a [`Sketch`](crate::sketch::Sketch) over a
//! [`RecordingSurface`] and assert on the exact command sequence, so facade
//! behavior (eager style mirroring, stack restores, path shapes) is checked
//! without a browser.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use crate::error::SketchError;
use crate::surface::RenderSurface;
use crate::transform::Transform;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fill color changed.
    SetFillColor(String),
    /// Stroke color changed.
    SetStrokeColor(String),
    /// Stroke width changed.
    SetLineWidth(f64),
    /// Rectangle filled with the current fill color.
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    /// Rectangle outlined with the current stroke.
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    /// New path started.
    BeginPath,
    /// Path cursor moved without a segment.
    MoveTo { x: f64, y: f64 },
    /// Straight segment emitted.
    LineTo { x: f64, y: f64 },
    /// Circular arc emitted; angles in radians.
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    /// Current subpath closed.
    ClosePath,
    /// Current path stroked.
    StrokePath,
    /// Current path filled.
    FillPath,
    /// Translation composed onto the transform.
    Translate { dx: f64, dy: f64 },
    /// Rotation composed onto the transform; angle in radians.
    Rotate { angle: f64 },
    /// Transform replaced wholesale.
    SetTransform(Transform),
}

/// In-memory [`RenderSurface`] that appends every call to a command list.
///
/// Mirrors the `Canvas2D` failure mode for arcs: a negative radius is
/// rejected and records nothing. All other calls always succeed.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<Command>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in issue order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drain the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSurface for RecordingSurface {
    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(Command::SetFillColor(color.to_owned()));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.commands.push(Command::SetStrokeColor(color.to_owned()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(Command::SetLineWidth(width));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Command::FillRect { x, y, width, height });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Command::StrokeRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::LineTo { x, y });
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), SketchError> {
        if radius < 0.0 {
            return Err(SketchError::Surface {
                op: "arc",
                detail: format!("negative radius {radius}"),
            });
        }
        self.commands.push(Command::Arc { x, y, radius, start_angle, end_angle });
        Ok(())
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn stroke_path(&mut self) {
        self.commands.push(Command::StrokePath);
    }

    fn fill_path(&mut self) {
        self.commands.push(Command::FillPath);
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), SketchError> {
        self.commands.push(Command::Translate { dx, dy });
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<(), SketchError> {
        self.commands.push(Command::Rotate { angle });
        Ok(())
    }

    fn set_transform(&mut self, transform: Transform) -> Result<(), SketchError> {
        self.commands.push(Command::SetTransform(transform));
        Ok(())
    }
}
