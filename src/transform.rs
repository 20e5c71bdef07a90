//! 2D affine transforms in the `Canvas2D` `(a b c d e f)` matrix form.
//!
//! The facade mirrors every `translate`/`rotate` it sends to the surface into
//! one of these, so a saved style frame can restore the exact transform with
//! a single absolute `set_transform` call.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

/// An affine transform mapping `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
///
/// Component names follow the `Canvas2D` `setTransform(a, b, c, d, e, f)`
/// convention: `(a, b)` is the image of the x axis, `(c, d)` the image of the
/// y axis, `(e, f)` the translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    /// Compose a translation by `(dx, dy)` onto this transform.
    ///
    /// Matches `Canvas2D` `translate`: the shift happens in the local
    /// (already-transformed) coordinate space, so it is affected by any
    /// rotation composed earlier.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            e: self.a * dx + self.c * dy + self.e,
            f: self.b * dx + self.d * dy + self.f,
            ..self
        }
    }

    /// Compose a rotation by `angle` radians onto this transform.
    ///
    /// Matches `Canvas2D` `rotate`: the rotation pivots on the current local
    /// origin, positive angles turning the x axis toward the y axis.
    #[must_use]
    pub fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    /// Map a point through this transform.
    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}
