//! 2D vector math: arithmetic, magnitude, headings, and rotation.

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

/// A 2D vector (or point) with `f64` components.
///
/// Named methods mutate the receiver in place; the `std::ops` impls combine
/// values into new vectors (`a + b`, `a - b`, `v * 2.0`, `v / 2.0`). The type
/// is `Copy`, so taking a snapshot before mutating is free.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrite both components.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Add `other` componentwise, in place.
    pub fn add(&mut self, other: Vector) {
        self.x += other.x;
        self.y += other.y;
    }

    /// Subtract `other` componentwise, in place.
    pub fn sub(&mut self, other: Vector) {
        self.x -= other.x;
        self.y -= other.y;
    }

    /// Scale both components by `n`, in place.
    pub fn mult(&mut self, n: f64) {
        self.x *= n;
        self.y *= n;
    }

    /// Divide both components by `n`, in place.
    ///
    /// Division by zero is not guarded; the components become non-finite,
    /// matching IEEE semantics. Callers needing strict arithmetic validate
    /// `n` themselves.
    pub fn div(&mut self, n: f64) {
        self.x /= n;
        self.y /= n;
    }

    /// Squared magnitude. Cheaper than [`mag`](Self::mag) when only comparing
    /// lengths.
    #[must_use]
    pub fn mag_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean magnitude.
    #[must_use]
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// Scale to unit length. A zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let len = self.mag();
        if len > 0.0 {
            self.div(len);
        }
    }

    /// Clamp the magnitude to at most `max`, preserving direction.
    pub fn limit(&mut self, max: f64) {
        if self.mag_sq() > max * max {
            self.normalize();
            self.mult(max);
        }
    }

    /// Set the magnitude to `magnitude`, preserving direction. A zero vector
    /// stays zero.
    pub fn set_mag(&mut self, magnitude: f64) {
        self.normalize();
        self.mult(magnitude);
    }

    /// Dot product. Exact componentwise arithmetic, no clamping.
    #[must_use]
    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn dist(&self, other: Vector) -> f64 {
        (other - *self).mag()
    }

    /// Angle of this vector from the positive x axis, in radians.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rotate in place by `angle` radians around `base`.
    pub fn rotate_about(&mut self, base: Vector, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - base.x;
        let dy = self.y - base.y;
        self.x = base.x + dx * cos - dy * sin;
        self.y = base.y + dx * sin + dy * cos;
    }

    /// Unsigned angle between this vector and `other`, in `[0, π]` radians.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, so rounding on
    /// near-parallel vectors cannot produce NaN.
    #[must_use]
    pub fn angle_between(&self, other: Vector) -> f64 {
        let cosine = self.dot(other) / (self.mag() * other.mag());
        cosine.clamp(-1.0, 1.0).acos()
    }
}

// The trait paths are written out rather than imported: the test module's
// `use super::*` would otherwise pull the trait names into scope and make
// `v.add(w)` resolve to the by-value operator method instead of the in-place
// inherent method.
impl std::ops::Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, n: f64) -> Vector {
        Vector::new(self.x * n, self.y * n)
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Vector;

    /// Division by zero is not guarded; see [`Vector::div`].
    fn div(self, n: f64) -> Vector {
        Vector::new(self.x / n, self.y / n)
    }
}
