//! Small numeric helpers for sketch callbacks.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

/// Random integer-valued `f64`, uniform over `[lo, hi)`.
///
/// A uniform draw scaled into the range, then floored: `random(0.0, 3.0)`
/// yields `0.0`, `1.0`, or `2.0`.
#[must_use]
pub fn random(lo: f64, hi: f64) -> f64 {
    (fastrand::f64() * (hi - lo) + lo).floor()
}

/// Clamp `value` into `[lo, hi]`.
///
/// A min/max chain rather than `f64::clamp`, so inverted bounds do not
/// panic: the upper bound is applied last and wins
/// (`constrain(3.0, 5.0, 1.0)` is `1.0`).
#[must_use]
pub fn constrain(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
