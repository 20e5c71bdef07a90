#![allow(clippy::float_cmp)]

use super::*;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vector_approx_eq(a: Vector, b: Vector) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Construction ---

#[test]
fn new_sets_components() {
    let v = Vector::new(3.0, 4.0);
    assert_eq!(v.x, 3.0);
    assert_eq!(v.y, 4.0);
}

#[test]
fn default_is_origin() {
    assert_eq!(Vector::default(), Vector::new(0.0, 0.0));
}

#[test]
fn set_overwrites_components() {
    let mut v = Vector::new(1.0, 2.0);
    v.set(-5.0, 6.5);
    assert_eq!(v, Vector::new(-5.0, 6.5));
}

#[test]
fn copy_is_independent_of_original() {
    let mut v = Vector::new(1.0, 2.0);
    let snapshot = v;
    v.set(9.0, 9.0);
    assert_eq!(snapshot, Vector::new(1.0, 2.0));
}

// --- In-place arithmetic ---

#[test]
fn add_in_place() {
    let mut v = Vector::new(1.0, 2.0);
    v.add(Vector::new(3.0, -1.0));
    assert_eq!(v, Vector::new(4.0, 1.0));
}

#[test]
fn sub_in_place() {
    let mut v = Vector::new(4.0, 1.0);
    v.sub(Vector::new(3.0, -1.0));
    assert_eq!(v, Vector::new(1.0, 2.0));
}

#[test]
fn add_then_sub_restores_original() {
    let original = Vector::new(0.3, -7.1);
    let other = Vector::new(12.25, 4.5);
    let mut v = original;
    v.add(other);
    v.sub(other);
    assert!(vector_approx_eq(v, original));
}

#[test]
fn mult_scales_both_components() {
    let mut v = Vector::new(2.0, -3.0);
    v.mult(2.5);
    assert_eq!(v, Vector::new(5.0, -7.5));
}

#[test]
fn div_scales_both_components() {
    let mut v = Vector::new(5.0, -7.5);
    v.div(2.5);
    assert_eq!(v, Vector::new(2.0, -3.0));
}

#[test]
fn div_by_zero_yields_non_finite_components() {
    let mut v = Vector::new(1.0, 0.0);
    v.div(0.0);
    assert!(v.x.is_infinite());
    assert!(v.y.is_nan());
}

// --- Combining operators ---

#[test]
fn operator_add_returns_new_vector() {
    let a = Vector::new(1.0, 2.0);
    let b = Vector::new(3.0, 4.0);
    assert_eq!(a + b, Vector::new(4.0, 6.0));
    assert_eq!(a, Vector::new(1.0, 2.0));
}

#[test]
fn operator_add_commutes() {
    let a = Vector::new(0.1, -2.75);
    let b = Vector::new(13.5, 8.25);
    assert_eq!(a + b, b + a);
}

#[test]
fn operator_sub_returns_new_vector() {
    let a = Vector::new(1.0, 2.0);
    let b = Vector::new(3.0, 5.0);
    assert_eq!(b - a, Vector::new(2.0, 3.0));
}

#[test]
fn operator_mul_scales() {
    assert_eq!(Vector::new(2.0, -3.0) * 2.0, Vector::new(4.0, -6.0));
}

#[test]
fn operator_div_scales() {
    assert_eq!(Vector::new(4.0, -6.0) / 2.0, Vector::new(2.0, -3.0));
}

#[test]
fn operator_div_by_zero_yields_non_finite() {
    let v = Vector::new(-1.0, 1.0) / 0.0;
    assert!(v.x.is_infinite());
    assert!(v.y.is_infinite());
}

// --- Magnitude ---

#[test]
fn mag_of_3_4_is_5() {
    assert_eq!(Vector::new(3.0, 4.0).mag(), 5.0);
}

#[test]
fn mag_sq_avoids_the_square_root() {
    assert_eq!(Vector::new(3.0, 4.0).mag_sq(), 25.0);
}

#[test]
fn mag_of_origin_is_zero() {
    assert_eq!(Vector::new(0.0, 0.0).mag(), 0.0);
}

// --- normalize ---

#[test]
fn normalize_produces_unit_length() {
    let mut v = Vector::new(3.0, 4.0);
    v.normalize();
    assert!(vector_approx_eq(v, Vector::new(0.6, 0.8)));
    assert!(approx_eq(v.mag(), 1.0));
}

#[test]
fn normalize_zero_vector_is_a_no_op() {
    let mut v = Vector::new(0.0, 0.0);
    v.normalize();
    assert_eq!(v, Vector::new(0.0, 0.0));
}

#[test]
fn normalize_preserves_direction() {
    let mut v = Vector::new(-2.0, -2.0);
    let heading_before = v.heading();
    v.normalize();
    assert!(approx_eq(v.heading(), heading_before));
}

// --- limit ---

#[test]
fn limit_caps_an_over_long_vector() {
    let mut v = Vector::new(3.0, 4.0);
    v.limit(2.5);
    assert!(approx_eq(v.mag(), 2.5));
}

#[test]
fn limit_leaves_a_short_vector_untouched() {
    let mut v = Vector::new(3.0, 4.0);
    v.limit(10.0);
    assert_eq!(v, Vector::new(3.0, 4.0));
}

#[test]
fn limit_at_exact_magnitude_is_untouched() {
    let mut v = Vector::new(3.0, 4.0);
    v.limit(5.0);
    assert_eq!(v, Vector::new(3.0, 4.0));
}

#[test]
fn limit_never_increases_magnitude() {
    let mut v = Vector::new(0.3, 0.4);
    let before = v.mag();
    v.limit(100.0);
    assert!(v.mag() <= before + EPSILON);
}

// --- set_mag ---

#[test]
fn set_mag_scales_to_requested_length() {
    let mut v = Vector::new(3.0, 4.0);
    v.set_mag(10.0);
    assert!(vector_approx_eq(v, Vector::new(6.0, 8.0)));
}

#[test]
fn set_mag_on_zero_vector_stays_zero() {
    let mut v = Vector::new(0.0, 0.0);
    v.set_mag(10.0);
    assert_eq!(v, Vector::new(0.0, 0.0));
}

// --- dot / dist ---

#[test]
fn dot_is_exact_componentwise_arithmetic() {
    assert_eq!(Vector::new(2.0, 3.0).dot(Vector::new(4.0, 5.0)), 23.0);
}

#[test]
fn dot_is_not_clamped() {
    // Parallel non-unit vectors: the raw product exceeds 1.
    assert_eq!(Vector::new(2.0, 0.0).dot(Vector::new(3.0, 0.0)), 6.0);
}

#[test]
fn dot_of_orthogonal_vectors_is_zero() {
    assert_eq!(Vector::new(1.0, 0.0).dot(Vector::new(0.0, 5.0)), 0.0);
}

#[test]
fn dist_is_euclidean() {
    let a = Vector::new(1.0, 1.0);
    let b = Vector::new(4.0, 5.0);
    assert_eq!(a.dist(b), 5.0);
}

#[test]
fn dist_is_symmetric() {
    let a = Vector::new(-2.0, 7.0);
    let b = Vector::new(3.5, -1.25);
    assert_eq!(a.dist(b), b.dist(a));
}

// --- heading ---

#[test]
fn heading_along_positive_x_is_zero() {
    assert_eq!(Vector::new(5.0, 0.0).heading(), 0.0);
}

#[test]
fn heading_along_positive_y_is_quarter_turn() {
    assert!(approx_eq(Vector::new(0.0, 2.0).heading(), FRAC_PI_2));
}

#[test]
fn heading_along_negative_x_is_half_turn() {
    assert!(approx_eq(Vector::new(-1.0, 0.0).heading(), PI));
}

// --- rotate_about ---

#[test]
fn rotate_about_origin_quarter_turn() {
    let mut v = Vector::new(1.0, 0.0);
    v.rotate_about(Vector::new(0.0, 0.0), FRAC_PI_2);
    assert!(vector_approx_eq(v, Vector::new(0.0, 1.0)));
}

#[test]
fn rotate_about_offset_base() {
    let mut v = Vector::new(2.0, 1.0);
    v.rotate_about(Vector::new(1.0, 1.0), FRAC_PI_2);
    assert!(vector_approx_eq(v, Vector::new(1.0, 2.0)));
}

#[test]
fn rotate_about_preserves_distance_to_base() {
    let base = Vector::new(-3.0, 2.0);
    let mut v = Vector::new(1.0, 5.0);
    let before = v.dist(base);
    v.rotate_about(base, 1.234);
    assert!(approx_eq(v.dist(base), before));
}

#[test]
fn rotate_about_full_turn_returns_to_start() {
    let mut v = Vector::new(3.0, -4.0);
    v.rotate_about(Vector::new(1.0, 1.0), TAU);
    assert!(vector_approx_eq(v, Vector::new(3.0, -4.0)));
}

// --- angle_between ---

#[test]
fn angle_between_orthogonal_vectors_is_quarter_turn() {
    let a = Vector::new(1.0, 0.0);
    let b = Vector::new(0.0, 3.0);
    assert!(approx_eq(a.angle_between(b), FRAC_PI_2));
}

#[test]
fn angle_between_parallel_vectors_is_zero() {
    // Magnitudes 5 and 10 are exact, so the cosine is exactly 1.
    let a = Vector::new(3.0, 4.0);
    let b = Vector::new(6.0, 8.0);
    assert_eq!(a.angle_between(b), 0.0);
}

#[test]
fn angle_between_opposite_vectors_is_half_turn() {
    let a = Vector::new(3.0, 4.0);
    let b = Vector::new(-6.0, -8.0);
    assert!(approx_eq(a.angle_between(b), PI));
}

#[test]
fn angle_between_clamps_rounding_noise_instead_of_nan() {
    // Parallel vectors whose magnitude product is inexact; without the clamp
    // a cosine rounded just past 1.0 would make acos return NaN.
    let a = Vector::new(1.0, 2.0);
    let b = Vector::new(2.0, 4.0);
    let angle = a.angle_between(b);
    assert!(!angle.is_nan());
    assert!(angle.abs() < 1e-7);
}

#[test]
fn angle_between_is_symmetric() {
    let a = Vector::new(3.0, 1.0);
    let b = Vector::new(-2.0, 5.0);
    assert_eq!(a.angle_between(b), b.angle_between(a));
}

#[test]
fn angle_between_stays_within_zero_and_pi() {
    let vectors = [
        Vector::new(1.0, 0.0),
        Vector::new(-1.0, 0.0),
        Vector::new(0.0, 1.0),
        Vector::new(3.0, -4.0),
        Vector::new(-0.5, -0.5),
    ];
    for a in vectors {
        for b in vectors {
            let angle = a.angle_between(b);
            assert!((0.0..=PI).contains(&angle), "angle {angle} out of range");
        }
    }
}
