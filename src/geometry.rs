//! Scalar and point helpers shared by every planner stage.
//!
//! All planner geometry lives in a continuous 2D plane with the origin at
//! a wall's bottom-left corner. A [`Point`] is a thin alias over
//! [`glam::DVec2`] so the planner gets vectorized distance math for free,
//! without carrying the rest of the Bevy math ecosystem this crate has no
//! use for.

use glam::DVec2;

/// A point, or equivalently a 2D displacement vector, in wall-plane units.
pub type Point = DVec2;

/// Default floating-point comparison tolerance, per spec: a small fixed
/// absolute value rather than one scaled to the wall's characteristic
/// length. Exposed as a constant for callers that don't need a custom
/// [`crate::PlannerConfig`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// `true` if `a` and `b` are within `epsilon` of each other.
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// `true` if `a <= b`, allowing for `epsilon` of floating-point noise.
#[inline]
#[must_use]
pub fn approx_le(a: f64, b: f64, epsilon: f64) -> bool {
    a <= b + epsilon
}

/// `true` if `a >= b`, allowing for `epsilon` of floating-point noise.
#[inline]
#[must_use]
pub fn approx_ge(a: f64, b: f64, epsilon: f64) -> bool {
    a >= b - epsilon
}

/// `true` if `a < b`, once `epsilon` of floating-point noise is discounted.
#[inline]
#[must_use]
pub fn approx_lt(a: f64, b: f64, epsilon: f64) -> bool {
    a < b - epsilon
}

/// `true` if `a > b`, once `epsilon` of floating-point noise is discounted.
#[inline]
#[must_use]
pub fn approx_gt(a: f64, b: f64, epsilon: f64) -> bool {
    a > b + epsilon
}
