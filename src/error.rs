//! Precondition failures raised by [`crate::plan`] before any computation
//! begins. Internal stages trust their inputs once validation has passed
//! and never return an error of their own.

use thiserror::Error;

/// A precondition violation in a [`crate::PlanRequest`].
///
/// All variants are raised once, at the entry to `plan`/`plan_with_config`.
/// There are no retries and no partial results: either a complete
/// [`crate::PlanResult`] comes back, or one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The wall's `width` or `height` is not strictly positive.
    #[error("invalid wall dimensions: width={width}, height={height} (both must be > 0)")]
    InvalidDimensions {
        /// The offending wall width.
        width: f64,
        /// The offending wall height.
        height: f64,
    },

    /// The tool's width/overlap combination cannot produce a positive pitch.
    #[error(
        "invalid tool spec: width={width}, overlap_margin={overlap_margin} \
         (require width > 0, overlap_margin >= 0, width > overlap_margin)"
    )]
    InvalidTool {
        /// The offending tool width.
        width: f64,
        /// The offending overlap margin.
        overlap_margin: f64,
    },

    /// An obstacle rectangle is degenerate or falls outside the wall.
    #[error("invalid obstacle at index {index}: {reason}")]
    InvalidObstacle {
        /// Index of the offending obstacle in `PlanRequest::obstacles`.
        index: usize,
        /// Human-readable description of the violated constraint.
        reason: String,
    },
}
