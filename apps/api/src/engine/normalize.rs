//! Rating range normalization — rescales a raw rating into a 0–100 percentage
//! relative to the configured rating range.
//!
//! This is the single source of truth for percentage computation: the color
//! mapper, the gauge calculator, and the ranking engine all go through
//! [`normalize`]. The function is total — any input, however malformed,
//! produces a defined value in `[0, 100]`.

use serde::{Deserialize, Serialize};

/// Inclusive rating range applied to all candidates, sourced from config.
///
/// `min < max` is expected but not enforced: the clamp step in [`normalize`]
/// keeps the percentage inside `[0, 100]` even for an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

impl Default for RatingRange {
    /// Fallback range when no configuration is available.
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 10.0,
        }
    }
}

impl RatingRange {
    /// Human-readable range description, e.g. `"1 to 10"`.
    pub fn description(&self) -> String {
        format!("{} to {}", self.min, self.max)
    }

    /// Forces a rating into the range. Used when post-processing agent output,
    /// not by [`normalize`] (which clamps the derived fraction instead).
    pub fn clamp(&self, rating: f64) -> f64 {
        rating.max(self.min).min(self.max)
    }
}

/// Rescales `rating` into a percentage of the `[min, max]` range.
///
/// - A non-finite rating is coerced to `0.0` before rescaling.
/// - `max == min` is a degenerate range and yields `0.0` by policy, never a
///   division by zero.
/// - The result is clamped to `[0, 100]` even when `rating` falls outside the
///   range.
pub fn normalize(rating: f64, min: f64, max: f64) -> f64 {
    let rating = if rating.is_finite() { rating } else { 0.0 };

    if max == min {
        return 0.0;
    }

    ((rating - min) / (max - min)).clamp(0.0, 1.0) * 100.0
}
