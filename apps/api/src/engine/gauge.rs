//! Circular gauge geometry — arc parameters for the rating progress ring.
//!
//! The renderer draws the ring as an SVG circle with `stroke-dasharray` set to
//! the circumference and `stroke-dashoffset` shrinking as the percentage
//! grows. Animation timing is a rendering concern and does not live here.

use serde::{Deserialize, Serialize};

use crate::engine::normalize::normalize;

/// The three supported gauge size variants, matching the dashboard's card set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl GaugeSize {
    /// Outer diameter of the gauge circle, in pixels.
    pub fn diameter(self) -> f64 {
        match self {
            GaugeSize::Sm => 60.0,
            GaugeSize::Md => 80.0,
            GaugeSize::Lg => 100.0,
        }
    }

    /// Stroke width of the progress arc, in pixels.
    pub fn stroke_width(self) -> f64 {
        match self {
            GaugeSize::Sm => 4.0,
            GaugeSize::Md => 6.0,
            GaugeSize::Lg => 8.0,
        }
    }

    /// Resolves a size token (`sm`/`md`/`lg`). Unrecognized tokens fall back
    /// to the default medium size rather than failing.
    pub fn from_key(key: &str) -> GaugeSize {
        match key {
            "sm" => GaugeSize::Sm,
            "md" => GaugeSize::Md,
            "lg" => GaugeSize::Lg,
            _ => GaugeSize::default(),
        }
    }
}

/// Arc-drawing parameters for one gauge. Derived, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeGeometry {
    pub radius: f64,
    pub circumference: f64,
    /// Stroke dash offset: equals `circumference` at 0% and `0` at 100%.
    pub dash_offset: f64,
}

/// Computes the progress-arc geometry for a rating under the given range.
pub fn gauge_geometry(rating: f64, min: f64, max: f64, size: GaugeSize) -> GaugeGeometry {
    let radius = (size.diameter() - size.stroke_width()) / 2.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let percentage = normalize(rating, min, max);
    let dash_offset = circumference - (percentage / 100.0) * circumference;

    GaugeGeometry {
        radius,
        circumference,
        dash_offset,
    }
}
