//! Rating color mapping — converts a rating percentage into rendering-ready
//! color strings via HSL→RGB interpolation.
//!
//! The hue sweeps from red (0°) at 0% through yellow (60°) to green (120°) at
//! 100%. Saturation is fixed; lightness varies per token purpose so a single
//! rating yields a coherent scheme/background/border/text set.

use serde::{Deserialize, Serialize};

use crate::engine::normalize::normalize;

/// Fixed saturation for all rating colors (percent).
pub const SATURATION: f64 = 70.0;

const SCHEME_LIGHTNESS: f64 = 50.0;
const BACKGROUND_LIGHTNESS: f64 = 15.0;
const BORDER_LIGHTNESS: f64 = 40.0;
const TEXT_LIGHTNESS: f64 = 25.0;

const BACKGROUND_ALPHA: &str = "0.1";
const BORDER_ALPHA: &str = "0.3";
const TEXT_ALPHA: &str = "1";

/// Rendering-ready color strings derived from a single rating.
///
/// `scheme` is a 6-digit lowercase hex color; the other three are
/// `rgba(r, g, b, a)` strings with fixed alphas. All four share the same hue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingColors {
    pub background: String,
    pub border: String,
    pub text: String,
    pub scheme: String,
}

/// Maps a rating to its four color tokens under the given range.
///
/// Deterministic and total: malformed ratings are coerced by
/// [`normalize`] before the hue is derived.
pub fn rating_colors(rating: f64, min: f64, max: f64) -> RatingColors {
    let percentage = normalize(rating, min, max);
    // 0% = red (0°), 50% = yellow (60°), 100% = green (120°).
    let hue = percentage / 100.0 * 120.0;

    let (r, g, b) = hsl_to_rgb(hue, SATURATION, SCHEME_LIGHTNESS);
    let scheme = rgb_to_hex(r, g, b);

    let (r, g, b) = hsl_to_rgb(hue, SATURATION, BACKGROUND_LIGHTNESS);
    let background = format!("rgba({r}, {g}, {b}, {BACKGROUND_ALPHA})");

    let (r, g, b) = hsl_to_rgb(hue, SATURATION, BORDER_LIGHTNESS);
    let border = format!("rgba({r}, {g}, {b}, {BORDER_ALPHA})");

    let (r, g, b) = hsl_to_rgb(hue, SATURATION, TEXT_LIGHTNESS);
    let text = format!("rgba({r}, {g}, {b}, {TEXT_ALPHA})");

    RatingColors {
        background,
        border,
        text,
        scheme,
    }
}

/// Converts HSL (hue 0–360, saturation/lightness 0–100) to an RGB triple.
///
/// Standard piecewise formula: each channel samples the hue rotation at
/// `h + 1/3`, `h`, `h - 1/3` (wrapped into `[0, 1]`), interpolating between
/// the two chroma bounds `p` and `q`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    (to_channel(r), to_channel(g), to_channel(b))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

/// Renders an RGB triple as a lowercase `#rrggbb` hex string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_grayscale_when_saturation_zero() {
        assert_eq!(hsl_to_rgb(120.0, 0.0, 50.0), (128, 128, 128));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 100.0), (255, 255, 255));
    }

    #[test]
    fn test_hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0, 0, 255));
    }

    #[test]
    fn test_rgb_to_hex_is_lowercase_six_digits() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(217, 38, 38), "#d92626");
    }

    #[test]
    fn test_minimum_rating_is_red() {
        // 0% → hue 0° at (70, 50) → rgb(217, 38, 38).
        let colors = rating_colors(1.0, 1.0, 10.0);
        assert_eq!(colors.scheme, "#d92626");
    }

    #[test]
    fn test_midpoint_rating_is_yellow() {
        // 50% → hue 60° at (70, 50) → rgb(217, 217, 38).
        let colors = rating_colors(5.5, 1.0, 10.0);
        assert_eq!(colors.scheme, "#d9d926");
    }

    #[test]
    fn test_maximum_rating_is_green() {
        // 100% → hue 120° at (70, 50) → rgb(38, 217, 38).
        let colors = rating_colors(10.0, 1.0, 10.0);
        assert_eq!(colors.scheme, "#26d926");
    }

    #[test]
    fn test_scheme_is_always_valid_hex() {
        for rating in [-5.0, 0.0, 1.0, 4.2, 8.0, 10.0, 99.0, f64::NAN] {
            let colors = rating_colors(rating, 1.0, 10.0);
            assert_eq!(colors.scheme.len(), 7);
            assert!(colors.scheme.starts_with('#'));
            assert!(colors.scheme[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_token_alphas_are_fixed() {
        let colors = rating_colors(7.0, 1.0, 10.0);
        assert!(colors.background.starts_with("rgba("));
        assert!(colors.background.ends_with(", 0.1)"));
        assert!(colors.border.ends_with(", 0.3)"));
        assert!(colors.text.ends_with(", 1)"));
    }

    #[test]
    fn test_out_of_range_rating_saturates_at_green() {
        assert_eq!(
            rating_colors(42.0, 1.0, 10.0),
            rating_colors(10.0, 1.0, 10.0)
        );
    }
}
