//! Single-color transforms that move one HSL coordinate.
//!
//! Every operator keeps the two coordinates it does not touch, and keeps
//! the input's alpha.

use huekit_color::Color;

/// Darken by scaling lightness: `L' = L × (1 − pct)`.
///
/// `pct` is clamped to [0, 1], so `1.0` yields black and `0.0` the input.
#[must_use]
pub fn darker(color: Color, pct: f64) -> Color {
    let pct = clamp_pct(pct);
    let hsl = color.to_hsl();
    color.with_hsl(hsl.with_lightness(hsl.l * (1.0 - pct)))
}

/// Lighten by covering `pct` of the remaining headroom:
/// `L' = L + (1 − L) × pct`.
///
/// `pct` is clamped to [0, 1], so `1.0` yields white and `0.0` the input.
#[must_use]
pub fn lighter(color: Color, pct: f64) -> Color {
    let pct = clamp_pct(pct);
    let hsl = color.to_hsl();
    color.with_hsl(hsl.with_lightness((1.0 - hsl.l).mul_add(pct, hsl.l)))
}

/// Rotate the hue by `degrees`, wrapping in both directions.
#[must_use]
pub fn hue_offset(color: Color, degrees: f64) -> Color {
    color.with_hsl(color.to_hsl().rotate(degrees))
}

/// The color on the opposite side of the hue wheel.
#[must_use]
pub fn complementary(color: Color) -> Color {
    hue_offset(color, 180.0)
}

/// Which half of the hue wheel a color sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    /// Red, orange and yellow side: hue in [0°, 90°] ∪ (270°, 360°).
    Warm,
    /// Green, cyan and blue side: hue in (90°, 270°].
    Cool,
}

impl Temperature {
    /// Classify a color by hue. Grays have hue 0 and are warm.
    #[must_use]
    pub fn of(color: Color) -> Self {
        let h = color.to_hsl().h;
        if h <= 90.0 || h > 270.0 {
            Self::Warm
        } else {
            Self::Cool
        }
    }
}

/// Which half of the hue wheel the color sits on.
#[must_use]
pub fn temperature(color: Color) -> Temperature {
    Temperature::of(color)
}

/// Whether the color is on the warm half of the hue wheel.
#[must_use]
pub fn is_warm(color: Color) -> bool {
    temperature(color) == Temperature::Warm
}

/// Whether the color is on the cool half. Always `!is_warm(color)`.
#[must_use]
pub fn is_cool(color: Color) -> bool {
    temperature(color) == Temperature::Cool
}

fn clamp_pct(pct: f64) -> f64 {
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 1.0) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
