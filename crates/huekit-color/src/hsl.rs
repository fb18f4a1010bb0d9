// SPDX-License-Identifier: MIT
//
// RGB ↔ HSL conversion.
//
// Single-character variable names follow the usual color-science notation.
#![allow(clippy::many_single_char_names)]
//
// Forward: normalize channels to [0, 1], take max/min/delta, then
//
//   L = (max + min) / 2
//   S = 0                          if delta = 0
//       delta / (1 − |2L − 1|)     otherwise
//   H = 60° × sector position of the max channel, wrapped into [0, 360)
//
// Inverse: chroma C = (1 − |2L − 1|) × S, secondary X from the position
// inside the 60° sector, then add the lightness match m = L − C/2.
//
// Both directions are total. Gray input yields H = 0 and S = 0; hue is
// undefined there and zero is the convention.

use crate::color::{Color, to_u8};

/// A color in the perceptual hue/saturation/lightness model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0 to 360.0 (exclusive).
    pub h: f64,

    /// Saturation, 0.0 (gray) to 1.0 (fully saturated).
    pub s: f64,

    /// Lightness, 0.0 (black) to 1.0 (white).
    pub l: f64,
}

impl Hsl {
    /// Create an HSL triple. Hue is wrapped into [0, 360); saturation and
    /// lightness are clamped to [0, 1].
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
        }
    }

    /// Derive the HSL view of an 8-bit color.
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let (r, g, b) = color.to_srgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if color.is_achromatic() {
            return Self { h: 0.0, s: 0.0, l };
        }

        let delta = max - min;
        let s = clamp_unit(delta / (1.0 - 2.0f64.mul_add(l, -1.0).abs()));

        let sector = if color.r >= color.g && color.r >= color.b {
            (g - b) / delta
        } else if color.g >= color.b {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            h: normalize_hue(sector * 60.0),
            s,
            l,
        }
    }

    /// Fold this triple back into an 8-bit color with the given alpha.
    ///
    /// Channels are rounded half-up and clamped to [0, 255].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_color(self, alpha: u8) -> Color {
        let h = normalize_hue(self.h);
        let s = clamp_unit(self.s);
        let l = clamp_unit(self.l);

        let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

        // h < 360, so the sector index is always 0..=5.
        let (r, g, b) = match hp.floor() as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = l - c / 2.0;
        Color::rgba8(to_u8(r + m), to_u8(g + m), to_u8(b + m), alpha)
    }

    /// Rotate the hue by `degrees` (any sign, any magnitude).
    #[inline]
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + normalize_hue(degrees)),
            ..self
        }
    }

    /// Return a copy with lightness replaced (clamped to [0, 1]).
    #[inline]
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: clamp_unit(l),
            ..self
        }
    }

    /// Return a copy with saturation replaced (clamped to [0, 1]).
    #[inline]
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self {
            s: clamp_unit(s),
            ..self
        }
    }
}

/// Normalize a hue angle to the range [0, 360).
///
/// Non-finite angles map to 0.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Shortest angular distance between two hues, in [0, 180].
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

#[inline]
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_hsl(color: Color, h: f64, s: f64, l: f64) {
        let hsl = color.to_hsl();
        assert!(
            approx_eq(hsl.h, h, 0.01) && approx_eq(hsl.s, s, 0.001) && approx_eq(hsl.l, l, 0.001),
            "{color}: got ({:.3}, {:.4}, {:.4}), expected ({h}, {s}, {l})",
            hsl.h,
            hsl.s,
            hsl.l
        );
    }

    // ── Known values ─────────────────────────────────────────────────

    #[test]
    fn primaries_and_secondaries() {
        assert_hsl(Color::rgb8(255, 0, 0), 0.0, 1.0, 0.5);
        assert_hsl(Color::rgb8(255, 255, 0), 60.0, 1.0, 0.5);
        assert_hsl(Color::rgb8(0, 255, 0), 120.0, 1.0, 0.5);
        assert_hsl(Color::rgb8(0, 255, 255), 180.0, 1.0, 0.5);
        assert_hsl(Color::rgb8(0, 0, 255), 240.0, 1.0, 0.5);
        assert_hsl(Color::rgb8(255, 0, 255), 300.0, 1.0, 0.5);
    }

    #[test]
    fn achromatic_axis_has_zero_hue_and_saturation() {
        assert_hsl(Color::BLACK, 0.0, 0.0, 0.0);
        assert_hsl(Color::WHITE, 0.0, 0.0, 1.0);
        assert_hsl(Color::rgb8(128, 128, 128), 0.0, 0.0, 128.0 / 255.0);
    }

    #[test]
    fn muted_color() {
        // #c86432 → hsl(20°, 60%, 49%)
        assert_hsl(Color::rgb8(200, 100, 50), 20.0, 0.6, 125.0 / 255.0);
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_color(255), Color::rgb8(255, 0, 0));
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_color(255), Color::rgb8(0, 255, 0));
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_color(255), Color::rgb8(0, 0, 255));
        assert_eq!(Hsl::new(180.0, 1.0, 0.5).to_color(255), Color::rgb8(0, 255, 255));
        assert_eq!(Hsl::new(0.0, 0.0, 0.5).to_color(255), Color::rgb8(128, 128, 128));
    }

    // ── Roundtrip ────────────────────────────────────────────────────

    #[test]
    fn rgb_hsl_rgb_is_identity_on_a_lattice() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(5) {
                    let c = Color::rgb8(r, g, b);
                    assert_eq!(Color::from_hsl(c.to_hsl()), c, "roundtrip failed for {c}");
                }
            }
        }
    }

    #[test]
    fn roundtrip_keeps_alpha() {
        let c = Color::rgba8(12, 200, 99, 7);
        assert_eq!(c.to_hsl().to_color(c.alpha), c);
    }

    // ── Normalization ────────────────────────────────────────────────

    #[test]
    fn normalize_hue_wraps() {
        assert!(approx_eq(normalize_hue(370.0), 10.0, 1e-9));
        assert!(approx_eq(normalize_hue(-30.0), 330.0, 1e-9));
        assert!(approx_eq(normalize_hue(-720.0), 0.0, 1e-9));
        assert!(normalize_hue(-1e-300) < 360.0);
    }

    #[test]
    fn normalize_hue_non_finite_is_zero() {
        assert_eq!(normalize_hue(f64::NAN), 0.0);
        assert_eq!(normalize_hue(f64::INFINITY), 0.0);
    }

    #[test]
    fn new_clamps_saturation_and_lightness() {
        let hsl = Hsl::new(-90.0, 1.5, -0.5);
        assert!(approx_eq(hsl.h, 270.0, 1e-9));
        assert_eq!(hsl.s, 1.0);
        assert_eq!(hsl.l, 0.0);
    }

    #[test]
    fn rotate_by_full_turn_is_identity() {
        let hsl = Color::rgb8(200, 100, 50).to_hsl();
        assert_eq!(hsl.rotate(45.0), hsl.rotate(405.0));
        assert_eq!(hsl.rotate(-45.0), hsl.rotate(315.0));
    }

    #[test]
    fn hue_distance_takes_short_arc() {
        assert!(approx_eq(hue_distance(10.0, 350.0), 20.0, 1e-9));
        assert!(approx_eq(hue_distance(0.0, 180.0), 180.0, 1e-9));
    }
}
