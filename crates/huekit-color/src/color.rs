// SPDX-License-Identifier: MIT
//
// The huekit color value — 8-bit sRGB with an opacity channel.
//
// Single-character variable names (r, g, b, h, s, l) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Storage is the additive view: three 8-bit channels plus alpha. The
// perceptual view (HSL) is derived on demand by `to_hsl` and folded back
// by `from_hsl`; see `hsl.rs` for the conversion math. Every operation
// returns a new value, so `Color` is `Copy` and never mutated in place.

use std::fmt;

use crate::hex;
use crate::hsl::Hsl;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color with alpha.
///
/// # Examples
///
/// ```
/// use huekit_color::Color;
///
/// let red = Color::rgb8(255, 0, 0);
/// let same: Color = "#f00".parse().unwrap();
/// assert_eq!(red, same);
///
/// let hsl = red.to_hsl();
/// assert_eq!(hsl.h, 0.0);
/// assert_eq!(hsl.s, 1.0);
/// assert_eq!(hsl.l, 0.5);
///
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel, 0 to 255.
    pub r: u8,

    /// Green channel, 0 to 255.
    pub g: u8,

    /// Blue channel, 0 to 255.
    pub b: u8,

    /// Opacity, 0 (transparent) to 255 (opaque). Carried through every
    /// derived color untouched.
    pub alpha: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: u8::MAX }
    }

    /// Create a color from 8-bit channels with alpha.
    #[inline]
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self { r, g, b, alpha }
    }

    /// Create an opaque color from sRGB components in 0.0–1.0.
    ///
    /// Components are rounded half-up to the nearest 8-bit value and
    /// clamped, so out-of-range input saturates instead of wrapping.
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgb8(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Create an opaque color from an HSL triple.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl.to_color(u8::MAX)
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Whether this color is fully opaque.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha == u8::MAX
    }

    /// Whether all three channels are equal (a gray, black or white).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    // ─── Interpolation ───────────────────────────────────────────────────

    /// Mix this color with another, channel by channel in sRGB.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`; `t` is clamped.
    /// Each channel is rounded half-up, so black and white mix to `#808080`
    /// at `t = 0.5`. The result keeps `self`'s alpha.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            alpha: self.alpha,
        }
    }

    // ─── Views ───────────────────────────────────────────────────────────

    /// The 8-bit channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The channels as sRGB components in 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// The channels with the sRGB gamma curve removed.
    #[must_use]
    pub fn to_linear_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_srgb();
        (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    /// The perceptual (hue, saturation, lightness) view.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_color(self)
    }

    /// Replace the HSL view while keeping this color's alpha.
    #[must_use]
    pub fn with_hsl(self, hsl: Hsl) -> Self {
        hsl.to_color(self.alpha)
    }

    /// Canonical `#rrggbb` text (lower-case).
    #[must_use]
    pub fn to_hex(self) -> String {
        hex::encode(self)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::rgb8({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "Color::rgba8({}, {}, {}, {})",
                self.r, self.g, self.b, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Gamma ───────────────────────────────────────────────────────────────────

/// Convert a single sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Interpolate one 8-bit channel, rounding half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (f64::from(a), f64::from(b));
    (b - a).mul_add(t, a + 0.5).floor().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
