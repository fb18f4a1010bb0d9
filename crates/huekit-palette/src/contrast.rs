//! WCAG luminance and the black-or-white contrast color.
//!
//! Luminance is computed in linear light (sRGB gamma removed) with the
//! WCAG 2.1 weights. `contrast` splits the luminance range at its midpoint:
//! bright colors get black, everything else gets white.

use huekit_color::Color;

/// Luminance above which [`contrast`] answers black.
pub const CONTRAST_THRESHOLD: f64 = 0.5;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r_lin, g_lin, b_lin) = color.to_linear_srgb();
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pure black or pure white, whichever reads better on `color`.
#[must_use]
pub fn contrast(color: Color) -> Color {
    if relative_luminance(color) > CONTRAST_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
