//! Scales — N evenly spaced steps from a seed toward an anchor.
//!
//! Step `i` of `n` sits at `t = i / (n + 1)` for `i` in `1..=n`, so neither
//! the seed nor the anchor (black, white, gray, a second color) appears in
//! the output. Callers that want the seed in front prepend it themselves.

use huekit_color::{Color, ColorError, MAX_COUNT};

/// The single-seed HSL scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    /// Seed hue and saturation at evenly spaced lightness in (0, 1).
    Monochromatic,
    /// Lightness falling from the seed's toward 0.
    Shades,
    /// Lightness rising from the seed's toward 1.
    Tints,
    /// Saturation falling from the seed's toward 0.
    Tones,
}

impl Scale {
    /// Generate `count` steps of this scale from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidCount`] when `count` is outside
    /// `1..=MAX_COUNT`.
    pub fn generate(self, seed: Color, count: i64) -> Result<Vec<Color>, ColorError> {
        let hsl = seed.to_hsl();
        let colors = steps(count)?
            .map(|t| {
                let step = match self {
                    Self::Monochromatic => hsl.with_lightness(t),
                    Self::Shades => hsl.with_lightness(hsl.l * (1.0 - t)),
                    Self::Tints => hsl.with_lightness((1.0 - hsl.l).mul_add(t, hsl.l)),
                    Self::Tones => hsl.with_saturation(hsl.s * (1.0 - t)),
                };
                seed.with_hsl(step)
            })
            .collect();
        Ok(colors)
    }

    /// Human-readable name of this scale.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Shades => "shades",
            Self::Tints => "tints",
            Self::Tones => "tones",
        }
    }
}

/// `count` colors sharing the seed's hue and saturation, lightness evenly
/// spaced strictly between 0 and 1.
///
/// # Errors
///
/// Returns [`ColorError::InvalidCount`] when `count` is outside
/// `1..=MAX_COUNT`.
pub fn monochromatic(color: Color, count: i64) -> Result<Vec<Color>, ColorError> {
    Scale::Monochromatic.generate(color, count)
}

/// `count` colors stepping from the seed toward black.
///
/// # Errors
///
/// Returns [`ColorError::InvalidCount`] when `count` is outside
/// `1..=MAX_COUNT`.
pub fn shades(color: Color, count: i64) -> Result<Vec<Color>, ColorError> {
    Scale::Shades.generate(color, count)
}

/// `count` colors stepping from the seed toward white.
///
/// # Errors
///
/// Returns [`ColorError::InvalidCount`] when `count` is outside
/// `1..=MAX_COUNT`.
pub fn tints(color: Color, count: i64) -> Result<Vec<Color>, ColorError> {
    Scale::Tints.generate(color, count)
}

/// `count` colors stepping from the seed toward gray.
///
/// # Errors
///
/// Returns [`ColorError::InvalidCount`] when `count` is outside
/// `1..=MAX_COUNT`.
pub fn tones(color: Color, count: i64) -> Result<Vec<Color>, ColorError> {
    Scale::Tones.generate(color, count)
}

/// `count` colors interpolated channel-wise in RGB between two seeds,
/// excluding both seeds.
///
/// # Errors
///
/// Returns [`ColorError::InvalidCount`] when `count` is outside
/// `1..=MAX_COUNT`.
pub fn blends(first: Color, second: Color, count: i64) -> Result<Vec<Color>, ColorError> {
    Ok(steps(count)?.map(|t| first.mix(second, t)).collect())
}

/// Interpolation factors `i / (n + 1)` for `i` in `1..=n`.
fn steps(count: i64) -> Result<impl Iterator<Item = f64>, ColorError> {
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(ColorError::InvalidCount(count));
    }
    let n = usize::try_from(count).map_err(|_| ColorError::InvalidCount(count))?;
    let denom = (n + 1) as f64;
    Ok((1..=n).map(move |i| i as f64 / denom))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
