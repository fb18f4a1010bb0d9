//! Hue-wheel schemes — fixed rotations of a seed color.
//!
//! Each scheme is a list of hue offsets. The first offset is always 0, so
//! the seed color itself leads the result. Saturation and lightness are
//! carried through unchanged for every member.

use huekit_color::Color;

use crate::tonal::{complementary, hue_offset};

/// The single-seed hue schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Three colors 120° apart.
    Triadic,
    /// Four colors 90° apart.
    Quadratic,
    /// The seed and its neighbors 30° either side.
    Analogous,
    /// The seed and the two neighbors of its complement.
    SplitComplementary,
}

impl Scheme {
    /// Hue offsets in output order. The first is always 0.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::Quadratic => &[0.0, 90.0, 180.0, 270.0],
            Self::Analogous => &[0.0, -30.0, 30.0],
            Self::SplitComplementary => &[0.0, 150.0, 210.0],
        }
    }

    /// Apply this scheme to a seed color.
    ///
    /// The seed is returned as-is in first position rather than passed
    /// through a zero rotation.
    #[must_use]
    pub fn generate(self, seed: Color) -> Vec<Color> {
        let mut colors = Vec::with_capacity(self.offsets().len());
        colors.push(seed);
        colors.extend(self.offsets()[1..].iter().map(|&d| hue_offset(seed, d)));
        colors
    }

    /// Human-readable name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triadic => "triadic",
            Self::Quadratic => "quadratic",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// Parse a scheme from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// All single-seed schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Triadic,
            Self::Quadratic,
            Self::Analogous,
            Self::SplitComplementary,
        ]
    }
}

/// `[c, c+120°, c+240°]`.
#[must_use]
pub fn triadic(color: Color) -> Vec<Color> {
    Scheme::Triadic.generate(color)
}

/// `[c, c+90°, c+180°, c+270°]`.
#[must_use]
pub fn quadratic(color: Color) -> Vec<Color> {
    Scheme::Quadratic.generate(color)
}

/// `[c, c−30°, c+30°]`.
#[must_use]
pub fn analogous(color: Color) -> Vec<Color> {
    Scheme::Analogous.generate(color)
}

/// `[c, c+150°, c+210°]`.
#[must_use]
pub fn split_complementary(color: Color) -> Vec<Color> {
    Scheme::SplitComplementary.generate(color)
}

/// Two seeds, each followed by its complement:
/// `[c1, complement(c1), c2, complement(c2)]`.
#[must_use]
pub fn tetradic(first: Color, second: Color) -> Vec<Color> {
    vec![first, complementary(first), second, complementary(second)]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
