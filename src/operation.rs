// SPDX-License-Identifier: MIT
//
// Operation selection.
//
// The command line exposes one flag per operation. Flags are gathered into
// a list of every operation the user asked for; exactly one must remain.
// Zero and several are both reported as errors, so no flag silently wins
// over another. The chosen operation carries its decoded colors and typed
// parameters and is run by a single exhaustive match.

use clap::Args;
use thiserror::Error;

use huekit_color::{Color, ColorError};
use huekit_palette::{Scale, Scheme, Temperature, contrast, scale, scheme, tonal};

// ─── Flags ──────────────────────────────────────────────────────────────────

/// Operation and operand flags, spelled as the original tool spelled them.
#[derive(Debug, Default, Clone, Args)]
pub struct OperationArgs {
    /// Hex RGB value of the first color. With or without `#`, 3 or 6 digits.
    #[arg(long = "Color1", value_name = "HEX")]
    pub color1: Option<String>,

    /// Hex RGB value of the second color (Tetratic, Blends).
    #[arg(long = "Color2", value_name = "HEX")]
    pub color2: Option<String>,

    /// Make the color darker by a fraction of its lightness (0.0–1.0).
    #[arg(long = "Darker", value_name = "PCT", allow_negative_numbers = true)]
    pub darker: Option<f64>,

    /// Make the color lighter by a fraction of the remaining headroom (0.0–1.0).
    #[arg(long = "Lighter", value_name = "PCT", allow_negative_numbers = true)]
    pub lighter: Option<f64>,

    /// The complementary color.
    #[arg(long = "Complementary")]
    pub complementary: bool,

    /// Black or white, whichever contrasts more with the color.
    #[arg(long = "Contrast")]
    pub contrast: bool,

    /// Rotate the hue by this many degrees.
    #[arg(long = "HueOffset", value_name = "DEG", allow_negative_numbers = true)]
    pub hue_offset: Option<i32>,

    /// Three colors equally spaced around the wheel.
    #[arg(long = "Triadic")]
    pub triadic: bool,

    /// Four colors equally spaced around the wheel.
    #[arg(long = "Quadratic")]
    pub quadratic: bool,

    /// Both colors, each followed by its complement.
    #[arg(long = "Tetratic")]
    pub tetradic: bool,

    /// The color and its two neighbors on the wheel.
    #[arg(long = "Analogous")]
    pub analogous: bool,

    /// The color and the two neighbors of its complement.
    #[arg(long = "SplitComplementary")]
    pub split_complementary: bool,

    /// Print whether the color is warm.
    #[arg(long = "Warm")]
    pub warm: bool,

    /// Print whether the color is cool.
    #[arg(long = "Cool")]
    pub cool: bool,

    /// Number of colors with the same hue at different lightness.
    #[arg(long = "Monochromatic", value_name = "N", allow_negative_numbers = true)]
    pub monochromatic: Option<i64>,

    /// Number of colors blended from the color toward black.
    #[arg(long = "Shades", value_name = "N", allow_negative_numbers = true)]
    pub shades: Option<i64>,

    /// Number of colors blended from the color toward white.
    #[arg(long = "Tints", value_name = "N", allow_negative_numbers = true)]
    pub tints: Option<i64>,

    /// Number of colors blended from the color toward gray.
    #[arg(long = "Tones", value_name = "N", allow_negative_numbers = true)]
    pub tones: Option<i64>,

    /// Number of colors interpolated between the two colors.
    #[arg(long = "Blends", value_name = "N", allow_negative_numbers = true)]
    pub blends: Option<i64>,
}

// ─── Errors ─────────────────────────────────────────────────────────────────

/// Why no single operation could be built from the flags.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    #[error("no operation flag specified")]
    NoOperation,

    #[error("conflicting operations specified: {}", .0.join(", "))]
    ConflictingOperations(Vec<&'static str>),

    #[error("{0} flag was not specified")]
    MissingOperand(&'static str),

    #[error(transparent)]
    Color(#[from] ColorError),
}

// ─── Operation ──────────────────────────────────────────────────────────────

/// Exactly one requested computation with its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Darker { color: Color, pct: f64 },
    Lighter { color: Color, pct: f64 },
    Complementary { color: Color },
    Contrast { color: Color },
    HueOffset { color: Color, degrees: i32 },
    Scheme { scheme: Scheme, color: Color },
    Tetradic { first: Color, second: Color },
    Temperature { color: Color, query: Temperature },
    Scale { scale: Scale, color: Color, count: i64 },
    Blends { first: Color, second: Color, count: i64 },
}

/// What an operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Single(Color),
    Sequence(Vec<Color>),
    Verdict(bool),
}

/// A flag that was set, before operands are attached.
#[derive(Debug, Clone, Copy)]
enum Requested {
    Darker(f64),
    Lighter(f64),
    Complementary,
    Contrast,
    HueOffset(i32),
    Scheme(Scheme),
    Tetradic,
    Temperature(Temperature),
    Scale(Scale, i64),
    Blends(i64),
}

impl OperationArgs {
    /// Every operation flag that is present: flags carrying a value first,
    /// then the plain toggles, each group in declaration order.
    fn requested(&self) -> Vec<(&'static str, Requested)> {
        let toggles = [
            (self.complementary, "Complementary", Requested::Complementary),
            (self.contrast, "Contrast", Requested::Contrast),
            (self.triadic, "Triadic", Requested::Scheme(Scheme::Triadic)),
            (self.quadratic, "Quadratic", Requested::Scheme(Scheme::Quadratic)),
            (self.tetradic, "Tetratic", Requested::Tetradic),
            (self.analogous, "Analogous", Requested::Scheme(Scheme::Analogous)),
            (
                self.split_complementary,
                "SplitComplementary",
                Requested::Scheme(Scheme::SplitComplementary),
            ),
            (self.warm, "Warm", Requested::Temperature(Temperature::Warm)),
            (self.cool, "Cool", Requested::Temperature(Temperature::Cool)),
        ];

        let valued = [
            self.darker.map(|p| ("Darker", Requested::Darker(p))),
            self.lighter.map(|p| ("Lighter", Requested::Lighter(p))),
            self.hue_offset.map(|d| ("HueOffset", Requested::HueOffset(d))),
            self.monochromatic
                .map(|n| ("Monochromatic", Requested::Scale(Scale::Monochromatic, n))),
            self.shades.map(|n| ("Shades", Requested::Scale(Scale::Shades, n))),
            self.tints.map(|n| ("Tints", Requested::Scale(Scale::Tints, n))),
            self.tones.map(|n| ("Tones", Requested::Scale(Scale::Tones, n))),
            self.blends.map(|n| ("Blends", Requested::Blends(n))),
        ];

        valued
            .into_iter()
            .flatten()
            .chain(
                toggles
                    .into_iter()
                    .filter(|(on, _, _)| *on)
                    .map(|(_, name, req)| (name, req)),
            )
            .collect()
    }
}

impl Operation {
    /// Build the single requested operation from the command-line flags.
    ///
    /// `Color1` is checked and decoded first, then the operation flags,
    /// then `Color2` for the two-color operations.
    ///
    /// # Errors
    ///
    /// - [`SelectError::MissingOperand`] when a required color is absent.
    /// - [`SelectError::Color`] when a color is not valid hex.
    /// - [`SelectError::NoOperation`] / [`SelectError::ConflictingOperations`]
    ///   when zero or several operation flags are set.
    pub fn from_args(args: &OperationArgs) -> Result<Self, SelectError> {
        let color = decode_operand(args.color1.as_deref(), "Color1")?;

        let mut requested = args.requested();
        let (_, req) = match requested.len() {
            0 => return Err(SelectError::NoOperation),
            1 => requested.remove(0),
            _ => {
                return Err(SelectError::ConflictingOperations(
                    requested.into_iter().map(|(name, _)| name).collect(),
                ));
            }
        };

        let second = || decode_operand(args.color2.as_deref(), "Color2");

        Ok(match req {
            Requested::Darker(pct) => Self::Darker { color, pct },
            Requested::Lighter(pct) => Self::Lighter { color, pct },
            Requested::Complementary => Self::Complementary { color },
            Requested::Contrast => Self::Contrast { color },
            Requested::HueOffset(degrees) => Self::HueOffset { color, degrees },
            Requested::Scheme(scheme) => Self::Scheme { scheme, color },
            Requested::Tetradic => Self::Tetradic {
                first: color,
                second: second()?,
            },
            Requested::Temperature(query) => Self::Temperature { color, query },
            Requested::Scale(scale, count) => Self::Scale { scale, color, count },
            Requested::Blends(count) => Self::Blends {
                first: color,
                second: second()?,
                count,
            },
        })
    }

    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Darker { .. } => "darker",
            Self::Lighter { .. } => "lighter",
            Self::Complementary { .. } => "complementary",
            Self::Contrast { .. } => "contrast",
            Self::HueOffset { .. } => "hue-offset",
            Self::Scheme { scheme, .. } => scheme.name(),
            Self::Tetradic { .. } => "tetradic",
            Self::Temperature {
                query: Temperature::Warm,
                ..
            } => "warm",
            Self::Temperature {
                query: Temperature::Cool,
                ..
            } => "cool",
            Self::Scale { scale, .. } => scale.name(),
            Self::Blends { .. } => "blends",
        }
    }

    /// Run the operation.
    ///
    /// Scale results are prefixed with their seed color(s); scheme results
    /// already lead with them.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidCount`] when a scale count is outside
    /// `1..=MAX_COUNT`.
    pub fn run(self) -> Result<Outcome, ColorError> {
        let outcome = match self {
            Self::Darker { color, pct } => Outcome::Single(tonal::darker(color, pct)),
            Self::Lighter { color, pct } => Outcome::Single(tonal::lighter(color, pct)),
            Self::Complementary { color } => Outcome::Single(tonal::complementary(color)),
            Self::Contrast { color } => Outcome::Single(contrast::contrast(color)),
            Self::HueOffset { color, degrees } => {
                Outcome::Single(tonal::hue_offset(color, f64::from(degrees)))
            }
            Self::Scheme { scheme, color } => Outcome::Sequence(scheme.generate(color)),
            Self::Tetradic { first, second } => {
                Outcome::Sequence(scheme::tetradic(first, second))
            }
            Self::Temperature { color, query } => {
                Outcome::Verdict(tonal::temperature(color) == query)
            }
            Self::Scale {
                scale,
                color,
                count,
            } => Outcome::Sequence(with_seeds(&[color], scale.generate(color, count)?)),
            Self::Blends {
                first,
                second,
                count,
            } => Outcome::Sequence(with_seeds(
                &[first, second],
                scale::blends(first, second, count)?,
            )),
        };
        Ok(outcome)
    }
}

fn decode_operand(text: Option<&str>, flag: &'static str) -> Result<Color, SelectError> {
    match text {
        None | Some("") => Err(SelectError::MissingOperand(flag)),
        Some(text) => Ok(huekit_color::decode(text)?),
    }
}

fn with_seeds(seeds: &[Color], generated: Vec<Color>) -> Vec<Color> {
    let mut colors = Vec::with_capacity(seeds.len() + generated.len());
    colors.extend_from_slice(seeds);
    colors.extend(generated);
    colors
}

// ─── Tests ──────────────────────────────────────────────────────────────────
