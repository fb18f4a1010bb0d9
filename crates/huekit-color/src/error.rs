// SPDX-License-Identifier: MIT
//
// Errors raised by the color core. Both variants are plain value-level
// failures: the same input always fails the same way.

use thiserror::Error;

/// Largest number of colors a single scale may generate.
pub const MAX_COUNT: i64 = 65_536;

/// Why a piece of hex text was rejected by [`decode`](crate::hex::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Nothing left after stripping the optional `#`.
    Empty,
    /// Not exactly 3 or 6 digits.
    Length(usize),
    /// A character outside `0-9a-fA-F`.
    NonHex(char),
}

impl std::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no hex digits"),
            Self::Length(n) => write!(f, "expected 3 or 6 hex digits, got {n}"),
            Self::NonHex(c) => write!(f, "{c:?} is not a hex digit"),
        }
    }
}

/// Errors surfaced by the color core to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Decode input is not valid `#RGB` / `#RRGGBB` text.
    #[error("invalid hex color {input:?}: {issue}")]
    InvalidFormat { input: String, issue: FormatIssue },

    /// A scale generator was asked for fewer than 1 or more than
    /// [`MAX_COUNT`] colors.
    #[error("invalid color count {0}: must be between 1 and {max}", max = MAX_COUNT)]
    InvalidCount(i64),
}
