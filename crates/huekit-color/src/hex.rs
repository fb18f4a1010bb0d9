// SPDX-License-Identifier: MIT
//
// Hex text codec.
//
// Accepted input, with or without one leading `#`:
//
//   RGB      each digit is doubled (`f` → 0xff)
//   RRGGBB   one byte per channel
//
// Validation runs in two explicit passes (length, then character class)
// so every rejection maps to exactly one `FormatIssue`. Output is always
// the 7-byte `#rrggbb` form.

use std::str::FromStr;

use crate::color::Color;
use crate::error::{ColorError, FormatIssue};

/// Letter case for encoded hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexCase {
    /// `#ff8000` — the canonical form.
    #[default]
    Lower,
    /// `#FF8000`.
    Upper,
}

/// Decode `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` into an opaque [`Color`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] when the text (after stripping an
/// optional `#`) is empty, is not exactly 3 or 6 characters long, or
/// contains a character that is not an ASCII hex digit.
pub fn decode(text: &str) -> Result<Color, ColorError> {
    let invalid = |issue| ColorError::InvalidFormat {
        input: text.to_owned(),
        issue,
    };

    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.is_empty() {
        return Err(invalid(FormatIssue::Empty));
    }

    let count = digits.chars().count();
    if count != 3 && count != 6 {
        return Err(invalid(FormatIssue::Length(count)));
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(invalid(FormatIssue::NonHex(bad)));
    }

    // All ASCII from here on, so byte indexing is safe.
    let bytes = digits.as_bytes();
    let color = if bytes.len() == 3 {
        let r = hex_digit(bytes[0]);
        let g = hex_digit(bytes[1]);
        let b = hex_digit(bytes[2]);
        Color::rgb8((r << 4) | r, (g << 4) | g, (b << 4) | b)
    } else {
        Color::rgb8(
            hex_byte(bytes[0], bytes[1]),
            hex_byte(bytes[2], bytes[3]),
            hex_byte(bytes[4], bytes[5]),
        )
    };
    Ok(color)
}

/// Encode a color as lower-case `#rrggbb`. Alpha is not encoded.
#[must_use]
pub fn encode(color: Color) -> String {
    encode_with(color, HexCase::Lower)
}

/// Encode a color as `#rrggbb` or `#RRGGBB`.
#[must_use]
pub fn encode_with(color: Color, case: HexCase) -> String {
    let (r, g, b) = color.to_rgb8();
    match case {
        HexCase::Lower => format!("#{r:02x}{g:02x}{b:02x}"),
        HexCase::Upper => format!("#{r:02X}{g:02X}{b:02X}"),
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Value of an ASCII hex digit. Callers validate the class first.
#[inline]
const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

#[inline]
const fn hex_byte(hi: u8, lo: u8) -> u8 {
    (hex_digit(hi) << 4) | hex_digit(lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn issue_of(text: &str) -> FormatIssue {
        match decode(text) {
            Err(ColorError::InvalidFormat { issue, .. }) => issue,
            other => panic!("expected InvalidFormat for {text:?}, got {other:?}"),
        }
    }

    // ── Decode ───────────────────────────────────────────────────────

    #[test]
    fn decode_long_form() {
        assert_eq!(decode("#ff8000").unwrap(), Color::rgb8(255, 128, 0));
        assert_eq!(decode("#FF0000").unwrap(), Color::rgb8(255, 0, 0));
    }

    #[test]
    fn decode_without_hash() {
        assert_eq!(decode("00ff00").unwrap(), Color::rgb8(0, 255, 0));
        assert_eq!(decode("abc").unwrap(), Color::rgb8(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn decode_short_form_doubles_digits() {
        assert_eq!(decode("#f80").unwrap(), Color::rgb8(255, 136, 0));
        assert_eq!(decode("#000").unwrap(), Color::BLACK);
        assert_eq!(decode("#FfF").unwrap(), Color::WHITE);
    }

    #[test]
    fn decode_is_opaque() {
        assert!(decode("#123456").unwrap().is_opaque());
    }

    #[test]
    fn decode_rejects_empty() {
        assert_eq!(issue_of(""), FormatIssue::Empty);
        assert_eq!(issue_of("#"), FormatIssue::Empty);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(issue_of("#12345"), FormatIssue::Length(5));
        assert_eq!(issue_of("#ff000080"), FormatIssue::Length(8));
        assert_eq!(issue_of("ff"), FormatIssue::Length(2));
        assert_eq!(issue_of("##fff"), FormatIssue::Length(4));
    }

    #[test]
    fn decode_rejects_non_hex() {
        assert_eq!(issue_of("xyz"), FormatIssue::NonHex('x'));
        assert_eq!(issue_of("#12345g"), FormatIssue::NonHex('g'));
        assert_eq!(issue_of(" ff000"), FormatIssue::NonHex(' '));
    }

    #[test]
    fn decode_counts_characters_not_bytes() {
        // Two multi-byte chars plus one digit: length 3, fails on class.
        assert_eq!(issue_of("éé0"), FormatIssue::NonHex('é'));
    }

    #[test]
    fn decode_error_keeps_input() {
        let err = decode("#nothex").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid hex color \"#nothex\": 'n' is not a hex digit"
        );
    }

    // ── Encode ───────────────────────────────────────────────────────

    #[test]
    fn encode_is_lower_case_long_form() {
        assert_eq!(encode(Color::rgb8(18, 18, 18)), "#121212");
        assert_eq!(encode(Color::rgb8(255, 171, 0)), "#ffab00");
    }

    #[test]
    fn encode_upper_case() {
        assert_eq!(encode_with(Color::rgb8(255, 171, 0), HexCase::Upper), "#FFAB00");
    }

    #[test]
    fn encode_ignores_alpha() {
        assert_eq!(encode(Color::rgba8(1, 2, 3, 4)), "#010203");
    }

    // ── Roundtrip ────────────────────────────────────────────────────

    #[test]
    fn decode_encode_collapses_shorthand_and_case() {
        for text in ["#F0A", "f0a", "#ff00aa", "FF00AA"] {
            let color = decode(text).unwrap();
            let hex = encode(color);
            assert_eq!(hex, "#ff00aa");
            assert_eq!(decode(&hex).unwrap(), color);
        }
    }

    #[test]
    fn from_str_delegates_to_decode() {
        let c: Color = "#c86432".parse().unwrap();
        assert_eq!(c, Color::rgb8(200, 100, 50));
        assert!("#c8643".parse::<Color>().is_err());
    }
}
