// SPDX-License-Identifier: MIT
//
// huekit-color — the color value at the bottom of huekit.
//
// A `Color` is an 8-bit sRGB triple with an opacity byte. It is decoded
// from and encoded to hex text (`hex`), and viewed as hue, saturation and
// lightness when tonal reasoning is needed (`hsl`). Everything here is a
// pure function over `Copy` values: no I/O, no shared state, safe to call
// from any thread.

pub mod color;
pub mod error;
pub mod hex;
pub mod hsl;

pub use color::{Color, srgb_to_linear};
pub use error::{ColorError, FormatIssue, MAX_COUNT};
pub use hex::{HexCase, decode, encode, encode_with};
pub use hsl::{Hsl, hue_distance, normalize_hue};
