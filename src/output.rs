// SPDX-License-Identifier: MIT
//
// Wire format.
//
// Consumers of the original tool parse one JSON line per invocation:
//
//   single color   {"Color":"#rrggbb"}
//   sequence       [{"Color":"#rrggbb"},{"Color":"#rrggbb"},...]
//   warm / cool    true | false
//
// Compact serde_json output reproduces that byte for byte.

use serde::Serialize;

use huekit_color::{Color, HexCase, encode_with};

use crate::operation::Outcome;

/// One color as it appears on the wire.
#[derive(Debug, Serialize)]
struct ColorRecord {
    #[serde(rename = "Color")]
    color: String,
}

impl ColorRecord {
    fn new(color: Color, case: HexCase) -> Self {
        Self {
            color: encode_with(color, case),
        }
    }
}

/// Render an outcome as a single line of JSON (no trailing newline).
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn render(outcome: &Outcome, case: HexCase) -> Result<String, serde_json::Error> {
    match outcome {
        Outcome::Single(color) => serde_json::to_string(&ColorRecord::new(*color, case)),
        Outcome::Sequence(colors) => {
            let records: Vec<ColorRecord> =
                colors.iter().map(|&c| ColorRecord::new(c, case)).collect();
            serde_json::to_string(&records)
        }
        Outcome::Verdict(answer) => serde_json::to_string(answer),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
