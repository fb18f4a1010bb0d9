//! # huekit-palette — derived colors, schemes and scales
//!
//! Turns one or two seed colors into derived colors. Everything works on
//! the HSL view of [`huekit_color::Color`] except RGB blending.
//!
//! # Architecture
//!
//! ```text
//! Color (+ Color) + parameter
//!     │
//!     ├── tonal.rs:    darker / lighter / hue_offset / complementary / warm-cool
//!     ├── contrast.rs: WCAG luminance, black-or-white contrast color
//!     ├── scheme.rs:   fixed hue offsets from the seed (triadic, quadratic, ...)
//!     └── scale.rs:    N evenly spaced steps toward black/white/gray/another color
//! ```
//!
//! Scheme results start with the seed color(s). Scale results contain only
//! the generated steps; callers prepend the seeds when they need them.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Step indices become interpolation factors.
#![allow(clippy::cast_precision_loss)]

pub mod contrast;
pub mod scale;
pub mod scheme;
pub mod tonal;

pub use contrast::{contrast, contrast_ratio, relative_luminance};
pub use scale::{Scale, blends, monochromatic, shades, tints, tones};
pub use scheme::{Scheme, analogous, quadratic, split_complementary, tetradic, triadic};
pub use tonal::{
    Temperature, complementary, darker, hue_offset, is_cool, is_warm, lighter, temperature,
};
