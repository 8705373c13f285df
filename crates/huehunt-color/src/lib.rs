//! Color math for **huehunt**.
//!
//! Everything here is a pure function of its inputs; randomness comes in
//! through a caller-supplied [`rand::Rng`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`rgb`] | `Rgb`, hex formatting and parsing |
//! | [`hsl`] | `Hsl`, `hsl_to_rgb`, `rgb_to_hsl` |
//! | [`similarity`] | `similarity` score in `[0, 100]` |
//! | [`label`] | human-readable hue names |
//! | [`target`] | `TargetColor`, `TargetPolicy` |
//! | [`error`] | `ParseColorError` |
//!
//! # Quick start
//!
//! ```rust
//! use huehunt_color::{hsl_to_rgb, similarity, Rgb};
//!
//! let red = hsl_to_rgb(0.0, 1.0, 0.5);
//! assert_eq!(red, Rgb::new(255, 0, 0));
//! assert_eq!(similarity(red, red), 100.0);
//! ```

pub mod error;
pub mod hsl;
pub mod label;
pub mod rgb;
pub mod similarity;
pub mod target;

pub use error::ParseColorError;
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use label::hue_label;
pub use rgb::Rgb;
pub use similarity::{MAX_SCORE, MIN_SCORE, similarity};
pub use target::{TargetColor, TargetPolicy, WHEEL_LIGHTNESS};
