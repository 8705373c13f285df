use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// 24-bit sRGB color.
///
/// The canonical text form is `#RRGGBB` (see the `Display` impl).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Packs the channels as `0xRRGGBB`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Formats as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Parses `#rrggbb` or `rrggbb` (either case, surrounding whitespace ignored).
    pub fn parse_hex(s: &str) -> Result<Self, ParseColorError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::new(s, "expected only hex digits"));
        }
        if digits.len() != 6 {
            return Err(ParseColorError::new(
                s,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| ParseColorError::new(s, e.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}
