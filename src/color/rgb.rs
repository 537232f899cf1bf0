//! 24-bit RGB color value
//!
//! Colors are exchanged as `#rrggbb` strings. This module parses and
//! formats that representation and provides the small amount of color
//! math the renderers need.

use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

use thiserror::Error;

/// Fixed categorical palette, cycled by [`Rgb::categorical`].
const CATEGORICAL: [Rgb; 8] = [
    Rgb::new(230, 25, 75),
    Rgb::new(245, 130, 48),
    Rgb::new(255, 225, 25),
    Rgb::new(60, 180, 75),
    Rgb::new(70, 240, 240),
    Rgb::new(0, 130, 200),
    Rgb::new(0, 0, 128),
    Rgb::new(170, 110, 40),
];

/// Default opacity of the foreground in [`Rgb::faded`].
const DEFAULT_FADE_ALPHA: f64 = 0.25;

/// A 24-bit RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Errors that can occur when parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The color does not have exactly six hex digits.
    #[error("expected 6 hex digits, found {len}")]
    InvalidLength { len: usize },
    /// The color contains a character that is not a hex digit.
    #[error("invalid hex digit {digit:?} in color")]
    InvalidDigit { digit: char },
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `rrggbb` or `#rrggbb`, in either case.
    pub fn from_hex(s: &str) -> std::result::Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit { digit });
        }

        if digits.len() != 6 {
            return Err(ColorError::InvalidLength { len: digits.len() });
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidLength { len: digits.len() })
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats as `#rrggbb`, lowercase.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Formats as `rrggbb`, lowercase, without the leading `#`.
    pub fn to_bare_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns `255 − c` for every channel.
    pub const fn inverted(self) -> Self {
        Self::new(0xff - self.r, 0xff - self.g, 0xff - self.b)
    }

    /// Blends this color over `background` with opacity `alpha`.
    ///
    /// Each channel becomes `alpha · fg + (1 − alpha) · bg`, truncated and
    /// clamped to `0..=255`. The background defaults to white and alpha to
    /// `0.25`, which gives the pale fill drawn under a graph line.
    pub fn faded(self, background: Option<Rgb>, alpha: Option<f64>) -> Rgb {
        let bg = background.unwrap_or(Self::WHITE);
        let alpha = alpha.filter(|a| !a.is_nan()).unwrap_or(DEFAULT_FADE_ALPHA);

        let mix = |fg: u8, bg: u8| {
            (alpha * fg as f64 + (1.0 - alpha) * bg as f64).clamp(0.0, 255.0) as u8
        };

        Rgb::new(mix(self.r, bg.r), mix(self.g, bg.g), mix(self.b, bg.b))
    }

    /// Returns entry `i` of a fixed eight-color palette, cycling past the end.
    pub fn categorical(i: usize) -> Rgb {
        CATEGORICAL[i % CATEGORICAL.len()]
    }
}

impl Display for Rgb {
    /// Formats the color as `#rrggbb`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.r, value.g, value.b]
    }
}
