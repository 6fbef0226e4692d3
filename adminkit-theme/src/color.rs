use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use iced::Color;
use thiserror::Error;

/// Errors emitted while parsing a hex color literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unsupported color format: {0}")]
    Format(String),

    #[error("invalid hex digit in color: {0}")]
    Digit(String),
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = if s.starts_with("0x") && s.len() == 8 {
            &s[2..]
        } else if s.starts_with('#') && s.len() == 7 {
            &s[1..]
        } else {
            return Err(ColorParseError::Format(s.to_string()));
        };

        // The length gate above counts bytes, so a multi-byte character
        // could still slip through and break the digit slicing below.
        if !chars.is_ascii() {
            return Err(ColorParseError::Format(s.to_string()));
        }

        let digit = |range: std::ops::RangeInclusive<usize>| {
            u8::from_str_radix(&chars[range], 16)
                .map_err(|_| ColorParseError::Digit(s.to_string()))
        };

        Ok(Self {
            r: digit(0..=1)?,
            g: digit(2..=3)?,
            b: digit(4..=5)?,
        })
    }
}

/// Parse a `#rrggbb` or `0xrrggbb` literal into an [`iced::Color`].
pub fn parse_hex_color(value: &str) -> Result<Color, ColorParseError> {
    Rgb::from_str(value).map(|c| Color::from_rgb8(c.r, c.g, c.b))
}
