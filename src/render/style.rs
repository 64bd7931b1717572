//! Paint styles handed to a [`Surface`](super::surface::Surface)

use std::fmt;
use std::str::FromStr;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const LIGHT_GREY: Color = Color::rgb(211, 211, 211);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Error for color strings that are not `#rgb` or `#rrggbb`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a hex color: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        let digit = |i: usize| {
            hex.get(i..i + 1)
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or_else(err)
        };
        match hex.len() {
            3 => Ok(Color::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => {
                let byte = |i: usize| Ok::<u8, ParseColorError>(digit(i)? * 16 + digit(i + 1)?);
                Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How a path is outlined
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Alternating on/off lengths; empty means solid.
    pub dash: Vec<f64>,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Stroke {
            color,
            width,
            dash: Vec::new(),
        }
    }

    pub fn with_dash(mut self, dash: Vec<f64>) -> Self {
        self.dash = dash;
        self
    }
}

/// Which regions of a self-overlapping path are inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

/// Font for labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size_px: f64,
    pub family: &'static str,
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

/// Bitmap icons the host application supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Tower,
    Aircraft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!("#333".parse::<Color>().unwrap(), Color::rgb(0x33, 0x33, 0x33));
        assert_eq!("#e6d545".parse::<Color>().unwrap(), Color::rgb(0xe6, 0xd5, 0x45));
        assert_eq!("#0f0".parse::<Color>().unwrap(), Color::GREEN);
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["333", "#12", "#gggggg", "#1234567", "cyan"] {
            assert!(bad.parse::<Color>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::CYAN.to_string(), "#00ffff");
        assert_eq!(Font { size_px: 21.0, family: "Ecam" }.to_string(), "21px Ecam");
    }
}
