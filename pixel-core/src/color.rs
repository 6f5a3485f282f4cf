use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PaintError;

/// An opaque RGB color.
///
/// Formats as the CSS computed form `rgb(r, g, b)`, which is also what the
/// browser reports back for an element's `background-color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Empty-cell color. Never a palette entry.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Build a color from the low 24 bits of `v` (`0xRRGGBB`).
    pub const fn from_u24(v: u32) -> Self {
        Color {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    pub const fn to_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// True for the two colors the palette reserves (black at slot 0, white never).
    pub fn is_reserved(self) -> bool {
        self == Color::BLACK || self == Color::WHITE
    }

    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.to_u24())
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(v: (u8, u8, u8)) -> Self {
        Color::rgb(v.0, v.1, v.2)
    }
}

impl FromStr for Color {
    type Err = PaintError;

    /// Accepts `rgb(r, g, b)` and `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || PaintError::InvalidColor(s.to_string());
        let t = s.trim();
        if let Some(hex) = t.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(bad());
            }
            let v = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
            return Ok(Color::from_u24(v));
        }
        let inner = t
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(bad)?;
        let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Color::rgb(r, g, b)),
            _ => Err(bad()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_like_css_computed_style() {
        assert_eq!(Color::WHITE.to_string(), "rgb(255, 255, 255)");
        assert_eq!(Color::BLACK.to_string(), "rgb(0, 0, 0)");
        assert_eq!(Color::rgb(12, 200, 7).to_string(), "rgb(12, 200, 7)");
    }

    #[test]
    fn parses_css_and_hex_forms() {
        assert_eq!("rgb(1, 2, 3)".parse::<Color>(), Ok(Color::rgb(1, 2, 3)));
        assert_eq!("#ff8000".parse::<Color>(), Ok(Color::rgb(255, 128, 0)));
        assert!("rgb(1, 2)".parse::<Color>().is_err());
        assert!("rgb(1, 2, 300)".parse::<Color>().is_err());
        assert!("#fff".parse::<Color>().is_err());
        assert!("white".parse::<Color>().is_err());
    }

    #[test]
    fn u24_packing() {
        let c = Color::from_u24(0x12_34_56);
        assert_eq!(c, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(c.to_u24(), 0x12_34_56);
        assert_eq!(c.to_hex(), "#123456");
    }
}
