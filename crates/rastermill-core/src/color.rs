//! RGB color values parsed from 6-hex-digit strings.
//!
//! The `"rrggbb"` encoding is the only color input surface of the crate;
//! there is no leading marker character and no alpha component.

use crate::error::Error;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a color from exactly 6 hexadecimal digits (`"rrggbb"`).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColorFormat` for any input that is not
    /// exactly 6 hex digits.
    pub fn from_hex(hex: &str) -> Result<Color, Error> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat(hex.to_string()));
        }

        let component = |range| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| Error::InvalidColorFormat(hex.to_string()))
        };

        Ok(Color {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }

    /// A brighter variant of this color, used for relief highlight edges.
    pub fn highlight(self) -> Color {
        let up = |c: u8| ((c as u16 * 10) / 7).min(255) as u8;
        Color {
            r: up(self.r),
            g: up(self.g),
            b: up(self.b),
        }
    }

    /// A darker variant of this color, used for relief shadow edges.
    pub fn shadow(self) -> Color {
        let down = |c: u8| (c as u16 * 7 / 10) as u8;
        Color {
            r: down(self.r),
            g: down(self.g),
            b: down(self.b),
        }
    }
}
