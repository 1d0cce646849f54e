//! Border compositing.

use serde::{Deserialize, Serialize};

use super::paint;
use crate::color::Color;
use crate::error::Error;
use crate::Image;

/// Visual style of an added border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Flat single-color frame.
    #[default]
    Plain,
    /// Relief frame that appears to rise out of the image.
    Raised,
    /// Relief frame that appears sunk into the image.
    Etched,
}

/// Options for [`apply_border`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderOptions {
    /// Border thickness in pixels on each side.
    pub width: u32,
    /// Border color as 6 hex digits (`"rrggbb"`).
    pub color: String,
    /// Flat or relief rendering.
    pub style: BorderStyle,
}

impl Default for BorderOptions {
    fn default() -> Self {
        BorderOptions {
            width: 2,
            color: "000000".to_string(),
            style: BorderStyle::Plain,
        }
    }
}

/// Composite `image` onto a larger canvas framed by a colored border.
///
/// The target grows by `options.width` pixels on every side and keeps the
/// source's channel layout. The whole canvas is filled with the border
/// color first (flat or relief per the style), then the source is blitted
/// at the border offset.
///
/// # Errors
///
/// Returns `Error::InvalidColorFormat` if `options.color` is not 6 hex
/// digits.
pub fn apply_border(image: &Image, options: &BorderOptions) -> Result<Image, Error> {
    let color = Color::from_hex(&options.color)?;
    let border = options.width;
    let width = image.width() + 2 * border;
    let height = image.height() + 2 * border;

    tracing::debug!(width = border, style = ?options.style, "Applying border");

    paint(width, height, image.layout(), |ctx| {
        ctx.set_color(color);
        match options.style {
            BorderStyle::Plain => ctx.fill_rect(0, 0, width, height),
            BorderStyle::Raised => ctx.fill_rect_3d(0, 0, width, height, true),
            BorderStyle::Etched => ctx.fill_rect_3d(0, 0, width, height, false),
        }
        ctx.draw_image(image.buffer(), border as i64, border as i64);
        Ok(())
    })
}
