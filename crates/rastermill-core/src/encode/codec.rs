//! Container encoding through the external codec.

use std::io::{Cursor, Seek, Write};

use image::{DynamicImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::buffer::{ChannelLayout, PixelBuffer};
use crate::error::Error;
use crate::Image;

/// Container formats known to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    WebP,
}

impl ImageFormat {
    /// Map a container identifier (`"png"`, `"jpg"`, ...) to a format.
    ///
    /// Matching is case-insensitive and accepts the common short and long
    /// identifiers (`"jpg"`/`"jpeg"`, `"tif"`/`"tiff"`).
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedFormat` for identifiers the codec does
    /// not know.
    pub fn from_identifier(id: &str) -> Result<ImageFormat, Error> {
        match id.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "gif" => Ok(ImageFormat::Gif),
            "bmp" => Ok(ImageFormat::Bmp),
            "tif" | "tiff" => Ok(ImageFormat::Tiff),
            "webp" => Ok(ImageFormat::WebP),
            _ => Err(Error::UnsupportedFormat(id.to_string())),
        }
    }

    fn to_codec_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
            ImageFormat::Tiff => image::ImageFormat::Tiff,
            ImageFormat::WebP => image::ImageFormat::WebP,
        }
    }
}

/// Encode `image` into container bytes.
///
/// # Errors
///
/// Returns `Error::EncodeFailed` if the codec rejects the image, e.g. an
/// alpha-carrying buffer handed to a container without alpha support.
pub fn to_bytes(image: &Image, format: ImageFormat) -> Result<Vec<u8>, Error> {
    let mut sink = Cursor::new(Vec::new());
    write_to(image, format, &mut sink)?;
    Ok(sink.into_inner())
}

/// Encode `image` into any writable, seekable sink.
///
/// # Errors
///
/// Returns `Error::EncodeFailed` on codec or I/O failure; the sink may
/// have been partially written in that case.
pub fn write_to<W: Write + Seek>(
    image: &Image,
    format: ImageFormat,
    sink: &mut W,
) -> Result<(), Error> {
    tracing::debug!(format = ?format, "Encoding image");

    let codec_image = to_codec_image(image.buffer())?;
    codec_image
        .write_to(sink, format.to_codec_format())
        .map_err(|e| Error::EncodeFailed(e.to_string()))
}

/// Hand the buffer to the codec in its native sample order.
fn to_codec_image(buffer: &PixelBuffer) -> Result<DynamicImage, Error> {
    let (width, height) = (buffer.width(), buffer.height());
    let converted = match buffer.layout() {
        ChannelLayout::Rgb => {
            RgbImage::from_raw(width, height, buffer.data().to_vec()).map(DynamicImage::ImageRgb8)
        }
        ChannelLayout::Argb => {
            let mut data = Vec::with_capacity(buffer.data().len());
            for pixel in buffer.data().chunks_exact(4) {
                data.extend_from_slice(&[pixel[1], pixel[2], pixel[3], pixel[0]]);
            }
            RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8)
        }
    };
    converted.ok_or_else(|| Error::EncodeFailed("pixel buffer size mismatch".to_string()))
}
