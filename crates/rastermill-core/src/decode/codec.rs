//! Byte and file decoding through the external codec.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::buffer::{ChannelLayout, PixelBuffer};
use crate::error::Error;
use crate::Image;

/// Decode an image from raw container bytes.
///
/// The container format is sniffed from the content; any format the codec
/// was built with is accepted.
///
/// # Errors
///
/// Returns `Error::LoadFailed` if the bytes are not a decodable image.
pub fn from_bytes(bytes: &[u8]) -> Result<Image, Error> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::LoadFailed(e.to_string()))?;

    let decoded = reader
        .decode()
        .map_err(|e| Error::LoadFailed(e.to_string()))?;

    Ok(Image::from_buffer(buffer_from_decoded(decoded)))
}

/// Decode an image from a file on disk.
///
/// # Errors
///
/// Returns `Error::LoadFailed` if the file cannot be read or decoded.
pub fn from_file(path: &Path) -> Result<Image, Error> {
    let bytes = std::fs::read(path).map_err(|e| Error::LoadFailed(e.to_string()))?;
    from_bytes(&bytes)
}

/// Normalize a decoded image into an RGB or ARGB pixel buffer.
///
/// The decoded color type's alpha capability, not per-pixel alpha values,
/// decides the layout.
fn buffer_from_decoded(decoded: DynamicImage) -> PixelBuffer {
    if decoded.color().has_alpha() {
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for pixel in rgba.pixels() {
            data.extend_from_slice(&[pixel[3], pixel[0], pixel[1], pixel[2]]);
        }
        PixelBuffer::from_raw(width, height, ChannelLayout::Argb, data)
    } else {
        let rgb = decoded.into_rgb8();
        let (width, height) = rgb.dimensions();
        PixelBuffer::from_raw(width, height, ChannelLayout::Rgb, rgb.into_raw())
    }
}
