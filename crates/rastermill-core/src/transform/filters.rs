//! Per-pixel filters: brightness rescale, greyscale, negative, color key.
//!
//! The tonal filters share one point-op helper that copies the source
//! through a drawing context and then applies a component function to the
//! color channels of every pixel. Alpha samples pass through untouched.

use crate::buffer::{ChannelLayout, PixelBuffer};
use crate::color::Color;
use crate::context::DrawingContext;
use crate::error::Error;
use crate::Image;

/// ITU-R BT.709 coefficient for red in luminance calculation.
const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for green in luminance calculation.
const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for blue in luminance calculation.
const LUMINANCE_B: f32 = 0.0722;

/// Marker value written over pixels that match the color key, in ARGB
/// order. The stored alpha is zero; the color channels carry the marker
/// tone rather than the keyed color.
pub const COLOR_KEY_MARKER: [u8; 4] = [0x00, 0x8F, 0x1C, 0x1C];

/// Rescale every color component as `out = clamp(in * scale + offset)`.
///
/// The alpha channel, if present, is untouched. Out-of-range results
/// clamp to 0..=255, never wrap. `(1.0, 0.0)` is the exact identity.
pub fn apply_brightness(image: &Image, scale: f32, offset: f32) -> Result<Image, Error> {
    // Fast path: the identity rescale copies bit-exactly
    if scale == 1.0 && offset == 0.0 {
        return Ok(image.clone());
    }
    map_components(image, |c| {
        (c as f32 * scale + offset).clamp(0.0, 255.0).round() as u8
    })
}

/// Convert to luminance-preserving grey: every color channel becomes the
/// pixel's ITU-R BT.709 luminance. Alpha is untouched.
pub fn apply_greyscale(image: &Image) -> Result<Image, Error> {
    map_pixels(image, |[a, r, g, b]| {
        let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
        let grey = lum.clamp(0.0, 255.0).round() as u8;
        [a, grey, grey, grey]
    })
}

/// Photographic negative: every color component becomes `255 - in`.
/// Alpha is untouched. Applying twice restores the original exactly.
pub fn apply_invert(image: &Image) -> Result<Image, Error> {
    map_components(image, |c| 255 - c)
}

/// Replace every pixel whose RGB exactly equals the key color with the
/// fixed marker value [`COLOR_KEY_MARKER`].
///
/// The target is always ARGB regardless of the source layout; the source
/// is blitted opaquely first, then matching pixels are rewritten. Only
/// exact equality matches; there is no tolerance.
///
/// # Errors
///
/// Returns `Error::InvalidColorFormat` if `key` is not 6 hex digits.
pub fn apply_color_key(image: &Image, key: &str) -> Result<Image, Error> {
    let key = Color::from_hex(key)?;

    tracing::debug!(r = key.r, g = key.g, b = key.b, "Applying color key");

    let mut target = PixelBuffer::allocate(image.width(), image.height(), ChannelLayout::Argb)?;
    {
        let mut ctx = DrawingContext::acquire(&mut target);
        ctx.draw_image(image.buffer(), 0, 0);
    }

    for pixel in target.data_mut().chunks_exact_mut(4) {
        if pixel[1] == key.r && pixel[2] == key.g && pixel[3] == key.b {
            pixel.copy_from_slice(&COLOR_KEY_MARKER);
        }
    }
    Ok(Image::from_buffer(target))
}

/// Copy `image` into a same-shape target and apply `op` to every color
/// component, leaving alpha samples untouched.
fn map_components<F>(image: &Image, op: F) -> Result<Image, Error>
where
    F: Fn(u8) -> u8,
{
    map_pixels(image, |[a, r, g, b]| [a, op(r), op(g), op(b)])
}

/// Copy `image` into a same-shape target and apply `op` to every pixel,
/// given and returning ARGB samples.
fn map_pixels<F>(image: &Image, op: F) -> Result<Image, Error>
where
    F: Fn([u8; 4]) -> [u8; 4],
{
    let layout = image.layout();
    let mut target = PixelBuffer::allocate(image.width(), image.height(), layout)?;
    {
        let mut ctx = DrawingContext::acquire(&mut target);
        ctx.draw_image(image.buffer(), 0, 0);
    }

    let has_alpha = layout.has_alpha();
    for pixel in target.data_mut().chunks_exact_mut(layout.channels()) {
        let argb = if has_alpha {
            [pixel[0], pixel[1], pixel[2], pixel[3]]
        } else {
            [255, pixel[0], pixel[1], pixel[2]]
        };
        let mapped = op(argb);
        if has_alpha {
            pixel.copy_from_slice(&mapped);
        } else {
            pixel.copy_from_slice(&mapped[1..4]);
        }
    }
    Ok(Image::from_buffer(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image with a fixed pixel pattern.
    fn test_image(width: u32, height: u32, layout: ChannelLayout) -> Image {
        let mut buffer = PixelBuffer::allocate(width, height, layout).unwrap();
        for y in 0..height {
            for x in 0..width {
                let v = ((x * 13 + y * 29) % 256) as u8;
                buffer.set_pixel(x, y, [200, v, v.wrapping_add(40), v.wrapping_add(90)]);
            }
        }
        Image::from_buffer(buffer)
    }

    #[test]
    fn test_brightness_identity() {
        let image = test_image(6, 6, ChannelLayout::Rgb);
        let out = image.adjust_brightness(1.0, 0.0).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_brightness_offset() {
        let mut buffer = PixelBuffer::allocate(1, 1, ChannelLayout::Rgb).unwrap();
        buffer.set_pixel(0, 0, [255, 10, 20, 30]);
        let image = Image::from_buffer(buffer);

        let out = image.adjust_brightness(1.0, 5.0).unwrap();
        assert_eq!(out.pixel(0, 0), [255, 15, 25, 35]);
    }

    #[test]
    fn test_brightness_clamps_high() {
        let mut buffer = PixelBuffer::allocate(1, 1, ChannelLayout::Rgb).unwrap();
        buffer.set_pixel(0, 0, [255, 200, 10, 128]);
        let image = Image::from_buffer(buffer);

        let out = image.adjust_brightness(2.0, 0.0).unwrap();
        assert_eq!(out.pixel(0, 0), [255, 255, 20, 255]);
    }

    #[test]
    fn test_brightness_clamps_low() {
        let mut buffer = PixelBuffer::allocate(1, 1, ChannelLayout::Rgb).unwrap();
        buffer.set_pixel(0, 0, [255, 5, 100, 200]);
        let image = Image::from_buffer(buffer);

        let out = image.adjust_brightness(1.0, -50.0).unwrap();
        assert_eq!(out.pixel(0, 0), [255, 0, 50, 150]);
    }

    #[test]
    fn test_brightness_leaves_alpha_untouched() {
        let mut buffer = PixelBuffer::allocate(1, 1, ChannelLayout::Argb).unwrap();
        buffer.set_pixel(0, 0, [77, 10, 20, 30]);
        let image = Image::from_buffer(buffer);

        let out = image.adjust_brightness(2.0, 10.0).unwrap();
        assert_eq!(out.pixel(0, 0), [77, 30, 50, 70]);
    }

    #[test]
    fn test_greyscale_flattens_channels() {
        let mut buffer = PixelBuffer::allocate(1, 1, ChannelLayout::Rgb).unwrap();
        buffer.set_pixel(0, 0, [255, 255, 0, 0]);
        let image = Image::from_buffer(buffer);

        let out = image.to_greyscale().unwrap();
        let [_, r, g, b] = out.pixel(0, 0);
        assert_eq!(r, g);
        assert_eq!(g, b);
        // 0.2126 * 255 rounds to 54
        assert_eq!(r, 54);
    }

    #[test]
    fn test_greyscale_preserves_grey() {
        let mut buffer = PixelBuffer::allocate(1, 1, ChannelLayout::Rgb).unwrap();
        buffer.set_pixel(0, 0, [255, 128, 128, 128]);
        let image = Image::from_buffer(buffer);

        let out = image.to_greyscale().unwrap();
        assert_eq!(out.pixel(0, 0), [255, 128, 128, 128]);
    }

    #[test]
    fn test_greyscale_leaves_alpha_untouched() {
        let mut buffer = PixelBuffer::allocate(1, 1, ChannelLayout::Argb).unwrap();
        buffer.set_pixel(0, 0, [42, 200, 100, 50]);
        let image = Image::from_buffer(buffer);

        let out = image.to_greyscale().unwrap();
        assert_eq!(out.pixel(0, 0)[0], 42);
    }

    #[test]
    fn test_invert_involution() {
        let image = test_image(7, 5, ChannelLayout::Rgb);
        let round_trip = image.invert().unwrap().invert().unwrap();
        assert_eq!(round_trip, image);
    }

    #[test]
    fn test_invert_values() {
        let mut buffer = PixelBuffer::allocate(1, 1, ChannelLayout::Argb).unwrap();
        buffer.set_pixel(0, 0, [128, 0, 100, 255]);
        let image = Image::from_buffer(buffer);

        let out = image.invert().unwrap();
        assert_eq!(out.pixel(0, 0), [128, 255, 155, 0]);
    }

    #[test]
    fn test_color_key_replaces_exact_matches() {
        let mut buffer = PixelBuffer::allocate(2, 1, ChannelLayout::Rgb).unwrap();
        buffer.set_pixel(0, 0, [255, 0, 255, 0]);
        buffer.set_pixel(1, 0, [255, 0, 254, 0]);
        let image = Image::from_buffer(buffer);

        let keyed = image.apply_color_key("00ff00").unwrap();
        assert!(keyed.has_alpha());
        assert_eq!(keyed.pixel(0, 0), COLOR_KEY_MARKER);
        // Near-miss is untouched (and opaque after the blit)
        assert_eq!(keyed.pixel(1, 0), [255, 0, 254, 0]);
    }

    #[test]
    fn test_color_key_invalid_hex() {
        let image = test_image(2, 2, ChannelLayout::Rgb);
        assert!(matches!(
            image.apply_color_key("nothex"),
            Err(Error::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn test_color_key_output_is_argb_for_rgb_source() {
        let image = test_image(3, 3, ChannelLayout::Rgb);
        let keyed = image.apply_color_key("123456").unwrap();
        assert!(keyed.has_alpha());
        assert_eq!(keyed.width(), 3);
        assert_eq!(keyed.height(), 3);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
