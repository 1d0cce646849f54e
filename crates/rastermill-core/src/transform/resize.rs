//! Smooth resizing.

use super::paint;
use crate::error::Error;
use crate::Image;

/// Scale `image` to exactly `width` x `height` with smooth interpolation.
///
/// The target keeps the source's channel layout. Aspect ratio is not
/// preserved; the full source rectangle is mapped onto the full target.
///
/// # Errors
///
/// Returns `Error::InvalidDimension` if either dimension is zero.
pub fn apply_resize(image: &Image, width: u32, height: u32) -> Result<Image, Error> {
    // Fast path: if dimensions match, the smooth scale is the identity
    if image.width() == width && image.height() == height {
        return Ok(image.clone());
    }

    tracing::debug!(width, height, "Applying resize");

    paint(width, height, image.layout(), |ctx| {
        ctx.draw_image_scaled(
            image.buffer(),
            0,
            0,
            width,
            height,
            0,
            0,
            image.width(),
            image.height(),
        );
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{ChannelLayout, PixelBuffer};

    /// Create a gradient test image.
    fn test_image(width: u32, height: u32, layout: ChannelLayout) -> Image {
        let mut buffer = PixelBuffer::allocate(width, height, layout).unwrap();
        for y in 0..height {
            for x in 0..width {
                let r = ((x * 255) / width.max(1)) as u8;
                let g = ((y * 255) / height.max(1)) as u8;
                buffer.set_pixel(x, y, [255, r, g, 128]);
            }
        }
        Image::from_buffer(buffer)
    }

    #[test]
    fn test_resize_exact_dimensions() {
        let image = test_image(100, 50, ChannelLayout::Rgb);
        let resized = image.resize(40, 30).unwrap();

        assert_eq!(resized.width(), 40);
        assert_eq!(resized.height(), 30);
    }

    #[test]
    fn test_resize_ignores_aspect_ratio() {
        let image = test_image(100, 50, ChannelLayout::Rgb);
        let resized = image.resize(25, 80).unwrap();

        assert_eq!(resized.width(), 25);
        assert_eq!(resized.height(), 80);
    }

    #[test]
    fn test_resize_same_dimensions_is_identity() {
        let image = test_image(20, 10, ChannelLayout::Rgb);
        let resized = image.resize(20, 10).unwrap();
        assert_eq!(resized, image);
    }

    #[test]
    fn test_resize_zero_dimension_fails() {
        let image = test_image(10, 10, ChannelLayout::Rgb);
        assert!(matches!(
            image.resize(0, 10),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(matches!(
            image.resize(10, 0),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_resize_preserves_layout() {
        let image = test_image(16, 16, ChannelLayout::Argb);
        let resized = image.resize(8, 8).unwrap();
        assert!(resized.has_alpha());
    }

    #[test]
    fn test_resize_uniform_image_stays_uniform() {
        let mut buffer = PixelBuffer::allocate(9, 9, ChannelLayout::Rgb).unwrap();
        for y in 0..9 {
            for x in 0..9 {
                buffer.set_pixel(x, y, [255, 40, 80, 120]);
            }
        }
        let image = Image::from_buffer(buffer);

        let resized = image.resize(4, 13).unwrap();
        for y in 0..13 {
            for x in 0..4 {
                assert_eq!(resized.pixel(x, y), [255, 40, 80, 120]);
            }
        }
    }

    #[test]
    fn test_upscale_dimensions() {
        let image = test_image(5, 4, ChannelLayout::Rgb);
        let resized = image.resize(50, 40).unwrap();

        assert_eq!(resized.width(), 50);
        assert_eq!(resized.height(), 40);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
