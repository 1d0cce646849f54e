//! Sub-rectangle extraction.

use super::paint;
use crate::error::Error;
use crate::Image;

/// Extract the sub-rectangle `(left, top)..(right, bottom)` as a new image.
///
/// The bounds are half-open pixel coordinates: `left < right <= width` and
/// `top < bottom <= height`. The result shares no storage with the source;
/// the region is copied through a clipped blit at a negative offset.
///
/// # Errors
///
/// Returns `Error::OutOfBounds` if the rectangle exceeds the source bounds
/// or is non-increasing along either axis.
pub fn apply_crop(
    image: &Image,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
) -> Result<Image, Error> {
    if left >= right || top >= bottom || right > image.width() || bottom > image.height() {
        return Err(Error::OutOfBounds {
            left,
            top,
            right,
            bottom,
            width: image.width(),
            height: image.height(),
        });
    }

    paint(right - left, bottom - top, image.layout(), |ctx| {
        ctx.draw_image(image.buffer(), -(left as i64), -(top as i64));
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{ChannelLayout, PixelBuffer};

    /// Create a test image where each pixel encodes its own coordinates.
    fn test_image(width: u32, height: u32) -> Image {
        let mut buffer = PixelBuffer::allocate(width, height, ChannelLayout::Rgb).unwrap();
        for y in 0..height {
            for x in 0..width {
                buffer.set_pixel(x, y, [255, x as u8, y as u8, 0]);
            }
        }
        Image::from_buffer(buffer)
    }

    #[test]
    fn test_crop_region_values() {
        let image = test_image(10, 10);
        let cropped = image.crop(2, 3, 7, 9).unwrap();

        assert_eq!(cropped.width(), 5);
        assert_eq!(cropped.height(), 6);
        for y in 0..6 {
            for x in 0..5 {
                assert_eq!(cropped.pixel(x, y), image.pixel(x + 2, y + 3));
            }
        }
    }

    #[test]
    fn test_full_frame_crop_is_identity() {
        let image = test_image(8, 5);
        let cropped = image.crop(0, 0, 8, 5).unwrap();
        assert_eq!(cropped, image);
    }

    #[test]
    fn test_crop_is_idempotent_on_own_output() {
        let image = test_image(10, 10);
        let once = image.crop(1, 1, 9, 9).unwrap();
        let twice = once.crop(0, 0, once.width(), once.height()).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_degenerate_rect_rejected() {
        let image = test_image(20, 20);
        // left == right
        assert!(matches!(
            image.crop(5, 5, 5, 10),
            Err(Error::OutOfBounds { .. })
        ));
        // top > bottom
        assert!(matches!(
            image.crop(0, 10, 5, 5),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_exceeding_bounds_rejected() {
        let image = test_image(10, 10);
        assert!(matches!(
            image.crop(0, 0, 11, 10),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            image.crop(2, 2, 10, 11),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_crop_shares_no_storage() {
        let image = test_image(6, 6);
        let cropped = image.crop(1, 1, 5, 5).unwrap();

        // Source still intact and independent of the crop
        assert_eq!(image.width(), 6);
        assert_eq!(image.pixel(0, 0), [255, 0, 0, 0]);
        assert_eq!(cropped.pixel(0, 0), image.pixel(1, 1));
    }

    #[test]
    fn test_crop_preserves_layout() {
        let mut buffer = PixelBuffer::allocate(4, 4, ChannelLayout::Argb).unwrap();
        buffer.set_pixel(2, 2, [9, 1, 2, 3]);
        let image = Image::from_buffer(buffer);

        let cropped = image.crop(1, 1, 4, 4).unwrap();
        assert!(cropped.has_alpha());
        assert_eq!(cropped.pixel(1, 1), [9, 1, 2, 3]);
    }

    #[test]
    fn test_crop_then_reembed_reproduces_region() {
        use crate::transform::{BorderOptions, BorderStyle};

        let image = test_image(10, 10);
        let cropped = image.crop(2, 2, 8, 8).unwrap();

        // Re-embedding through a border blit puts the region back at its
        // original offset
        let options = BorderOptions {
            width: 2,
            color: "000000".to_string(),
            style: BorderStyle::Plain,
        };
        let reembedded = cropped.add_border(&options).unwrap();
        for y in 2..8 {
            for x in 2..8 {
                assert_eq!(reembedded.pixel(x, y), image.pixel(x, y));
            }
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
