//! Axis flips expressed as mirrored scaled blits.
//!
//! A flip is a scaled blit whose source rectangle corners are swapped
//! along the flipped axis, so the destination columns (or rows) map onto
//! the source in reverse order. The mapping is 1:1 per axis, which makes
//! the blit pixel-exact and the double flip an exact identity.

use super::paint;
use crate::error::Error;
use crate::Image;

/// Mirror `image` left-to-right.
pub fn apply_flip_horizontal(image: &Image) -> Result<Image, Error> {
    let (width, height) = (image.width(), image.height());
    paint(width, height, image.layout(), |ctx| {
        ctx.draw_image_scaled(image.buffer(), 0, 0, width, height, width, 0, 0, height);
        Ok(())
    })
}

/// Mirror `image` top-to-bottom.
pub fn apply_flip_vertical(image: &Image) -> Result<Image, Error> {
    let (width, height) = (image.width(), image.height());
    paint(width, height, image.layout(), |ctx| {
        ctx.draw_image_scaled(image.buffer(), 0, 0, width, height, 0, height, width, 0);
        Ok(())
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
