//! The image transformation engine.
//!
//! Every operation follows the same shape: allocate a target buffer,
//! acquire a drawing context over it, run the operation's primitives, and
//! wrap the painted buffer as a new immutable image. The source image is
//! never mutated.
//!
//! # Target Defaults
//!
//! Unless an operation states otherwise, the target buffer reuses the
//! source's width/height and its channel layout, so a transparent-capable
//! source stays transparent-capable through opaque-looking transforms.

mod border;
mod crop;
mod filters;
mod flip;
mod resize;

pub use border::{apply_border, BorderOptions, BorderStyle};
pub use crop::apply_crop;
pub use filters::{
    apply_brightness, apply_color_key, apply_greyscale, apply_invert, COLOR_KEY_MARKER,
};
pub use flip::{apply_flip_horizontal, apply_flip_vertical};
pub use resize::apply_resize;

use crate::buffer::{ChannelLayout, PixelBuffer};
use crate::context::DrawingContext;
use crate::error::Error;
use crate::Image;

/// Allocate a target buffer, run `op` with a drawing context over it, and
/// wrap the result as a new image.
///
/// The context is released when `op` returns, on success and on failure
/// alike.
pub(crate) fn paint<F>(
    width: u32,
    height: u32,
    layout: ChannelLayout,
    op: F,
) -> Result<Image, Error>
where
    F: FnOnce(&mut DrawingContext<'_>) -> Result<(), Error>,
{
    let mut target = PixelBuffer::allocate(width, height, layout)?;
    {
        let mut ctx = DrawingContext::acquire(&mut target);
        op(&mut ctx)?;
    }
    Ok(Image::from_buffer(target))
}
