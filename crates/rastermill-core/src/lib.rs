//! Rastermill Core - Image transformation library
//!
//! This crate provides the core raster transformation functionality for
//! Rastermill: the immutable image value model, the scoped drawing
//! context its operations are built on, and the operation catalog
//! (borders, brightness, color keying, flips, greyscale, negative,
//! smooth resize, cropping).
//!
//! Container decoding/encoding is delegated to the `image` crate, URL
//! fetching to `reqwest`, and on-screen preview to an external
//! [`ImageDisplay`] collaborator. Every operation is synchronous and
//! whole-buffer: a new [`Image`] in, a new [`Image`] out, the source
//! never mutated.

pub mod buffer;
pub mod color;
pub mod context;
pub mod decode;
pub mod display;
pub mod encode;
pub mod error;
pub mod transform;

pub use buffer::{ChannelLayout, PixelBuffer};
pub use color::Color;
pub use display::{CloseHandler, ImageDisplay};
pub use encode::ImageFormat;
pub use error::Error;
pub use transform::{BorderOptions, BorderStyle};

use std::io::{Seek, Write};
use std::path::Path;

/// An immutable raster image backed by exactly one pixel buffer.
///
/// Images are value types: the operation catalog returns new images and
/// never mutates `self`, so an `Image` is safe to share read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    buffer: PixelBuffer,
}

impl Image {
    /// Wrap a pixel buffer produced by an operation or a decoder.
    pub(crate) fn from_buffer(buffer: PixelBuffer) -> Image {
        Image { buffer }
    }

    /// Decode an image from raw container bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Image, Error> {
        decode::from_bytes(bytes)
    }

    /// Decode an image from a file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Image, Error> {
        decode::from_file(path.as_ref())
    }

    /// Fetch and decode an image from a URL.
    pub fn from_url(url: &str) -> Result<Image, Error> {
        decode::from_url(url)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Channel layout of the backing buffer.
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.buffer.layout()
    }

    /// Whether the backing buffer can represent transparency.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.buffer.layout().has_alpha()
    }

    /// Read the pixel at `(x, y)` as ARGB samples.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.pixel(x, y)
    }

    pub(crate) fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Composite this image onto a larger canvas framed by a colored
    /// border. See [`transform::apply_border`].
    pub fn add_border(&self, options: &BorderOptions) -> Result<Image, Error> {
        transform::apply_border(self, options)
    }

    /// Rescale every color component as `out = clamp(in * scale + offset)`.
    pub fn adjust_brightness(&self, scale: f32, offset: f32) -> Result<Image, Error> {
        transform::apply_brightness(self, scale, offset)
    }

    /// Replace pixels matching the key color with the transparency marker.
    pub fn apply_color_key(&self, key: &str) -> Result<Image, Error> {
        transform::apply_color_key(self, key)
    }

    /// Mirror left-to-right.
    pub fn flip_horizontal(&self) -> Result<Image, Error> {
        transform::apply_flip_horizontal(self)
    }

    /// Mirror top-to-bottom.
    pub fn flip_vertical(&self) -> Result<Image, Error> {
        transform::apply_flip_vertical(self)
    }

    /// Convert to luminance-preserving grey.
    pub fn to_greyscale(&self) -> Result<Image, Error> {
        transform::apply_greyscale(self)
    }

    /// Photographic negative.
    pub fn invert(&self) -> Result<Image, Error> {
        transform::apply_invert(self)
    }

    /// Scale to exactly `width` x `height` with smooth interpolation.
    pub fn resize(&self, width: u32, height: u32) -> Result<Image, Error> {
        transform::apply_resize(self, width, height)
    }

    /// Extract the sub-rectangle `(left, top)..(right, bottom)`.
    pub fn crop(&self, left: u32, top: u32, right: u32, bottom: u32) -> Result<Image, Error> {
        transform::apply_crop(self, left, top, right, bottom)
    }

    /// Encode into container bytes for the given identifier (`"png"`,
    /// `"jpg"`, ...).
    pub fn encode(&self, format: &str) -> Result<Vec<u8>, Error> {
        let format = ImageFormat::from_identifier(format)?;
        encode::to_bytes(self, format)
    }

    /// Encode into a writable, seekable sink.
    pub fn save<W: Write + Seek>(&self, format: &str, sink: &mut W) -> Result<(), Error> {
        let format = ImageFormat::from_identifier(format)?;
        encode::write_to(self, format, sink)
    }

    /// Show this image through a display collaborator. Closing the view
    /// terminates the process.
    pub fn preview<D: ImageDisplay + ?Sized>(&self, display: &D) {
        self.preview_with(display, Box::new(|| std::process::exit(0)));
    }

    /// Show this image through a display collaborator with an explicit
    /// close callback.
    pub fn preview_with<D: ImageDisplay + ?Sized>(&self, display: &D, on_close: CloseHandler) {
        display.show(self.clone(), on_close);
    }
}
