//! Pixel storage and channel layout.
//!
//! A `PixelBuffer` is the sole mutable storage unit of the crate: a dense,
//! row-major grid of interleaved 8-bit channel samples. Buffers are never
//! resized in place; every geometric operation allocates a fresh one.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Channel layout of a pixel buffer.
///
/// The layout decides how many samples each pixel carries and whether the
/// buffer can represent transparency at all. Operations that allocate a
/// fresh target buffer propagate the source's layout, so transparency
/// capability survives purely opaque-looking transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    /// Three samples per pixel: red, green, blue.
    #[default]
    Rgb,
    /// Four samples per pixel: alpha, red, green, blue.
    Argb,
}

impl ChannelLayout {
    /// Number of samples each pixel carries under this layout.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Argb => 4,
        }
    }

    /// Whether the layout includes an alpha channel.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::Argb)
    }
}

/// A dense grid of pixel samples in row-major order.
///
/// Invariant: `data.len() == width * height * layout.channels()`. The
/// fields stay private so the invariant holds for the buffer's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer with the given dimensions and layout.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if either dimension is zero.
    pub fn allocate(width: u32, height: u32, layout: ChannelLayout) -> Result<PixelBuffer, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize * layout.channels();
        Ok(PixelBuffer {
            width,
            height,
            layout,
            data: vec![0; len],
        })
    }

    /// Wrap raw interleaved samples produced by a decoder.
    pub(crate) fn from_raw(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        data: Vec<u8>,
    ) -> PixelBuffer {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * layout.channels(),
            "Pixel buffer size mismatch"
        );
        PixelBuffer {
            width,
            height,
            layout,
            data,
        }
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout of the stored samples.
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// The interleaved samples in row-major order.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Read the pixel at `(x, y)` as ARGB samples.
    ///
    /// For `Rgb` buffers the alpha sample is reported as 255.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        match self.layout {
            ChannelLayout::Rgb => [255, self.data[i], self.data[i + 1], self.data[i + 2]],
            ChannelLayout::Argb => [
                self.data[i],
                self.data[i + 1],
                self.data[i + 2],
                self.data[i + 3],
            ],
        }
    }

    /// Write the pixel at `(x, y)` from ARGB samples.
    ///
    /// For `Rgb` buffers the alpha sample is dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, argb: [u8; 4]) {
        let i = self.offset(x, y);
        match self.layout {
            ChannelLayout::Rgb => self.data[i..i + 3].copy_from_slice(&argb[1..4]),
            ChannelLayout::Argb => self.data[i..i + 4].copy_from_slice(&argb),
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * self.layout.channels()
    }
}
