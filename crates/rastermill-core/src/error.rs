//! Crate-wide error type for transformation operations.

use thiserror::Error;

/// Errors that can occur while transforming, loading, or encoding images.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested buffer dimension is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimension { width: u32, height: u32 },

    /// A color string did not match the rrggbb hex encoding.
    #[error("Invalid color format: expected 6 hex digits, got {0:?}")]
    InvalidColorFormat(String),

    /// A crop rectangle exceeds the source bounds or is non-increasing.
    #[error("Crop bounds ({left}, {top})..({right}, {bottom}) out of range for {width}x{height} image")]
    OutOfBounds {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        width: u32,
        height: u32,
    },

    /// The encode target identifier is unknown to the codec.
    #[error("Unsupported image format: {0:?}")]
    UnsupportedFormat(String),

    /// Decoding or fetching an external source failed.
    #[error("Failed to load image: {0}")]
    LoadFailed(String),

    /// Encoding failed or the sink rejected the write.
    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),

    /// A malformed external locator (e.g. URL) was supplied.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
