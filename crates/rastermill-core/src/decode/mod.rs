//! Image loading for Rastermill.
//!
//! This module provides functionality for:
//! - Decoding in-memory bytes and files through the external codec
//! - Fetching and decoding images from URLs
//!
//! Decoded buffers are normalized to the two channel layouts this core
//! works with: RGB when the decoded color type carries no alpha, ARGB
//! otherwise.
//!
//! # Examples
//!
//! ```ignore
//! use rastermill_core::Image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = Image::from_bytes(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod codec;
mod fetch;

pub use codec::{from_bytes, from_file};
pub use fetch::from_url;
