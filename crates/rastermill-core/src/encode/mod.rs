//! Image encoding for Rastermill.
//!
//! This module provides functionality for:
//! - Mapping container identifier strings to formats the codec knows
//! - Encoding pixel buffers into container bytes or writable sinks
//!
//! Unknown identifiers are rejected with an explicit error instead of
//! silently falling back to a default container.

mod codec;

pub use codec::{to_bytes, write_to, ImageFormat};
