//! URL fetching through the external network collaborator.

use super::codec::from_bytes;
use crate::error::Error;
use crate::Image;

/// Fetch and decode an image from a URL.
///
/// The request blocks the calling thread until the body is downloaded;
/// the core performs no retries.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` for a malformed URL and
/// `Error::LoadFailed` for transport, status, or decode failures.
pub fn from_url(url: &str) -> Result<Image, Error> {
    tracing::debug!(url, "Fetching image");

    let response = reqwest::blocking::get(url).map_err(|e| {
        if e.is_builder() {
            Error::InvalidArgument(format!("malformed url {url:?}: {e}"))
        } else {
            Error::LoadFailed(e.to_string())
        }
    })?;

    let response = response
        .error_for_status()
        .map_err(|e| Error::LoadFailed(e.to_string()))?;

    let bytes = response
        .bytes()
        .map_err(|e| Error::LoadFailed(e.to_string()))?;

    from_bytes(&bytes)
}
