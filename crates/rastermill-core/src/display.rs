//! Preview display collaborator contract.
//!
//! The core owns no windowing; showing an image on screen is delegated
//! to an external collaborator implementing [`ImageDisplay`]. The only
//! cross-boundary concern is the close callback, which the collaborator
//! may invoke from its own UI thread.

use crate::Image;

/// Callback invoked by the display collaborator when its view is closed.
///
/// Must be safe to call from the collaborator's thread.
pub type CloseHandler = Box<dyn FnOnce() + Send>;

/// An external collaborator capable of showing an image on screen.
pub trait ImageDisplay {
    /// Show `image`, invoking `on_close` once the user dismisses the view.
    fn show(&self, image: Image, on_close: CloseHandler);
}
