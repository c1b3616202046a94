// SPDX-License-Identifier: MPL-2.0
//! Host page port definition.
//!
//! The host owns the media element and the input events. The activation gate
//! asks it for the element when fullscreen is entered and tells it when wheel
//! events should be delivered.

use std::path::PathBuf;

/// The media element whose brightness is adjusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoElement {
    /// Where the element's content comes from.
    pub source: PathBuf,
}

impl VideoElement {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Port for the page (or window) hosting the media.
///
/// # Example
///
/// ```
/// use fullscreen_brightness::application::port::{HostPage, VideoElement};
///
/// struct Page {
///     video: Option<VideoElement>,
///     listening: bool,
/// }
///
/// impl HostPage for Page {
///     fn query_video(&self) -> Option<VideoElement> {
///         self.video.clone()
///     }
///
///     fn subscribe_wheel(&mut self) {
///         self.listening = true;
///     }
///
///     fn unsubscribe_wheel(&mut self) {
///         self.listening = false;
///     }
/// }
/// ```
pub trait HostPage {
    /// Returns the single media element currently shown, if any.
    fn query_video(&self) -> Option<VideoElement>;

    /// Starts delivering wheel events to the brightness controller.
    fn subscribe_wheel(&mut self);

    /// Stops delivering wheel events.
    fn unsubscribe_wheel(&mut self);
}
