// SPDX-License-Identifier: MPL-2.0
//! The application window as seen by the activation gate.

use crate::application::port::{HostPage, VideoElement};
use iced::widget::image;
use std::path::{Path, PathBuf};

/// Media shown in the window.
#[derive(Debug, Clone)]
pub struct Media {
    pub path: PathBuf,
    pub handle: image::Handle,
}

/// Window-side state the gate reads and drives.
#[derive(Debug, Clone, Default)]
pub struct WindowHost {
    media: Option<Media>,
    listening: bool,
}

impl WindowHost {
    /// Shows `path`, replacing any previous media.
    pub fn load(&mut self, path: &Path) {
        tracing::info!(path = %path.display(), "media loaded");
        self.media = Some(Media {
            path: path.to_path_buf(),
            handle: image::Handle::from_path(path),
        });
    }

    #[must_use]
    pub fn media(&self) -> Option<&Media> {
        self.media.as_ref()
    }

    /// Whether wheel events should currently reach the controller.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl HostPage for WindowHost {
    fn query_video(&self) -> Option<VideoElement> {
        self.media
            .as_ref()
            .map(|media| VideoElement::new(media.path.clone()))
    }

    fn subscribe_wheel(&mut self) {
        self.listening = true;
    }

    fn unsubscribe_wheel(&mut self) {
        self.listening = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_has_no_video() {
        let host = WindowHost::default();
        assert!(host.query_video().is_none());
        assert!(!host.is_listening());
    }

    #[test]
    fn loaded_media_is_the_video() {
        let mut host = WindowHost::default();
        host.load(Path::new("clip.png"));
        assert_eq!(host.query_video(), Some(VideoElement::new("clip.png")));
    }

    #[test]
    fn wheel_subscription_toggles() {
        let mut host = WindowHost::default();
        host.subscribe_wheel();
        assert!(host.is_listening());
        host.unsubscribe_wheel();
        assert!(!host.is_listening());
    }
}
