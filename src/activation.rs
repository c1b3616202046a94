// SPDX-License-Identifier: MPL-2.0
//! Fullscreen activation gate.
//!
//! Arms the brightness controller while the host is fullscreen and shows a
//! media element. The gate reacts to changes of the reported fullscreen
//! level only: the element is looked up once, when fullscreen is entered,
//! and media appearing or swapped while already fullscreen is only picked up
//! on the next entry.

use crate::application::port::{HostPage, VideoElement};
use crate::brightness::Controller;
use std::time::Instant;

/// Whether wheel input currently adjusts brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationState {
    #[default]
    Inactive,
    Active,
}

/// Effects produced by a fullscreen change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The feature was armed for this element.
    Armed(VideoElement),
    /// The feature was disarmed.
    Disarmed,
}

#[derive(Debug, Clone, Default)]
pub struct Gate {
    state: ActivationState,
    video: Option<VideoElement>,
    /// Last fullscreen level reported by the host.
    fullscreen: bool,
}

impl Gate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ActivationState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == ActivationState::Active
    }

    /// The element captured when the gate was armed.
    #[must_use]
    pub fn video(&self) -> Option<&VideoElement> {
        self.video.as_ref()
    }

    /// Reacts to the host reporting its fullscreen state.
    pub fn on_fullscreen_change(
        &mut self,
        is_fullscreen: bool,
        host: &mut impl HostPage,
        controller: &mut Controller,
        now: Instant,
    ) -> Effect {
        if self.fullscreen == is_fullscreen {
            return Effect::None;
        }
        self.fullscreen = is_fullscreen;

        match (self.state, is_fullscreen) {
            (ActivationState::Inactive, true) => {
                let Some(video) = host.query_video() else {
                    tracing::debug!("fullscreen entered without media; staying inactive");
                    return Effect::None;
                };
                let default_brightness = controller.preferences().default_brightness;
                controller.activate(default_brightness, now);
                host.subscribe_wheel();
                self.state = ActivationState::Active;
                self.video = Some(video.clone());
                tracing::info!(source = %video.source.display(), "brightness control armed");
                Effect::Armed(video)
            }
            (ActivationState::Active, false) => {
                controller.deactivate();
                host.unsubscribe_wheel();
                self.state = ActivationState::Inactive;
                self.video = None;
                tracing::info!("brightness control disarmed");
                Effect::Disarmed
            }
            _ => Effect::None,
        }
    }
}
