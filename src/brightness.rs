// SPDX-License-Identifier: MPL-2.0
//! Brightness controller.
//!
//! Owns the brightness level while fullscreen is active, steps it on wheel
//! input and exposes the values the view applies: media opacity, indicator
//! icon opacity and the "NN%" label. It also drives the level indicator
//! through its [`overlay::Manager`].

use crate::config::FULL_BRIGHTNESS;
use crate::domain::brightness::format_percentage;
use crate::overlay;
use crate::preferences::Preferences;
use std::time::Instant;

/// Brightness while the feature is armed.
///
/// `min <= current <= max` holds after every mutation as long as the range is
/// not inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessState {
    pub current: i32,
    pub step: i32,
    pub min: i32,
    pub max: i32,
}

/// Applies the lower bound, then the upper bound.
///
/// With an inverted range (`min > max`) the upper bound wins. Unlike
/// [`i32::clamp`] this never panics.
#[must_use]
pub fn clamp_to_range(value: i32, min: i32, max: i32) -> i32 {
    let mut value = value;
    if value < min {
        value = min;
    }
    if value > max {
        value = max;
    }
    value
}

/// Rounds `value` down to a multiple of `step`, measured from zero.
#[must_use]
pub fn round_to_step(value: i32, step: i32) -> i32 {
    value - value % step.max(1)
}

impl BrightnessState {
    fn settle(value: i32, preferences: &Preferences) -> Self {
        let step = preferences.step.max(1);
        Self {
            current: clamp_to_range(
                round_to_step(value, step),
                preferences.min,
                preferences.max,
            ),
            step,
            min: preferences.min,
            max: preferences.max,
        }
    }

    /// Moves one step in the direction of `delta_y`.
    ///
    /// Positive deltas (wheel down) darken, negative ones brighten. Does
    /// nothing at the bound being pushed against.
    fn scroll(&mut self, delta_y: f32) {
        if delta_y > 0.0 && self.current > self.min {
            self.current = self.current.saturating_sub(self.step).max(self.min);
        } else if delta_y < 0.0 && self.current < self.max {
            self.current = self.current.saturating_add(self.step).min(self.max);
        }
    }
}

/// Brightness controller.
#[derive(Debug, Clone)]
pub struct Controller {
    preferences: Preferences,
    state: Option<BrightnessState>,
    applied: i32,
    overlay: overlay::Manager,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}

impl Controller {
    #[must_use]
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            state: None,
            applied: FULL_BRIGHTNESS,
            overlay: overlay::Manager::new(preferences.overlay),
        }
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Brightness state, `None` while inactive.
    #[must_use]
    pub fn state(&self) -> Option<&BrightnessState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Arms the controller at `default_value`, rounded to the step and
    /// clamped into range, and always presents the indicator.
    pub fn activate(&mut self, default_value: i32, now: Instant) {
        let state = BrightnessState::settle(default_value, &self.preferences);
        self.state = Some(state);
        self.overlay.attach();
        self.apply(state.current);
        self.overlay.present(now);
        tracing::debug!(current = state.current, "brightness armed");
    }

    /// Steps the brightness for one wheel event.
    ///
    /// Ignored while inactive.
    pub fn on_scroll(&mut self, delta_y: f32, now: Instant) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.scroll(delta_y);
        let current = state.current;
        tracing::trace!(delta_y, current, "brightness scrolled");

        self.apply(current);
        if self.preferences.overlay.enabled || current != FULL_BRIGHTNESS {
            self.overlay.present(now);
        }
    }

    /// Disarms the controller, restores full brightness and removes the
    /// indicator.
    pub fn deactivate(&mut self) {
        self.state = None;
        self.apply(FULL_BRIGHTNESS);
        self.overlay.detach();
        tracing::debug!("brightness disarmed");
    }

    /// Installs freshly resolved preferences.
    ///
    /// An armed level is re-rounded to the new step and re-clamped into the
    /// new bounds.
    pub fn reconfigure(&mut self, preferences: Preferences) {
        self.preferences = preferences;
        self.overlay.set_preferences(preferences.overlay);
        if let Some(state) = self.state {
            let settled = BrightnessState::settle(state.current, &preferences);
            self.state = Some(settled);
            self.apply(settled.current);
        }
    }

    /// Runs the indicator's timers up to `now`.
    pub fn advance(&mut self, now: Instant) {
        self.overlay.advance(now);
    }

    #[must_use]
    pub fn overlay(&self) -> &overlay::Manager {
        &self.overlay
    }

    /// Last applied brightness, `100` while inactive.
    #[must_use]
    pub fn applied(&self) -> i32 {
        self.applied
    }

    /// Opacity of the media element.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn video_opacity(&self) -> f32 {
        self.applied as f32 / FULL_BRIGHTNESS as f32
    }

    /// Opacity of the indicator icon, equal to the media opacity.
    #[must_use]
    pub fn icon_opacity(&self) -> f32 {
        self.video_opacity()
    }

    /// Text shown next to the icon.
    #[must_use]
    pub fn label(&self) -> String {
        format_percentage(self.applied)
    }

    fn apply(&mut self, value: i32) {
        self.applied = value;
    }
}
