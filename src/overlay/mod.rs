// SPDX-License-Identifier: MPL-2.0
//! Level indicator lifecycle.
//!
//! The indicator is shown at full opacity, held for a while, then faded out
//! in fixed ticks:
//!
//! ```text
//! Hidden --present--> Holding --hold elapsed--> Fading --budget spent--> Hidden
//!            ^                                     |
//!            +--------------present----------------+
//! ```
//!
//! Every phase carries its own timer handle, so entering a new phase drops
//! (cancels) whatever timer the previous one had armed. Time only moves when
//! the owner calls [`Manager::advance`].

pub mod timer;

use crate::config::OVERLAY_FADE_TICK_MS;
use crate::domain::brightness::OverlayDuration;
use std::time::{Duration, Instant};
use timer::{Interval, OneShot};

/// Whether the indicator is shown and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayPreferences {
    pub enabled: bool,
    pub hold_ms: u32,
    pub fade_ms: u32,
}

impl From<OverlayDuration> for OverlayPreferences {
    fn from(duration: OverlayDuration) -> Self {
        match duration.timings() {
            Some(timings) => Self {
                enabled: true,
                hold_ms: timings.hold_ms,
                fade_ms: timings.fade_ms,
            },
            // Timings are irrelevant while disabled; keep them valid anyway.
            None => {
                let timings = crate::domain::brightness::OverlayTimings::default();
                Self {
                    enabled: false,
                    hold_ms: timings.hold_ms,
                    fade_ms: timings.fade_ms,
                }
            }
        }
    }
}

impl Default for OverlayPreferences {
    fn default() -> Self {
        OverlayDuration::default().into()
    }
}

/// Observable phase of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Hidden,
    Holding,
    Fading,
}

#[derive(Debug, Clone, Copy, Default)]
enum Phase {
    #[default]
    Hidden,
    Holding {
        hold: OneShot,
    },
    Fading {
        tick: Interval,
        budget_ms: u32,
    },
}

fn tick_period() -> Duration {
    Duration::from_millis(u64::from(OVERLAY_FADE_TICK_MS))
}

/// Owns the indicator's phase, opacity and timers.
#[derive(Debug, Clone, Default)]
pub struct Manager {
    preferences: OverlayPreferences,
    phase: Phase,
    opacity: f32,
    attached: bool,
}

impl Manager {
    #[must_use]
    pub fn new(preferences: OverlayPreferences) -> Self {
        Self {
            preferences,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn preferences(&self) -> OverlayPreferences {
        self.preferences
    }

    /// Replaces the timings. A running hold or fade keeps its armed timer;
    /// disabling the indicator hides it at once.
    pub fn set_preferences(&mut self, preferences: OverlayPreferences) {
        self.preferences = preferences;
        if !preferences.enabled {
            self.reset();
        }
    }

    /// Places the indicator next to the media. It starts hidden.
    pub fn attach(&mut self) {
        self.reset();
        self.attached = true;
    }

    /// Removes the indicator whatever its phase, cancelling both timers.
    pub fn detach(&mut self) {
        self.reset();
        self.attached = false;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        match self.phase {
            Phase::Hidden => OverlayPhase::Hidden,
            Phase::Holding { .. } => OverlayPhase::Holding,
            Phase::Fading { .. } => OverlayPhase::Fading,
        }
    }

    /// Current opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether [`advance`](Self::advance) still has work to do.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, Phase::Hidden)
    }

    /// Instant at which the next transition or fade tick is due.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Hidden => None,
            Phase::Holding { hold } => Some(hold.deadline()),
            Phase::Fading { tick, .. } => Some(tick.next_due()),
        }
    }

    /// Shows the indicator at full opacity and restarts the hold window.
    ///
    /// Does nothing while the indicator is disabled.
    pub fn present(&mut self, now: Instant) {
        if !self.preferences.enabled {
            return;
        }
        let hold = Duration::from_millis(u64::from(self.preferences.hold_ms));
        self.phase = Phase::Holding {
            hold: OneShot::arm(now, hold),
        };
        self.opacity = 1.0;
        tracing::trace!(hold_ms = self.preferences.hold_ms, "overlay presented");
    }

    /// Runs every transition and fade tick due at `now`, in order.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(&mut self, now: Instant) {
        loop {
            let next = match &mut self.phase {
                Phase::Hidden => return,
                Phase::Holding { hold } => {
                    if !hold.is_due(now) {
                        return;
                    }
                    Phase::Fading {
                        tick: Interval::arm(hold.deadline(), tick_period()),
                        budget_ms: self.preferences.fade_ms,
                    }
                }
                Phase::Fading { tick, budget_ms } => {
                    if tick.fire(now).is_none() {
                        return;
                    }
                    *budget_ms = budget_ms.saturating_sub(OVERLAY_FADE_TICK_MS);
                    if *budget_ms > OVERLAY_FADE_TICK_MS {
                        let fade = self.preferences.fade_ms.max(1);
                        self.opacity = *budget_ms as f32 / fade as f32;
                        continue;
                    }
                    self.opacity = 0.0;
                    Phase::Hidden
                }
            };
            self.phase = next;
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Hidden;
        self.opacity = 0.0;
    }
}
