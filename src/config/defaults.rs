// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Stored defaults**: raw strings written to `settings.toml`
//! - **Adjustment**: brightness step per wheel notch
//! - **Overlay**: hold and fade timings of the level indicator

// ==========================================================================
// Stored Defaults
// ==========================================================================

/// Default UI language code.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Brightness applied when fullscreen is entered.
pub const DEFAULT_BRIGHTNESS: &str = "100%";

/// Lowest brightness the wheel can reach.
pub const DEFAULT_MIN_BRIGHTNESS: &str = "30%";

/// Highest brightness the wheel can reach.
pub const DEFAULT_MAX_BRIGHTNESS: &str = "100%";

/// Default adjustment speed label (identical in every bundled language).
pub const DEFAULT_ADJUSTMENT_SPEED: &str = "Normal";

/// Default overlay duration label (identical in every bundled language).
pub const DEFAULT_OVERLAY_DURATION: &str = "Normal";

/// Brightness choices offered by the settings dialog, in display order.
pub const BRIGHTNESS_CHOICES: [&str; 10] = [
    "10%", "20%", "30%", "40%", "50%", "60%", "70%", "80%", "90%", "100%",
];

// ==========================================================================
// Adjustment Defaults
// ==========================================================================

/// Full brightness, also applied when leaving fullscreen.
pub const FULL_BRIGHTNESS: i32 = 100;

/// Brightness step for the "Slow" adjustment speed.
pub const SLOW_STEP: i32 = 2;

/// Brightness step for the "Normal" adjustment speed.
pub const NORMAL_STEP: i32 = 5;

/// Brightness step for the "Fast" adjustment speed.
pub const FAST_STEP: i32 = 10;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Interval between two fade ticks, in milliseconds.
///
/// Smaller values give a smoother fade.
pub const OVERLAY_FADE_TICK_MS: u32 = 20;

/// (hold, fade) durations for the "Short" overlay setting.
pub const SHORT_OVERLAY_MS: (u32, u32) = (600, 250);

/// (hold, fade) durations for the "Normal" overlay setting.
pub const NORMAL_OVERLAY_MS: (u32, u32) = (2000, 750);

/// (hold, fade) durations for the "Long" overlay setting.
pub const LONG_OVERLAY_MS: (u32, u32) = (3000, 1000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_positive_and_ordered() {
        assert!(SLOW_STEP > 0);
        assert!(SLOW_STEP < NORMAL_STEP);
        assert!(NORMAL_STEP < FAST_STEP);
    }

    #[test]
    fn overlay_tiers_grow_with_duration() {
        assert!(SHORT_OVERLAY_MS.0 < NORMAL_OVERLAY_MS.0);
        assert!(NORMAL_OVERLAY_MS.0 < LONG_OVERLAY_MS.0);
        for (_, fade) in [SHORT_OVERLAY_MS, NORMAL_OVERLAY_MS, LONG_OVERLAY_MS] {
            assert!(fade > OVERLAY_FADE_TICK_MS);
        }
    }

    #[test]
    fn stored_defaults_are_offered_choices() {
        assert!(BRIGHTNESS_CHOICES.contains(&DEFAULT_BRIGHTNESS));
        assert!(BRIGHTNESS_CHOICES.contains(&DEFAULT_MIN_BRIGHTNESS));
        assert!(BRIGHTNESS_CHOICES.contains(&DEFAULT_MAX_BRIGHTNESS));
    }
}
