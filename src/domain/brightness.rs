// SPDX-License-Identifier: MPL-2.0
//! Brightness value objects.
//!
//! Stored preferences are strings (`"30%"`, `"Slow"`, `"Kurz"`); the types in
//! this module are what they turn into once resolved.

use crate::config::{
    FAST_STEP, LONG_OVERLAY_MS, NORMAL_OVERLAY_MS, NORMAL_STEP, SHORT_OVERLAY_MS, SLOW_STEP,
};

// =============================================================================
// Percentage parsing
// =============================================================================

/// Parses a stored percentage such as `"30%"` into its integer value.
///
/// Leading whitespace and an optional sign are accepted; parsing stops at the
/// first non-digit, so `"30%"` and `"30"` both yield `30`. Returns `None` when
/// no digits are found.
///
/// # Example
///
/// ```
/// use fullscreen_brightness::domain::brightness::parse_percentage;
///
/// assert_eq!(parse_percentage("30%"), Some(30));
/// assert_eq!(parse_percentage("100%"), Some(100));
/// assert_eq!(parse_percentage("%"), None);
/// ```
#[must_use]
pub fn parse_percentage(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i32 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Formats a brightness level the way the overlay and the settings store show it.
#[must_use]
pub fn format_percentage(value: i32) -> String {
    format!("{value}%")
}

// =============================================================================
// AdjustmentSpeed
// =============================================================================

/// How far one wheel notch moves the brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjustmentSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AdjustmentSpeed {
    /// All speeds in the order the settings dialog lists them.
    pub const ALL: [AdjustmentSpeed; 3] = [
        AdjustmentSpeed::Slow,
        AdjustmentSpeed::Normal,
        AdjustmentSpeed::Fast,
    ];

    /// Brightness step per wheel notch.
    #[must_use]
    pub fn step(self) -> i32 {
        match self {
            AdjustmentSpeed::Slow => SLOW_STEP,
            AdjustmentSpeed::Normal => NORMAL_STEP,
            AdjustmentSpeed::Fast => FAST_STEP,
        }
    }

    /// Canonical (English) label, as stored by the default language.
    #[must_use]
    pub fn canonical(self) -> &'static str {
        match self {
            AdjustmentSpeed::Slow => "Slow",
            AdjustmentSpeed::Normal => "Normal",
            AdjustmentSpeed::Fast => "Fast",
        }
    }

    /// Parses a canonical label. Anything unrecognised falls back to `Normal`.
    #[must_use]
    pub fn from_canonical(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|speed| speed.canonical() == label)
            .unwrap_or_default()
    }

    /// Returns the i18n message key of this option's label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            AdjustmentSpeed::Slow => "option-adjustment-speed-slow",
            AdjustmentSpeed::Normal => "option-adjustment-speed-normal",
            AdjustmentSpeed::Fast => "option-adjustment-speed-fast",
        }
    }
}

// =============================================================================
// OverlayDuration
// =============================================================================

/// How long the level indicator stays on screen after an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayDuration {
    Off,
    Short,
    #[default]
    Normal,
    Long,
}

impl OverlayDuration {
    /// All durations in the order the settings dialog lists them.
    pub const ALL: [OverlayDuration; 4] = [
        OverlayDuration::Off,
        OverlayDuration::Short,
        OverlayDuration::Normal,
        OverlayDuration::Long,
    ];

    /// Canonical (English) label, as stored by the default language.
    #[must_use]
    pub fn canonical(self) -> &'static str {
        match self {
            OverlayDuration::Off => "Off",
            OverlayDuration::Short => "Short",
            OverlayDuration::Normal => "Normal",
            OverlayDuration::Long => "Long",
        }
    }

    /// Parses a canonical label. Anything unrecognised falls back to `Normal`.
    #[must_use]
    pub fn from_canonical(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|duration| duration.canonical() == label)
            .unwrap_or_default()
    }

    /// Returns the i18n message key of this option's label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            OverlayDuration::Off => "option-overlay-duration-off",
            OverlayDuration::Short => "option-overlay-duration-short",
            OverlayDuration::Normal => "option-overlay-duration-normal",
            OverlayDuration::Long => "option-overlay-duration-long",
        }
    }

    /// Hold and fade timings, or `None` when the overlay is switched off.
    #[must_use]
    pub fn timings(self) -> Option<OverlayTimings> {
        let (hold_ms, fade_ms) = match self {
            OverlayDuration::Off => return None,
            OverlayDuration::Short => SHORT_OVERLAY_MS,
            OverlayDuration::Normal => NORMAL_OVERLAY_MS,
            OverlayDuration::Long => LONG_OVERLAY_MS,
        };
        Some(OverlayTimings { hold_ms, fade_ms })
    }
}

/// Hold and fade durations of the level indicator, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTimings {
    pub hold_ms: u32,
    pub fade_ms: u32,
}

impl Default for OverlayTimings {
    fn default() -> Self {
        let (hold_ms, fade_ms) = NORMAL_OVERLAY_MS;
        Self { hold_ms, fade_ms }
    }
}
