// SPDX-License-Identifier: MPL-2.0
//! Preference resolver.
//!
//! Turns the raw strings held by the settings store into the parameters the
//! brightness controller and the overlay manager run with. Resolution is pure
//! and is repeated after every save.

use crate::application::port::SettingsStore;
use crate::domain::brightness::{parse_percentage, AdjustmentSpeed, OverlayDuration};
use crate::domain::settings::FieldId;
use crate::error::{PreferenceError, Result};
use crate::i18n::fluent::default_locale;
use crate::i18n::{options, I18n};
use crate::overlay::OverlayPreferences;
use unic_langid::LanguageIdentifier;

/// Preference values exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPreferences {
    pub default_brightness: String,
    pub min_brightness: String,
    pub max_brightness: String,
    pub adjustment_speed: String,
    pub overlay_duration: String,
}

impl RawPreferences {
    /// Reads the current values from a settings store.
    #[must_use]
    pub fn read(store: &impl SettingsStore) -> Self {
        Self {
            default_brightness: store.get(FieldId::DefaultBrightness),
            min_brightness: store.get(FieldId::MinBrightness),
            max_brightness: store.get(FieldId::MaxBrightness),
            adjustment_speed: store.get(FieldId::AdjustmentSpeed),
            overlay_duration: store.get(FieldId::OverlayDuration),
        }
    }
}

/// Operational parameters derived from the stored preferences.
///
/// `min <= max` is not enforced; see [`crate::brightness`] for how an
/// inverted range behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub default_brightness: i32,
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub overlay: OverlayPreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_brightness: 100,
            min: 30,
            max: 100,
            step: AdjustmentSpeed::default().step(),
            overlay: OverlayPreferences::from(OverlayDuration::default()),
        }
    }
}

fn percentage(field: FieldId, raw: &str) -> Result<i32> {
    parse_percentage(raw).ok_or_else(|| {
        PreferenceError::InvalidPercentage {
            field: field.key(),
            raw: raw.to_string(),
        }
        .into()
    })
}

/// Maps a stored option label to the default language's label.
///
/// Returns `None` for labels that do not belong to `language`'s list; the
/// caller then uses the `Normal` tier.
fn canonical_label(
    i18n: &I18n,
    language: &LanguageIdentifier,
    field: FieldId,
    raw: &str,
) -> Option<String> {
    let canonical = default_locale();
    if *language == canonical {
        return Some(raw.to_string());
    }
    let translated = options::translate_option(i18n, language, &canonical, field, raw);
    if translated.is_none() {
        tracing::warn!(field = field.key(), raw, %language, "stored option not in language list");
    }
    translated
}

/// Resolves stored preferences for the active `language`.
///
/// # Errors
///
/// Returns [`PreferenceError::InvalidPercentage`] when a brightness value is
/// not a percentage.
pub fn resolve(
    raw: &RawPreferences,
    i18n: &I18n,
    language: &LanguageIdentifier,
) -> Result<Preferences> {
    let default_brightness = percentage(FieldId::DefaultBrightness, &raw.default_brightness)?;
    let min = percentage(FieldId::MinBrightness, &raw.min_brightness)?;
    let max = percentage(FieldId::MaxBrightness, &raw.max_brightness)?;

    let speed = canonical_label(i18n, language, FieldId::AdjustmentSpeed, &raw.adjustment_speed)
        .map(|label| AdjustmentSpeed::from_canonical(&label))
        .unwrap_or_default();
    let duration = canonical_label(i18n, language, FieldId::OverlayDuration, &raw.overlay_duration)
        .map(|label| OverlayDuration::from_canonical(&label))
        .unwrap_or_default();

    Ok(Preferences {
        default_brightness,
        min,
        max,
        step: speed.step(),
        overlay: OverlayPreferences::from(duration),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;

    fn lang(code: &str) -> LanguageIdentifier {
        code.parse().unwrap()
    }

    fn raw(speed: &str, duration: &str) -> RawPreferences {
        RawPreferences {
            default_brightness: "100%".into(),
            min_brightness: "30%".into(),
            max_brightness: "100%".into(),
            adjustment_speed: speed.into(),
            overlay_duration: duration.into(),
        }
    }

    #[test]
    fn defaults_resolve_to_documented_values() {
        let store = MemoryStore::new();
        let prefs = resolve(&RawPreferences::read(&store), &I18n::default(), &lang("en"))
            .expect("defaults are valid");
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.step, 5);
        assert_eq!((prefs.min, prefs.max, prefs.default_brightness), (30, 100, 100));
        assert!(prefs.overlay.enabled);
        assert_eq!((prefs.overlay.hold_ms, prefs.overlay.fade_ms), (2000, 750));
    }

    #[test]
    fn speed_tiers_map_to_steps() {
        let i18n = I18n::default();
        let en = lang("en");
        assert_eq!(resolve(&raw("Slow", "Normal"), &i18n, &en).unwrap().step, 2);
        assert_eq!(resolve(&raw("Normal", "Normal"), &i18n, &en).unwrap().step, 5);
        assert_eq!(resolve(&raw("Fast", "Normal"), &i18n, &en).unwrap().step, 10);
    }

    #[test]
    fn german_labels_resolve_through_translation() {
        let i18n = I18n::default();
        let de = lang("de");
        let prefs = resolve(&raw("Langsam", "Kurz"), &i18n, &de).unwrap();
        assert_eq!(prefs.step, 2);
        assert_eq!((prefs.overlay.hold_ms, prefs.overlay.fade_ms), (600, 250));

        let prefs = resolve(&raw("Schnell", "Lang"), &i18n, &de).unwrap();
        assert_eq!(prefs.step, 10);
        assert_eq!((prefs.overlay.hold_ms, prefs.overlay.fade_ms), (3000, 1000));
    }

    #[test]
    fn off_disables_overlay() {
        let i18n = I18n::default();
        let prefs = resolve(&raw("Normal", "Off"), &i18n, &lang("en")).unwrap();
        assert!(!prefs.overlay.enabled);

        let prefs = resolve(&raw("Normal", "Aus"), &i18n, &lang("de")).unwrap();
        assert!(!prefs.overlay.enabled);
    }

    #[test]
    fn label_from_other_language_falls_back_to_normal() {
        // "Slow" and "Off" are not German options
        let i18n = I18n::default();
        let prefs = resolve(&raw("Slow", "Off"), &i18n, &lang("de")).unwrap();
        assert_eq!(prefs.step, 5);
        assert!(prefs.overlay.enabled);
        assert_eq!((prefs.overlay.hold_ms, prefs.overlay.fade_ms), (2000, 750));
    }

    #[test]
    fn inverted_range_is_passed_through() {
        let mut input = raw("Normal", "Normal");
        input.min_brightness = "80%".into();
        input.max_brightness = "40%".into();
        let prefs = resolve(&input, &I18n::default(), &lang("en")).unwrap();
        assert_eq!((prefs.min, prefs.max), (80, 40));
    }

    #[test]
    fn unparseable_percentage_is_an_error() {
        let mut input = raw("Normal", "Normal");
        input.max_brightness = "bright".into();
        let err = resolve(&input, &I18n::default(), &lang("en")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Preference(PreferenceError::InvalidPercentage {
                field: "maxBrightness",
                ..
            })
        ));
    }
}
