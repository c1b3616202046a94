// SPDX-License-Identifier: MPL-2.0
//! Option lists of the settings dialog, per language.
//!
//! Enumerated fields are stored as the label the user picked, in the language
//! that was active at the time. Translating a stored label is positional: the
//! label's index in the source language's list selects the label at the same
//! index in the target language's list.

use super::I18n;
use crate::config::BRIGHTNESS_CHOICES;
use crate::domain::brightness::{AdjustmentSpeed, OverlayDuration};
use crate::domain::settings::FieldId;
use unic_langid::LanguageIdentifier;

/// Message keys of a translatable field's options, in display order.
#[must_use]
pub fn option_keys(field: FieldId) -> Vec<&'static str> {
    match field {
        FieldId::AdjustmentSpeed => AdjustmentSpeed::ALL.iter().map(|s| s.i18n_key()).collect(),
        FieldId::OverlayDuration => OverlayDuration::ALL.iter().map(|d| d.i18n_key()).collect(),
        _ => Vec::new(),
    }
}

/// Option labels of `field` as shown in `locale`, in display order.
#[must_use]
pub fn option_labels(i18n: &I18n, locale: &LanguageIdentifier, field: FieldId) -> Vec<String> {
    match field {
        FieldId::Language => i18n
            .available_locales
            .iter()
            .map(ToString::to_string)
            .collect(),
        FieldId::DefaultBrightness | FieldId::MinBrightness | FieldId::MaxBrightness => {
            BRIGHTNESS_CHOICES.iter().map(|c| (*c).to_string()).collect()
        }
        FieldId::AdjustmentSpeed | FieldId::OverlayDuration => option_keys(field)
            .into_iter()
            .map(|key| i18n.tr_in(locale, key))
            .collect(),
    }
}

/// Translates a stored option label from one language to another.
///
/// Returns `None` when `value` is not one of `from`'s options for `field`.
#[must_use]
pub fn translate_option(
    i18n: &I18n,
    from: &LanguageIdentifier,
    to: &LanguageIdentifier,
    field: FieldId,
    value: &str,
) -> Option<String> {
    let from_options = option_labels(i18n, from, field);
    let index = from_options.iter().position(|option| option == value)?;
    option_labels(i18n, to, field).into_iter().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> LanguageIdentifier {
        code.parse().unwrap()
    }

    #[test]
    fn german_speed_labels_are_ordered_like_english() {
        let i18n = I18n::default();
        assert_eq!(
            option_labels(&i18n, &lang("en"), FieldId::AdjustmentSpeed),
            vec!["Slow", "Normal", "Fast"]
        );
        assert_eq!(
            option_labels(&i18n, &lang("de"), FieldId::AdjustmentSpeed),
            vec!["Langsam", "Normal", "Schnell"]
        );
    }

    #[test]
    fn translates_by_position() {
        let i18n = I18n::default();
        assert_eq!(
            translate_option(&i18n, &lang("de"), &lang("en"), FieldId::AdjustmentSpeed, "Langsam"),
            Some("Slow".to_string())
        );
        assert_eq!(
            translate_option(&i18n, &lang("en"), &lang("de"), FieldId::OverlayDuration, "Short"),
            Some("Kurz".to_string())
        );
        assert_eq!(
            translate_option(&i18n, &lang("de"), &lang("en"), FieldId::OverlayDuration, "Aus"),
            Some("Off".to_string())
        );
    }

    #[test]
    fn identical_labels_translate_to_themselves() {
        let i18n = I18n::default();
        assert_eq!(
            translate_option(&i18n, &lang("de"), &lang("en"), FieldId::OverlayDuration, "Normal"),
            Some("Normal".to_string())
        );
    }

    #[test]
    fn unknown_label_has_no_translation() {
        let i18n = I18n::default();
        assert_eq!(
            translate_option(&i18n, &lang("en"), &lang("de"), FieldId::AdjustmentSpeed, "Langsam"),
            None
        );
    }

    #[test]
    fn brightness_choices_are_language_neutral() {
        let i18n = I18n::default();
        assert_eq!(
            option_labels(&i18n, &lang("de"), FieldId::MinBrightness),
            option_labels(&i18n, &lang("en"), FieldId::MinBrightness)
        );
    }

    #[test]
    fn language_options_list_bundles() {
        let i18n = I18n::default();
        let options = option_labels(&i18n, &lang("en"), FieldId::Language);
        assert!(options.contains(&"en".to_string()));
        assert!(options.contains(&"de".to_string()));
    }
}
