// SPDX-License-Identifier: MPL-2.0
//! Builds the localized form description of the settings dialog.

use crate::config::default_value;
use crate::domain::brightness::{AdjustmentSpeed, OverlayDuration};
use crate::domain::settings::{DialogLabels, FieldId, FieldSchema, Schema};
use crate::i18n::{options, I18n};
use unic_langid::LanguageIdentifier;

/// Message key of a field's label.
#[must_use]
pub fn label_key(field: FieldId) -> &'static str {
    match field {
        FieldId::Language => "field-language",
        FieldId::DefaultBrightness => "field-default-brightness",
        FieldId::MinBrightness => "field-min-brightness",
        FieldId::MaxBrightness => "field-max-brightness",
        FieldId::AdjustmentSpeed => "field-adjustment-speed",
        FieldId::OverlayDuration => "field-overlay-duration",
    }
}

/// Labels of the dialog buttons in `locale`.
#[must_use]
pub fn dialog_labels(i18n: &I18n, locale: &LanguageIdentifier) -> DialogLabels {
    DialogLabels {
        save: i18n.tr_in(locale, "settings-save"),
        close: i18n.tr_in(locale, "settings-close"),
        reset: i18n.tr_in(locale, "settings-reset"),
    }
}

/// Default of `field` as labelled in `locale`.
fn localized_default(i18n: &I18n, locale: &LanguageIdentifier, field: FieldId) -> String {
    match field {
        FieldId::AdjustmentSpeed => i18n.tr_in(locale, AdjustmentSpeed::default().i18n_key()),
        FieldId::OverlayDuration => i18n.tr_in(locale, OverlayDuration::default().i18n_key()),
        _ => default_value(field).to_string(),
    }
}

/// Builds the form description for `locale`.
#[must_use]
pub fn build(i18n: &I18n, locale: &LanguageIdentifier) -> Schema {
    let fields = FieldId::ALL
        .into_iter()
        .map(|id| FieldSchema {
            id,
            label: i18n.tr_in(locale, label_key(id)),
            options: options::option_labels(i18n, locale, id),
            default: localized_default(i18n, locale, id),
        })
        .collect();

    Schema {
        language: locale.to_string(),
        title: i18n.tr_in(locale, "settings-title"),
        open_label: i18n.tr_in(locale, "settings-open"),
        buttons: dialog_labels(i18n, locale),
        fields,
    }
}
