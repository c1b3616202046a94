// SPDX-License-Identifier: MPL-2.0
//! Settings field identifiers and the localized form description.

use std::collections::BTreeMap;
use std::fmt;

/// Every preference the settings store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Language,
    DefaultBrightness,
    MinBrightness,
    MaxBrightness,
    AdjustmentSpeed,
    OverlayDuration,
}

impl FieldId {
    /// All fields in dialog order.
    pub const ALL: [FieldId; 6] = [
        FieldId::Language,
        FieldId::DefaultBrightness,
        FieldId::MinBrightness,
        FieldId::MaxBrightness,
        FieldId::AdjustmentSpeed,
        FieldId::OverlayDuration,
    ];

    /// Fields whose option labels differ between languages.
    pub const TRANSLATABLE: [FieldId; 2] = [FieldId::AdjustmentSpeed, FieldId::OverlayDuration];

    /// Stable key used by the store and in log output.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Language => "language",
            FieldId::DefaultBrightness => "defaultBrightness",
            FieldId::MinBrightness => "minBrightness",
            FieldId::MaxBrightness => "maxBrightness",
            FieldId::AdjustmentSpeed => "adjustmentSpeed",
            FieldId::OverlayDuration => "overlayDuration",
        }
    }

    /// Whether a dialog save writes this field to the store.
    ///
    /// The language is persisted separately when it actually changes.
    #[must_use]
    pub fn saved_with_form(self) -> bool {
        self != FieldId::Language
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values submitted by the settings dialog, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<FieldId, String>);

impl FieldValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl FromIterator<(FieldId, String)> for FieldValues {
    fn from_iter<T: IntoIterator<Item = (FieldId, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One select field of the settings dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub id: FieldId,
    pub label: String,
    /// Option labels in display order. Position is meaningful: the same index
    /// denotes the same choice in every language.
    pub options: Vec<String>,
    pub default: String,
}

/// Labels of the dialog's own controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogLabels {
    pub save: String,
    pub close: String,
    pub reset: String,
}

/// Localized description of the settings dialog for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub language: String,
    pub title: String,
    /// Label of the command that opens the dialog.
    pub open_label: String,
    pub buttons: DialogLabels,
    pub fields: Vec<FieldSchema>,
}

impl Schema {
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Default values of every field.
    #[must_use]
    pub fn defaults(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|field| (field.id, field.default.clone()))
            .collect()
    }
}
