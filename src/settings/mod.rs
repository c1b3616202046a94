// SPDX-License-Identifier: MPL-2.0
//! Settings dialog session.
//!
//! Reacts to the settings store's dialog events: it installs the localized
//! form, keeps the values being edited, and on save persists them, switches
//! the language when asked and resolves fresh preferences.

pub mod schema;

use crate::application::port::SettingsStore;
use crate::domain::settings::{DialogLabels, FieldId, FieldValues};
use crate::error::{PreferenceError, Result};
use crate::i18n::{options, I18n};
use crate::preferences::{self, Preferences, RawPreferences};
use unic_langid::LanguageIdentifier;

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub preferences: Preferences,
    /// The new language, when the save switched it.
    pub language_changed: Option<LanguageIdentifier>,
}

/// Values edited in the settings dialog.
#[derive(Debug, Clone, Default)]
pub struct Session {
    form: FieldValues,
    labels: DialogLabels,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Values currently shown in the dialog.
    #[must_use]
    pub fn values(&self) -> &FieldValues {
        &self.form
    }

    /// Button labels returned by the last [`on_open`](Self::on_open).
    #[must_use]
    pub fn labels(&self) -> &DialogLabels {
        &self.labels
    }

    /// Installs the form for the active language and presets the language
    /// field with it.
    pub fn on_init(&mut self, store: &mut impl SettingsStore, i18n: &I18n) {
        store.init(schema::build(i18n, i18n.current_locale()));
        self.load(store, i18n);
    }

    /// Opens the dialog on the stored values and returns its button labels.
    pub fn on_open(&mut self, store: &mut impl SettingsStore, i18n: &I18n) -> DialogLabels {
        self.load(store, i18n);
        store.open();
        self.labels = schema::dialog_labels(i18n, i18n.current_locale());
        self.labels.clone()
    }

    /// Closes the dialog without saving.
    pub fn close(&mut self, store: &mut impl SettingsStore) {
        store.close();
    }

    /// Edits one value of the form.
    pub fn select(&mut self, field: FieldId, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Restores every form value to its default. Nothing is stored until the
    /// next save.
    pub fn reset(&mut self, store: &impl SettingsStore) {
        if let Some(schema) = store.schema() {
            self.form = schema.defaults();
        }
    }

    /// Persists the form and re-resolves preferences.
    ///
    /// The requested language and the brightness values are checked before
    /// anything is stored, and the store is committed once. When the language
    /// field changed, the enumerated values are translated into the new
    /// language (form and store alike), the form is rebuilt in that language
    /// and the dialog is reopened.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected language has no translation, if a
    /// form value does not resolve, or if the store cannot be written. The
    /// store is left untouched by the first two.
    pub fn on_save(
        &mut self,
        store: &mut impl SettingsStore,
        i18n: &mut I18n,
    ) -> Result<Saved> {
        let target = self.requested_language(i18n)?;
        let current = i18n.current_locale().clone();
        preferences::resolve(&self.staged(store), i18n, &current)?;

        for (field, value) in self.form.iter().filter(|(field, _)| field.saved_with_form()) {
            store.set(field, value);
        }

        let mut language_changed = None;
        if let Some(target) = target.filter(|target| *target != current) {
            self.switch_language(store, i18n, &current, &target);
            language_changed = Some(target);
        }
        store.commit()?;

        let language = i18n.current_locale().clone();
        let preferences = preferences::resolve(&RawPreferences::read(store), i18n, &language)?;
        tracing::info!(?preferences, "settings saved");
        Ok(Saved {
            preferences,
            language_changed,
        })
    }

    fn requested_language(&self, i18n: &I18n) -> Result<Option<LanguageIdentifier>> {
        let Some(requested) = self.form.get(FieldId::Language) else {
            return Ok(None);
        };
        requested
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| i18n.has_locale(lang))
            .map(Some)
            .ok_or_else(|| PreferenceError::UnknownLanguage(requested.to_string()).into())
    }

    /// Preferences as they would read after storing the form.
    fn staged(&self, store: &impl SettingsStore) -> RawPreferences {
        let value = |field| {
            self.form
                .get(field)
                .map_or_else(|| store.get(field), ToString::to_string)
        };
        RawPreferences {
            default_brightness: value(FieldId::DefaultBrightness),
            min_brightness: value(FieldId::MinBrightness),
            max_brightness: value(FieldId::MaxBrightness),
            adjustment_speed: value(FieldId::AdjustmentSpeed),
            overlay_duration: value(FieldId::OverlayDuration),
        }
    }

    fn switch_language(
        &mut self,
        store: &mut impl SettingsStore,
        i18n: &mut I18n,
        from: &LanguageIdentifier,
        to: &LanguageIdentifier,
    ) {
        for field in FieldId::TRANSLATABLE {
            let value = self
                .form
                .get(field)
                .map_or_else(|| store.get(field), ToString::to_string);
            match options::translate_option(i18n, from, to, field, &value) {
                Some(translated) => {
                    store.set(field, &translated);
                    self.form.set(field, translated);
                }
                None => {
                    tracing::warn!(field = field.key(), value = %value, %from, %to, "option has no translation");
                }
            }
        }
        store.set(FieldId::Language, &to.to_string());
        i18n.set_locale(to.clone());
        tracing::info!(%from, %to, "language switched");

        self.on_init(store, i18n);
        store.close();
        self.on_open(store, i18n);
    }

    fn load(&mut self, store: &impl SettingsStore, i18n: &I18n) {
        self.form = FieldId::ALL
            .into_iter()
            .map(|field| (field, store.get(field)))
            .collect();
        self.form
            .set(FieldId::Language, i18n.current_locale().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;

    fn lang(code: &str) -> LanguageIdentifier {
        code.parse().unwrap()
    }

    fn opened(store: &mut MemoryStore, i18n: &I18n) -> Session {
        let mut session = Session::new();
        session.on_init(store, i18n);
        session.on_open(store, i18n);
        session
    }

    #[test]
    fn init_presets_active_language() {
        let mut store = MemoryStore::new();
        let i18n = I18n::new(Some("de".into()), None);
        let mut session = Session::new();
        session.on_init(&mut store, &i18n);

        assert_eq!(session.values().get(FieldId::Language), Some("de"));
        assert_eq!(store.schema().map(|s| s.language.as_str()), Some("de"));
        // Presetting does not persist anything
        assert_eq!(store.config().stored(FieldId::Language), None);
    }

    #[test]
    fn open_returns_localized_labels() {
        let mut store = MemoryStore::new();
        let i18n = I18n::new(Some("de".into()), None);
        let mut session = Session::new();
        session.on_init(&mut store, &i18n);
        let labels = session.on_open(&mut store, &i18n);

        assert!(store.is_open());
        assert_eq!(labels.save, "Speichern");
        assert_eq!(labels.close, "Schließen");
    }

    #[test]
    fn save_persists_and_resolves() {
        let mut store = MemoryStore::new();
        let mut i18n = I18n::new(Some("en".into()), None);
        let mut session = opened(&mut store, &i18n);

        session.select(FieldId::AdjustmentSpeed, "Fast");
        session.select(FieldId::MinBrightness, "50%");
        let saved = session.on_save(&mut store, &mut i18n).unwrap();

        assert_eq!(saved.language_changed, None);
        assert_eq!(saved.preferences.step, 10);
        assert_eq!(saved.preferences.min, 50);
        assert_eq!(store.get(FieldId::AdjustmentSpeed), "Fast");
        assert_eq!(store.open_count, 1);
        assert_eq!(store.commit_count, 1);
    }

    #[test]
    fn switching_language_translates_enumerated_values() {
        let mut store = MemoryStore::with_values([
            (FieldId::Language, "de"),
            (FieldId::AdjustmentSpeed, "Langsam"),
            (FieldId::OverlayDuration, "Kurz"),
        ]);
        let mut i18n = I18n::new(None, Some("de"));
        let mut session = opened(&mut store, &i18n);

        session.select(FieldId::Language, "en");
        let saved = session.on_save(&mut store, &mut i18n).unwrap();

        assert_eq!(saved.language_changed, Some(lang("en")));
        assert_eq!(store.get(FieldId::AdjustmentSpeed), "Slow");
        assert_eq!(store.get(FieldId::OverlayDuration), "Short");
        assert_eq!(store.get(FieldId::Language), "en");
        assert_eq!(session.values().get(FieldId::AdjustmentSpeed), Some("Slow"));
        assert_eq!(saved.preferences.step, 2);
        assert_eq!(saved.preferences.overlay.hold_ms, 600);
        assert_eq!(i18n.current_locale(), &lang("en"));
    }

    #[test]
    fn switching_language_reopens_translated_dialog() {
        let mut store = MemoryStore::new();
        let mut i18n = I18n::new(Some("en".into()), None);
        let mut session = opened(&mut store, &i18n);

        session.select(FieldId::Language, "de");
        session.on_save(&mut store, &mut i18n).unwrap();

        assert!(store.is_open());
        assert_eq!(store.open_count, 2);
        assert_eq!(session.labels().save, "Speichern");
        let schema = store.schema().unwrap();
        assert_eq!(schema.language, "de");
        assert_eq!(
            schema.field(FieldId::OverlayDuration).unwrap().options,
            vec!["Aus", "Kurz", "Normal", "Lang"]
        );
    }

    #[test]
    fn edited_value_is_translated_with_language_switch() {
        let mut store = MemoryStore::new();
        let mut i18n = I18n::new(Some("en".into()), None);
        let mut session = opened(&mut store, &i18n);

        session.select(FieldId::OverlayDuration, "Off");
        session.select(FieldId::Language, "de");
        let saved = session.on_save(&mut store, &mut i18n).unwrap();

        assert_eq!(store.get(FieldId::OverlayDuration), "Aus");
        assert!(!saved.preferences.overlay.enabled);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let mut store = MemoryStore::new();
        let mut i18n = I18n::new(Some("en".into()), None);
        let mut session = opened(&mut store, &i18n);

        session.select(FieldId::Language, "fr");
        let err = session.on_save(&mut store, &mut i18n).unwrap_err();
        assert_eq!(
            err,
            crate::error::Error::Preference(PreferenceError::UnknownLanguage("fr".into()))
        );
        assert_eq!(i18n.current_locale(), &lang("en"));
    }

    #[test]
    fn rejected_language_stores_nothing() {
        let mut store = MemoryStore::new();
        let mut i18n = I18n::new(Some("en".into()), None);
        let mut session = opened(&mut store, &i18n);

        session.select(FieldId::MaxBrightness, "40%");
        session.select(FieldId::Language, "xx");
        assert!(session.on_save(&mut store, &mut i18n).is_err());

        assert_eq!(store.get(FieldId::MaxBrightness), "100%");
        assert_eq!(store.commit_count, 0);
    }

    #[test]
    fn invalid_percentage_stores_nothing() {
        let mut store = MemoryStore::new();
        let mut i18n = I18n::new(Some("en".into()), None);
        let mut session = opened(&mut store, &i18n);

        session.select(FieldId::AdjustmentSpeed, "Fast");
        session.select(FieldId::MinBrightness, "dim");
        let err = session.on_save(&mut store, &mut i18n).unwrap_err();

        assert!(matches!(
            err,
            crate::error::Error::Preference(PreferenceError::InvalidPercentage { .. })
        ));
        assert_eq!(store.get(FieldId::AdjustmentSpeed), "Normal");
        assert_eq!(store.commit_count, 0);
    }

    #[test]
    fn language_switch_commits_once() {
        let mut store = MemoryStore::new();
        let mut i18n = I18n::new(Some("en".into()), None);
        let mut session = opened(&mut store, &i18n);

        session.select(FieldId::Language, "de");
        session.on_save(&mut store, &mut i18n).unwrap();
        assert_eq!(store.commit_count, 1);
    }

    #[test]
    fn reset_restores_defaults_in_form_only() {
        let mut store = MemoryStore::with_values([(FieldId::AdjustmentSpeed, "Fast")]);
        let i18n = I18n::new(Some("en".into()), None);
        let mut session = opened(&mut store, &i18n);

        session.reset(&store);
        assert_eq!(session.values().get(FieldId::AdjustmentSpeed), Some("Normal"));
        assert_eq!(store.get(FieldId::AdjustmentSpeed), "Fast");
    }

    #[test]
    fn close_leaves_store_untouched() {
        let mut store = MemoryStore::new();
        let i18n = I18n::new(Some("en".into()), None);
        let mut session = opened(&mut store, &i18n);
        session.select(FieldId::AdjustmentSpeed, "Slow");
        session.close(&mut store);

        assert!(!store.is_open());
        assert_eq!(store.get(FieldId::AdjustmentSpeed), "Normal");
    }
}
