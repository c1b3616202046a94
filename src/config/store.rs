// SPDX-License-Identifier: MPL-2.0
//! Settings store adapters.
//!
//! [`TomlStore`] stages values in memory and writes `settings.toml` once per
//! commit.
//! [`MemoryStore`] keeps everything in memory and is used by tests and by
//! hosts that do not persist anything.

use super::{save_with_override, Config};
use crate::application::port::SettingsStore;
use crate::domain::settings::{FieldId, Schema};
use crate::error::Result;
use std::path::PathBuf;

/// Shared dialog bookkeeping of both adapters.
#[derive(Debug, Clone, Default)]
struct Dialog {
    schema: Option<Schema>,
    open: bool,
}

// =============================================================================
// TomlStore
// =============================================================================

/// Settings store persisted to `settings.toml`.
#[derive(Debug, Clone)]
pub struct TomlStore {
    config: Config,
    base_dir: Option<PathBuf>,
    dialog: Dialog,
}

impl TomlStore {
    /// Loads the store from the default location, or `base_dir` when given.
    ///
    /// Returns the store and an optional warning key when the existing file
    /// could not be read.
    #[must_use]
    pub fn load(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (config, warning) = super::load_with_override(base_dir.clone());
        (
            Self {
                config,
                base_dir,
                dialog: Dialog::default(),
            },
            warning,
        )
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Writes the current configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        save_with_override(&self.config, self.base_dir.clone())
    }
}

impl SettingsStore for TomlStore {
    fn get(&self, field: FieldId) -> String {
        self.config.get(field)
    }

    fn set(&mut self, field: FieldId, value: &str) {
        self.config.set(field, value);
    }

    fn commit(&mut self) -> Result<()> {
        self.save()
    }

    fn init(&mut self, schema: Schema) {
        self.dialog.schema = Some(schema);
    }

    fn schema(&self) -> Option<&Schema> {
        self.dialog.schema.as_ref()
    }

    fn open(&mut self) {
        self.dialog.open = true;
    }

    fn close(&mut self) {
        self.dialog.open = false;
    }

    fn is_open(&self) -> bool {
        self.dialog.open
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// Settings store that never touches the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    config: Config,
    dialog: Dialog,
    /// Number of times the dialog was opened.
    pub open_count: usize,
    /// Number of commits.
    pub commit_count: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with the given values.
    #[must_use]
    pub fn with_values<'a>(values: impl IntoIterator<Item = (FieldId, &'a str)>) -> Self {
        let mut config = Config::default();
        for (field, value) in values {
            config.set(field, value);
        }
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, field: FieldId) -> String {
        self.config.get(field)
    }

    fn set(&mut self, field: FieldId, value: &str) {
        self.config.set(field, value);
    }

    fn commit(&mut self) -> Result<()> {
        self.commit_count += 1;
        Ok(())
    }

    fn init(&mut self, schema: Schema) {
        self.dialog.schema = Some(schema);
    }

    fn schema(&self) -> Option<&Schema> {
        self.dialog.schema.as_ref()
    }

    fn open(&mut self) {
        self.dialog.open = true;
        self.open_count += 1;
    }

    fn close(&mut self) {
        self.dialog.open = false;
    }

    fn is_open(&self) -> bool {
        self.dialog.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn toml_store_persists_on_commit_only() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();

        let (mut store, warning) = TomlStore::load(Some(base.clone()));
        assert!(warning.is_none());
        store.set(FieldId::AdjustmentSpeed, "Fast");
        store.set(FieldId::MinBrightness, "40%");
        assert_eq!(store.get(FieldId::AdjustmentSpeed), "Fast");

        let (staged, _) = TomlStore::load(Some(base.clone()));
        assert_eq!(staged.get(FieldId::AdjustmentSpeed), "Normal");

        store.commit().expect("commit should persist");
        let (reloaded, _) = TomlStore::load(Some(base));
        assert_eq!(reloaded.get(FieldId::AdjustmentSpeed), "Fast");
        assert_eq!(reloaded.get(FieldId::MinBrightness), "40%");
    }

    #[test]
    fn toml_store_reports_defaults_when_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (store, _) = TomlStore::load(Some(temp_dir.path().to_path_buf()));
        assert_eq!(store.get(FieldId::MinBrightness), "30%");
        assert!(!store.is_open());
        assert!(store.schema().is_none());
    }

    #[test]
    fn memory_store_tracks_dialog_state() {
        let mut store = MemoryStore::new();
        store.open();
        assert!(store.is_open());
        store.close();
        store.open();
        assert!(store.is_open());
        assert_eq!(store.open_count, 2);
    }

    #[test]
    fn memory_store_with_values() {
        let store = MemoryStore::with_values([(FieldId::Language, "de")]);
        assert_eq!(store.get(FieldId::Language), "de");
        assert_eq!(store.get(FieldId::OverlayDuration), "Normal");
    }
}
