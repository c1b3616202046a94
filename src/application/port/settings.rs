// SPDX-License-Identifier: MPL-2.0
//! Settings store port definition.
//!
//! Mirrors a userscript-style configuration library: string values keyed by
//! field, a localized form description, and a dialog that can be opened and
//! closed. The reaction to dialog events lives in [`crate::settings::Session`].

use crate::domain::settings::{FieldId, Schema};
use crate::error::Result;

/// Port for persisted preferences and their dialog.
pub trait SettingsStore {
    /// Returns the stored value of a field, or its default when unset.
    fn get(&self, field: FieldId) -> String;

    /// Stages a field value. Nothing is persisted until [`commit`](Self::commit).
    fn set(&mut self, field: FieldId, value: &str);

    /// Persists every staged value at once.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn commit(&mut self) -> Result<()>;

    /// Installs the (localized) form description used by the dialog.
    fn init(&mut self, schema: Schema);

    /// The form description installed by the last [`init`](Self::init).
    fn schema(&self) -> Option<&Schema>;

    fn open(&mut self);

    fn close(&mut self);

    fn is_open(&self) -> bool;
}
