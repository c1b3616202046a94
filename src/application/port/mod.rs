// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`host`]: the window or page that hosts the media element
//! - [`settings`]: persisted key/value preferences plus their dialog
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Everything runs on the UI thread, so no `Send`/`Sync` bounds
//! - Writes that touch storage return `Result` with the crate error type

pub mod host;
pub mod settings;

pub use host::{HostPage, VideoElement};
pub use settings::SettingsStore;
