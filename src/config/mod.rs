// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - UI language
//! - `[brightness]` - Default, minimum and maximum brightness, adjustment speed
//! - `[overlay]` - How long the level indicator stays visible
//!
//! Values are kept exactly as the settings dialog wrote them: percentages as
//! `"30%"` strings, enumerated options as labels in the language that was
//! active when they were saved.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FULLSCREEN_BRIGHTNESS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use fullscreen_brightness::config;
//! use fullscreen_brightness::domain::settings::FieldId;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.set(FieldId::AdjustmentSpeed, "Fast");
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
mod store;

pub use defaults::*;
pub use store::{MemoryStore, TomlStore};

use crate::app::paths;
use crate::domain::settings::FieldId;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (`en` or `de`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Brightness range and wheel step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrightnessConfig {
    /// Brightness applied when fullscreen is entered (e.g. `"100%"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Lowest reachable brightness (e.g. `"30%"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<String>,

    /// Highest reachable brightness (e.g. `"100%"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<String>,

    /// Adjustment speed label (`Slow`/`Normal`/`Fast` or a translation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_speed: Option<String>,
}

/// Level indicator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OverlayConfig {
    /// Overlay duration label (`Off`/`Short`/`Normal`/`Long` or a translation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub brightness: BrightnessConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl Config {
    fn slot(&self, field: FieldId) -> &Option<String> {
        match field {
            FieldId::Language => &self.general.language,
            FieldId::DefaultBrightness => &self.brightness.default,
            FieldId::MinBrightness => &self.brightness.minimum,
            FieldId::MaxBrightness => &self.brightness.maximum,
            FieldId::AdjustmentSpeed => &self.brightness.adjustment_speed,
            FieldId::OverlayDuration => &self.overlay.duration,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut Option<String> {
        match field {
            FieldId::Language => &mut self.general.language,
            FieldId::DefaultBrightness => &mut self.brightness.default,
            FieldId::MinBrightness => &mut self.brightness.minimum,
            FieldId::MaxBrightness => &mut self.brightness.maximum,
            FieldId::AdjustmentSpeed => &mut self.brightness.adjustment_speed,
            FieldId::OverlayDuration => &mut self.overlay.duration,
        }
    }

    /// Returns the stored value, falling back to the field's default.
    #[must_use]
    pub fn get(&self, field: FieldId) -> String {
        self.slot(field)
            .clone()
            .unwrap_or_else(|| default_value(field).to_string())
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Returns the stored value without falling back to a default.
    #[must_use]
    pub fn stored(&self, field: FieldId) -> Option<&str> {
        self.slot(field).as_deref()
    }
}

/// Default stored value of a field.
#[must_use]
pub fn default_value(field: FieldId) -> &'static str {
    match field {
        FieldId::Language => DEFAULT_LANGUAGE,
        FieldId::DefaultBrightness => DEFAULT_BRIGHTNESS,
        FieldId::MinBrightness => DEFAULT_MIN_BRIGHTNESS,
        FieldId::MaxBrightness => DEFAULT_MAX_BRIGHTNESS,
        FieldId::AdjustmentSpeed => DEFAULT_ADJUSTMENT_SPEED,
        FieldId::OverlayDuration => DEFAULT_OVERLAY_DURATION,
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings file");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
