// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::settings;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Settings(settings::Message),
    /// Open the settings dialog (toolbar button or `Ctrl+,`).
    OpenSettings,
    /// `F11` was pressed in this window.
    ToggleFullscreen(window::Id),
    /// `Escape` was pressed in this window.
    Escape(window::Id),
    /// A wheel notch, positive when the wheel moves down.
    Wheel(f32),
    /// Periodic tick driving the level indicator's fade.
    Tick(Instant),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `de`, `en-US`).
    pub lang: Option<String>,
    /// Optional media path to show on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `FULLSCREEN_BRIGHTNESS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
