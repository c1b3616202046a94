// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] of mutable references so each one
//! only touches the state it needs and can be tested in isolation.

use super::host::WindowHost;
use super::Message;
use crate::activation::Gate;
use crate::application::port::SettingsStore;
use crate::brightness::Controller;
use crate::config::TomlStore;
use crate::error::Error;
use crate::i18n::I18n;
use crate::settings::Session;
use crate::ui::settings;
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Notice shown when a save could not be written.
pub const SAVE_ERROR_KEY: &str = "notification-config-save-error";
/// Notice shown when saved values do not resolve to preferences.
pub const INVALID_PREFERENCES_KEY: &str = "notification-preferences-invalid";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub store: &'a mut TomlStore,
    pub session: &'a mut Session,
    pub controller: &'a mut Controller,
    pub gate: &'a mut Gate,
    pub host: &'a mut WindowHost,
    pub fullscreen: &'a mut bool,
    /// Message key of the notice shown in the toolbar.
    pub notice: &'a mut Option<String>,
}

/// Handles `F11`.
pub fn handle_toggle_fullscreen(
    ctx: &mut UpdateContext<'_>,
    window_id: window::Id,
) -> Task<Message> {
    let desired = !*ctx.fullscreen;
    update_fullscreen_mode(ctx, window_id, desired)
}

/// Handles `Escape`: closes the settings dialog first, then leaves
/// fullscreen.
pub fn handle_escape(ctx: &mut UpdateContext<'_>, window_id: window::Id) -> Task<Message> {
    if ctx.store.is_open() {
        ctx.session.close(ctx.store);
        return Task::none();
    }
    update_fullscreen_mode(ctx, window_id, false)
}

/// Switches the window to the desired mode and tells the activation gate.
///
/// iced reports no fullscreen event of its own, so the gate hears about the
/// change when the mode is requested.
fn update_fullscreen_mode(
    ctx: &mut UpdateContext<'_>,
    window_id: window::Id,
    desired: bool,
) -> Task<Message> {
    if *ctx.fullscreen == desired {
        return Task::none();
    }

    *ctx.fullscreen = desired;
    ctx.gate
        .on_fullscreen_change(desired, ctx.host, ctx.controller, Instant::now());

    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode)
}

/// Routes a wheel notch to the controller while the window listens for it.
pub fn handle_wheel(ctx: &mut UpdateContext<'_>, delta_y: f32) -> Task<Message> {
    if ctx.host.is_listening() {
        ctx.controller.on_scroll(delta_y, Instant::now());
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.controller.advance(now);
    Task::none()
}

/// Shows a dropped file. Control is not re-armed while already fullscreen;
/// the next fullscreen entry picks the new media up.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if path.is_dir() {
        tracing::debug!(path = %path.display(), "ignoring dropped directory");
        return Task::none();
    }
    ctx.host.load(&path);
    Task::none()
}

pub fn handle_open_settings(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.session.on_open(ctx.store, ctx.i18n);
    Task::none()
}

/// Handles a message from the settings dialog.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::Selected(field, value) => ctx.session.select(field, value),
        settings::Message::Close => ctx.session.close(ctx.store),
        settings::Message::Reset => ctx.session.reset(ctx.store),
        settings::Message::Save => match ctx.session.on_save(ctx.store, ctx.i18n) {
            Ok(saved) => {
                ctx.controller.reconfigure(saved.preferences);
                *ctx.notice = None;
                if let Some(language) = saved.language_changed {
                    tracing::info!(%language, "language switched");
                }
            }
            Err(error) => {
                tracing::warn!(%error, "failed to save settings");
                *ctx.notice = Some(notice_key(&error).to_string());
            }
        },
    }
    Task::none()
}

/// Message key of the notice shown for a failed save.
fn notice_key(error: &Error) -> &'static str {
    match error {
        Error::Preference(_) => INVALID_PREFERENCES_KEY,
        Error::Io(_) | Error::Config(_) => SAVE_ERROR_KEY,
    }
}
