// SPDX-License-Identifier: MPL-2.0
//! `fullscreen_brightness` lets the mouse wheel dim or brighten media while it
//! is shown fullscreen.
//!
//! A level indicator fades in over the media on every change, preferences are
//! kept in a `settings.toml` edited through a localized dialog (English and
//! German), and leaving fullscreen always restores full brightness.

#![doc(html_root_url = "https://docs.rs/fullscreen_brightness/0.1.0")]

pub mod activation;
pub mod app;
pub mod application;
pub mod brightness;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod overlay;
pub mod preferences;
pub mod settings;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
