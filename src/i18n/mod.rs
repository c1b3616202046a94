// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale resolution from CLI, stored settings, or system settings
//! - Embedded `.ftl` translation files (`en`, `de`)
//! - Runtime language switching
//! - Ordered option tables used to translate stored option labels

pub mod fluent;
pub mod options;

pub use fluent::I18n;
