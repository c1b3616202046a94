// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each takes a
//! borrowed `ViewContext` and returns an `Element`.
//!
//! - [`viewer`] - The media at its current brightness
//! - [`indicator`] - The fading brightness level indicator
//! - [`settings`] - The settings dialog
//! - [`styles`] - Centralized styling (buttons, containers, overlay)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod indicator;
pub mod settings;
pub mod styles;
pub mod viewer;
