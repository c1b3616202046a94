// SPDX-License-Identifier: MPL-2.0
//! Application layer - boundaries to the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for the collaborators the
//!   brightness feature talks to but does not own: the settings store and the
//!   host window that shows the media.
//!
//! # Dependency Rule
//!
//! - Ports use domain types only (no Iced handles, no TOML types)
//! - `config` implements the settings port, `app` implements the host port
//! - The brightness, overlay and activation modules depend only on the ports

pub mod port;
