// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// What the window currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Viewer,
    /// The settings dialog over the viewer.
    Settings,
}
