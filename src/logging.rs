// SPDX-License-Identifier: MPL-2.0
//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Log level used when debug output is off.
pub const DEFAULT_LEVEL: &str = "info";

/// Log level used with `--debug`.
pub const DEBUG_LEVEL: &str = "debug";

/// Builds the filter for the requested verbosity.
///
/// `RUST_LOG` is only honoured with `--debug`, so a stray variable in the
/// user's environment cannot make a normal run verbose.
#[must_use]
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEBUG_LEVEL))
    } else {
        EnvFilter::new(DEFAULT_LEVEL)
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .try_init();
}
