// SPDX-License-Identifier: MPL-2.0
//! Location of the directory holding `settings.toml`.
//!
//! The first of these that is set wins:
//! 1. an explicit override passed to [`get_app_config_dir_with_override`]
//! 2. `--config-dir`, recorded once by [`init_cli_override`]
//! 3. the `FULLSCREEN_BRIGHTNESS_CONFIG_DIR` environment variable
//! 4. `FullscreenBrightness` under the platform config directory

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "FullscreenBrightness";

/// Environment variable that moves the config directory.
pub const ENV_CONFIG_DIR: &str = "FULLSCREEN_BRIGHTNESS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

/// Config directory, or `None` when the platform has none.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Config directory, preferring `override_path` when given.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    let env = std::env::var(ENV_CONFIG_DIR).ok();
    resolve(override_path, cli, env.as_deref(), dirs::config_dir())
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<&str>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|base| base.join(APP_NAME)))
}
