// SPDX-License-Identifier: MPL-2.0
use fullscreen_brightness::app::{self, Flags};
use fullscreen_brightness::logging;

const HELP: &str = "\
fullscreen-brightness: change the brightness of fullscreen media with the mouse wheel

USAGE:
  fullscreen-brightness [OPTIONS] [MEDIA]

OPTIONS:
  --lang <LOCALE>       Interface language (en, de)
  --config-dir <DIR>    Directory holding settings.toml
  --debug               Verbose logging (honours RUST_LOG)
  -h, --help            Print this help

KEYS:
  F11                   Toggle fullscreen
  Escape                Close settings, then leave fullscreen
  Ctrl+,                Open settings
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let debug = args.contains("--debug");
    logging::init(debug);

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --config-dir");
        None
    });
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|arg| arg.into_string().ok());

    app::run(Flags {
        lang,
        file_path,
        config_dir,
    })
}
