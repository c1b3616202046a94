// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer, the
//! brightness controller and the settings dialog.
//!
//! The `App` struct wires the settings store, localization and the activation
//! gate together and translates iced messages into calls on them.

mod host;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use host::{Media, WindowHost};
pub use message::{Flags, Message};
pub use screen::Screen;
pub use subscription::wheel_notches;

use crate::activation::Gate;
use crate::application::port::SettingsStore;
use crate::brightness::Controller;
use crate::config::TomlStore;
use crate::domain::settings::FieldId;
use crate::i18n::I18n;
use crate::preferences::{self, Preferences, RawPreferences};
use crate::settings::Session;
use crate::ui::indicator::IndicatorView;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 500;

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    store: TomlStore,
    session: Session,
    controller: Controller,
    gate: Gate,
    host: WindowHost,
    fullscreen: bool,
    /// Message key of the notice shown in the toolbar.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen())
            .field("fullscreen", &self.fullscreen)
            .field("activation", &self.gate.state())
            .field("brightness", &self.controller.applied())
            .finish()
    }
}

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the settings store and initializes application state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (store, warning) = TomlStore::load(None);
        (Self::with_store(flags, store, warning), Task::none())
    }

    /// Builds the application around an already loaded store.
    fn with_store(flags: Flags, mut store: TomlStore, warning: Option<String>) -> Self {
        let i18n = I18n::new(
            flags.lang.clone(),
            store.config().stored(FieldId::Language),
        );
        let preferences = initial_preferences(&store, &i18n);

        let mut session = Session::new();
        session.on_init(&mut store, &i18n);

        let mut host = WindowHost::default();
        if let Some(path) = flags.file_path.as_deref() {
            host.load(Path::new(path));
        }

        Self {
            i18n,
            store,
            session,
            controller: Controller::new(preferences),
            gate: Gate::new(),
            host,
            fullscreen: false,
            notice: warning,
        }
    }

    /// What the window shows, derived from the dialog state.
    pub fn screen(&self) -> Screen {
        if self.store.is_open() {
            Screen::Settings
        } else {
            Screen::Viewer
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("settings-title");
        let file_name = self
            .host
            .media()
            .and_then(|media| media.path.file_name())
            .and_then(|name| name.to_str());

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_wheel_subscription(self.host.is_listening()),
            subscription::create_tick_subscription(self.controller.overlay().is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            store: &mut self.store,
            session: &mut self.session,
            controller: &mut self.controller,
            gate: &mut self.gate,
            host: &mut self.host,
            fullscreen: &mut self.fullscreen,
            notice: &mut self.notice,
        };

        match message {
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::OpenSettings => update::handle_open_settings(&mut ctx),
            Message::ToggleFullscreen(window_id) => {
                update::handle_toggle_fullscreen(&mut ctx, window_id)
            }
            Message::Escape(window_id) => update::handle_escape(&mut ctx, window_id),
            Message::Wheel(delta_y) => update::handle_wheel(&mut ctx, delta_y),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let indicator = self
            .controller
            .overlay()
            .is_attached()
            .then(|| IndicatorView {
                opacity: self.controller.overlay().opacity(),
                icon_opacity: self.controller.icon_opacity(),
                label: self.controller.label(),
            });

        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen(),
            schema: self.store.schema(),
            values: self.session.values(),
            labels: self.session.labels(),
            media: self.host.media().map(|media| &media.handle),
            brightness: self.controller.video_opacity(),
            indicator,
            fullscreen: self.fullscreen,
            notice: self.notice.as_deref(),
        })
    }
}

/// Resolves the stored preferences, falling back to the defaults when a
/// stored value is unusable.
fn initial_preferences(store: &TomlStore, i18n: &I18n) -> Preferences {
    let raw = RawPreferences::read(store);
    preferences::resolve(&raw, i18n, i18n.current_locale()).unwrap_or_else(|error| {
        tracing::warn!(%error, "stored preferences are invalid; using defaults");
        Preferences::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::ActivationState;
    use crate::overlay::OverlayPhase;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::settings;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};
    use tempfile::{tempdir, TempDir};

    fn store_in(dir: &TempDir) -> TomlStore {
        let (store, warning) = TomlStore::load(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        store
    }

    fn app_with_media(dir: &TempDir) -> App {
        let flags = Flags {
            lang: Some("en".into()),
            file_path: Some("clip.png".into()),
            config_dir: None,
        };
        App::with_store(flags, store_in(dir), None)
    }

    fn enter_fullscreen(app: &mut App) -> window::Id {
        let id = window::Id::unique();
        let _ = app.update(Message::ToggleFullscreen(id));
        id
    }

    #[test]
    fn new_app_starts_windowed_and_inactive() {
        let dir = tempdir().expect("temp dir");
        let app = App::with_store(Flags::default(), store_in(&dir), None);
        assert_eq!(app.screen(), Screen::Viewer);
        assert!(!app.fullscreen);
        assert_eq!(app.gate.state(), ActivationState::Inactive);
        assert_eq!(app.controller.applied(), 100);
    }

    #[test]
    fn fullscreen_with_media_arms_control() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_media(&dir);
        enter_fullscreen(&mut app);

        assert!(app.fullscreen);
        assert_eq!(app.gate.state(), ActivationState::Active);
        assert!(app.host.is_listening());
        assert_eq!(app.controller.overlay().phase(), OverlayPhase::Holding);
    }

    #[test]
    fn fullscreen_without_media_stays_inactive() {
        let dir = tempdir().expect("temp dir");
        let mut app = App::with_store(Flags::default(), store_in(&dir), None);
        enter_fullscreen(&mut app);

        assert!(app.fullscreen);
        assert_eq!(app.gate.state(), ActivationState::Inactive);
        assert!(!app.host.is_listening());
    }

    #[test]
    fn wheel_down_darkens_by_one_step() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_media(&dir);
        enter_fullscreen(&mut app);

        let _ = app.update(Message::Wheel(1.0));
        assert_eq!(app.controller.applied(), 95);
        assert_eq!(app.controller.label(), "95%");
        assert_abs_diff_eq!(app.controller.video_opacity(), 0.95);
    }

    #[test]
    fn wheel_is_ignored_while_windowed() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_media(&dir);

        let _ = app.update(Message::Wheel(1.0));
        assert_eq!(app.controller.applied(), 100);
    }

    #[test]
    fn escape_restores_full_brightness() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_media(&dir);
        let id = enter_fullscreen(&mut app);
        for _ in 0..3 {
            let _ = app.update(Message::Wheel(1.0));
        }
        assert_eq!(app.controller.applied(), 85);

        let _ = app.update(Message::Escape(id));
        assert!(!app.fullscreen);
        assert_eq!(app.gate.state(), ActivationState::Inactive);
        assert_eq!(app.controller.applied(), 100);
        assert!(!app.host.is_listening());
    }

    #[test]
    fn escape_closes_settings_before_leaving_fullscreen() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_media(&dir);
        let id = enter_fullscreen(&mut app);
        let _ = app.update(Message::OpenSettings);
        assert_eq!(app.screen(), Screen::Settings);

        let _ = app.update(Message::Escape(id));
        assert_eq!(app.screen(), Screen::Viewer);
        assert!(app.fullscreen);
    }

    #[test]
    fn ticks_fade_the_indicator_out() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_media(&dir);
        enter_fullscreen(&mut app);
        assert!(app.controller.overlay().is_animating());

        let later = Instant::now() + Duration::from_secs(5);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.controller.overlay().phase(), OverlayPhase::Hidden);
        assert_abs_diff_eq!(app.controller.overlay().opacity(), 0.0);
    }

    #[test]
    fn dropped_file_becomes_the_media() {
        let dir = tempdir().expect("temp dir");
        let mut app = App::with_store(Flags::default(), store_in(&dir), None);
        let _ = app.update(Message::FileDropped(PathBuf::from("movie.png")));

        let media = app.host.media().expect("media loaded");
        assert_eq!(media.path, PathBuf::from("movie.png"));
        assert_eq!(app.title(), "movie.png - Fullscreen Brightness");
    }

    #[test]
    fn saving_settings_reconfigures_active_control() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_media(&dir);
        enter_fullscreen(&mut app);
        let _ = app.update(Message::OpenSettings);
        let _ = app.update(Message::Settings(settings::Message::Selected(
            FieldId::MaxBrightness,
            "60%".into(),
        )));
        let _ = app.update(Message::Settings(settings::Message::Save));

        assert_eq!(app.controller.applied(), 60);
        assert!(app.notice.is_none());
        let contents =
            fs::read_to_string(dir.path().join("settings.toml")).expect("settings written");
        assert!(contents.contains("60%"));
    }

    #[test]
    fn saving_a_new_language_translates_stored_labels() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_media(&dir);
        let _ = app.update(Message::OpenSettings);
        let _ = app.update(Message::Settings(settings::Message::Selected(
            FieldId::AdjustmentSpeed,
            "Slow".into(),
        )));
        let _ = app.update(Message::Settings(settings::Message::Selected(
            FieldId::Language,
            "de".into(),
        )));
        let _ = app.update(Message::Settings(settings::Message::Save));

        assert_eq!(app.i18n.current_locale().to_string(), "de");
        assert_eq!(app.store.get(FieldId::AdjustmentSpeed), "Langsam");
        assert_eq!(app.controller.preferences().step, 2);
        assert_eq!(app.screen(), Screen::Settings);
    }

    #[test]
    fn invalid_language_shows_notice() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_media(&dir);
        let _ = app.update(Message::OpenSettings);
        let _ = app.update(Message::Settings(settings::Message::Selected(
            FieldId::Language,
            "xx".into(),
        )));
        let _ = app.update(Message::Settings(settings::Message::Save));

        assert_eq!(app.notice.as_deref(), Some(update::INVALID_PREFERENCES_KEY));
        assert_eq!(app.i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn corrupt_stored_brightness_falls_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join("settings.toml"),
            "[brightness]\ndefault = \"bright\"\n",
        )
        .expect("write settings");
        let app = app_with_media(&dir);
        assert_eq!(*app.controller.preferences(), Preferences::default());
    }

    #[test]
    fn load_warning_is_shown_as_notice() {
        let dir = tempdir().expect("temp dir");
        let app = App::with_store(
            Flags::default(),
            store_in(&dir),
            Some("notification-config-load-error".into()),
        );
        assert_eq!(app.notice.as_deref(), Some("notification-config-load-error"));
    }
}
