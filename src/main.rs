//! Rick & Morty Table - Main Entry Point
//!
//! Browse, filter, sort and page through every character of the
//! Rick and Morty API.

use gpui::{
    App, AppContext, Application, Bounds, Context, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, point, px, size,
};
use gpui_component::{Root, Theme, ThemeMode};
use gpui_component_assets::Assets;
use rm_table::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use rm_table::helpers::{
    MenuAction, PageAction, get_or_create_data_dir, is_development, new_key_bindings,
};
use rm_table::services::{AvatarClient, FetchError, HttpCharacterSource};
use rm_table::states::{
    CharactersState, LocaleAction, RmtAppState, RmtGlobalStore, ThemeAction,
    init_filter_actions, update_app_state_and_save,
};
use rm_table::views::RmtContent;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, time::LocalTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Install stdout and rolling file logging; the guard flushes the file on drop
fn init_logging() -> Option<WorkerGuard> {
    let default_directive = if is_development() {
        "rm_table=debug,info"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let stdout_layer = fmt::layer().with_timer(LocalTime::rfc_3339());

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "rm-table.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}

fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
}

fn with_characters(
    cx: &mut App,
    f: impl FnOnce(&mut CharactersState, &mut Context<CharactersState>),
) {
    let characters = cx.global::<RmtGlobalStore>().characters();
    characters.update(cx, f);
}

fn init_actions(cx: &mut App) {
    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
    });

    cx.on_action(|action: &PageAction, cx: &mut App| match action {
        PageAction::Previous => with_characters(cx, |state, cx| state.previous_page(cx)),
        PageAction::Next => with_characters(cx, |state, cx| state.next_page(cx)),
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, cx);
        update_app_state_and_save(cx, "save_theme", move |state, _cx| {
            state.set_theme(mode);
        });
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = action.code().to_string();
        update_app_state_and_save(cx, "save_locale", move |state, _cx| {
            state.set_locale(locale);
        });
    });

    init_filter_actions(cx);
}

fn main() {
    let _log_guard = init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "Starting Rick & Morty Table");

    let app_state = RmtAppState::try_load().unwrap_or_else(|e| {
        error!(error = %e, "Falling back to default settings");
        RmtAppState::new()
    });

    let app = Application::new().with_assets(Assets);

    app.run(move |cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        apply_theme(app_state.theme(), cx);

        let page_size = app_state.page_size();
        let api_base_url = app_state.api_base_url().to_string();
        info!(%api_base_url, page_size = page_size.get(), "Loaded settings");

        let app_state = cx.new(|_| app_state);
        let characters = cx.new(|_| {
            let state = CharactersState::new(page_size);
            match AvatarClient::new() {
                Ok(client) => state.with_avatar_client(client),
                Err(e) => {
                    warn!(error = %e, "Avatars disabled");
                    state
                }
            }
        });
        cx.set_global(RmtGlobalStore::new(app_state, characters.clone()));

        init_actions(cx);

        characters.update(cx, |state, cx| match HttpCharacterSource::new(api_base_url) {
            Ok(source) => state.load(source, cx),
            Err(e) => state.fail_load(FetchError::new(1, e.to_string()), cx),
        });

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Rick & Morty Table")),
                appears_transparent: true,
                traffic_light_position: Some(point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let content = cx.new(|cx| RmtContent::new(window, cx));
            cx.new(|cx| Root::new(content, window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
