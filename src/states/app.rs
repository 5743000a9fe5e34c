//! Application State
//!
//! Persisted settings (theme, locale, API root, page size) and the global store.

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::services::DEFAULT_API_BASE_URL;
use crate::states::CharactersState;
use gpui::{Action, App, AppContext, Context, Entity, Global};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{error, info, warn};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Tr,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Tr => "tr",
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const SUPPORTED_LOCALES: &[&str] = &["en", "tr"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("rm-table.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RmtAppState {
    locale: Option<String>,
    theme: Option<String>,
    /// Root of the character API
    api_base_url: Option<String>,
    /// Rows per table page
    page_size: Option<usize>,
}

impl RmtAppState {
    /// Load state from config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        let mut state = Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            state.locale = detect_locale(&Locale::current().to_string());
        }

        Ok(state)
    }

    /// Parse the TOML body of the config file
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        let mut state: Self = toml::from_str(value)?;

        if state.page_size == Some(0) {
            warn!(default = DEFAULT_PAGE_SIZE, "Ignoring page_size = 0");
            state.page_size = None;
        }

        Ok(state)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
            .and_then(NonZeroUsize::new)
            .or_else(|| NonZeroUsize::new(DEFAULT_PAGE_SIZE))
            .unwrap_or(NonZeroUsize::MIN)
    }

    // ==================== Setters ====================

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }
}

/// Map a system locale such as `tr-TR` to a supported UI locale
fn detect_locale(system: &str) -> Option<String> {
    let lang = system.split(['-', '_']).next()?.to_lowercase();
    SUPPORTED_LOCALES
        .contains(&lang.as_str())
        .then_some(lang)
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<RmtGlobalStore>()`
#[derive(Clone)]
pub struct RmtGlobalStore {
    app_state: Entity<RmtAppState>,
    characters: Entity<CharactersState>,
}

impl RmtGlobalStore {
    /// Create a new global store
    pub fn new(app_state: Entity<RmtAppState>, characters: Entity<CharactersState>) -> Self {
        Self {
            app_state,
            characters,
        }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<RmtAppState> {
        self.app_state.clone()
    }

    /// Get the characters state entity
    pub fn characters(&self) -> Entity<CharactersState> {
        self.characters.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a RmtAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut RmtAppState, &mut Context<RmtAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for RmtGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &RmtAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut RmtAppState, &App) + Send + 'static,
{
    let store = cx.global::<RmtGlobalStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let state = RmtAppState::parse("  \n").expect("parse");
        assert_eq!(state, RmtAppState::default());
        assert_eq!(state.locale(), "en");
        assert_eq!(state.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(state.page_size().get(), DEFAULT_PAGE_SIZE);
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn test_parse_full_config() {
        let state = RmtAppState::parse(
            r#"
locale = "tr"
theme = "dark"
api_base_url = "http://localhost:3000/api"
page_size = 10
"#,
        )
        .expect("parse");

        assert_eq!(state.locale(), "tr");
        assert_eq!(state.theme(), Some(ThemeMode::Dark));
        assert_eq!(state.api_base_url(), "http://localhost:3000/api");
        assert_eq!(state.page_size().get(), 10);
    }

    #[test]
    fn test_zero_page_size_falls_back_to_default() {
        let state = RmtAppState::parse("page_size = 0").expect("parse");
        assert_eq!(state.page_size().get(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(RmtAppState::parse("page_size = \"six\"").is_err());
    }

    #[test]
    fn test_theme_round_trips_through_toml() {
        let mut state = RmtAppState::new();
        state.set_theme(Some(ThemeMode::Light));
        state.set_locale("tr".to_string());

        let body = toml::to_string(&state).expect("serialize");
        let parsed = RmtAppState::parse(&body).expect("parse");
        assert_eq!(parsed.theme(), Some(ThemeMode::Light));
        assert_eq!(parsed.locale(), "tr");
    }

    #[test]
    fn test_detect_locale() {
        assert_eq!(detect_locale("tr-TR").as_deref(), Some("tr"));
        assert_eq!(detect_locale("en_US").as_deref(), Some("en"));
        assert_eq!(detect_locale("de-DE"), None);
        assert_eq!(detect_locale(""), None);
    }
}
