//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::RmtGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

fn locale(cx: &App) -> &str {
    cx.global::<RmtGlobalStore>().read(cx).locale()
}

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    t!(format!("common.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "filters" namespace
pub fn i18n_filters(cx: &App, key: &str) -> SharedString {
    t!(format!("filters.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "table" namespace
pub fn i18n_table(cx: &App, key: &str) -> SharedString {
    t!(format!("table.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "details" namespace
pub fn i18n_details(cx: &App, key: &str) -> SharedString {
    t!(format!("details.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "pagination" namespace
pub fn i18n_pagination(cx: &App, key: &str) -> SharedString {
    t!(format!("pagination.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "settings" namespace
pub fn i18n_settings(cx: &App, key: &str) -> SharedString {
    t!(format!("settings.{key}"), locale = locale(cx)).into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `page_of: "Page {current} / {total}"`
/// i18n_format(cx, "pagination.page_of", &[("current", "1"), ("total", "3")])
/// // Returns "Page 1 / 3"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut result = t!(key, locale = locale(cx)).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}
