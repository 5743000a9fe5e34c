//! Pagination Component
//!
//! Previous/next navigation and the "Page x / y" indicator.

use crate::helpers::{PageAction, humanize_keystroke};
use crate::states::{i18n_format, i18n_pagination};
use gpui::{App, Window, prelude::*};
use gpui_component::{
    ActiveTheme, Disableable, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
};

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    can_prev: bool,
    can_next: bool,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            can_prev: current_page > 1,
            can_next: current_page < total_pages,
        }
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let previous = format!(
            "{} ({})",
            i18n_pagination(cx, "previous"),
            humanize_keystroke("left")
        );
        let next = format!(
            "{} ({})",
            i18n_pagination(cx, "next"),
            humanize_keystroke("right")
        );
        let page_info = i18n_format(
            cx,
            "pagination.page_of",
            &[
                ("current", &self.current_page.to_string()),
                ("total", &self.total_pages.to_string()),
            ],
        );

        h_flex()
            .w_full()
            .py_2()
            .gap_4()
            .items_center()
            .justify_center()
            .child(
                Button::new("prev-page")
                    .label(i18n_pagination(cx, "previous"))
                    .tooltip(previous)
                    .small()
                    .outline()
                    .disabled(!self.can_prev)
                    .on_click(|_, window, cx| {
                        window.dispatch_action(Box::new(PageAction::Previous), cx);
                    }),
            )
            .child(
                Label::new(page_info)
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                Button::new("next-page")
                    .label(i18n_pagination(cx, "next"))
                    .tooltip(next)
                    .small()
                    .outline()
                    .disabled(!self.can_next)
                    .on_click(|_, window, cx| {
                        window.dispatch_action(Box::new(PageAction::Next), cx);
                    }),
            )
    }
}
