//! Character Table
//!
//! Name, status and species of the rows on the current page.

use crate::constants::TABLE_ROW_HEIGHT;
use crate::domain::CharacterRecord;
use crate::states::i18n_table;
use gpui::{App, FontWeight, SharedString, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, Colorize, h_flex, label::Label, v_flex};
use std::sync::Arc;

type SelectHandler = Arc<dyn Fn(Arc<CharacterRecord>, &mut Window, &mut App) + 'static>;

/// Table of the visible page
#[derive(IntoElement)]
pub struct CharacterTable {
    rows: Vec<Arc<CharacterRecord>>,
    selected: Option<Arc<CharacterRecord>>,
    no_results: bool,
    on_select: Option<SelectHandler>,
}

impl CharacterTable {
    pub fn new(rows: &[Arc<CharacterRecord>]) -> Self {
        Self {
            rows: rows.to_vec(),
            selected: None,
            no_results: false,
            on_select: None,
        }
    }

    /// Mark the currently selected record
    pub fn selected(mut self, selected: Option<Arc<CharacterRecord>>) -> Self {
        self.selected = selected;
        self
    }

    /// Show the "not in the table" state
    pub fn no_results(mut self, no_results: bool) -> Self {
        self.no_results = no_results;
        self
    }

    /// Set the row click handler
    pub fn on_select(
        mut self,
        handler: impl Fn(Arc<CharacterRecord>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_select = Some(Arc::new(handler));
        self
    }

    fn cell(text: impl Into<SharedString>) -> impl IntoElement {
        div()
            .flex_1()
            .px_3()
            .overflow_hidden()
            .child(Label::new(text).text_sm().text_ellipsis())
    }
}

impl RenderOnce for CharacterTable {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let header_bg = cx.theme().secondary;
        let border = if self.no_results {
            cx.theme().danger
        } else {
            cx.theme().border
        };
        let stripe = if cx.theme().is_dark() {
            cx.theme().background.lighten(0.3)
        } else {
            cx.theme().background.darken(0.01)
        };
        let hover = cx.theme().accent.opacity(0.5);
        let selected_bg = cx.theme().accent;

        let header = h_flex()
            .h(px(TABLE_ROW_HEIGHT))
            .w_full()
            .items_center()
            .bg(header_bg)
            .border_b_1()
            .border_color(border)
            .font_weight(FontWeight::MEDIUM)
            .child(Self::cell(i18n_table(cx, "name")))
            .child(Self::cell(i18n_table(cx, "status")))
            .child(Self::cell(i18n_table(cx, "species")));

        let selected_id = self.selected.as_ref().map(|r| r.id);
        let on_select = self.on_select.clone();

        let rows = self.rows.into_iter().enumerate().map(|(index, record)| {
            let is_selected = selected_id == Some(record.id);
            let bg = if is_selected {
                selected_bg
            } else if index % 2 == 0 {
                stripe
            } else {
                cx.theme().background
            };
            let on_select = on_select.clone();
            let clicked = record.clone();

            h_flex()
                .id(("character-row", index))
                .h(px(TABLE_ROW_HEIGHT))
                .w_full()
                .items_center()
                .bg(bg)
                .cursor_pointer()
                .hover(move |this| this.bg(hover))
                .border_b_1()
                .border_color(cx.theme().border)
                .child(Self::cell(record.name.clone()))
                .child(Self::cell(record.status.clone()))
                .child(Self::cell(record.species.clone()))
                .on_click(move |_, window, cx| {
                    if let Some(handler) = on_select.as_ref() {
                        handler(clicked.clone(), window, cx);
                    }
                })
        });

        let mut body = v_flex().w_full().children(rows);
        if self.no_results {
            body = body.child(
                div()
                    .w_full()
                    .p_4()
                    .flex()
                    .justify_center()
                    .child(
                        Label::new(i18n_table(cx, "no_results"))
                            .text_color(cx.theme().danger),
                    ),
            );
        }

        v_flex()
            .flex_1()
            .min_w(px(420.0))
            .rounded_md()
            .overflow_hidden()
            .border_1()
            .when(self.no_results, |this| this.border_2())
            .border_color(border)
            .child(header)
            .child(body)
    }
}
