//! Main Content Area
//!
//! Switches between the loading, error and table screens and hosts the eyes
//! overlay on top of them.

use crate::domain::Point;
use crate::states::{CharactersState, RmtGlobalStore, i18n_common};
use crate::views::{
    CharacterDetails, CharacterTable, EyesLayer, FilterBar, Pagination, RmtTitleBar,
};
use gpui::{App, Context, Entity, MouseMoveEvent, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Colorize, Icon, IconName, Sizable, h_flex, label::Label, v_flex,
};

/// Main content container component
pub struct RmtContent {
    title_bar: Entity<RmtTitleBar>,
    filter_bar: Entity<FilterBar>,
    eyes: Entity<EyesLayer>,
    characters: Entity<CharactersState>,
    _subscriptions: Vec<Subscription>,
}

impl RmtContent {
    /// Create a new content view
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<RmtGlobalStore>();
        let characters = store.characters();
        let app_state = store.app_state();

        let mut subscriptions = Vec::new();

        subscriptions.push(cx.observe(&characters, |_this, _model, cx| {
            cx.notify();
        }));

        // Locale and theme changes
        subscriptions.push(cx.observe(&app_state, |_this, _model, cx| {
            cx.notify();
        }));

        let title_bar = cx.new(|cx| RmtTitleBar::new(window, cx));
        let filter_bar = {
            let characters = characters.clone();
            cx.new(|cx| FilterBar::new(characters, window, cx))
        };
        let eyes = cx.new(|_| EyesLayer::new());

        Self {
            title_bar,
            filter_bar,
            eyes,
            characters,
            _subscriptions: subscriptions,
        }
    }

    fn on_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let cursor = Point::new(f32::from(event.position.x), f32::from(event.position.y));
        self.eyes.update(cx, |eyes, cx| eyes.track(cursor, cx));
    }

    /// Render the loading screen
    fn render_loading(cx: &App) -> impl IntoElement {
        v_flex()
            .size_full()
            .gap_3()
            .items_center()
            .justify_center()
            .child(
                Icon::new(IconName::LoaderCircle)
                    .large()
                    .text_color(cx.theme().primary),
            )
            .child(Label::new(i18n_common(cx, "loading")).text_color(cx.theme().muted_foreground))
    }

    /// Render the error screen; the cause only goes to the log
    fn render_error(cx: &App) -> impl IntoElement {
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child(
                Label::new(i18n_common(cx, "load_error"))
                    .text_lg()
                    .text_color(cx.theme().danger),
            )
    }

    fn render_partial_warning(cx: &App) -> impl IntoElement {
        h_flex()
            .w_full()
            .px_3()
            .py_2()
            .gap_2()
            .items_center()
            .rounded_md()
            .bg(cx.theme().warning.opacity(0.15))
            .border_1()
            .border_color(cx.theme().warning)
            .child(Icon::new(IconName::TriangleAlert).small().text_color(cx.theme().warning))
            .child(Label::new(i18n_common(cx, "partial_warning")).text_sm())
    }

    /// Render filters, table, details and pagination
    fn render_table(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.characters.read(cx);
        let partial = state.partial_error().is_some();
        let rows = state.visible_page().to_vec();
        let selected = state.selected().cloned();
        let no_results = state.no_results();
        let highlighted = state.is_highlighted();
        let avatar = selected.as_ref().and_then(|r| state.avatar(r.id).cloned());
        let (current_page, total_pages) = (state.current_page(), state.total_pages());

        let table_characters = self.characters.clone();
        let table = CharacterTable::new(&rows)
            .selected(selected.clone())
            .no_results(no_results)
            .on_select(move |record, _window, cx| {
                table_characters.update(cx, |state, cx| {
                    state.select(record, cx);
                    state.highlight(cx);
                });
            });

        let details = selected.map(|record| {
            let characters = self.characters.clone();
            CharacterDetails::new(record)
                .avatar(avatar)
                .highlighted(highlighted)
                .on_click(move |_window, cx| {
                    characters.update(cx, |state, cx| state.highlight(cx));
                })
        });

        v_flex()
            .size_full()
            .p_4()
            .gap_4()
            .child(Label::new(i18n_common(cx, "app_title")).text_2xl())
            .when(partial, |this| this.child(Self::render_partial_warning(cx)))
            .child(self.filter_bar.clone())
            .child(
                h_flex()
                    .w_full()
                    .gap_4()
                    .items_start()
                    .child(table)
                    .children(details),
            )
            .child(Pagination::new(current_page, total_pages))
    }
}

impl Render for RmtContent {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (loading, failed) = {
            let state = self.characters.read(cx);
            (state.is_loading(), state.load_error().is_some())
        };

        let body = if loading {
            Self::render_loading(cx).into_any_element()
        } else if failed {
            Self::render_error(cx).into_any_element()
        } else {
            self.render_table(cx).into_any_element()
        };

        v_flex()
            .id("rmt-root")
            .relative()
            .size_full()
            .bg(cx.theme().background)
            .on_mouse_move(cx.listener(Self::on_mouse_move))
            .child(self.title_bar.clone())
            .child(
                div()
                    .id("content")
                    .relative()
                    .flex_1()
                    .w_full()
                    .min_h(px(0.0))
                    .overflow_y_scroll()
                    .child(body),
            )
            .child(self.eyes.clone())
    }
}
