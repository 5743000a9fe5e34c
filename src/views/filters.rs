//! Filter Bar
//!
//! Name search plus status, species and sort dropdowns.

use crate::domain::{STATUS_OPTIONS, SortKey};
use crate::states::{
    CharactersState, RmtGlobalStore, SelectSpecies, SelectStatus, SortAction, i18n_filters,
};
use gpui::{App, Context, Entity, SharedString, Subscription, Window, prelude::*};
use gpui_component::{
    Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    menu::{DropdownMenu, PopupMenu},
};
use rust_i18n::t;

/// Name placeholder in `locale`, or `None` when `shown` is already that locale
fn placeholder_update(shown: &str, locale: &str) -> Option<SharedString> {
    (shown != locale).then(|| t!("filters.name_placeholder", locale = locale).into())
}

/// Filter and sort controls above the table
pub struct FilterBar {
    characters: Entity<CharactersState>,
    name_input: Entity<InputState>,
    /// Locale the name placeholder was last translated into
    placeholder_locale: String,
    _subscriptions: Vec<Subscription>,
}

impl FilterBar {
    pub fn new(
        characters: Entity<CharactersState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut subscriptions = Vec::new();

        subscriptions.push(cx.observe(&characters, |_this, _model, cx| {
            cx.notify();
        }));

        // Re-render on locale switches so the placeholder follows
        let app_state = cx.global::<RmtGlobalStore>().app_state();
        subscriptions.push(cx.observe(&app_state, |_this, _model, cx| {
            cx.notify();
        }));

        let placeholder_locale = app_state.read(cx).locale().to_string();
        let name_input = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(i18n_filters(cx, "name_placeholder"))
        });

        let characters_clone = characters.clone();
        subscriptions.push(cx.subscribe(&name_input, move |_this, state, event, cx| {
            if matches!(event, InputEvent::Change) {
                let name = state.read(cx).value().to_string();
                characters_clone.update(cx, |state, cx| {
                    state.set_name_filter(name, cx);
                });
            }
        }));

        Self {
            characters,
            name_input,
            placeholder_locale,
            _subscriptions: subscriptions,
        }
    }

    fn sync_placeholder(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let locale = cx.global::<RmtGlobalStore>().read(cx).locale().to_string();
        if let Some(placeholder) = placeholder_update(&self.placeholder_locale, &locale) {
            self.name_input.update(cx, |input, cx| {
                input.set_placeholder(placeholder, window, cx);
            });
            self.placeholder_locale = locale;
        }
    }

    fn status_menu(menu: PopupMenu, current: Option<&str>, cx: &App) -> PopupMenu {
        STATUS_OPTIONS.iter().fold(
            menu.menu_with_check(
                i18n_filters(cx, "status"),
                current.is_none(),
                Box::new(SelectStatus { status: None }),
            )
            .separator(),
            |menu, status| {
                menu.menu_with_check(
                    *status,
                    current == Some(*status),
                    Box::new(SelectStatus {
                        status: Some((*status).to_string()),
                    }),
                )
            },
        )
    }

    fn species_menu(
        menu: PopupMenu,
        options: &[String],
        current: Option<&str>,
        cx: &App,
    ) -> PopupMenu {
        options.iter().fold(
            menu.menu_with_check(
                i18n_filters(cx, "species"),
                current.is_none(),
                Box::new(SelectSpecies { species: None }),
            )
            .separator(),
            |menu, species| {
                menu.menu_with_check(
                    species.clone(),
                    current == Some(species.as_str()),
                    Box::new(SelectSpecies {
                        species: Some(species.clone()),
                    }),
                )
            },
        )
    }

    fn sort_menu(menu: PopupMenu, current: SortKey, cx: &App) -> PopupMenu {
        SortKey::all().iter().fold(menu, |menu, key| {
            menu.menu_with_check(
                i18n_filters(cx, key.label_key()),
                current == *key,
                Box::new(SortAction::from_key(*key)),
            )
        })
    }
}

impl Render for FilterBar {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_placeholder(window, cx);

        let state = self.characters.read(cx);
        let criteria = state.criteria().clone();
        let sort = state.sort();
        let species_options: Vec<String> = state.species_options().to_vec();

        let status_label: SharedString = criteria
            .status
            .clone()
            .map(SharedString::from)
            .unwrap_or_else(|| i18n_filters(cx, "status"));
        let species_label: SharedString = criteria
            .species
            .clone()
            .map(SharedString::from)
            .unwrap_or_else(|| i18n_filters(cx, "species"));
        let sort_label = i18n_filters(cx, sort.label_key());

        let current_status = criteria.status.clone();
        let current_species = criteria.species.clone();

        h_flex()
            .w_full()
            .gap_2()
            .items_center()
            .child(
                Input::new(&self.name_input)
                    .prefix(Icon::new(IconName::Search))
                    .cleanable(true)
                    .w_64(),
            )
            .child(
                Button::new("status-filter")
                    .label(status_label)
                    .small()
                    .outline()
                    .icon(IconName::ChevronDown)
                    .dropdown_menu(move |menu, _window, cx| {
                        Self::status_menu(menu, current_status.as_deref(), cx)
                    }),
            )
            .child(
                Button::new("species-filter")
                    .label(species_label)
                    .small()
                    .outline()
                    .icon(IconName::ChevronDown)
                    .dropdown_menu(move |menu, _window, cx| {
                        Self::species_menu(menu, &species_options, current_species.as_deref(), cx)
                    }),
            )
            .child(
                Button::new("sort-key")
                    .label(sort_label)
                    .small()
                    .outline()
                    .icon(IconName::ChevronDown)
                    .dropdown_menu(move |menu, _window, cx| Self::sort_menu(menu, sort, cx)),
            )
    }
}
