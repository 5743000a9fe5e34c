//! Character Details Panel
//!
//! Avatar and facts of the selected character. A click flashes the panel.

use crate::constants::{AVATAR_SIZE, DETAIL_PANEL_WIDTH};
use crate::domain::CharacterRecord;
use crate::states::{AvatarSlot, i18n_details};
use gpui::{App, FontWeight, ObjectFit, SharedString, Window, div, img, prelude::*, px};
use gpui_component::{ActiveTheme, Colorize, h_flex, label::Label, v_flex};
use std::sync::Arc;

type ClickHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

/// Detail card for one character
#[derive(IntoElement)]
pub struct CharacterDetails {
    record: Arc<CharacterRecord>,
    avatar: Option<AvatarSlot>,
    highlighted: bool,
    on_click: Option<ClickHandler>,
}

impl CharacterDetails {
    pub fn new(record: Arc<CharacterRecord>) -> Self {
        Self {
            record,
            avatar: None,
            highlighted: false,
            on_click: None,
        }
    }

    pub fn avatar(mut self, avatar: Option<AvatarSlot>) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    fn fact(label: SharedString, value: impl Into<SharedString>) -> impl IntoElement {
        h_flex()
            .gap_2()
            .child(Label::new(format!("{label}:")).font_weight(FontWeight::BOLD))
            .child(Label::new(value))
    }
}

impl RenderOnce for CharacterDetails {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let record = self.record;
        let (bg, border) = if self.highlighted {
            (cx.theme().accent, cx.theme().primary)
        } else {
            (cx.theme().secondary, cx.theme().border)
        };

        let avatar_frame = div()
            .size(px(AVATAR_SIZE))
            .rounded_lg()
            .overflow_hidden()
            .bg(cx.theme().muted.opacity(0.3));

        let avatar = match self.avatar {
            Some(AvatarSlot::Ready(image)) => avatar_frame
                .child(img(image).size_full().object_fit(ObjectFit::Cover))
                .into_any_element(),
            _ => avatar_frame.into_any_element(),
        };

        let on_click = self.on_click;

        v_flex()
            .id("character-details")
            .w(px(DETAIL_PANEL_WIDTH))
            .p_4()
            .gap_3()
            .items_center()
            .rounded_lg()
            .border_1()
            .when(self.highlighted, |this| this.border_2())
            .border_color(border)
            .bg(bg)
            .cursor_pointer()
            .child(avatar)
            .child(
                v_flex()
                    .w_full()
                    .gap_1()
                    .child(Self::fact(i18n_details(cx, "name"), record.name.clone()))
                    .child(Self::fact(i18n_details(cx, "status"), record.status.clone()))
                    .child(Self::fact(i18n_details(cx, "species"), record.species.clone()))
                    .child(Self::fact(i18n_details(cx, "gender"), record.gender.clone()))
                    .child(Self::fact(
                        i18n_details(cx, "location"),
                        record.location.name.clone(),
                    ))
                    .child(Self::fact(
                        i18n_details(cx, "episodes"),
                        record.episode_count().to_string(),
                    )),
            )
            .on_click(move |_, window, cx| {
                if let Some(handler) = on_click.as_ref() {
                    handler(window, cx);
                }
            })
    }
}
