//! Filter Actions
//!
//! Dropdown menu entries dispatch these; the handlers forward them to
//! [`CharactersState`](super::CharactersState).

use crate::domain::SortKey;
use gpui::{Action, App};
use schemars::JsonSchema;
use serde::Deserialize;

use super::RmtGlobalStore;

/// Pick a status filter; `None` clears it
#[derive(Clone, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub struct SelectStatus {
    pub status: Option<String>,
}

/// Pick a species filter; `None` clears it
#[derive(Clone, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub struct SelectSpecies {
    pub species: Option<String>,
}

/// Sort order selection
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum SortAction {
    None,
    Name,
    Status,
}

impl SortAction {
    pub fn key(self) -> SortKey {
        match self {
            SortAction::None => SortKey::None,
            SortAction::Name => SortKey::Name,
            SortAction::Status => SortKey::Status,
        }
    }

    pub fn from_key(key: SortKey) -> Self {
        match key {
            SortKey::None => SortAction::None,
            SortKey::Name => SortAction::Name,
            SortKey::Status => SortAction::Status,
        }
    }
}

/// Register the global handlers for the filter actions
pub fn init_filter_actions(cx: &mut App) {
    cx.on_action(|action: &SelectStatus, cx: &mut App| {
        let characters = cx.global::<RmtGlobalStore>().characters();
        let status = action.status.clone();
        characters.update(cx, |state, cx| state.set_status_filter(status, cx));
    });

    cx.on_action(|action: &SelectSpecies, cx: &mut App| {
        let characters = cx.global::<RmtGlobalStore>().characters();
        let species = action.species.clone();
        characters.update(cx, |state, cx| state.set_species_filter(species, cx));
    });

    cx.on_action(|action: &SortAction, cx: &mut App| {
        let characters = cx.global::<RmtGlobalStore>().characters();
        let sort = action.key();
        characters.update(cx, |state, cx| state.set_sort(sort, cx));
    });
}
