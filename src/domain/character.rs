//! Character - Records Served by the Character API
//!
//! Wire-compatible with the `/character` endpoint. Records are immutable once
//! fetched and are shared behind `Arc` between the dataset, the filtered view
//! and the current selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque character identifier assigned by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u64);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named reference to a location (current location or origin)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    /// Display name, e.g. "Citadel of Ricks"
    pub name: String,
    /// Location resource URL (empty when unknown)
    #[serde(default)]
    pub url: String,
}

/// A single character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    /// "Alive", "Dead", "unknown" or any other value the API reports
    pub status: String,
    pub species: String,
    /// Sub-species or type, often empty
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
    #[serde(default)]
    pub origin: LocationRef,
    pub location: LocationRef,
    /// Avatar image URL
    pub image: String,
    /// Episode URLs the character appears in
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

impl CharacterRecord {
    /// Number of episodes the character appears in
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }

    /// Build a minimal record, mostly useful for fixtures
    pub fn new(
        id: u64,
        name: impl Into<String>,
        status: impl Into<String>,
        species: impl Into<String>,
    ) -> Self {
        Self {
            id: CharacterId(id),
            name: name.into(),
            status: status.into(),
            species: species.into(),
            kind: String::new(),
            gender: "unknown".to_string(),
            origin: LocationRef::default(),
            location: LocationRef::default(),
            image: String::new(),
            episode: Vec::new(),
            url: String::new(),
            created: String::new(),
        }
    }
}

/// Pagination block of an API response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of records across all pages
    #[serde(default)]
    pub count: u64,
    /// Total number of pages; authoritative for the fetch loop
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page as returned by `GET /character?page=<n>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<CharacterRecord>,
}
