//! Criteria - Filter and Sort Settings
//!
//! The user-editable inputs of the filter-sort engine. Every field is optional;
//! an unset field never filters anything out.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::domain::character::CharacterRecord;

/// Status values offered in the status filter
pub const STATUS_OPTIONS: &[&str] = &["Alive", "Dead", "unknown"];

/// Active filter values
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the character name; empty means unset
    pub name: String,
    /// Exact, case-sensitive status
    pub status: Option<String>,
    /// Case-insensitive exact species
    pub species: Option<String>,
}

impl FilterCriteria {
    /// Whether no filter is active
    pub fn is_unset(&self) -> bool {
        self.name.is_empty() && self.status.is_none() && self.species.is_none()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }
}

/// Column the filtered collection is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep dataset order
    #[default]
    None,
    Name,
    Status,
}

impl SortKey {
    /// All sort keys in menu order
    pub fn all() -> &'static [SortKey] {
        &[SortKey::None, SortKey::Name, SortKey::Status]
    }

    /// Translation key for the menu label
    pub fn label_key(self) -> &'static str {
        match self {
            SortKey::None => "sort_none",
            SortKey::Name => "sort_name",
            SortKey::Status => "sort_status",
        }
    }

    /// The field a record is compared on, `None` when unsorted
    pub fn field(self, record: &CharacterRecord) -> Option<&str> {
        match self {
            SortKey::None => None,
            SortKey::Name => Some(&record.name),
            SortKey::Status => Some(&record.status),
        }
    }
}

/// Locale-aware text comparison.
///
/// Compares in levels like a collator: base letters first (accents and case
/// ignored, spaces before symbols before digits before letters), then
/// accents (unaccented first), then case (lowercase first). A raw comparison
/// settles whatever remains, so only identical strings compare equal.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Precomputed form of a string for repeated [`locale_compare`] calls
pub fn collation_key(s: &str) -> CollationKey {
    let mut units: Vec<CollationUnit> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            // A leading mark has no base to attach to and is ignored
            if let Some(last) = units.last_mut() {
                if last.accent == 0 {
                    last.accent = u32::from(c);
                }
            }
            continue;
        }
        units.push(CollationUnit::new(c));
    }

    CollationKey {
        units,
        raw: s.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Symbol,
    Digit,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Primary {
    class: CharClass,
    base: char,
    variant: u8,
}

#[derive(Debug, Clone)]
struct CollationUnit {
    primary: Primary,
    accent: u32,
    upper: bool,
}

impl CollationUnit {
    fn new(c: char) -> Self {
        let lower = c.to_lowercase().next().unwrap_or(c);
        // Letters without a decomposition that sort right after their base
        let (base, variant) = match lower {
            'ı' => ('i', 1),
            'ł' => ('l', 1),
            'ø' => ('o', 1),
            'đ' => ('d', 1),
            other => (other, 0),
        };
        let class = if c.is_whitespace() {
            CharClass::Space
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Symbol
        };

        Self {
            primary: Primary {
                class,
                base,
                variant,
            },
            accent: 0,
            upper: c.is_uppercase(),
        }
    }
}

/// Sort key produced by [`collation_key`]
#[derive(Debug, Clone)]
pub struct CollationKey {
    units: Vec<CollationUnit>,
    raw: String,
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.units, &other.units);
        a.iter()
            .map(|u| u.primary)
            .cmp(b.iter().map(|u| u.primary))
            .then_with(|| a.iter().map(|u| u.accent).cmp(b.iter().map(|u| u.accent)))
            .then_with(|| a.iter().map(|u| u.upper).cmp(b.iter().map(|u| u.upper)))
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CollationKey {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for CollationKey {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_criteria() {
        assert!(FilterCriteria::default().is_unset());
        assert!(!FilterCriteria::default().with_name("rick").is_unset());
        assert!(!FilterCriteria::default().with_status("Dead").is_unset());
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("alpha", "Beta"), Ordering::Less);
        assert_eq!(locale_compare("Zeep", "abadango"), Ordering::Greater);
        // Plain byte order would put "Dead" before "alive"
        assert_eq!(locale_compare("alive", "Dead"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_lowercase_before_uppercase() {
        assert_eq!(locale_compare("unknown", "Unknown"), Ordering::Less);
        assert_eq!(locale_compare("Unknown", "unknown"), Ordering::Greater);
        assert_eq!(locale_compare("Rick", "Rick"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_prefix_sorts_first() {
        assert_eq!(locale_compare("Rick", "Rick Sanchez"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_accents_sort_with_their_base_letter() {
        assert_eq!(locale_compare("Évil Morty", "Zeep"), Ordering::Less);
        assert_eq!(locale_compare("Abradolf", "Évil Morty"), Ordering::Less);
        assert_eq!(locale_compare("Évil Morty", "Fart"), Ordering::Less);
        // Same letters: the unaccented form comes first
        assert_eq!(locale_compare("Evil", "Évil"), Ordering::Less);
        assert_eq!(locale_compare("évil", "Evil"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_turkish_i() {
        assert_eq!(locale_compare("İzmir", "Jaguar"), Ordering::Less);
        assert_eq!(locale_compare("Hakan", "İzmir"), Ordering::Less);
        assert_eq!(locale_compare("Izmir", "İzmir"), Ordering::Less);
        // Dotless i sits between i and j
        assert_eq!(locale_compare("ızgara", "jaguar"), Ordering::Less);
        assert_eq!(locale_compare("izgara", "ızgara"), Ordering::Less);
        assert_eq!(locale_compare("ızgara", "izgara"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_punctuation_before_digits_before_letters() {
        assert_eq!(locale_compare("~Rick", "Abe"), Ordering::Less);
        assert_eq!(locale_compare("-", "2"), Ordering::Less);
        assert_eq!(locale_compare("2", "a"), Ordering::Less);
        assert_eq!(locale_compare(" ", "-"), Ordering::Less);
        assert_eq!(locale_compare("Mr. Meeseeks", "Mr Meeseeks"), Ordering::Greater);
    }

    #[test]
    fn test_collation_key_matches_locale_compare() {
        let mut names = vec!["Zeep", "évil", "Évil", "abe", "~x", "ızgara", "Izmir"];
        names.sort_by_cached_key(|n| collation_key(n));
        assert_eq!(names, vec!["~x", "abe", "évil", "Évil", "Izmir", "ızgara", "Zeep"]);
    }

    #[test]
    fn test_sort_key_field() {
        let record = CharacterRecord::new(1, "Morty Smith", "Alive", "Human");
        assert_eq!(SortKey::None.field(&record), None);
        assert_eq!(SortKey::Name.field(&record), Some("Morty Smith"));
        assert_eq!(SortKey::Status.field(&record), Some("Alive"));
    }
}
