//! Dataset - The Characters Loaded at Startup

use std::sync::Arc;

use crate::domain::character::CharacterRecord;
use crate::services::FetchError;

/// Whether every page of the API made it into the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Completeness {
    /// All pages were fetched
    #[default]
    Complete,
    /// Fetching stopped early; the records are whatever arrived before the error
    Partial(FetchError),
}

/// Immutable collection of every character fetched
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[Arc<CharacterRecord>]>,
    completeness: Completeness,
}

impl Dataset {
    /// Dataset holding every page
    pub fn complete(records: Vec<CharacterRecord>) -> Self {
        Self::build(records, Completeness::Complete)
    }

    /// Dataset cut short by `error`
    pub fn partial(records: Vec<CharacterRecord>, error: FetchError) -> Self {
        Self::build(records, Completeness::Partial(error))
    }

    fn build(records: Vec<CharacterRecord>, completeness: Completeness) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
            completeness,
        }
    }

    pub fn records(&self) -> &[Arc<CharacterRecord>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.completeness, Completeness::Complete)
    }

    /// The error that cut the load short, if any
    pub fn error(&self) -> Option<&FetchError> {
        match &self.completeness {
            Completeness::Complete => None,
            Completeness::Partial(error) => Some(error),
        }
    }

    /// Cheap identity check used to memoize derived views
    pub fn same_records(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}
