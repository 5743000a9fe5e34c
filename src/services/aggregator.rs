//! Fetch-All Aggregator
//!
//! Walks the API page by page, strictly sequentially, until every page is in
//! or a request fails. The total page count is re-read from every response.
//! On failure the records gathered so far are kept alongside the error, so a
//! missing error is the only sign that the load is complete.

use std::sync::Arc;

use snafu::Snafu;

use crate::domain::{CharacterRecord, Dataset};
use crate::services::source::CharacterSource;

/// Terminal failure of the character load
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("Failed to load character page {page}: {reason}"))]
pub struct FetchError {
    /// Page whose request failed
    page: u32,
    reason: Arc<str>,
}

impl FetchError {
    pub fn new(page: u32, reason: impl Into<Arc<str>>) -> Self {
        Self {
            page,
            reason: reason.into(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Everything the aggregator gathered
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    /// Records in API order, possibly partial
    pub records: Vec<CharacterRecord>,
    /// Set when fetching stopped early
    pub error: Option<FetchError>,
    /// Number of pages that answered successfully
    pub pages_fetched: u32,
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Freeze into a dataset that remembers whether it is partial
    pub fn into_dataset(self) -> Dataset {
        match self.error {
            None => Dataset::complete(self.records),
            Some(error) => Dataset::partial(self.records, error),
        }
    }
}

/// Fetch every page from `source`
pub async fn fetch_all<S: CharacterSource>(source: &S) -> FetchOutcome {
    let mut outcome = FetchOutcome::default();
    let mut page: u32 = 1;
    let mut total_pages: u32 = 1;

    while page <= total_pages {
        match source.fetch_page(page).await {
            Ok(response) => {
                total_pages = response.info.pages;
                tracing::debug!(
                    page,
                    total_pages,
                    count = response.results.len(),
                    "Fetched character page"
                );
                outcome.records.extend(response.results);
                outcome.pages_fetched += 1;
                page += 1;
            }
            Err(e) => {
                tracing::error!(page, error = %e, "Character fetch failed");
                outcome.error = Some(FetchError::new(page, e.to_string()));
                break;
            }
        }
    }

    tracing::info!(
        records = outcome.records.len(),
        pages = outcome.pages_fetched,
        complete = outcome.is_complete(),
        "Character load finished"
    );
    outcome
}
