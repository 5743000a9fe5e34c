//! Characters State
//!
//! Owns the loaded dataset and everything the table derives from it. The
//! update path is always: input change → filtered view → visible page →
//! `cx.notify()`.

use crate::constants::CLICK_ANIMATION_MS;
use crate::domain::{
    CharacterId, CharacterRecord, Dataset, FilterCriteria, FilterSortEngine, FilteredView,
    PageState, SortKey, species_options, total_pages,
};
use crate::services::{
    AvatarClient, AvatarFormat, CharacterSource, FetchError, fetch_all, run_in_tokio,
};
use gpui::{Context, Image, ImageFormat, Task};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

/// Lifecycle of the one-shot character load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// Download state of a character image
#[derive(Debug, Clone)]
pub enum AvatarSlot {
    Loading,
    Ready(Arc<Image>),
    Failed,
}

/// Dataset, criteria, paging and selection for the character table
pub struct CharactersState {
    load_state: LoadState,
    dataset: Dataset,
    criteria: FilterCriteria,
    sort: SortKey,
    page: PageState,
    engine: FilterSortEngine,
    view: FilteredView,
    species_options: Arc<[String]>,
    selected: Option<Arc<CharacterRecord>>,
    highlighted: bool,
    avatar_client: Option<AvatarClient>,
    avatars: HashMap<CharacterId, AvatarSlot>,
    load_task: Option<Task<()>>,
    highlight_task: Option<Task<()>>,
}

impl CharactersState {
    /// Create an empty state paging `page_size` rows at a time
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            load_state: LoadState::Idle,
            dataset: Dataset::default(),
            criteria: FilterCriteria::default(),
            sort: SortKey::None,
            page: PageState::new(page_size),
            engine: FilterSortEngine::new(),
            view: FilteredView::default(),
            species_options: Arc::from([]),
            selected: None,
            highlighted: false,
            avatar_client: None,
            avatars: HashMap::new(),
            load_task: None,
            highlight_task: None,
        }
    }

    /// Download avatars of selected characters with `client`
    pub fn with_avatar_client(mut self, client: AvatarClient) -> Self {
        self.avatar_client = Some(client);
        self
    }

    // ==================== Loading ====================

    /// Fetch every character from `source` once
    pub fn load<S: CharacterSource>(&mut self, source: S, cx: &mut Context<Self>) {
        if self.load_state != LoadState::Idle {
            tracing::warn!(state = ?self.load_state, "Character load already started");
            return;
        }

        self.load_state = LoadState::Loading;
        cx.notify();
        tracing::info!("Loading characters");

        let task = cx.spawn(async move |handle, cx| {
            let outcome = run_in_tokio(async move { fetch_all(&source).await }).await;
            let dataset = outcome.into_dataset();

            let _ = handle.update(cx, |this, cx| {
                this.finish_load(dataset);
                cx.notify();
            });
        });

        self.load_task = Some(task);
    }

    /// Give up before the first request, e.g. when no HTTP client could be built
    pub fn fail_load(&mut self, error: FetchError, cx: &mut Context<Self>) {
        tracing::error!(error = %error, "Character load failed to start");
        self.finish_load(Dataset::partial(Vec::new(), error));
        cx.notify();
    }

    /// Install the fetched dataset and derive the first view
    fn finish_load(&mut self, dataset: Dataset) {
        tracing::info!(
            records = dataset.len(),
            complete = dataset.is_complete(),
            "Characters loaded"
        );
        self.species_options = species_options(dataset.records()).into();
        self.dataset = dataset;
        self.load_state = LoadState::Loaded;
        self.load_task = None;
        self.page.reset();
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.view = self.engine.view(&self.dataset, &self.criteria, self.sort);
    }

    // ==================== Getters ====================

    pub fn is_loading(&self) -> bool {
        self.load_state != LoadState::Loaded
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Error to show instead of the table: nothing loaded and the load failed
    pub fn load_error(&self) -> Option<&FetchError> {
        if self.dataset.is_empty() {
            self.dataset.error()
        } else {
            None
        }
    }

    /// Error to show above the table: some records loaded, the rest failed
    pub fn partial_error(&self) -> Option<&FetchError> {
        if self.dataset.is_empty() {
            None
        } else {
            self.dataset.error()
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn species_options(&self) -> &[String] {
        &self.species_options
    }

    /// Loaded but nothing matches the criteria
    pub fn no_results(&self) -> bool {
        !self.is_loading() && self.view.is_empty()
    }

    /// Rows on the current page
    pub fn visible_page(&self) -> &[Arc<CharacterRecord>] {
        self.page.slice(self.view.records())
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.view.len(), self.page.page_size())
    }

    pub fn can_go_previous(&self) -> bool {
        self.page.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.page.can_go_next(self.view.len())
    }

    pub fn selected(&self) -> Option<&Arc<CharacterRecord>> {
        self.selected.as_ref()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn avatar(&self, id: CharacterId) -> Option<&AvatarSlot> {
        self.avatars.get(&id)
    }

    // ==================== Criteria ====================

    /// Apply `mutation` to the criteria; back to page 1 when anything changed
    fn update_criteria(&mut self, mutation: impl FnOnce(&mut FilterCriteria)) -> bool {
        let mut criteria = self.criteria.clone();
        mutation(&mut criteria);
        if criteria == self.criteria {
            return false;
        }

        self.criteria = criteria;
        self.page.reset();
        self.refresh_view();
        true
    }

    fn update_sort(&mut self, sort: SortKey) -> bool {
        if self.sort == sort {
            return false;
        }

        self.sort = sort;
        self.page.reset();
        self.refresh_view();
        true
    }

    pub fn set_name_filter(&mut self, name: String, cx: &mut Context<Self>) {
        if self.update_criteria(|c| c.name = name) {
            cx.notify();
        }
    }

    pub fn set_status_filter(&mut self, status: Option<String>, cx: &mut Context<Self>) {
        if self.update_criteria(|c| c.status = status) {
            cx.notify();
        }
    }

    pub fn set_species_filter(&mut self, species: Option<String>, cx: &mut Context<Self>) {
        if self.update_criteria(|c| c.species = species) {
            cx.notify();
        }
    }

    pub fn set_sort(&mut self, sort: SortKey, cx: &mut Context<Self>) {
        if self.update_sort(sort) {
            tracing::debug!(?sort, "Sort key changed");
            cx.notify();
        }
    }

    // ==================== Paging ====================

    pub fn previous_page(&mut self, cx: &mut Context<Self>) {
        if self.page.previous() {
            cx.notify();
        }
    }

    pub fn next_page(&mut self, cx: &mut Context<Self>) {
        if self.page.next(self.view.len()) {
            cx.notify();
        }
    }

    // ==================== Selection ====================

    pub fn select(&mut self, record: Arc<CharacterRecord>, cx: &mut Context<Self>) {
        tracing::debug!(id = %record.id, name = %record.name, "Character selected");
        self.request_avatar(&record, cx);
        self.selected = Some(record);
        cx.notify();
    }

    /// Start downloading the avatar of `record` unless it is known already
    fn request_avatar(&mut self, record: &CharacterRecord, cx: &mut Context<Self>) {
        let Some(client) = self.avatar_client.clone() else {
            return;
        };
        if record.image.is_empty() || self.avatars.contains_key(&record.id) {
            return;
        }

        let id = record.id;
        let url = record.image.clone();
        let format = image_format(AvatarFormat::from_url(&url));
        self.avatars.insert(id, AvatarSlot::Loading);

        cx.spawn(async move |handle, cx| {
            let result = run_in_tokio(async move { client.fetch(&url).await }).await;

            let _ = handle.update(cx, |this, cx| {
                let slot = match result {
                    Ok(bytes) => AvatarSlot::Ready(Arc::new(Image::from_bytes(format, bytes))),
                    Err(e) => {
                        tracing::warn!(%id, error = %e, "Failed to fetch avatar");
                        AvatarSlot::Failed
                    }
                };
                this.avatars.insert(id, slot);
                cx.notify();
            });
        })
        .detach();
    }

    /// Highlight the detail panel for a short moment
    pub fn highlight(&mut self, cx: &mut Context<Self>) {
        self.highlighted = true;
        cx.notify();

        // Replacing the task cancels a pending reset from an earlier click
        self.highlight_task = Some(cx.spawn(async move |handle, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(CLICK_ANIMATION_MS))
                .await;
            let _ = handle.update(cx, |this, cx| {
                this.highlighted = false;
                this.highlight_task = None;
                cx.notify();
            });
        }));
    }
}

fn image_format(format: AvatarFormat) -> ImageFormat {
    match format {
        AvatarFormat::Jpeg => ImageFormat::Jpeg,
        AvatarFormat::Png => ImageFormat::Png,
        AvatarFormat::Gif => ImageFormat::Gif,
        AvatarFormat::Webp => ImageFormat::Webp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero page size")
    }

    fn record(id: u64, name: &str, status: &str, species: &str) -> CharacterRecord {
        CharacterRecord::new(id, name, status, species)
    }

    fn loaded(records: Vec<CharacterRecord>, page_size: usize) -> CharactersState {
        let mut state = CharactersState::new(size(page_size));
        state.finish_load(Dataset::complete(records));
        state
    }

    fn thirteen() -> Vec<CharacterRecord> {
        (1..=13)
            .map(|id| record(id, &format!("Character {id}"), "Alive", "Human"))
            .collect()
    }

    fn names(records: &[Arc<CharacterRecord>]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_loading_until_finished() {
        let state = CharactersState::new(size(6));
        assert!(state.is_loading());
        assert!(!state.no_results());
        assert!(state.visible_page().is_empty());
    }

    #[test]
    fn test_thirteen_records_in_pages_of_six() {
        let mut state = loaded(thirteen(), 6);
        assert!(!state.is_loading());
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.visible_page().len(), 6);
        assert!(!state.can_go_previous());

        assert!(state.page.next(state.view.len()));
        assert!(state.page.next(state.view.len()));
        assert_eq!(state.current_page(), 3);
        assert_eq!(names(state.visible_page()), vec!["Character 13"]);
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_criteria_change_resets_page() {
        let mut state = loaded(thirteen(), 6);
        state.page.next(state.view.len());
        assert_eq!(state.current_page(), 2);

        assert!(state.update_criteria(|c| c.name = "character 1".to_string()));
        assert_eq!(state.current_page(), 1);
        // "Character 1", "Character 10" .. "Character 13"
        assert_eq!(state.view.len(), 5);
    }

    #[test]
    fn test_unchanged_criteria_keeps_page() {
        let mut state = loaded(thirteen(), 6);
        state.page.next(state.view.len());

        assert!(!state.update_criteria(|c| c.name = String::new()));
        assert!(!state.update_sort(SortKey::None));
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut state = loaded(thirteen(), 6);
        state.page.next(state.view.len());

        assert!(state.update_sort(SortKey::Name));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.visible_page()[0].name, "Character 1");
        assert_eq!(state.visible_page()[1].name, "Character 10");
    }

    #[test]
    fn test_no_results() {
        let mut state = loaded(thirteen(), 6);
        state.update_criteria(|c| c.status = Some("Dead".to_string()));
        assert!(state.no_results());
        assert_eq!(state.total_pages(), 0);
        assert!(!state.can_go_next());
        assert!(!state.can_go_previous());
    }

    #[test]
    fn test_species_options_sorted_unique() {
        let state = loaded(
            vec![
                record(1, "Rick Sanchez", "Alive", "Human"),
                record(2, "Birdperson", "Dead", "Alien"),
                record(3, "Morty Smith", "Alive", "Human"),
            ],
            6,
        );
        assert_eq!(state.species_options(), ["Alien", "Human"]);
    }

    #[test]
    fn test_first_page_failure_shows_load_error() {
        let mut state = CharactersState::new(size(6));
        state.finish_load(Dataset::partial(Vec::new(), FetchError::new(1, "timeout")));

        assert!(!state.is_loading());
        assert_eq!(state.load_error().map(FetchError::page), Some(1));
        assert!(state.partial_error().is_none());
    }

    #[test]
    fn test_partial_dataset_stays_usable() {
        let mut state = CharactersState::new(size(6));
        state.finish_load(Dataset::partial(thirteen(), FetchError::new(3, "timeout")));

        assert!(state.load_error().is_none());
        assert_eq!(state.partial_error().map(FetchError::page), Some(3));
        assert_eq!(state.visible_page().len(), 6);
    }
}
