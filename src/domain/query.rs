//! Query - Filter-Sort Engine
//!
//! Derives the ordered collection shown in the table from the dataset and the
//! active criteria. Filtering runs in a fixed order (name, status, species)
//! and sorting is stable, so the result does not depend on how the criteria
//! were assembled.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::character::CharacterRecord;
use crate::domain::criteria::{FilterCriteria, SortKey, collation_key};
use crate::domain::dataset::Dataset;

/// Apply `criteria` and `sort` to `records`, returning a new ordered collection
pub fn apply(
    records: &[Arc<CharacterRecord>],
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<Arc<CharacterRecord>> {
    let name = criteria.name.to_lowercase();
    let species = criteria.species.as_deref().map(str::to_lowercase);

    let mut result: Vec<Arc<CharacterRecord>> = records
        .iter()
        .filter(|r| name.is_empty() || r.name.to_lowercase().contains(&name))
        .filter(|r| criteria.status.as_deref().is_none_or(|s| r.status == s))
        .filter(|r| {
            species
                .as_deref()
                .is_none_or(|s| r.species.to_lowercase() == s)
        })
        .cloned()
        .collect();

    if sort != SortKey::None {
        // sort_by_cached_key is stable
        result.sort_by_cached_key(|r| collation_key(sort.field(r).unwrap_or_default()));
    }

    result
}

/// Sorted, de-duplicated species of the dataset, used to fill the species filter
pub fn species_options(records: &[Arc<CharacterRecord>]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.species.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Result of the filter-sort engine
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    records: Arc<[Arc<CharacterRecord>]>,
}

impl FilteredView {
    pub fn records(&self) -> &[Arc<CharacterRecord>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Drives the "no results" presentation
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Memoizing wrapper around [`apply`].
///
/// Recomputes only when the dataset identity, the criteria or the sort key
/// differ from the previous call.
#[derive(Debug, Default)]
pub struct FilterSortEngine {
    last: Option<(Dataset, FilterCriteria, SortKey)>,
    view: FilteredView,
}

impl FilterSortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(
        &mut self,
        dataset: &Dataset,
        criteria: &FilterCriteria,
        sort: SortKey,
    ) -> FilteredView {
        let hit = self.last.as_ref().is_some_and(|(d, c, s)| {
            d.same_records(dataset) && c == criteria && *s == sort
        });

        if !hit {
            let records = apply(dataset.records(), criteria, sort);
            tracing::debug!(
                total = dataset.len(),
                matched = records.len(),
                ?sort,
                "Recomputed filtered view"
            );
            self.view = FilteredView {
                records: records.into(),
            };
            self.last = Some((dataset.clone(), criteria.clone(), sort));
        }

        self.view.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::locale_compare;
    use proptest::prelude::*;

    fn record(id: u64, name: &str, status: &str, species: &str) -> Arc<CharacterRecord> {
        Arc::new(CharacterRecord::new(id, name, status, species))
    }

    fn names(records: &[Arc<CharacterRecord>]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<Arc<CharacterRecord>> {
        vec![
            record(1, "Rick Sanchez", "Alive", "Human"),
            record(2, "Morty Smith", "Alive", "Human"),
            record(3, "Rick Prime", "Dead", "Human"),
            record(4, "Birdperson", "Dead", "Bird-Person"),
            record(5, "Abradolf Lincler", "unknown", "Human"),
            record(6, "Zeep Xanflorp", "Dead", "humanoid"),
        ]
    }

    #[test]
    fn test_unset_criteria_is_identity() {
        let data = sample();
        let result = apply(&data, &FilterCriteria::default(), SortKey::None);
        assert_eq!(names(&result), names(&data));
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let data = vec![
            record(1, "Rick Sanchez", "Alive", "Human"),
            record(2, "Morty Smith", "Alive", "Human"),
            record(3, "Rick Prime", "Dead", "Human"),
        ];
        let result = apply(&data, &FilterCriteria::default().with_name("rick"), SortKey::None);
        assert_eq!(names(&result), vec!["Rick Sanchez", "Rick Prime"]);

        let result = apply(&data, &FilterCriteria::default().with_name("SMI"), SortKey::None);
        assert_eq!(names(&result), vec!["Morty Smith"]);
    }

    #[test]
    fn test_status_filter_is_exact_and_case_sensitive() {
        let data = sample();
        let result = apply(&data, &FilterCriteria::default().with_status("Dead"), SortKey::None);
        assert_eq!(names(&result), vec!["Rick Prime", "Birdperson", "Zeep Xanflorp"]);

        let result = apply(&data, &FilterCriteria::default().with_status("dead"), SortKey::None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_species_filter_is_case_insensitive_exact() {
        let data = sample();
        let result = apply(&data, &FilterCriteria::default().with_species("human"), SortKey::None);
        assert_eq!(
            names(&result),
            vec!["Rick Sanchez", "Morty Smith", "Rick Prime", "Abradolf Lincler"]
        );

        // "humanoid" does not match "human"
        assert!(!names(&result).contains(&"Zeep Xanflorp"));
    }

    #[test]
    fn test_combined_filters_require_all_matches() {
        let data = sample();
        let a = FilterCriteria::default()
            .with_status("Dead")
            .with_species("Human");
        let b = FilterCriteria::default()
            .with_species("Human")
            .with_status("Dead");

        let result_a = apply(&data, &a, SortKey::None);
        let result_b = apply(&data, &b, SortKey::None);
        assert_eq!(names(&result_a), vec!["Rick Prime"]);
        assert_eq!(names(&result_a), names(&result_b));
    }

    #[test]
    fn test_sort_by_name() {
        let data = sample();
        let result = apply(&data, &FilterCriteria::default(), SortKey::Name);
        assert_eq!(
            names(&result),
            vec![
                "Abradolf Lincler",
                "Birdperson",
                "Morty Smith",
                "Rick Prime",
                "Rick Sanchez",
                "Zeep Xanflorp",
            ]
        );
    }

    #[test]
    fn test_sort_by_status_is_stable() {
        let data = sample();
        let result = apply(&data, &FilterCriteria::default(), SortKey::Status);
        assert_eq!(
            names(&result),
            vec![
                "Rick Sanchez",
                "Morty Smith",
                "Rick Prime",
                "Birdperson",
                "Zeep Xanflorp",
                "Abradolf Lincler",
            ]
        );
    }

    #[test]
    fn test_sort_by_name_places_accented_names_with_their_letter() {
        let data = vec![
            record(1, "Zeep Xanflorp", "Dead", "Humanoid"),
            record(2, "Évil Morty", "Alive", "Human"),
            record(3, "Abradolf Lincler", "unknown", "Human"),
            record(4, "Fart", "Dead", "Gazorpian"),
        ];
        let result = apply(&data, &FilterCriteria::default(), SortKey::Name);
        assert_eq!(
            names(&result),
            vec!["Abradolf Lincler", "Évil Morty", "Fart", "Zeep Xanflorp"]
        );
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let data = sample();
        let before = names(&data).join(",");
        let _ = apply(&data, &FilterCriteria::default().with_name("r"), SortKey::Name);
        assert_eq!(names(&data).join(","), before);
    }

    #[test]
    fn test_species_options_sorted_unique() {
        let data = sample();
        assert_eq!(
            species_options(&data),
            vec!["Bird-Person", "Human", "humanoid"]
        );
        assert!(species_options(&[]).is_empty());
    }

    #[test]
    fn test_engine_memoizes_identical_inputs() {
        let dataset = Dataset::complete(vec![
            CharacterRecord::new(1, "Rick Sanchez", "Alive", "Human"),
            CharacterRecord::new(2, "Morty Smith", "Alive", "Human"),
        ]);
        let criteria = FilterCriteria::default().with_name("rick");

        let mut engine = FilterSortEngine::new();
        let first = engine.view(&dataset, &criteria, SortKey::None);
        let second = engine.view(&dataset, &criteria, SortKey::None);
        assert!(Arc::ptr_eq(&first.records, &second.records));

        let third = engine.view(&dataset, &FilterCriteria::default(), SortKey::None);
        assert_eq!(third.len(), 2);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_engine_reports_empty_view() {
        let dataset = Dataset::complete(vec![CharacterRecord::new(1, "Rick", "Alive", "Human")]);
        let mut engine = FilterSortEngine::new();
        let view = engine.view(&dataset, &FilterCriteria::default().with_name("xyz"), SortKey::Name);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
    }

    fn arb_record() -> impl Strategy<Value = Arc<CharacterRecord>> {
        (
            0u64..1000,
            "[A-Za-z0-9 ~.ÉéİıÖöÜü]{0,12}",
            prop::sample::select(vec!["Alive", "Dead", "unknown"]),
            prop::sample::select(vec!["Human", "Alien", "human", "Robot"]),
        )
            .prop_map(|(id, name, status, species)| record(id, &name, status, species))
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            "[a-zA-Z]{0,2}",
            prop::option::of(prop::sample::select(vec!["Alive", "Dead", "unknown"])),
            prop::option::of(prop::sample::select(vec!["human", "ALIEN", "Robot"])),
        )
            .prop_map(|(name, status, species)| FilterCriteria {
                name,
                status: status.map(str::to_string),
                species: species.map(str::to_string),
            })
    }

    fn arb_sort() -> impl Strategy<Value = SortKey> {
        prop::sample::select(SortKey::all().to_vec())
    }

    proptest! {
        #[test]
        fn prop_apply_is_idempotent(
            data in prop::collection::vec(arb_record(), 0..40),
            criteria in arb_criteria(),
            sort in arb_sort(),
        ) {
            let once = apply(&data, &criteria, sort);
            let twice = apply(&once, &criteria, sort);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_sorted_output_is_non_decreasing_and_stable(
            data in prop::collection::vec(arb_record(), 0..40),
            sort in prop::sample::select(vec![SortKey::Name, SortKey::Status]),
        ) {
            let result = apply(&data, &FilterCriteria::default(), sort);
            prop_assert_eq!(result.len(), data.len());

            for pair in result.windows(2) {
                let (a, b) = (sort.field(&pair[0]).unwrap_or_default(), sort.field(&pair[1]).unwrap_or_default());
                let ord = locale_compare(a, b);
                prop_assert!(ord != std::cmp::Ordering::Greater);

                if ord == std::cmp::Ordering::Equal {
                    let pos = |r: &Arc<CharacterRecord>| data.iter().position(|d| Arc::ptr_eq(d, r));
                    prop_assert!(pos(&pair[0]) < pos(&pair[1]));
                }
            }
        }

        #[test]
        fn prop_result_is_exactly_the_matching_records(
            data in prop::collection::vec(arb_record(), 0..40),
            criteria in arb_criteria(),
        ) {
            let matches = |r: &CharacterRecord| {
                r.name.to_lowercase().contains(&criteria.name.to_lowercase())
                    && criteria.status.as_ref().is_none_or(|s| &r.status == s)
                    && criteria
                        .species
                        .as_ref()
                        .is_none_or(|s| r.species.to_lowercase() == s.to_lowercase())
            };

            let result = apply(&data, &criteria, SortKey::None);
            for r in &result {
                prop_assert!(matches(r));
            }

            // Everything left out fails at least one criterion
            for d in &data {
                if !result.iter().any(|r| Arc::ptr_eq(d, r)) {
                    prop_assert!(!matches(d));
                }
            }

            let kept: Vec<_> = data.iter().filter(|d| matches(d)).cloned().collect();
            prop_assert_eq!(kept, result);
        }
    }
}
