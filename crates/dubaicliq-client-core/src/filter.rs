//! Search/category predicate shared by the catalog page and the homepage.

use tracing::debug;

use crate::routing::query_param;

pub const ALL_CATEGORIES: &str = "all";
pub const CATEGORY_PARAM: &str = "cat";
pub const QUERY_PARAM: &str = "q";

/// Anything the predicate can be evaluated against: dataset records or cards
/// snapshotted from the page.
pub trait Filterable {
    fn category(&self) -> &str;
    fn tags_text(&self) -> String;
    fn full_text(&self) -> String;
}

/// Whether the category dimension takes part in matching. The homepage search
/// only filters by text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFacet {
    WithCategory,
    QueryOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub category: String,
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }
}

impl FilterState {
    #[must_use]
    pub fn new(category: &str, query: &str) -> Self {
        Self {
            category: category.to_string(),
            query: query.to_string(),
        }
    }

    /// Initial state from a `location.search` string. A missing or empty `cat`
    /// means every category.
    #[must_use]
    pub fn from_search(search: &str) -> Self {
        let category = query_param(search, CATEGORY_PARAM)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        let query = query_param(search, QUERY_PARAM).unwrap_or_default();
        Self { category, query }
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = if category.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            category.to_string()
        };
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    #[must_use]
    pub fn category_is_active(&self) -> bool {
        !self.category.is_empty() && self.category != ALL_CATEGORIES
    }

    #[must_use]
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// One flag per input record, in input order.
    pub visible: Vec<bool>,
    pub visible_count: usize,
    /// Empty when no filter is active.
    pub hint: String,
}

impl FilterOutcome {
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
    }
}

/// `normalized_query` must already be trimmed and lowercased.
pub fn record_matches<T: Filterable + ?Sized>(
    record: &T,
    facet: FilterFacet,
    category: &str,
    normalized_query: &str,
) -> bool {
    let match_category = match facet {
        FilterFacet::QueryOnly => true,
        FilterFacet::WithCategory => {
            category.is_empty() || category == ALL_CATEGORIES || record.category() == category
        }
    };
    if !match_category {
        return false;
    }
    normalized_query.is_empty()
        || record.tags_text().to_lowercase().contains(normalized_query)
        || record.full_text().to_lowercase().contains(normalized_query)
}

pub fn apply_filter<T: Filterable>(
    records: &[T],
    facet: FilterFacet,
    state: &FilterState,
) -> FilterOutcome {
    let query = state.normalized_query();
    let visible: Vec<bool> = records
        .iter()
        .map(|record| record_matches(record, facet, &state.category, &query))
        .collect();
    let visible_count = visible.iter().filter(|visible| **visible).count();
    let hint = summary_hint(facet, state, visible_count);
    debug!(
        category = %state.category,
        query = %query,
        visible_count,
        total = records.len(),
        "filter applied"
    );
    FilterOutcome {
        visible,
        visible_count,
        hint,
    }
}

fn summary_hint(facet: FilterFacet, state: &FilterState, visible_count: usize) -> String {
    let mut parts = Vec::new();
    if facet == FilterFacet::WithCategory && state.category_is_active() {
        parts.push(format!("Category: {}", state.category));
    }
    let trimmed = state.query.trim();
    if !trimmed.is_empty() {
        parts.push(format!("Search: \u{201c}{trimmed}\u{201d}"));
    }
    if parts.is_empty() {
        return String::new();
    }
    let plural = if visible_count == 1 { "" } else { "s" };
    format!(
        "{visible_count} result{plural} \u{2022} {}",
        parts.join(" \u{2022} ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    struct Card {
        category: &'static str,
        tags: &'static str,
        text: &'static str,
    }

    impl Filterable for Card {
        fn category(&self) -> &str {
            self.category
        }

        fn tags_text(&self) -> String {
            self.tags.to_string()
        }

        fn full_text(&self) -> String {
            self.text.to_string()
        }
    }

    fn visible_ids(catalog: &Catalog, outcome: &FilterOutcome) -> Vec<String> {
        outcome
            .visible_indices()
            .map(|index| catalog.records()[index].id.clone())
            .collect()
    }

    #[test]
    fn all_with_empty_query_shows_everything_without_hint() {
        let catalog = Catalog::bundled().expect("catalog");
        let outcome = apply_filter(
            catalog.records(),
            FilterFacet::WithCategory,
            &FilterState::new("all", ""),
        );
        assert_eq!(outcome.visible_count, catalog.len());
        assert!(outcome.visible.iter().all(|visible| *visible));
        assert_eq!(outcome.hint, "");
    }

    #[test]
    fn audio_and_mic_yields_wireless_kit_only() {
        let catalog = Catalog::bundled().expect("catalog");
        let outcome = apply_filter(
            catalog.records(),
            FilterFacet::WithCategory,
            &FilterState::new("audio", "mic"),
        );
        assert_eq!(visible_ids(&catalog, &outcome), vec!["wireless-mic-kit"]);
        assert_eq!(
            outcome.hint,
            "1 result \u{2022} Category: audio \u{2022} Search: \u{201c}mic\u{201d}"
        );
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let catalog = Catalog::bundled().expect("catalog");
        let outcome = apply_filter(
            catalog.records(),
            FilterFacet::WithCategory,
            &FilterState::new("all", "  HDMI "),
        );
        assert_eq!(visible_ids(&catalog, &outcome), vec!["hdmi-matrix-switching"]);
        assert_eq!(outcome.hint, "1 result \u{2022} Search: \u{201c}HDMI\u{201d}");
    }

    #[test]
    fn category_facet_is_case_sensitive() {
        let catalog = Catalog::bundled().expect("catalog");
        let outcome = apply_filter(
            catalog.records(),
            FilterFacet::WithCategory,
            &FilterState::new("Audio", ""),
        );
        assert_eq!(outcome.visible_count, 0);
        assert_eq!(outcome.hint, "0 results \u{2022} Category: Audio");
    }

    #[test]
    fn category_only_hint_pluralizes() {
        let catalog = Catalog::bundled().expect("catalog");
        let outcome = apply_filter(
            catalog.records(),
            FilterFacet::WithCategory,
            &FilterState::new("displays", ""),
        );
        assert_eq!(
            visible_ids(&catalog, &outcome),
            vec!["laser-projector-5000lm", "commercial-display-75"]
        );
        assert_eq!(outcome.hint, "2 results \u{2022} Category: displays");
    }

    #[test]
    fn query_only_facet_ignores_category() {
        let cards = [
            Card {
                category: "audio",
                tags: "speakers ceiling",
                text: "Ceiling speakers",
            },
            Card {
                category: "signal",
                tags: "hdmi",
                text: "Matrix switching",
            },
        ];
        let outcome = apply_filter(
            &cards,
            FilterFacet::QueryOnly,
            &FilterState::new("signal", "speaker"),
        );
        assert_eq!(outcome.visible, vec![true, false]);
        assert_eq!(outcome.hint, "1 result \u{2022} Search: \u{201c}speaker\u{201d}");
    }

    #[test]
    fn matches_on_text_when_tags_miss() {
        let card = Card {
            category: "control",
            tags: "",
            text: "Room presets and Training",
        };
        assert!(record_matches(&card, FilterFacet::WithCategory, "", "training"));
        assert!(!record_matches(&card, FilterFacet::WithCategory, "audio", "training"));
    }

    #[test]
    fn initial_state_comes_from_url() {
        let state = FilterState::from_search("?cat=audio&q=wireless+mic");
        assert_eq!(state, FilterState::new("audio", "wireless mic"));

        let defaulted = FilterState::from_search("?q=%E2%80%9Cled%E2%80%9D");
        assert_eq!(defaulted.category, ALL_CATEGORIES);
        assert_eq!(defaulted.query, "\u{201c}led\u{201d}");

        assert_eq!(FilterState::from_search(""), FilterState::default());
        assert_eq!(FilterState::from_search("?cat="), FilterState::default());
    }

    #[test]
    fn empty_category_selection_falls_back_to_all() {
        let mut state = FilterState::new("audio", "");
        state.set_category("");
        assert!(!state.category_is_active());
        assert_eq!(state.category, ALL_CATEGORIES);
    }
}
