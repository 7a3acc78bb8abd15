//! In-memory filtering and search over normalized record lists.
//!
//! Every management list works the same way: the store hands back a capped,
//! server-ordered page of records, and the user's search box and filter
//! dropdowns narrow it down client-side. [`filter_records`] is that
//! narrowing: a pure, order-preserving linear scan. Corpus sizes in this
//! domain are tens to low thousands of records, so no index structure is
//! warranted.

use crate::types::Timestamp;

/// Filter values meaning "impose no constraint on this field".
///
/// The admin UI uses `tous`/`toutes`; `all` and the empty string are
/// accepted for good measure.
pub const SENTINEL_VALUES: &[&str] = &["tous", "toutes", "all", ""];

/// Whether a categorical filter value bypasses its check entirely.
pub fn is_sentinel(value: &str) -> bool {
    SENTINEL_VALUES.contains(&value)
}

/// The set of predicates active on a list view at a given moment.
///
/// All active predicates are ANDed; an empty or sentinel predicate
/// contributes no constraint, so `FilterState::default()` matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text search, matched case-insensitively as a substring.
    pub query: String,
    /// Categorical equality filters, `(field, value)` pairs.
    pub equals: Vec<(String, String)>,
    /// Inclusive lower bound on the record's range date.
    pub date_start: Option<Timestamp>,
    /// Inclusive upper bound on the record's range date.
    pub date_end: Option<Timestamp>,
}

impl FilterState {
    /// State with only a free-text query.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Add a categorical equality filter (builder style).
    pub fn equals(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.equals.push((field.into(), value.into()));
        self
    }

    /// Set the inclusive date range (builder style).
    pub fn between(mut self, start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        self.date_start = start;
        self.date_end = end;
        self
    }

    /// Whether no predicate is active (after sentinel elision).
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.equals.iter().all(|(_, v)| is_sentinel(v))
            && self.date_start.is_none()
            && self.date_end.is_none()
    }
}

/// A record that management lists can search and filter.
///
/// Each entity declares its own small fixed set of search targets and the
/// categorical fields its list screen filters on.
pub trait Filterable {
    /// Free-text search targets (typically title, body, author).
    fn search_fields(&self) -> Vec<&str>;

    /// Tag-like list searched element-wise by the free-text query.
    fn tag_field(&self) -> &[String] {
        &[]
    }

    /// Current value of a categorical field (`statut`, `categorie`, ...).
    ///
    /// Returning `None` for an unknown field makes an explicit filter on
    /// that field exclude the record, which is the conservative reading of
    /// exact equality.
    fn categorical(&self, field: &str) -> Option<&str>;

    /// The date the list's range filter applies to, if the entity has one.
    fn range_date(&self) -> Option<Timestamp> {
        None
    }
}

/// Whether a single record satisfies every active predicate.
pub fn matches<T: Filterable>(record: &T, filters: &FilterState) -> bool {
    let query = filters.query.trim();
    if !query.is_empty() {
        let needle = query.to_lowercase();
        let in_fields = record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
        let in_tags = record
            .tag_field()
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle));
        if !in_fields && !in_tags {
            return false;
        }
    }

    for (field, value) in &filters.equals {
        if is_sentinel(value) {
            continue;
        }
        match record.categorical(field) {
            Some(actual) if actual == value => {}
            _ => return false,
        }
    }

    if filters.date_start.is_some() || filters.date_end.is_some() {
        // A record without a date never matches an explicit range.
        let Some(date) = record.range_date() else {
            return false;
        };
        if filters.date_start.is_some_and(|start| date < start) {
            return false;
        }
        if filters.date_end.is_some_and(|end| date > end) {
            return false;
        }
    }

    true
}

/// Return the sub-list of records satisfying the filter state.
///
/// Pure function of its inputs; the output preserves the relative order of
/// the input (the store's server-side ordering) and never re-sorts.
pub fn filter_records<T: Filterable + Clone>(records: &[T], filters: &FilterState) -> Vec<T> {
    records
        .iter()
        .filter(|record| matches(*record, filters))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Fixture {
        titre: String,
        contenu: String,
        statut: String,
        categorie: String,
        tags: Vec<String>,
        date: Option<Timestamp>,
    }

    impl Fixture {
        fn new(titre: &str, statut: &str) -> Self {
            Self {
                titre: titre.to_string(),
                contenu: String::new(),
                statut: statut.to_string(),
                categorie: String::new(),
                tags: Vec::new(),
                date: None,
            }
        }

        fn tags(mut self, tags: &[&str]) -> Self {
            self.tags = tags.iter().map(|t| t.to_string()).collect();
            self
        }

        fn date(mut self, year: i32, month: u32, day: u32) -> Self {
            self.date = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single();
            self
        }
    }

    impl Filterable for Fixture {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.titre, &self.contenu]
        }

        fn tag_field(&self) -> &[String] {
            &self.tags
        }

        fn categorical(&self, field: &str) -> Option<&str> {
            match field {
                "statut" => Some(&self.statut),
                "categorie" => Some(&self.categorie),
                _ => None,
            }
        }

        fn range_date(&self) -> Option<Timestamp> {
            self.date
        }
    }

    fn corpus() -> Vec<Fixture> {
        vec![
            Fixture::new("Formation Excel", "publie").tags(&["bureau"]),
            Fixture::new("Atelier Python", "brouillon").tags(&["code", "dev"]),
            Fixture::new("Collecte de fonds", "publie").date(2024, 1, 5),
            Fixture::new("Assemblee generale", "archive").date(2024, 2, 10),
        ]
    }

    // -- identity & order ----------------------------------------------------

    #[test]
    fn empty_predicates_return_input_unchanged() {
        let records = corpus();
        assert_eq!(filter_records(&records, &FilterState::default()), records);
    }

    #[test]
    fn output_is_a_subsequence_of_input() {
        let records = corpus();
        let filtered = filter_records(&records, &FilterState::default().equals("statut", "publie"));
        let mut cursor = records.iter();
        for kept in &filtered {
            assert!(
                cursor.any(|r| r == kept),
                "filtered output must preserve input order"
            );
        }
    }

    // -- free-text search ----------------------------------------------------

    #[test]
    fn query_is_case_insensitive() {
        let records = corpus();
        let upper = filter_records(&records, &FilterState::with_query("PYTHON"));
        let lower = filter_records(&records, &FilterState::with_query("python"));
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].titre, "Atelier Python");
    }

    #[test]
    fn query_matches_substrings_of_any_search_field() {
        let records = corpus();
        let filtered = filter_records(&records, &FilterState::with_query("forma"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].titre, "Formation Excel");
    }

    #[test]
    fn query_matches_tag_elements() {
        let records = vec![
            Fixture::new("Formation Excel", "publie").tags(&["bureau"]),
            Fixture::new("Atelier Python", "publie").tags(&["code", "dev"]),
        ];
        let filtered = filter_records(&records, &FilterState::with_query("dev"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].titre, "Atelier Python");
    }

    #[test]
    fn whitespace_only_query_matches_everything() {
        let records = corpus();
        assert_eq!(filter_records(&records, &FilterState::with_query("   ")), records);
    }

    // -- categorical filters -------------------------------------------------

    #[test]
    fn categorical_filter_is_exact_equality() {
        let records = corpus();
        let filtered = filter_records(&records, &FilterState::default().equals("statut", "publie"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.statut == "publie"));
    }

    #[test]
    fn sentinel_value_bypasses_the_check() {
        let records = vec![
            Fixture::new("Premiere", "publie"),
            Fixture::new("Seconde", "brouillon"),
        ];
        let filtered = filter_records(&records, &FilterState::default().equals("statut", "tous"));
        assert_eq!(filtered, records);
    }

    #[test]
    fn all_sentinel_spellings_bypass() {
        let records = corpus();
        for sentinel in ["tous", "toutes", "all", ""] {
            let filtered =
                filter_records(&records, &FilterState::default().equals("statut", sentinel));
            assert_eq!(filtered, records, "sentinel {sentinel:?} must not exclude");
        }
    }

    #[test]
    fn filter_on_unknown_field_excludes_everything() {
        let records = corpus();
        let filtered = filter_records(&records, &FilterState::default().equals("role", "admin"));
        assert!(filtered.is_empty());
    }

    // -- date range ----------------------------------------------------------

    #[test]
    fn date_range_is_inclusive() {
        let records = vec![
            Fixture::new("Don de janvier", "publie").date(2024, 1, 5),
            Fixture::new("Don de fevrier", "publie").date(2024, 2, 10),
        ];
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).single();
        let end = Utc.with_ymd_and_hms(2024, 2, 28, 23, 59, 59).single();
        let filtered = filter_records(&records, &FilterState::default().between(start, end));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].titre, "Don de fevrier");
    }

    #[test]
    fn record_without_date_never_matches_explicit_range() {
        let records = vec![
            Fixture::new("Sans date", "publie"),
            Fixture::new("Avec date", "publie").date(2024, 2, 10),
        ];
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
        let filtered = filter_records(&records, &FilterState::default().between(start, None));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].titre, "Avec date");
    }

    #[test]
    fn open_ended_bounds_apply_independently() {
        let records = vec![
            Fixture::new("Ancien", "publie").date(2023, 6, 1),
            Fixture::new("Recent", "publie").date(2024, 6, 1),
        ];
        let pivot = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();

        let after = filter_records(&records, &FilterState::default().between(pivot, None));
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].titre, "Recent");

        let before = filter_records(&records, &FilterState::default().between(None, pivot));
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].titre, "Ancien");
    }

    // -- conjunction ---------------------------------------------------------

    #[test]
    fn predicates_combine_as_conjunction() {
        let records = corpus();

        let by_query = FilterState::with_query("e");
        let by_status = FilterState::default().equals("statut", "publie");
        let combined = FilterState::with_query("e").equals("statut", "publie");

        let sequential = filter_records(&filter_records(&records, &by_query), &by_status);
        let at_once = filter_records(&records, &combined);
        assert_eq!(sequential, at_once);
    }

    #[test]
    fn conjunction_order_does_not_matter() {
        let records = corpus();
        let by_status = FilterState::default().equals("statut", "publie");
        let by_query = FilterState::with_query("collecte");

        let a = filter_records(&filter_records(&records, &by_query), &by_status);
        let b = filter_records(&filter_records(&records, &by_status), &by_query);
        assert_eq!(a, b);
    }

    // -- determinism ---------------------------------------------------------

    #[test]
    fn same_inputs_yield_same_outputs() {
        let records = corpus();
        let filters = FilterState::with_query("a").equals("statut", "publie");
        assert_eq!(
            filter_records(&records, &filters),
            filter_records(&records, &filters)
        );
    }

    // -- is_empty ------------------------------------------------------------

    #[test]
    fn sentinel_only_state_is_empty() {
        let state = FilterState::default()
            .equals("statut", "tous")
            .equals("categorie", "all");
        assert!(state.is_empty());
        assert!(!FilterState::with_query("x").is_empty());
    }
}
