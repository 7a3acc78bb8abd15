//! Shared query parameter types for API handlers.
//!
//! Every management list accepts the same filter vocabulary; the fields an
//! entity does not have simply never match (or are left unset by its
//! screen). [`ListParams::filter_state`] translates the query string into
//! the core filter engine's predicate set.

use chrono::NaiveDate;
use radc_core::filter::FilterState;
use radc_core::limits::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use radc_core::types::Timestamp;
use serde::Deserialize;

/// Generic list-filter parameters
/// (`?q=&statut=&categorie=&type=&role=&niveau=&methode=&departement=&dateDebut=&dateFin=&limit=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Free-text search.
    pub q: Option<String>,
    pub statut: Option<String>,
    pub categorie: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub role: Option<String>,
    pub niveau: Option<String>,
    pub methode: Option<String>,
    pub departement: Option<String>,
    /// Inclusive range bounds, `YYYY-MM-DD`.
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl ListParams {
    /// Build the filter predicate set from the provided parameters.
    ///
    /// Absent parameters contribute nothing; sentinel values (`tous`,
    /// `all`) are passed through and elided by the filter engine itself.
    pub fn filter_state(&self) -> FilterState {
        let mut state = FilterState {
            query: self.q.clone().unwrap_or_default(),
            ..FilterState::default()
        };
        for (field, value) in [
            ("statut", &self.statut),
            ("categorie", &self.categorie),
            ("type", &self.kind),
            ("role", &self.role),
            ("niveau", &self.niveau),
            ("methode", &self.methode),
            ("departement", &self.departement),
        ] {
            if let Some(value) = value {
                state = state.equals(field, value.clone());
            }
        }
        state.between(
            self.date_debut.map(start_of_day),
            self.date_fin.map(end_of_day),
        )
    }

    /// Clamped fetch cap for the underlying collection read.
    pub fn limit(&self) -> usize {
        clamp_limit(self.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT) as usize
    }
}

/// Midnight UTC at the start of the given day.
fn start_of_day(date: NaiveDate) -> Timestamp {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc()
}

/// Last second UTC of the given day, so the bound stays inclusive.
fn end_of_day(date: NaiveDate) -> Timestamp {
    date.and_hms_opt(23, 59, 59)
        .expect("end of day is always valid")
        .and_utc()
}

/// Query parameters for delete endpoints (`?confirm=true`).
///
/// Deletion is irreversible, so the explicit confirmation travels with the
/// request; without it the handler rejects the call and the document stays.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}

/// Query parameters for the log viewer poll (`?limit=&since=`).
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub limit: Option<i64>,
    /// Only entries strictly newer than this instant.
    pub since: Option<Timestamp>,
}
