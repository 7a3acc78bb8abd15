//! Handlers for the donations screen.
//!
//! The list view is denormalized: each row carries the donor's name and
//! the project's title, resolved concurrently per record. The screen
//! header shows aggregates computed from the same list.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use radc_core::filter::filter_records;
use radc_store::models::{Donation, Entity};
use radc_store::repositories::{DonationRepo, DonationStats, Managed};

use crate::error::AppResult;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/donations
///
/// Newest-first donation list with donor and project labels resolved,
/// then the query-string filters applied. A failed fetch serves an
/// empty list.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let donations = match DonationRepo::list_enriched(state.store(), Some(params.limit())).await {
        Ok(donations) => donations,
        Err(err) => {
            tracing::warn!(error = %err, "Donation fetch failed, serving empty list");
            Vec::new()
        }
    };

    let data = filter_records(&donations, &params.filter_state());

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projets/{id}/donations
///
/// The donations attached to one project, newest first, for the project
/// detail screen.
pub async fn for_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let data = match DonationRepo::for_project(state.store(), &id).await {
        Ok(donations) => donations,
        Err(err) => {
            tracing::warn!(projet_id = %id, error = %err, "Project donations fetch failed, serving empty list");
            Vec::new()
        }
    };

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/donations/stats
///
/// Screen-header aggregates over the full collection. A failed fetch
/// serves zeroed stats.
pub async fn stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = match Managed::<Donation>::list(state.store(), None).await {
        Ok(donations) => DonationRepo::stats(&donations),
        Err(err) => {
            tracing::warn!(collection = Donation::COLLECTION, error = %err, "Stats fetch failed, serving zeroes");
            DonationStats::default()
        }
    };

    Ok(Json(DataResponse { data: stats }))
}
