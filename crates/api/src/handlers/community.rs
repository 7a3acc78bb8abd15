//! Handlers for the public community pages.
//!
//! These endpoints are read-only and only ever expose published or open
//! content. Each serves a short, time-ordered page whose size comes from
//! configuration; a failed fetch degrades to an empty page.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use radc_store::repositories::CommunityRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/communaute/evenements
///
/// Published events starting today or later, soonest first.
pub async fn evenements(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cap = state.config.community_page_size;
    let data = match CommunityRepo::evenements_a_venir(state.store(), cap).await {
        Ok(events) => events,
        Err(err) => {
            tracing::warn!(error = %err, "Upcoming events fetch failed, serving empty list");
            Vec::new()
        }
    };

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/communaute/opportunites
///
/// Open volunteering opportunities whose deadline has not passed.
pub async fn opportunites(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cap = state.config.community_page_size;
    let data = match CommunityRepo::opportunites_disponibles(state.store(), cap).await {
        Ok(opportunities) => opportunities,
        Err(err) => {
            tracing::warn!(error = %err, "Opportunities fetch failed, serving empty list");
            Vec::new()
        }
    };

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/communaute/annonces
///
/// Published, unexpired announcements, most recent first.
pub async fn annonces(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cap = state.config.community_page_size;
    let data = match CommunityRepo::annonces_publiees(state.store(), cap).await {
        Ok(announcements) => announcements,
        Err(err) => {
            tracing::warn!(error = %err, "Announcements fetch failed, serving empty list");
            Vec::new()
        }
    };

    Ok(Json(DataResponse { data }))
}
