//! Handler for the system log viewer.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use radc_core::limits::{clamp_limit, DEFAULT_LOG_LIMIT, MAX_LIST_LIMIT};
use radc_store::repositories::LogRepo;

use crate::error::AppResult;
use crate::query::LogParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/logs?limit=&since=
///
/// Recent log entries, newest first. The viewer polls this endpoint and
/// passes the newest timestamp it has seen as `since` to receive only
/// fresh entries. A failed fetch serves an empty list so the viewer
/// keeps polling.
pub async fn recent(
    State(state): State<AppState>,
    Query(params): Query<LogParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LOG_LIMIT, MAX_LIST_LIMIT) as usize;

    let data = match LogRepo::recent(state.store(), limit, params.since).await {
        Ok(logs) => logs,
        Err(err) => {
            tracing::warn!(error = %err, "Log fetch failed, serving empty list");
            Vec::new()
        }
    };

    Ok(Json(DataResponse { data }))
}
