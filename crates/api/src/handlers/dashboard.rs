//! Handler for the admin dashboard overview.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use radc_store::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
///
/// Headline counters for the dashboard cards. Each counter degrades to
/// zero independently if its collection cannot be read, so one failing
/// collection never blanks the whole dashboard.
pub async fn overview(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = DashboardRepo::overview(state.store()).await;

    Ok(Json(DataResponse { data: stats }))
}
