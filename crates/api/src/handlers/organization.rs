//! Handlers for the organisation settings singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use radc_store::models::organization::UpdateOrganization;
use radc_store::repositories::OrganizationRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/organisation
///
/// The settings document, fully defaulted when none has been saved yet.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = OrganizationRepo::get(state.store()).await?;

    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/organisation
///
/// Full replacement of the settings; the document is created on first
/// save. Returns the settings as re-read after the write.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(input): Json<UpdateOrganization>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let settings = OrganizationRepo::save(state.store(), input).await?;

    tracing::info!("Organisation settings saved");

    Ok(Json(DataResponse { data: settings }))
}
