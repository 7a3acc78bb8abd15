//! Handler for announcement edits.
//!
//! Announcements use the generic CRUD surface except for updates, which
//! go through the repository so the publish milestone is stamped only on
//! the first transition to published.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use radc_core::error::CoreError;
use radc_store::models::announcement::UpdateAnnouncement;
use radc_store::models::{Announcement, Entity};
use radc_store::repositories::{AnnouncementRepo, Managed};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/annonces/{id}
///
/// Merge edit; re-saving a published announcement keeps its publish
/// date. Returns the record as re-read after the write.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    AnnouncementRepo::update(state.store(), &id, input).await?;

    let record = Managed::<Announcement>::get(state.store(), &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: Announcement::ENTITY_NAME,
            id: id.clone(),
        }))?;

    tracing::info!(collection = Announcement::COLLECTION, %id, "Document updated");

    Ok(Json(DataResponse { data: record }))
}
