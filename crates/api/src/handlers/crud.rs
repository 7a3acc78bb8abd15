//! Generic CRUD handlers over managed collections.
//!
//! Every management screen exposes the same five endpoints; the handlers
//! here are written once, generic over the entity, and instantiated per
//! collection in the route tree. Per-entity differences (payload shapes,
//! searchable fields) live on the [`Resource`] implementations below.
//!
//! List reads degrade: a store failure is logged and the screen receives
//! an empty list instead of an error page. Writes always propagate their
//! errors so the operator sees the failure.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use radc_core::error::CoreError;
use radc_core::filter::{filter_records, Filterable};
use radc_core::normalize::RawDocument;
use radc_store::models::{
    Announcement, Article, Department, Donation, Entity, Event, Formation, ForumCategory,
    ForumPost, MediaFile, Newsletter, Notification, Project, Report, TeamMember, User,
    VolunteerOpportunity,
};
use radc_store::repositories::Managed;

use crate::error::{AppError, AppResult};
use crate::query::{DeleteParams, ListParams};
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// An entity exposed through the generic CRUD surface: its normalized
/// record plus the create/update payload shapes the edit forms send.
pub trait Resource: Entity + Filterable + Clone + Serialize + Sync {
    type Create: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;

    fn create_fields(input: Self::Create) -> RawDocument;
    fn update_fields(input: Self::Update) -> RawDocument;
}

macro_rules! resource {
    ($entity:ty, $create:ty, $update:ty) => {
        impl Resource for $entity {
            type Create = $create;
            type Update = $update;

            fn create_fields(input: Self::Create) -> RawDocument {
                input.into_fields()
            }

            fn update_fields(input: Self::Update) -> RawDocument {
                input.into_fields()
            }
        }
    };
}

resource!(User, radc_store::models::user::CreateUser, radc_store::models::user::UpdateUser);
resource!(Project, radc_store::models::project::CreateProject, radc_store::models::project::UpdateProject);
resource!(Formation, radc_store::models::formation::CreateFormation, radc_store::models::formation::UpdateFormation);
resource!(Event, radc_store::models::event::CreateEvent, radc_store::models::event::UpdateEvent);
resource!(Announcement, radc_store::models::announcement::CreateAnnouncement, radc_store::models::announcement::UpdateAnnouncement);
resource!(Article, radc_store::models::article::CreateArticle, radc_store::models::article::UpdateArticle);
resource!(MediaFile, radc_store::models::media::CreateMediaFile, radc_store::models::media::UpdateMediaFile);
resource!(Newsletter, radc_store::models::newsletter::CreateNewsletter, radc_store::models::newsletter::UpdateNewsletter);
resource!(Notification, radc_store::models::notification::CreateNotification, radc_store::models::notification::UpdateNotification);
resource!(Report, radc_store::models::report::CreateReport, radc_store::models::report::UpdateReport);
resource!(ForumPost, radc_store::models::forum::CreateForumPost, radc_store::models::forum::UpdateForumPost);
resource!(ForumCategory, radc_store::models::forum::CreateForumCategory, radc_store::models::forum::UpdateForumCategory);
resource!(Donation, radc_store::models::donation::CreateDonation, radc_store::models::donation::UpdateDonation);
resource!(Department, radc_store::models::department::CreateDepartment, radc_store::models::department::UpdateDepartment);
resource!(TeamMember, radc_store::models::team_member::CreateTeamMember, radc_store::models::team_member::UpdateTeamMember);
resource!(
    VolunteerOpportunity,
    radc_store::models::opportunity::CreateVolunteerOpportunity,
    radc_store::models::opportunity::UpdateVolunteerOpportunity
);

/// GET /{collection}
///
/// Capped, server-ordered list with the query-string filters applied
/// in-process. A failed fetch serves an empty list.
pub async fn list<T: Resource>(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let records = match Managed::<T>::list(state.store(), Some(params.limit())).await {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(collection = T::COLLECTION, error = %err, "List fetch failed, serving empty list");
            Vec::new()
        }
    };

    let data = filter_records(&records, &params.filter_state());

    Ok(Json(DataResponse { data }))
}

/// GET /{collection}/{id}
pub async fn get_one<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = Managed::<T>::get(state.store(), &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: T::ENTITY_NAME,
            id: id.clone(),
        }))?;

    Ok(Json(DataResponse { data: record }))
}

/// POST /{collection}
pub async fn create<T: Resource>(
    State(state): State<AppState>,
    Json(input): Json<T::Create>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let id = Managed::<T>::create(state.store(), T::create_fields(input)).await?;

    tracing::info!(collection = T::COLLECTION, %id, "Document created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// PUT /{collection}/{id}
///
/// Merge edit: absent payload fields keep their stored values. Returns
/// the record as re-read after the write.
pub async fn update<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<T::Update>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    Managed::<T>::update(state.store(), &id, T::update_fields(input)).await?;

    let record = Managed::<T>::get(state.store(), &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: T::ENTITY_NAME,
            id: id.clone(),
        }))?;

    tracing::info!(collection = T::COLLECTION, %id, "Document updated");

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /{collection}/{id}?confirm=true
///
/// Deletion is irreversible; without the explicit confirmation the call
/// is rejected and nothing is removed.
pub async fn remove<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    if !params.confirm {
        return Err(AppError::BadRequest(
            "deletion requires confirm=true".to_string(),
        ));
    }

    Managed::<T>::delete(state.store(), &id).await?;

    tracing::info!(collection = T::COLLECTION, %id, "Document deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Standard route block for one managed collection.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_one
/// PUT    /{id}      -> update
/// DELETE /{id}      -> remove
/// ```
pub fn router<T: Resource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route(
            "/{id}",
            get(get_one::<T>).put(update::<T>).delete(remove::<T>),
        )
}
