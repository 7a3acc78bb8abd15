pub mod health;

use axum::routing::get;
use axum::Router;

use radc_store::models::{
    Announcement, Article, Department, Donation, Event, Formation, ForumCategory, ForumPost,
    MediaFile, Newsletter, Notification, Project, Report, TeamMember, User, VolunteerOpportunity,
};

use crate::handlers::{
    announcements, community, crud, dashboard, donations, logs, organization,
};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard/stats                 headline counters (GET)
///
/// /utilisateurs                    list, create
/// /utilisateurs/{id}               get, update, delete
/// /donations                       list (enriched), create
/// /donations/stats                 screen aggregates (GET)
/// /donations/{id}                  get, update, delete
/// /projets/{id}/donations          project's donations (GET)
/// /projets, /formations,
/// /evenements, /annonces,
/// /articles, /medias,
/// /newsletters, /notifications,
/// /rapports, /departements,
/// /equipe, /opportunites           same five-route block per collection
/// /forum/posts, /forum/categories  same five-route block
///
/// /organisation                    settings singleton (GET, PUT)
/// /logs                            log viewer poll (GET)
///
/// /communaute/evenements           public: upcoming events (GET)
/// /communaute/opportunites         public: open opportunities (GET)
/// /communaute/annonces             public: published announcements (GET)
/// ```
///
/// Every DELETE requires `?confirm=true`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(dashboard::overview))
        .nest("/utilisateurs", crud::router::<User>())
        .nest("/donations", donations_router())
        .nest(
            "/projets",
            crud::router::<Project>().route("/{id}/donations", get(donations::for_project)),
        )
        .nest("/formations", crud::router::<Formation>())
        .nest("/evenements", crud::router::<Event>())
        .nest("/annonces", announcements_router())
        .nest("/articles", crud::router::<Article>())
        .nest("/medias", crud::router::<MediaFile>())
        .nest("/newsletters", crud::router::<Newsletter>())
        .nest("/notifications", crud::router::<Notification>())
        .nest("/rapports", crud::router::<Report>())
        .nest("/departements", crud::router::<Department>())
        .nest("/equipe", crud::router::<TeamMember>())
        .nest("/opportunites", crud::router::<VolunteerOpportunity>())
        .nest("/forum/posts", crud::router::<ForumPost>())
        .nest("/forum/categories", crud::router::<ForumCategory>())
        .route(
            "/organisation",
            get(organization::get_settings).put(organization::update_settings),
        )
        .route("/logs", get(logs::recent))
        .nest("/communaute", community_router())
}

/// Announcement routes: the standard block with the update swapped for
/// the milestone-aware variant.
fn announcements_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crud::list::<Announcement>).post(crud::create::<Announcement>),
        )
        .route(
            "/{id}",
            get(crud::get_one::<Announcement>)
                .put(announcements::update)
                .delete(crud::remove::<Announcement>),
        )
}

/// Donation routes: the standard block with the list swapped for the
/// enriched variant, plus the screen aggregates.
fn donations_router() -> Router<AppState> {
    Router::new()
        .route("/", get(donations::list).post(crud::create::<Donation>))
        .route("/stats", get(donations::stats))
        .route(
            "/{id}",
            get(crud::get_one::<Donation>)
                .put(crud::update::<Donation>)
                .delete(crud::remove::<Donation>),
        )
}

/// Public community pages, read-only.
fn community_router() -> Router<AppState> {
    Router::new()
        .route("/evenements", get(community::evenements))
        .route("/opportunites", get(community::opportunites))
        .route("/annonces", get(community::annonces))
}
