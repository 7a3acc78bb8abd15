//! Integration tests for announcement publishing through the API.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{body_json, create_document, send_json};
use radc_store::MemoryStore;
use serde_json::json;

#[tokio::test]
async fn publishing_stamps_once_and_resaves_keep_the_date() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));

    let id = create_document(
        app.clone(),
        "/api/v1/annonces",
        json!({ "titre": "Assemblee generale" }),
    )
    .await;

    // Draft has no publish date yet.
    let response = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/annonces/{id}"),
        json!({ "statut": "publie" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let stamped = json["data"]["datePublication"]
        .as_str()
        .expect("publishing must stamp the date")
        .to_string();

    // A later content edit that re-sends the published status must not
    // move the publish date.
    let response = send_json(
        app,
        Method::PUT,
        &format!("/api/v1/annonces/{id}"),
        json!({ "statut": "publie", "contenu": "Ordre du jour mis a jour" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["contenu"], "Ordre du jour mis a jour");
    assert_eq!(json["data"]["datePublication"], stamped.as_str());
}
