//! Integration tests for the departements and equipe collections.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, create_document, get};
use radc_store::MemoryStore;
use serde_json::json;

#[tokio::test]
async fn team_members_list_in_manual_order() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));

    create_document(
        app.clone(),
        "/api/v1/equipe",
        json!({ "nom": "Moussa", "poste": "Tresorier", "ordre": 2 }),
    )
    .await;
    create_document(
        app.clone(),
        "/api/v1/equipe",
        json!({ "nom": "Awa", "poste": "Presidente", "ordre": 1 }),
    )
    .await;

    let response = get(app, "/api/v1/equipe").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["nom"], "Awa", "ordre 1 comes first");
    assert_eq!(data[1]["nom"], "Moussa");
}

#[tokio::test]
async fn team_members_filter_by_department() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));

    create_document(
        app.clone(),
        "/api/v1/equipe",
        json!({ "nom": "Awa", "departementId": "com" }),
    )
    .await;
    create_document(
        app.clone(),
        "/api/v1/equipe",
        json!({ "nom": "Moussa", "departementId": "finance" }),
    )
    .await;

    let json = body_json(get(app, "/api/v1/equipe?departement=com").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["nom"], "Awa");
}

#[tokio::test]
async fn departments_create_then_list() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));

    let id = create_document(
        app.clone(),
        "/api/v1/departements",
        json!({ "nom": "Communication", "responsable": "Awa Diallo" }),
    )
    .await;

    let json = body_json(get(app.clone(), "/api/v1/departements").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], id.as_str());
    assert_eq!(data[0]["statut"], "actif");
    assert_eq!(data[0]["membres"], 0);

    let json = body_json(get(app, "/api/v1/departements?statut=inactif").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}
