//! Integration tests for the donations endpoints: enriched listing and
//! screen aggregates.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get};
use radc_core::normalize::RawDocument;
use radc_store::MemoryStore;
use serde_json::{json, Value};

fn fields(value: Value) -> RawDocument {
    value.as_object().unwrap().clone()
}

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_with_id(
            "utilisateurs",
            "u1",
            fields(json!({ "prenom": "Awa", "nom": "Diallo" })),
        )
        .await;
    store
        .insert_with_id("projets", "p1", fields(json!({ "titre": "Puits du village" })))
        .await;
    store
        .insert_with_id(
            "donations",
            "d1",
            fields(json!({
                "donateurId": "u1",
                "projetId": "p1",
                "montant": 100.0,
                "statut": "confirme",
                "dateDon": "2024-03-02T00:00:00+00:00",
            })),
        )
        .await;
    store
        .insert_with_id(
            "donations",
            "d2",
            fields(json!({
                "donateurNom": "Anonyme",
                "montant": 50.0,
                "statut": "en_attente",
                "dateDon": "2024-03-01T00:00:00+00:00",
            })),
        )
        .await;
    store
}

#[tokio::test]
async fn list_resolves_donor_and_project_labels() {
    let store = seeded_store().await;
    let app = common::build_test_app(store);

    let response = get(app, "/api/v1/donations").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    // Newest first by donation date.
    assert_eq!(data[0]["id"], "d1");
    assert_eq!(data[0]["donateurNom"], "Awa Diallo");
    assert_eq!(data[0]["projetTitre"], "Puits du village");

    // Pre-filled labels and absent references stay as stored.
    assert_eq!(data[1]["donateurNom"], "Anonyme");
    assert_eq!(data[1]["projetTitre"], "");
}

#[tokio::test]
async fn list_filters_by_status() {
    let store = seeded_store().await;
    let app = common::build_test_app(store);

    let json = body_json(get(app, "/api/v1/donations?statut=confirme").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "d1");
}

#[tokio::test]
async fn stats_aggregate_amounts_and_pending_count() {
    let store = seeded_store().await;
    let app = common::build_test_app(store);

    let response = get(app, "/api/v1/donations/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["nombre"], 2);
    assert_eq!(json["data"]["montantTotal"], 150.0);
    assert_eq!(json["data"]["montantConfirme"], 100.0);
    assert_eq!(json["data"]["enAttente"], 1);
}

#[tokio::test]
async fn project_donations_are_scoped_to_the_project() {
    let store = seeded_store().await;
    let app = common::build_test_app(store);

    let json = body_json(get(app.clone(), "/api/v1/projets/p1/donations").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "d1");

    let json = body_json(get(app, "/api/v1/projets/inconnu/donations").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn stats_on_empty_collection_are_zeroed() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));

    let json = body_json(get(app, "/api/v1/donations/stats").await).await;
    assert_eq!(json["data"]["nombre"], 0);
    assert_eq!(json["data"]["montantTotal"], 0.0);
}
