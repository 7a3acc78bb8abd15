//! Integration tests for the dashboard overview and the log viewer poll.

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

#[tokio::test]
async fn overview_counts_collections_and_sums_donations() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_with_id("utilisateurs", "u1", fields(json!({ "nom": "Diallo" })))
        .await;
    store
        .insert_with_id("projets", "p1", fields(json!({ "titre": "Puits" })))
        .await;
    store
        .insert_with_id(
            "donations",
            "d1",
            fields(json!({ "montant": 75.0, "statut": "confirme" })),
        )
        .await;

    let app = common::build_test_app(store);
    let response = get(app, "/api/v1/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["membres"], 1);
    assert_eq!(json["data"]["projets"], 1);
    assert_eq!(json["data"]["evenements"], 0);
    assert_eq!(json["data"]["donations"], 1);
    assert_eq!(json["data"]["montantCollecte"], 75.0);
}

#[tokio::test]
async fn log_poll_returns_only_entries_newer_than_since() {
    let store = Arc::new(MemoryStore::new());
    for (id, ts) in [
        ("vieux", "2024-01-01T00:00:00+00:00"),
        ("neuf", "2024-03-01T00:00:00+00:00"),
    ] {
        store
            .insert_with_id(
                "systemLogs",
                id,
                fields(json!({ "niveau": "info", "message": id, "createdAt": ts })),
            )
            .await;
    }

    let app = common::build_test_app(store);

    let json = body_json(get(app.clone(), "/api/v1/logs").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], "neuf", "newest first");

    let json = body_json(
        get(app, "/api/v1/logs?since=2024-02-01T00:00:00Z").await,
    )
    .await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "neuf");
}
