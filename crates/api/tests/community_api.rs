//! Integration tests for the public community endpoints, which only ever
//! expose published or open content.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get};
use radc_core::normalize::RawDocument;
use radc_store::MemoryStore;
use serde_json::{json, Value};

fn fields(value: Value) -> RawDocument {
    value.as_object().unwrap().clone()
}

fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339()
}

#[tokio::test]
async fn upcoming_events_exclude_past_and_drafts() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_with_id(
            "evenements",
            "futur",
            fields(json!({ "titre": "Collecte", "statut": "publie", "dateDebut": days_from_now(7) })),
        )
        .await;
    store
        .insert_with_id(
            "evenements",
            "passe",
            fields(json!({ "titre": "Gala", "statut": "publie", "dateDebut": days_from_now(-7) })),
        )
        .await;
    store
        .insert_with_id(
            "evenements",
            "brouillon",
            fields(json!({ "titre": "Reunion", "statut": "brouillon", "dateDebut": days_from_now(3) })),
        )
        .await;

    let app = common::build_test_app(store);
    let response = get(app, "/api/v1/communaute/evenements").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "futur");
}

#[tokio::test]
async fn open_opportunities_respect_deadline() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_with_id(
            "opportunitesBenevolat",
            "ouverte",
            fields(json!({ "titre": "Tutorat", "statut": "ouverte" })),
        )
        .await;
    store
        .insert_with_id(
            "opportunitesBenevolat",
            "expiree",
            fields(json!({ "titre": "Collecte", "statut": "ouverte", "dateLimite": days_from_now(-1) })),
        )
        .await;
    store
        .insert_with_id(
            "opportunitesBenevolat",
            "fermee",
            fields(json!({ "titre": "Accueil", "statut": "fermee" })),
        )
        .await;

    let app = common::build_test_app(store);
    let json = body_json(get(app, "/api/v1/communaute/opportunites").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "ouverte");
}

#[tokio::test]
async fn published_announcements_drop_expired_ones() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_with_id(
            "annonces",
            "active",
            fields(json!({
                "titre": "Assemblee generale",
                "statut": "publie",
                "datePublication": days_from_now(-2),
            })),
        )
        .await;
    store
        .insert_with_id(
            "annonces",
            "expiree",
            fields(json!({
                "titre": "Ancienne campagne",
                "statut": "publie",
                "datePublication": days_from_now(-30),
                "expireLe": days_from_now(-10),
            })),
        )
        .await;

    let app = common::build_test_app(store);
    let json = body_json(get(app, "/api/v1/communaute/annonces").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "active");
}

#[tokio::test]
async fn community_pages_are_empty_without_content() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));

    for uri in [
        "/api/v1/communaute/evenements",
        "/api/v1/communaute/opportunites",
        "/api/v1/communaute/annonces",
    ] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["data"].as_array().unwrap().is_empty());
    }
}
