//! Notification entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `notifications` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub titre: String,
    pub message: String,
    /// `info`, `succes`, `alerte` ou `erreur`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Audience: `tous`, `membres`, `benevoles` ou `admins`.
    pub cible: String,
    /// `en_attente` ou `envoyee`.
    pub statut: String,
    pub date_envoi: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Entity for Notification {
    const COLLECTION: &'static str = "notifications";
    const ENTITY_NAME: &'static str = "Notification";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            titre: normalize::str_field(raw, "titre"),
            message: normalize::str_field(raw, "message"),
            kind: normalize::str_field(raw, "type"),
            cible: normalize::str_field(raw, "cible"),
            statut: normalize::str_field(raw, "statut"),
            date_envoi: normalize::opt_timestamp_field(raw, "dateEnvoi"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
        }
    }
}

impl Filterable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.titre, &self.message]
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "type" => Some(&self.kind),
            "cible" => Some(&self.cible),
            "statut" => Some(&self.statut),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        Some(self.created_at)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    #[validate(length(min = 1))]
    pub titre: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
    #[serde(default = "default_cible")]
    pub cible: String,
    #[serde(default = "default_statut")]
    pub statut: String,
}

fn default_kind() -> String {
    "info".to_string()
}

fn default_cible() -> String {
    "tous".to_string()
}

fn default_statut() -> String {
    "en_attente".to_string()
}

impl CreateNotification {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("titre".into(), json!(self.titre));
        fields.insert("message".into(), json!(self.message));
        fields.insert("type".into(), json!(self.kind));
        fields.insert("cible".into(), json!(self.cible));
        fields.insert("statut".into(), json!(self.statut));
        if self.statut == "envoyee" {
            fields.insert("dateEnvoi".into(), crate::document::server_timestamp());
        }
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotification {
    pub titre: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub cible: Option<String>,
    pub statut: Option<String>,
}

impl UpdateNotification {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.titre {
            fields.insert("titre".into(), json!(v));
        }
        if let Some(v) = self.message {
            fields.insert("message".into(), json!(v));
        }
        if let Some(v) = self.kind {
            fields.insert("type".into(), json!(v));
        }
        if let Some(v) = self.cible {
            fields.insert("cible".into(), json!(v));
        }
        if let Some(v) = &self.statut {
            fields.insert("statut".into(), json!(v));
            if v == "envoyee" {
                fields.insert("dateEnvoi".into(), crate::document::server_timestamp());
            }
        }
        fields
    }
}
