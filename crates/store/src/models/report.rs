//! Report entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `rapports` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub titre: String,
    pub description: String,
    /// `mensuel`, `trimestriel`, `annuel` ou `ponctuel`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `brouillon`, `finalise` ou `publie`.
    pub statut: String,
    pub auteur: String,
    /// Covered period, free-form ("2024-T1", "Janvier 2024").
    pub periode: String,
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Report {
    const COLLECTION: &'static str = "rapports";
    const ENTITY_NAME: &'static str = "Rapport";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            titre: normalize::str_field(raw, "titre"),
            description: normalize::str_field(raw, "description"),
            kind: normalize::str_field(raw, "type"),
            statut: normalize::str_field(raw, "statut"),
            auteur: normalize::str_field(raw, "auteur"),
            periode: normalize::str_field(raw, "periode"),
            url: normalize::str_field(raw, "url"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.titre, &self.description, &self.auteur, &self.periode]
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "type" => Some(&self.kind),
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
pub struct CreateReport {
    #[validate(length(min = 1))]
    pub titre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    #[serde(default)]
    pub auteur: String,
    #[serde(default)]
    pub periode: String,
    #[serde(default)]
    pub url: String,
}

fn default_statut() -> String {
    "brouillon".to_string()
}

impl CreateReport {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("titre".into(), json!(self.titre));
        fields.insert("description".into(), json!(self.description));
        fields.insert("type".into(), json!(self.kind));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("auteur".into(), json!(self.auteur));
        fields.insert("periode".into(), json!(self.periode));
        fields.insert("url".into(), json!(self.url));
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReport {
    pub titre: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub statut: Option<String>,
    pub auteur: Option<String>,
    pub periode: Option<String>,
    pub url: Option<String>,
}

impl UpdateReport {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.titre {
            fields.insert("titre".into(), json!(v));
        }
        if let Some(v) = self.description {
            fields.insert("description".into(), json!(v));
        }
        if let Some(v) = self.kind {
            fields.insert("type".into(), json!(v));
        }
        if let Some(v) = self.statut {
            fields.insert("statut".into(), json!(v));
        }
        if let Some(v) = self.auteur {
            fields.insert("auteur".into(), json!(v));
        }
        if let Some(v) = self.periode {
            fields.insert("periode".into(), json!(v));
        }
        if let Some(v) = self.url {
            fields.insert("url".into(), json!(v));
        }
        fields
    }
}
