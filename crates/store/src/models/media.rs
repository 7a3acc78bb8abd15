//! Media file entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `medias` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub id: String,
    pub nom: String,
    pub url: String,
    /// `image`, `video`, `document` ou `audio`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Size in bytes.
    pub taille: u64,
    pub dossier: String,
    pub description: String,
    pub telechargements: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for MediaFile {
    const COLLECTION: &'static str = "medias";
    const ENTITY_NAME: &'static str = "Media";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            nom: normalize::str_field(raw, "nom"),
            url: normalize::str_field(raw, "url"),
            kind: normalize::str_field(raw, "type"),
            taille: normalize::count_field(raw, "taille"),
            dossier: normalize::str_field(raw, "dossier"),
            description: normalize::str_field(raw, "description"),
            telechargements: normalize::count_field(raw, "telechargements"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for MediaFile {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.nom, &self.description, &self.dossier]
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "type" => Some(&self.kind),
            "dossier" => Some(&self.dossier),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        Some(self.created_at)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaFile {
    #[validate(length(min = 1))]
    pub nom: String,
    #[validate(url)]
    pub url: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub taille: u64,
    #[serde(default)]
    pub dossier: String,
    #[serde(default)]
    pub description: String,
}

impl CreateMediaFile {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("nom".into(), json!(self.nom));
        fields.insert("url".into(), json!(self.url));
        fields.insert("type".into(), json!(self.kind));
        fields.insert("taille".into(), json!(self.taille));
        fields.insert("dossier".into(), json!(self.dossier));
        fields.insert("description".into(), json!(self.description));
        fields.insert("telechargements".into(), json!(0));
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaFile {
    pub nom: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub dossier: Option<String>,
    pub description: Option<String>,
}

impl UpdateMediaFile {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.nom {
            fields.insert("nom".into(), json!(v));
        }
        if let Some(v) = self.url {
            fields.insert("url".into(), json!(v));
        }
        if let Some(v) = self.kind {
            fields.insert("type".into(), json!(v));
        }
        if let Some(v) = self.dossier {
            fields.insert("dossier".into(), json!(v));
        }
        if let Some(v) = self.description {
            fields.insert("description".into(), json!(v));
        }
        fields
    }
}
