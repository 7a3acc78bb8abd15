//! Newsletter entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `newsletters` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: String,
    pub sujet: String,
    pub contenu: String,
    /// `brouillon`, `programmee` ou `envoyee`.
    pub statut: String,
    pub destinataires: u64,
    pub ouvertures: u64,
    pub date_envoi: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Newsletter {
    const COLLECTION: &'static str = "newsletters";
    const ENTITY_NAME: &'static str = "Newsletter";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            sujet: normalize::str_field(raw, "sujet"),
            contenu: normalize::str_field(raw, "contenu"),
            statut: normalize::str_field(raw, "statut"),
            destinataires: normalize::count_field(raw, "destinataires"),
            ouvertures: normalize::count_field(raw, "ouvertures"),
            date_envoi: normalize::opt_timestamp_field(raw, "dateEnvoi"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Newsletter {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.sujet, &self.contenu]
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "statut" => Some(&self.statut),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        self.date_envoi
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsletter {
    #[validate(length(min = 1))]
    pub sujet: String,
    #[serde(default)]
    pub contenu: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    pub date_envoi: Option<Timestamp>,
}

fn default_statut() -> String {
    "brouillon".to_string()
}

impl CreateNewsletter {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("sujet".into(), json!(self.sujet));
        fields.insert("contenu".into(), json!(self.contenu));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("destinataires".into(), json!(0));
        fields.insert("ouvertures".into(), json!(0));
        if let Some(v) = self.date_envoi {
            fields.insert("dateEnvoi".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsletter {
    pub sujet: Option<String>,
    pub contenu: Option<String>,
    pub statut: Option<String>,
    pub date_envoi: Option<Timestamp>,
}

impl UpdateNewsletter {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.sujet {
            fields.insert("sujet".into(), json!(v));
        }
        if let Some(v) = self.contenu {
            fields.insert("contenu".into(), json!(v));
        }
        if let Some(v) = &self.statut {
            fields.insert("statut".into(), json!(v));
            // Marking as sent stamps the send date.
            if v == "envoyee" && self.date_envoi.is_none() {
                fields.insert("dateEnvoi".into(), crate::document::server_timestamp());
            }
        }
        if let Some(v) = self.date_envoi {
            fields.insert("dateEnvoi".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}
