//! Event entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::tags::parse_tag_list;
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `evenements` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub titre: String,
    pub description: String,
    pub lieu: String,
    pub categorie: String,
    /// `brouillon`, `publie`, `annule` ou `termine`.
    pub statut: String,
    pub capacite: u64,
    /// Registration counter.
    pub participants: u64,
    pub tags: Vec<String>,
    pub date_debut: Timestamp,
    pub date_fin: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Event {
    const COLLECTION: &'static str = "evenements";
    const ENTITY_NAME: &'static str = "Evenement";
    const ORDER_FIELD: &'static str = "dateDebut";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            titre: normalize::str_field(raw, "titre"),
            description: normalize::str_field(raw, "description"),
            lieu: normalize::str_field(raw, "lieu"),
            categorie: normalize::str_field(raw, "categorie"),
            statut: normalize::str_field(raw, "statut"),
            capacite: normalize::count_field(raw, "capacite"),
            participants: normalize::count_field(raw, "participants"),
            tags: normalize::list_field(raw, "tags"),
            date_debut: normalize::timestamp_field(raw, "dateDebut"),
            date_fin: normalize::opt_timestamp_field(raw, "dateFin"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.titre, &self.description, &self.lieu]
    }

    fn tag_field(&self) -> &[String] {
        &self.tags
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "statut" => Some(&self.statut),
            "categorie" => Some(&self.categorie),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        Some(self.date_debut)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    #[validate(length(min = 1))]
    pub titre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lieu: String,
    #[serde(default)]
    pub categorie: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    #[serde(default)]
    pub capacite: u64,
    /// Comma-delimited in the edit form.
    #[serde(default)]
    pub tags: String,
    pub date_debut: Timestamp,
    pub date_fin: Option<Timestamp>,
}

fn default_statut() -> String {
    "brouillon".to_string()
}

impl CreateEvent {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("titre".into(), json!(self.titre));
        fields.insert("description".into(), json!(self.description));
        fields.insert("lieu".into(), json!(self.lieu));
        fields.insert("categorie".into(), json!(self.categorie));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("capacite".into(), json!(self.capacite));
        fields.insert("participants".into(), json!(0));
        fields.insert("tags".into(), json!(parse_tag_list(&self.tags)));
        fields.insert("dateDebut".into(), normalize::encode_timestamp(self.date_debut));
        if let Some(v) = self.date_fin {
            fields.insert("dateFin".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    pub titre: Option<String>,
    pub description: Option<String>,
    pub lieu: Option<String>,
    pub categorie: Option<String>,
    pub statut: Option<String>,
    pub capacite: Option<u64>,
    pub tags: Option<String>,
    pub date_debut: Option<Timestamp>,
    pub date_fin: Option<Timestamp>,
}

impl UpdateEvent {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.titre {
            fields.insert("titre".into(), json!(v));
        }
        if let Some(v) = self.description {
            fields.insert("description".into(), json!(v));
        }
        if let Some(v) = self.lieu {
            fields.insert("lieu".into(), json!(v));
        }
        if let Some(v) = self.categorie {
            fields.insert("categorie".into(), json!(v));
        }
        if let Some(v) = self.statut {
            fields.insert("statut".into(), json!(v));
        }
        if let Some(v) = self.capacite {
            fields.insert("capacite".into(), json!(v));
        }
        if let Some(v) = self.tags {
            fields.insert("tags".into(), json!(parse_tag_list(&v)));
        }
        if let Some(v) = self.date_debut {
            fields.insert("dateDebut".into(), normalize::encode_timestamp(v));
        }
        if let Some(v) = self.date_fin {
            fields.insert("dateFin".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}
