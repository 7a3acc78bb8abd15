//! Project entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::tags::parse_tag_list;
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `projets` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub titre: String,
    pub description: String,
    pub categorie: String,
    /// `brouillon`, `en_cours`, `termine` ou `archive`.
    pub statut: String,
    pub responsable: String,
    /// Funding target.
    pub objectif: f64,
    /// Amount collected so far; only moves through donation actions.
    pub montant_collecte: f64,
    pub tags: Vec<String>,
    pub date_debut: Option<Timestamp>,
    pub date_fin: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Project {
    const COLLECTION: &'static str = "projets";
    const ENTITY_NAME: &'static str = "Projet";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            titre: normalize::str_field(raw, "titre"),
            description: normalize::str_field(raw, "description"),
            categorie: normalize::str_field(raw, "categorie"),
            statut: normalize::str_field(raw, "statut"),
            responsable: normalize::str_field(raw, "responsable"),
            objectif: normalize::amount_field(raw, "objectif"),
            montant_collecte: normalize::amount_field(raw, "montantCollecte"),
            tags: normalize::list_field(raw, "tags"),
            date_debut: normalize::opt_timestamp_field(raw, "dateDebut"),
            date_fin: normalize::opt_timestamp_field(raw, "dateFin"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.titre, &self.description, &self.responsable]
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
        Some(self.created_at)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1))]
    pub titre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categorie: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    #[serde(default)]
    pub responsable: String,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub objectif: f64,
    /// Comma-delimited in the edit form.
    #[serde(default)]
    pub tags: String,
    pub date_debut: Option<Timestamp>,
    pub date_fin: Option<Timestamp>,
}

fn default_statut() -> String {
    "brouillon".to_string()
}

impl CreateProject {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("titre".into(), json!(self.titre));
        fields.insert("description".into(), json!(self.description));
        fields.insert("categorie".into(), json!(self.categorie));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("responsable".into(), json!(self.responsable));
        fields.insert("objectif".into(), json!(self.objectif));
        fields.insert("montantCollecte".into(), json!(0.0));
        fields.insert("tags".into(), json!(parse_tag_list(&self.tags)));
        if let Some(v) = self.date_debut {
            fields.insert("dateDebut".into(), normalize::encode_timestamp(v));
        }
        if let Some(v) = self.date_fin {
            fields.insert("dateFin".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub titre: Option<String>,
    pub description: Option<String>,
    pub categorie: Option<String>,
    pub statut: Option<String>,
    pub responsable: Option<String>,
    #[validate(range(min = 0.0))]
    pub objectif: Option<f64>,
    pub tags: Option<String>,
    pub date_debut: Option<Timestamp>,
    pub date_fin: Option<Timestamp>,
}

impl UpdateProject {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.titre {
            fields.insert("titre".into(), json!(v));
        }
        if let Some(v) = self.description {
            fields.insert("description".into(), json!(v));
        }
        if let Some(v) = self.categorie {
            fields.insert("categorie".into(), json!(v));
        }
        if let Some(v) = self.statut {
            fields.insert("statut".into(), json!(v));
        }
        if let Some(v) = self.responsable {
            fields.insert("responsable".into(), json!(v));
        }
        if let Some(v) = self.objectif {
            fields.insert("objectif".into(), json!(v));
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
