//! Formation (training course) entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::tags::parse_tag_list;
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `formations` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    pub id: String,
    pub titre: String,
    pub description: String,
    pub categorie: String,
    /// `debutant`, `intermediaire` ou `avance`.
    pub niveau: String,
    /// `brouillon`, `publie` ou `archive`.
    pub statut: String,
    pub formateur: String,
    pub duree_heures: u64,
    pub places: u64,
    /// Enrollment counter; moves only through explicit registration.
    pub inscrits: u64,
    pub tags: Vec<String>,
    pub date_debut: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Formation {
    const COLLECTION: &'static str = "formations";
    const ENTITY_NAME: &'static str = "Formation";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            titre: normalize::str_field(raw, "titre"),
            description: normalize::str_field(raw, "description"),
            categorie: normalize::str_field(raw, "categorie"),
            niveau: normalize::str_field(raw, "niveau"),
            statut: normalize::str_field(raw, "statut"),
            formateur: normalize::str_field(raw, "formateur"),
            duree_heures: normalize::count_field(raw, "dureeHeures"),
            places: normalize::count_field(raw, "places"),
            inscrits: normalize::count_field(raw, "inscrits"),
            tags: normalize::list_field(raw, "tags"),
            date_debut: normalize::opt_timestamp_field(raw, "dateDebut"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Formation {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.titre, &self.description, &self.formateur]
    }

    fn tag_field(&self) -> &[String] {
        &self.tags
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "statut" => Some(&self.statut),
            "categorie" => Some(&self.categorie),
            "niveau" => Some(&self.niveau),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        self.date_debut
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormation {
    #[validate(length(min = 1))]
    pub titre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categorie: String,
    #[serde(default)]
    pub niveau: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    #[serde(default)]
    pub formateur: String,
    #[serde(default)]
    pub duree_heures: u64,
    #[serde(default)]
    pub places: u64,
    /// Comma-delimited in the edit form.
    #[serde(default)]
    pub tags: String,
    pub date_debut: Option<Timestamp>,
}

fn default_statut() -> String {
    "brouillon".to_string()
}

impl CreateFormation {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("titre".into(), json!(self.titre));
        fields.insert("description".into(), json!(self.description));
        fields.insert("categorie".into(), json!(self.categorie));
        fields.insert("niveau".into(), json!(self.niveau));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("formateur".into(), json!(self.formateur));
        fields.insert("dureeHeures".into(), json!(self.duree_heures));
        fields.insert("places".into(), json!(self.places));
        fields.insert("inscrits".into(), json!(0));
        fields.insert("tags".into(), json!(parse_tag_list(&self.tags)));
        if let Some(v) = self.date_debut {
            fields.insert("dateDebut".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormation {
    pub titre: Option<String>,
    pub description: Option<String>,
    pub categorie: Option<String>,
    pub niveau: Option<String>,
    pub statut: Option<String>,
    pub formateur: Option<String>,
    pub duree_heures: Option<u64>,
    pub places: Option<u64>,
    pub tags: Option<String>,
    pub date_debut: Option<Timestamp>,
}

impl UpdateFormation {
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
        if let Some(v) = self.niveau {
            fields.insert("niveau".into(), json!(v));
        }
        if let Some(v) = self.statut {
            fields.insert("statut".into(), json!(v));
        }
        if let Some(v) = self.formateur {
            fields.insert("formateur".into(), json!(v));
        }
        if let Some(v) = self.duree_heures {
            fields.insert("dureeHeures".into(), json!(v));
        }
        if let Some(v) = self.places {
            fields.insert("places".into(), json!(v));
        }
        if let Some(v) = self.tags {
            fields.insert("tags".into(), json!(parse_tag_list(&v)));
        }
        if let Some(v) = self.date_debut {
            fields.insert("dateDebut".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}
