//! Department entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `departements` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub nom: String,
    pub description: String,
    /// Display name of the person in charge.
    pub responsable: String,
    pub email: String,
    /// `actif` ou `inactif`.
    pub statut: String,
    /// Headcount; moves only through explicit assignment.
    pub membres: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Department {
    const COLLECTION: &'static str = "departements";
    const ENTITY_NAME: &'static str = "Departement";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            nom: normalize::str_field(raw, "nom"),
            description: normalize::str_field(raw, "description"),
            responsable: normalize::str_field(raw, "responsable"),
            email: normalize::str_field(raw, "email"),
            statut: normalize::str_field(raw, "statut"),
            membres: normalize::count_field(raw, "membres"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Department {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.nom, &self.description, &self.responsable]
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
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
pub struct CreateDepartment {
    #[validate(length(min = 1))]
    pub nom: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsable: String,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default = "default_statut")]
    pub statut: String,
}

fn default_statut() -> String {
    "actif".to_string()
}

impl CreateDepartment {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("nom".into(), json!(self.nom));
        fields.insert("description".into(), json!(self.description));
        fields.insert("responsable".into(), json!(self.responsable));
        fields.insert("email".into(), json!(self.email.unwrap_or_default()));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("membres".into(), json!(0));
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartment {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub responsable: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub statut: Option<String>,
}

impl UpdateDepartment {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.nom {
            fields.insert("nom".into(), json!(v));
        }
        if let Some(v) = self.description {
            fields.insert("description".into(), json!(v));
        }
        if let Some(v) = self.responsable {
            fields.insert("responsable".into(), json!(v));
        }
        if let Some(v) = self.email {
            fields.insert("email".into(), json!(v));
        }
        if let Some(v) = self.statut {
            fields.insert("statut".into(), json!(v));
        }
        fields
    }
}
