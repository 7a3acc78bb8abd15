//! Volunteering opportunity entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::tags::parse_tag_list;
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `opportunitesBenevolat` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerOpportunity {
    pub id: String,
    pub titre: String,
    pub description: String,
    pub lieu: String,
    pub categorie: String,
    /// `ouverte`, `pourvue` ou `fermee`.
    pub statut: String,
    /// `ponctuel` ou `regulier`.
    pub engagement: String,
    pub places: u64,
    /// Applications received so far.
    pub candidatures: u64,
    pub competences_requises: Vec<String>,
    pub date_limite: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for VolunteerOpportunity {
    const COLLECTION: &'static str = "opportunitesBenevolat";
    const ENTITY_NAME: &'static str = "Opportunite";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            titre: normalize::str_field(raw, "titre"),
            description: normalize::str_field(raw, "description"),
            lieu: normalize::str_field(raw, "lieu"),
            categorie: normalize::str_field(raw, "categorie"),
            statut: normalize::str_field(raw, "statut"),
            engagement: normalize::str_field(raw, "engagement"),
            places: normalize::count_field(raw, "places"),
            candidatures: normalize::count_field(raw, "candidatures"),
            competences_requises: normalize::list_field(raw, "competencesRequises"),
            date_limite: normalize::opt_timestamp_field(raw, "dateLimite"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for VolunteerOpportunity {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.titre, &self.description, &self.lieu]
    }

    fn tag_field(&self) -> &[String] {
        &self.competences_requises
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "statut" => Some(&self.statut),
            "categorie" => Some(&self.categorie),
            "engagement" => Some(&self.engagement),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        self.date_limite
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolunteerOpportunity {
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
    #[serde(default = "default_engagement")]
    pub engagement: String,
    #[serde(default)]
    pub places: u64,
    /// Comma-delimited in the edit form.
    #[serde(default)]
    pub competences_requises: String,
    pub date_limite: Option<Timestamp>,
}

fn default_statut() -> String {
    "ouverte".to_string()
}

fn default_engagement() -> String {
    "ponctuel".to_string()
}

impl CreateVolunteerOpportunity {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("titre".into(), json!(self.titre));
        fields.insert("description".into(), json!(self.description));
        fields.insert("lieu".into(), json!(self.lieu));
        fields.insert("categorie".into(), json!(self.categorie));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("engagement".into(), json!(self.engagement));
        fields.insert("places".into(), json!(self.places));
        fields.insert("candidatures".into(), json!(0));
        fields.insert(
            "competencesRequises".into(),
            json!(parse_tag_list(&self.competences_requises)),
        );
        if let Some(v) = self.date_limite {
            fields.insert("dateLimite".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolunteerOpportunity {
    pub titre: Option<String>,
    pub description: Option<String>,
    pub lieu: Option<String>,
    pub categorie: Option<String>,
    pub statut: Option<String>,
    pub engagement: Option<String>,
    pub places: Option<u64>,
    pub competences_requises: Option<String>,
    pub date_limite: Option<Timestamp>,
}

impl UpdateVolunteerOpportunity {
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
        if let Some(v) = self.engagement {
            fields.insert("engagement".into(), json!(v));
        }
        if let Some(v) = self.places {
            fields.insert("places".into(), json!(v));
        }
        if let Some(v) = self.competences_requises {
            fields.insert("competencesRequises".into(), json!(parse_tag_list(&v)));
        }
        if let Some(v) = self.date_limite {
            fields.insert("dateLimite".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}
