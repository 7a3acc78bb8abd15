//! Team member entity model and DTOs.
//!
//! Team members back the "notre equipe" page; the list is hand-ordered
//! through the `ordre` field rather than by date.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;
use crate::client::Direction;

/// A normalized document from the `equipe` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub nom: String,
    pub poste: String,
    pub bio: String,
    pub photo_url: String,
    pub email: String,
    /// Owning department, empty when unassigned.
    pub departement_id: String,
    /// Manual display position, ascending.
    pub ordre: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for TeamMember {
    const COLLECTION: &'static str = "equipe";
    const ENTITY_NAME: &'static str = "MembreEquipe";
    const ORDER_FIELD: &'static str = "ordre";
    const ORDER_DIRECTION: Direction = Direction::Asc;

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            nom: normalize::str_field(raw, "nom"),
            poste: normalize::str_field(raw, "poste"),
            bio: normalize::str_field(raw, "bio"),
            photo_url: normalize::str_field(raw, "photoUrl"),
            email: normalize::str_field(raw, "email"),
            departement_id: normalize::str_field(raw, "departementId"),
            ordre: normalize::count_field(raw, "ordre"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for TeamMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.nom, &self.poste, &self.bio]
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "departement" => Some(&self.departement_id),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        Some(self.created_at)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMember {
    #[validate(length(min = 1))]
    pub nom: String,
    #[serde(default)]
    pub poste: String,
    #[serde(default)]
    pub bio: String,
    #[validate(url)]
    pub photo_url: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub departement_id: String,
    #[serde(default)]
    pub ordre: u64,
}

impl CreateTeamMember {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("nom".into(), json!(self.nom));
        fields.insert("poste".into(), json!(self.poste));
        fields.insert("bio".into(), json!(self.bio));
        fields.insert("photoUrl".into(), json!(self.photo_url.unwrap_or_default()));
        fields.insert("email".into(), json!(self.email.unwrap_or_default()));
        fields.insert("departementId".into(), json!(self.departement_id));
        fields.insert("ordre".into(), json!(self.ordre));
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMember {
    pub nom: Option<String>,
    pub poste: Option<String>,
    pub bio: Option<String>,
    #[validate(url)]
    pub photo_url: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub departement_id: Option<String>,
    pub ordre: Option<u64>,
}

impl UpdateTeamMember {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.nom {
            fields.insert("nom".into(), json!(v));
        }
        if let Some(v) = self.poste {
            fields.insert("poste".into(), json!(v));
        }
        if let Some(v) = self.bio {
            fields.insert("bio".into(), json!(v));
        }
        if let Some(v) = self.photo_url {
            fields.insert("photoUrl".into(), json!(v));
        }
        if let Some(v) = self.email {
            fields.insert("email".into(), json!(v));
        }
        if let Some(v) = self.departement_id {
            fields.insert("departementId".into(), json!(v));
        }
        if let Some(v) = self.ordre {
            fields.insert("ordre".into(), json!(v));
        }
        fields
    }
}
