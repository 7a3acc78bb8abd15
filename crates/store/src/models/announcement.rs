//! Announcement entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::tags::parse_tag_list;
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `annonces` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub titre: String,
    pub contenu: String,
    pub categorie: String,
    /// `brouillon`, `publie` ou `archive`.
    pub statut: String,
    /// `normale`, `haute` ou `urgente`.
    pub priorite: String,
    pub auteur: String,
    pub tags: Vec<String>,
    /// View counter.
    pub vues: u64,
    pub date_publication: Option<Timestamp>,
    pub expire_le: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Announcement {
    const COLLECTION: &'static str = "annonces";
    const ENTITY_NAME: &'static str = "Annonce";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            titre: normalize::str_field(raw, "titre"),
            contenu: normalize::str_field(raw, "contenu"),
            categorie: normalize::str_field(raw, "categorie"),
            statut: normalize::str_field(raw, "statut"),
            priorite: normalize::str_field(raw, "priorite"),
            auteur: normalize::str_field(raw, "auteur"),
            tags: normalize::list_field(raw, "tags"),
            vues: normalize::count_field(raw, "vues"),
            date_publication: normalize::opt_timestamp_field(raw, "datePublication"),
            expire_le: normalize::opt_timestamp_field(raw, "expireLe"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Announcement {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.titre, &self.contenu, &self.auteur]
    }

    fn tag_field(&self) -> &[String] {
        &self.tags
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "statut" => Some(&self.statut),
            "categorie" => Some(&self.categorie),
            "priorite" => Some(&self.priorite),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        self.date_publication
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncement {
    #[validate(length(min = 1))]
    pub titre: String,
    #[serde(default)]
    pub contenu: String,
    #[serde(default)]
    pub categorie: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    #[serde(default = "default_priorite")]
    pub priorite: String,
    #[serde(default)]
    pub auteur: String,
    /// Comma-delimited in the edit form.
    #[serde(default)]
    pub tags: String,
    pub date_publication: Option<Timestamp>,
    pub expire_le: Option<Timestamp>,
}

fn default_statut() -> String {
    "brouillon".to_string()
}

fn default_priorite() -> String {
    "normale".to_string()
}

impl CreateAnnouncement {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("titre".into(), json!(self.titre));
        fields.insert("contenu".into(), json!(self.contenu));
        fields.insert("categorie".into(), json!(self.categorie));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("priorite".into(), json!(self.priorite));
        fields.insert("auteur".into(), json!(self.auteur));
        fields.insert("tags".into(), json!(parse_tag_list(&self.tags)));
        fields.insert("vues".into(), json!(0));
        // Publishing directly stamps the milestone; drafts leave it unset.
        if self.statut == "publie" {
            let date = self
                .date_publication
                .map(normalize::encode_timestamp)
                .unwrap_or_else(crate::document::server_timestamp);
            fields.insert("datePublication".into(), date);
        } else if let Some(v) = self.date_publication {
            fields.insert("datePublication".into(), normalize::encode_timestamp(v));
        }
        if let Some(v) = self.expire_le {
            fields.insert("expireLe".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncement {
    pub titre: Option<String>,
    pub contenu: Option<String>,
    pub categorie: Option<String>,
    pub statut: Option<String>,
    pub priorite: Option<String>,
    pub auteur: Option<String>,
    pub tags: Option<String>,
    pub date_publication: Option<Timestamp>,
    pub expire_le: Option<Timestamp>,
}

impl UpdateAnnouncement {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.titre {
            fields.insert("titre".into(), json!(v));
        }
        if let Some(v) = self.contenu {
            fields.insert("contenu".into(), json!(v));
        }
        if let Some(v) = self.categorie {
            fields.insert("categorie".into(), json!(v));
        }
        if let Some(v) = &self.statut {
            fields.insert("statut".into(), json!(v));
            // Publishing without an explicit date requests a stamp; the
            // repository drops it when the record is already published.
            if v == "publie" && self.date_publication.is_none() {
                fields.insert("datePublication".into(), crate::document::server_timestamp());
            }
        }
        if let Some(v) = self.priorite {
            fields.insert("priorite".into(), json!(v));
        }
        if let Some(v) = self.auteur {
            fields.insert("auteur".into(), json!(v));
        }
        if let Some(v) = self.tags {
            fields.insert("tags".into(), json!(parse_tag_list(&v)));
        }
        if let Some(v) = self.date_publication {
            fields.insert("datePublication".into(), normalize::encode_timestamp(v));
        }
        if let Some(v) = self.expire_le {
            fields.insert("expireLe".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}
