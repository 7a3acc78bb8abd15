//! Article (news post) entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::tags::parse_tag_list;
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `articles` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub titre: String,
    pub contenu: String,
    pub auteur: String,
    pub categorie: String,
    /// `brouillon`, `publie` ou `archive`.
    pub statut: String,
    pub tags: Vec<String>,
    pub vues: u64,
    pub likes: u64,
    pub date_publication: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Article {
    const COLLECTION: &'static str = "articles";
    const ENTITY_NAME: &'static str = "Article";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            titre: normalize::str_field(raw, "titre"),
            contenu: normalize::str_field(raw, "contenu"),
            auteur: normalize::str_field(raw, "auteur"),
            categorie: normalize::str_field(raw, "categorie"),
            statut: normalize::str_field(raw, "statut"),
            tags: normalize::list_field(raw, "tags"),
            vues: normalize::count_field(raw, "vues"),
            likes: normalize::count_field(raw, "likes"),
            date_publication: normalize::opt_timestamp_field(raw, "datePublication"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Article {
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
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        self.date_publication
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
    #[validate(length(min = 1))]
    pub titre: String,
    #[serde(default)]
    pub contenu: String,
    #[serde(default)]
    pub auteur: String,
    #[serde(default)]
    pub categorie: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    /// Comma-delimited in the edit form.
    #[serde(default)]
    pub tags: String,
}

fn default_statut() -> String {
    "brouillon".to_string()
}

impl CreateArticle {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("titre".into(), json!(self.titre));
        fields.insert("contenu".into(), json!(self.contenu));
        fields.insert("auteur".into(), json!(self.auteur));
        fields.insert("categorie".into(), json!(self.categorie));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("tags".into(), json!(parse_tag_list(&self.tags)));
        fields.insert("vues".into(), json!(0));
        fields.insert("likes".into(), json!(0));
        if self.statut == "publie" {
            fields.insert("datePublication".into(), crate::document::server_timestamp());
        }
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
    pub titre: Option<String>,
    pub contenu: Option<String>,
    pub auteur: Option<String>,
    pub categorie: Option<String>,
    pub statut: Option<String>,
    pub tags: Option<String>,
}

impl UpdateArticle {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.titre {
            fields.insert("titre".into(), json!(v));
        }
        if let Some(v) = self.contenu {
            fields.insert("contenu".into(), json!(v));
        }
        if let Some(v) = self.auteur {
            fields.insert("auteur".into(), json!(v));
        }
        if let Some(v) = self.categorie {
            fields.insert("categorie".into(), json!(v));
        }
        if let Some(v) = &self.statut {
            fields.insert("statut".into(), json!(v));
            if v == "publie" {
                fields.insert("datePublication".into(), crate::document::server_timestamp());
            }
        }
        if let Some(v) = self.tags {
            fields.insert("tags".into(), json!(parse_tag_list(&v)));
        }
        fields
    }
}
