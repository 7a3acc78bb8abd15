//! Forum entity models and DTOs (posts and categories).

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::tags::parse_tag_list;
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// A normalized document from the `forumPosts` collection.
///
/// Posts reference their category by name only; a dangling reference just
/// renders as an unknown category label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: String,
    pub titre: String,
    pub contenu: String,
    pub auteur: String,
    pub categorie: String,
    /// `visible`, `masque` ou `signale`.
    pub statut: String,
    pub reponses: u64,
    pub vues: u64,
    pub epingle: bool,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for ForumPost {
    const COLLECTION: &'static str = "forumPosts";
    const ENTITY_NAME: &'static str = "ForumPost";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            titre: normalize::str_field(raw, "titre"),
            contenu: normalize::str_field(raw, "contenu"),
            auteur: normalize::str_field(raw, "auteur"),
            categorie: normalize::str_field(raw, "categorie"),
            statut: normalize::str_field(raw, "statut"),
            reponses: normalize::count_field(raw, "reponses"),
            vues: normalize::count_field(raw, "vues"),
            epingle: normalize::bool_field(raw, "epingle"),
            tags: normalize::list_field(raw, "tags"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for ForumPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.titre, &self.contenu, &self.auteur]
    }

    fn tag_field(&self) -> &[String] {
        &self.tags
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "categorie" => Some(&self.categorie),
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
pub struct CreateForumPost {
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
    "visible".to_string()
}

impl CreateForumPost {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("titre".into(), json!(self.titre));
        fields.insert("contenu".into(), json!(self.contenu));
        fields.insert("auteur".into(), json!(self.auteur));
        fields.insert("categorie".into(), json!(self.categorie));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("reponses".into(), json!(0));
        fields.insert("vues".into(), json!(0));
        fields.insert("epingle".into(), json!(false));
        fields.insert("tags".into(), json!(parse_tag_list(&self.tags)));
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForumPost {
    pub titre: Option<String>,
    pub contenu: Option<String>,
    pub categorie: Option<String>,
    pub statut: Option<String>,
    pub epingle: Option<bool>,
    pub tags: Option<String>,
}

impl UpdateForumPost {
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
        if let Some(v) = self.statut {
            fields.insert("statut".into(), json!(v));
        }
        if let Some(v) = self.epingle {
            fields.insert("epingle".into(), json!(v));
        }
        if let Some(v) = self.tags {
            fields.insert("tags".into(), json!(parse_tag_list(&v)));
        }
        fields
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// A normalized document from the `forumCategories` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumCategory {
    pub id: String,
    pub nom: String,
    pub description: String,
    /// Display position on the forum index.
    pub ordre: u64,
    /// Topic counter.
    pub sujets: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for ForumCategory {
    const COLLECTION: &'static str = "forumCategories";
    const ENTITY_NAME: &'static str = "ForumCategorie";
    const ORDER_FIELD: &'static str = "ordre";
    const ORDER_DIRECTION: crate::client::Direction = crate::client::Direction::Asc;

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            nom: normalize::str_field(raw, "nom"),
            description: normalize::str_field(raw, "description"),
            ordre: normalize::count_field(raw, "ordre"),
            sujets: normalize::count_field(raw, "sujets"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for ForumCategory {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.nom, &self.description]
    }

    fn categorical(&self, _field: &str) -> Option<&str> {
        None
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumCategory {
    #[validate(length(min = 1))]
    pub nom: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ordre: u64,
}

impl CreateForumCategory {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("nom".into(), json!(self.nom));
        fields.insert("description".into(), json!(self.description));
        fields.insert("ordre".into(), json!(self.ordre));
        fields.insert("sujets".into(), json!(0));
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForumCategory {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub ordre: Option<u64>,
}

impl UpdateForumCategory {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.nom {
            fields.insert("nom".into(), json!(v));
        }
        if let Some(v) = self.description {
            fields.insert("description".into(), json!(v));
        }
        if let Some(v) = self.ordre {
            fields.insert("ordre".into(), json!(v));
        }
        fields
    }
}
