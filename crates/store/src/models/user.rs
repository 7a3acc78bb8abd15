//! User (member) entity model and DTOs.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::tags::parse_tag_list;
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `utilisateurs` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub prenom: String,
    pub nom: String,
    pub email: String,
    /// `admin`, `moderateur`, `membre` ou `benevole`.
    pub role: String,
    /// `actif`, `inactif` ou `suspendu`.
    pub statut: String,
    pub telephone: String,
    pub ville: String,
    pub competences: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Display name used when other records reference this user.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.prenom, self.nom);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "utilisateurs";
    const ENTITY_NAME: &'static str = "Utilisateur";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            prenom: normalize::str_field(raw, "prenom"),
            nom: normalize::str_field(raw, "nom"),
            email: normalize::str_field(raw, "email"),
            role: normalize::str_field(raw, "role"),
            statut: normalize::str_field(raw, "statut"),
            telephone: normalize::str_field(raw, "telephone"),
            ville: normalize::str_field(raw, "ville"),
            competences: normalize::list_field(raw, "competences"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.prenom, &self.nom, &self.email, &self.ville]
    }

    fn tag_field(&self) -> &[String] {
        &self.competences
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "role" => Some(&self.role),
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
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub prenom: String,
    #[validate(length(min = 1))]
    pub nom: String,
    #[validate(email)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub ville: String,
    /// Comma-delimited in the edit form.
    #[serde(default)]
    pub competences: String,
}

fn default_role() -> String {
    "membre".to_string()
}

fn default_statut() -> String {
    "actif".to_string()
}

impl CreateUser {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("prenom".into(), json!(self.prenom));
        fields.insert("nom".into(), json!(self.nom));
        fields.insert("email".into(), json!(self.email));
        fields.insert("role".into(), json!(self.role));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("telephone".into(), json!(self.telephone));
        fields.insert("ville".into(), json!(self.ville));
        fields.insert("competences".into(), json!(parse_tag_list(&self.competences)));
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub prenom: Option<String>,
    pub nom: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub role: Option<String>,
    pub statut: Option<String>,
    pub telephone: Option<String>,
    pub ville: Option<String>,
    pub competences: Option<String>,
}

impl UpdateUser {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.prenom {
            fields.insert("prenom".into(), json!(v));
        }
        if let Some(v) = self.nom {
            fields.insert("nom".into(), json!(v));
        }
        if let Some(v) = self.email {
            fields.insert("email".into(), json!(v));
        }
        if let Some(v) = self.role {
            fields.insert("role".into(), json!(v));
        }
        if let Some(v) = self.statut {
            fields.insert("statut".into(), json!(v));
        }
        if let Some(v) = self.telephone {
            fields.insert("telephone".into(), json!(v));
        }
        if let Some(v) = self.ville {
            fields.insert("ville".into(), json!(v));
        }
        if let Some(v) = self.competences {
            fields.insert("competences".into(), json!(parse_tag_list(&v)));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_of_empty_document_yields_defaults() {
        let user = User::normalize("u1", &RawDocument::new());
        assert_eq!(user.id, "u1");
        assert_eq!(user.prenom, "");
        assert_eq!(user.email, "");
        assert!(user.competences.is_empty());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = User::normalize("u1", &RawDocument::new());
        user.email = "contact@radc.org".to_string();
        assert_eq!(user.display_name(), "contact@radc.org");

        user.prenom = "Awa".to_string();
        user.nom = "Diallo".to_string();
        assert_eq!(user.display_name(), "Awa Diallo");
    }
}
