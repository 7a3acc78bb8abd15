//! Organization settings model and DTO.
//!
//! The `organisation` collection holds a single document of settings. Its
//! nested optional objects (contact, social, legal) must come out of
//! normalization with every leaf present: form state binds each leaf to a
//! controlled input, and a partial object would break those bindings.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// Contact details, fully defaulted to empty-string leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub telephone: String,
    pub adresse: String,
    pub ville: String,
    pub code_postal: String,
    pub pays: String,
}

impl ContactInfo {
    fn normalize(raw: &RawDocument) -> Self {
        Self {
            email: normalize::str_field(raw, "email"),
            telephone: normalize::str_field(raw, "telephone"),
            adresse: normalize::str_field(raw, "adresse"),
            ville: normalize::str_field(raw, "ville"),
            code_postal: normalize::str_field(raw, "codePostal"),
            pays: normalize::str_field(raw, "pays"),
        }
    }
}

/// Social media links, fully defaulted to empty-string leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
    pub twitter: String,
    pub youtube: String,
    pub site_web: String,
}

impl SocialLinks {
    fn normalize(raw: &RawDocument) -> Self {
        Self {
            facebook: normalize::str_field(raw, "facebook"),
            instagram: normalize::str_field(raw, "instagram"),
            linkedin: normalize::str_field(raw, "linkedin"),
            twitter: normalize::str_field(raw, "twitter"),
            youtube: normalize::str_field(raw, "youtube"),
            site_web: normalize::str_field(raw, "siteWeb"),
        }
    }
}

/// Legal registration details, fully defaulted to empty-string leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegalInfo {
    pub forme_juridique: String,
    pub numero_enregistrement: String,
    pub numero_tva: String,
}

impl LegalInfo {
    fn normalize(raw: &RawDocument) -> Self {
        Self {
            forme_juridique: normalize::str_field(raw, "formeJuridique"),
            numero_enregistrement: normalize::str_field(raw, "numeroEnregistrement"),
            numero_tva: normalize::str_field(raw, "numeroTva"),
        }
    }
}

/// The normalized `organisation` settings document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub nom: String,
    pub description: String,
    pub contact: ContactInfo,
    pub social: SocialLinks,
    pub legal: LegalInfo,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Organization {
    const COLLECTION: &'static str = "organisation";
    const ENTITY_NAME: &'static str = "Organisation";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            nom: normalize::str_field(raw, "nom"),
            description: normalize::str_field(raw, "description"),
            contact: ContactInfo::normalize(&normalize::nested_field(raw, "contact")),
            social: SocialLinks::normalize(&normalize::nested_field(raw, "social")),
            legal: LegalInfo::normalize(&normalize::nested_field(raw, "legal")),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Organization {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.nom, &self.description]
    }

    fn categorical(&self, _field: &str) -> Option<&str> {
        None
    }
}

/// Full-replacement settings update.
///
/// The settings form always submits complete nested objects (it was handed
/// complete ones by `normalize`), so this is not a partial merge.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganization {
    #[validate(length(min = 1))]
    pub nom: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub legal: LegalInfo,
}

impl UpdateOrganization {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("nom".into(), json!(self.nom));
        fields.insert("description".into(), json!(self.description));
        fields.insert("contact".into(), json!(self.contact));
        fields.insert("social".into(), json!(self.social));
        fields.insert("legal".into(), json!(self.legal));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn normalize_defaults_every_nested_leaf() {
        let org = Organization::normalize("principal", &RawDocument::new());
        assert_eq!(org.contact, ContactInfo::default());
        assert_eq!(org.social, SocialLinks::default());
        assert_eq!(org.legal, LegalInfo::default());
    }

    #[test]
    fn normalize_keeps_known_leaves_and_defaults_the_rest() {
        let raw = serde_json::json!({
            "nom": "RADC",
            "contact": { "email": "info@radc.org" },
        });
        let raw = raw.as_object().unwrap().clone();

        let org = Organization::normalize("principal", &raw);
        assert_eq!(org.contact.email, "info@radc.org");
        assert_eq!(org.contact.telephone, "");
        assert_eq!(org.contact.pays, "");
    }

    #[test]
    fn serialized_form_has_no_missing_leaves() {
        let org = Organization::normalize("principal", &RawDocument::new());
        let value = serde_json::to_value(&org).unwrap();
        let contact = value.get("contact").and_then(Value::as_object).unwrap();
        for leaf in ["email", "telephone", "adresse", "ville", "codePostal", "pays"] {
            assert!(contact.get(leaf).is_some_and(Value::is_string), "missing {leaf}");
        }
    }
}
