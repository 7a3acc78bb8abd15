//! Donation entity model and DTOs.
//!
//! Donations reference their donor and project by id only; the display
//! labels are resolved by the repository's enrichment pass and kept empty
//! when the reference dangles.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::Entity;

/// A normalized document from the `donations` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub donateur_id: String,
    /// Resolved from `utilisateurs`; empty when the reference dangles.
    pub donateur_nom: String,
    pub projet_id: String,
    /// Resolved from `projets`; empty when the reference dangles.
    pub projet_titre: String,
    pub montant: f64,
    pub devise: String,
    /// `carte`, `virement` ou `especes`.
    pub methode: String,
    /// `en_attente`, `confirme` ou `rembourse`.
    pub statut: String,
    pub message: String,
    pub date_don: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Donation {
    const COLLECTION: &'static str = "donations";
    const ENTITY_NAME: &'static str = "Donation";
    const ORDER_FIELD: &'static str = "dateDon";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            donateur_id: normalize::str_field(raw, "donateurId"),
            donateur_nom: normalize::str_field(raw, "donateurNom"),
            projet_id: normalize::str_field(raw, "projetId"),
            projet_titre: normalize::str_field(raw, "projetTitre"),
            montant: normalize::amount_field(raw, "montant"),
            devise: normalize::str_field(raw, "devise"),
            methode: normalize::str_field(raw, "methode"),
            statut: normalize::str_field(raw, "statut"),
            message: normalize::str_field(raw, "message"),
            date_don: normalize::timestamp_field(raw, "dateDon"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
            updated_at: normalize::timestamp_field(raw, "updatedAt"),
        }
    }
}

impl Filterable for Donation {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.donateur_nom,
            &self.projet_titre,
            &self.message,
        ]
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "statut" => Some(&self.statut),
            "methode" => Some(&self.methode),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        Some(self.date_don)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonation {
    #[serde(default)]
    pub donateur_id: String,
    #[serde(default)]
    pub projet_id: String,
    #[validate(range(min = 0.0))]
    pub montant: f64,
    #[serde(default = "default_devise")]
    pub devise: String,
    #[serde(default)]
    pub methode: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    #[serde(default)]
    pub message: String,
    pub date_don: Option<Timestamp>,
}

fn default_devise() -> String {
    "EUR".to_string()
}

fn default_statut() -> String {
    "en_attente".to_string()
}

impl CreateDonation {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        fields.insert("donateurId".into(), json!(self.donateur_id));
        fields.insert("projetId".into(), json!(self.projet_id));
        fields.insert("montant".into(), json!(self.montant));
        fields.insert("devise".into(), json!(self.devise));
        fields.insert("methode".into(), json!(self.methode));
        fields.insert("statut".into(), json!(self.statut));
        fields.insert("message".into(), json!(self.message));
        // The gift date defaults to the server clock when the form leaves
        // it blank.
        let date_don = self
            .date_don
            .map(normalize::encode_timestamp)
            .unwrap_or_else(crate::document::server_timestamp);
        fields.insert("dateDon".into(), date_don);
        fields
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonation {
    #[validate(range(min = 0.0))]
    pub montant: Option<f64>,
    pub methode: Option<String>,
    pub statut: Option<String>,
    pub message: Option<String>,
    pub date_don: Option<Timestamp>,
}

impl UpdateDonation {
    pub fn into_fields(self) -> RawDocument {
        let mut fields = RawDocument::new();
        if let Some(v) = self.montant {
            fields.insert("montant".into(), json!(v));
        }
        if let Some(v) = self.methode {
            fields.insert("methode".into(), json!(v));
        }
        if let Some(v) = self.statut {
            fields.insert("statut".into(), json!(v));
        }
        if let Some(v) = self.message {
            fields.insert("message".into(), json!(v));
        }
        if let Some(v) = self.date_don {
            fields.insert("dateDon".into(), normalize::encode_timestamp(v));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn raw(value: Value) -> RawDocument {
        value.as_object().expect("fixture must be an object").clone()
    }

    #[test]
    fn normalize_is_total_on_the_empty_document() {
        let donation = Donation::normalize("d1", &RawDocument::new());
        assert_eq!(donation.id, "d1");
        assert_eq!(donation.montant, 0.0);
        assert_eq!(donation.donateur_nom, "");
        assert_eq!(donation.statut, "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let doc = raw(serde_json::json!({
            "donateurId": "u1",
            "montant": 25.0,
            "statut": "confirme",
            "dateDon": "2024-02-10T09:00:00+00:00",
            "createdAt": "2024-02-10T09:00:00+00:00",
            "updatedAt": "2024-02-10T09:00:00+00:00",
        }));
        let once = Donation::normalize("d1", &doc);

        // Re-read the normalized record as if it had been stored verbatim.
        let reread = raw(serde_json::to_value(&once).expect("serializable"));
        let twice = Donation::normalize("d1", &reread);
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_amount_degrades_to_zero() {
        let doc = raw(serde_json::json!({ "montant": "beaucoup" }));
        assert_eq!(Donation::normalize("d1", &doc).montant, 0.0);
    }
}
