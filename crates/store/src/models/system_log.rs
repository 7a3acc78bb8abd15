//! System log entry model.
//!
//! Log entries are written by the platform itself and only ever read from
//! the console, so there are no create/update DTOs here.

use radc_core::filter::Filterable;
use radc_core::normalize::{self, RawDocument};
use radc_core::types::Timestamp;
use serde::Serialize;

use super::Entity;

/// A normalized document from the `systemLogs` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemLog {
    pub id: String,
    /// `info`, `warn` ou `error`.
    pub niveau: String,
    pub message: String,
    /// Emitting subsystem.
    pub source: String,
    /// Acting user, empty for system actions.
    pub utilisateur: String,
    pub created_at: Timestamp,
}

impl Entity for SystemLog {
    const COLLECTION: &'static str = "systemLogs";
    const ENTITY_NAME: &'static str = "SystemLog";

    fn normalize(id: &str, raw: &RawDocument) -> Self {
        Self {
            id: id.to_string(),
            niveau: normalize::str_field(raw, "niveau"),
            message: normalize::str_field(raw, "message"),
            source: normalize::str_field(raw, "source"),
            utilisateur: normalize::str_field(raw, "utilisateur"),
            created_at: normalize::timestamp_field(raw, "createdAt"),
        }
    }
}

impl Filterable for SystemLog {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.message, &self.source, &self.utilisateur]
    }

    fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "niveau" => Some(&self.niveau),
            "source" => Some(&self.source),
            _ => None,
        }
    }

    fn range_date(&self) -> Option<Timestamp> {
        Some(self.created_at)
    }
}
