//! Raw document types and the server-time write sentinel.

use radc_core::normalize::RawDocument;
use serde_json::{json, Value};

/// A raw document as returned by the store: its identity plus loose fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Opaque identity assigned by the store on creation.
    pub id: String,
    /// The document's fields; may be missing anything.
    pub fields: RawDocument,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: RawDocument) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Marker key identifying a server-timestamp sentinel value.
const SERVER_TIMESTAMP_KEY: &str = "__serverTimestamp__";

/// A field value meaning "current server time", resolved by the store
/// implementation at write time.
pub fn server_timestamp() -> Value {
    json!({ SERVER_TIMESTAMP_KEY: true })
}

/// Whether a write value is the server-time sentinel.
pub fn is_server_timestamp(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.contains_key(SERVER_TIMESTAMP_KEY))
}
