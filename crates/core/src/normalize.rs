//! Raw-document normalization primitives.
//!
//! Documents come back from the store as loose JSON maps: fields may be
//! missing, mistyped, or carry a server-timestamp handle instead of a date.
//! Every accessor here is total -- it returns the field's zero value rather
//! than erroring, so rendering a list can never fail because one document is
//! malformed. Entity models build their `normalize` constructors out of
//! these primitives.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::types::Timestamp;

/// A raw key-value document as returned by the store.
pub type RawDocument = Map<String, Value>;

/// Read a string field, defaulting to the empty string.
pub fn str_field(raw: &RawDocument, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Read a non-negative integer counter, defaulting to `0`.
///
/// Counters are only ever incremented by explicit actions, so a negative or
/// non-numeric stored value is treated as corrupt and degrades to `0`.
pub fn count_field(raw: &RawDocument, key: &str) -> u64 {
    match raw.get(key) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

/// Read a currency/amount field, defaulting to `0.0`.
pub fn amount_field(raw: &RawDocument, key: &str) -> f64 {
    match raw.get(key).and_then(Value::as_f64) {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Read a boolean field, defaulting to `false`.
pub fn bool_field(raw: &RawDocument, key: &str) -> bool {
    matches!(raw.get(key), Some(Value::Bool(true)))
}

/// Read a list of strings, defaulting to the empty list.
///
/// Arrays pass through with non-string elements skipped; any other stored
/// shape defaults to `[]`.
pub fn list_field(raw: &RawDocument, key: &str) -> Vec<String> {
    match raw.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Read a required timestamp, defaulting to the current time.
///
/// Used for `createdAt`/`updatedAt`: a missing or unreadable value must
/// never surface as an absent date in the view layer.
pub fn timestamp_field(raw: &RawDocument, key: &str) -> Timestamp {
    raw.get(key).and_then(decode_timestamp).unwrap_or_else(Utc::now)
}

/// Read an optional milestone timestamp (`publishedAt`, `dateEnvoi`, ...).
///
/// Unlike [`timestamp_field`], absence is meaningful and stays `None`.
pub fn opt_timestamp_field(raw: &RawDocument, key: &str) -> Option<Timestamp> {
    raw.get(key).and_then(decode_timestamp)
}

/// Read a nested object field, defaulting to the empty map.
///
/// Lets models default nested optional objects (contact, social, legal)
/// leaf by leaf so form state always receives complete objects.
pub fn nested_field(raw: &RawDocument, key: &str) -> RawDocument {
    match raw.get(key) {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

/// Decode a stored timestamp value.
///
/// Accepts the three shapes the store hands back:
/// - an RFC 3339 string,
/// - an integer epoch-milliseconds value,
/// - a `{seconds, nanoseconds}` server-timestamp handle.
pub fn decode_timestamp(value: &Value) -> Option<Timestamp> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Value::Object(map) => {
            let seconds = map.get("seconds").and_then(Value::as_i64)?;
            let nanos = map.get("nanoseconds").and_then(Value::as_i64).unwrap_or(0);
            u32::try_from(nanos)
                .ok()
                .and_then(|nanos| Utc.timestamp_opt(seconds, nanos).single())
        }
        _ => None,
    }
}

/// Encode a timestamp for writing back to the store.
pub fn encode_timestamp(ts: Timestamp) -> Value {
    Value::String(ts.to_rfc3339())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawDocument {
        value.as_object().expect("test fixture must be an object").clone()
    }

    // -- string / counter / amount defaults ----------------------------------

    #[test]
    fn str_field_defaults_to_empty() {
        let doc = raw(json!({ "titre": "Bonjour" }));
        assert_eq!(str_field(&doc, "titre"), "Bonjour");
        assert_eq!(str_field(&doc, "description"), "");
    }

    #[test]
    fn str_field_ignores_non_string_values() {
        let doc = raw(json!({ "titre": 42 }));
        assert_eq!(str_field(&doc, "titre"), "");
    }

    #[test]
    fn count_field_defaults_to_zero() {
        let doc = raw(json!({ "vues": 12 }));
        assert_eq!(count_field(&doc, "vues"), 12);
        assert_eq!(count_field(&doc, "likes"), 0);
    }

    #[test]
    fn count_field_degrades_negative_to_zero() {
        let doc = raw(json!({ "vues": -3 }));
        assert_eq!(count_field(&doc, "vues"), 0);
    }

    #[test]
    fn amount_field_defaults_to_zero() {
        let doc = raw(json!({ "montant": 25.5 }));
        assert_eq!(amount_field(&doc, "montant"), 25.5);
        assert_eq!(amount_field(&doc, "objectif"), 0.0);
    }

    // -- lists ---------------------------------------------------------------

    #[test]
    fn list_field_passes_arrays_through() {
        let doc = raw(json!({ "tags": ["code", "dev"] }));
        assert_eq!(list_field(&doc, "tags"), vec!["code", "dev"]);
    }

    #[test]
    fn list_field_defaults_to_empty_and_skips_non_strings() {
        let doc = raw(json!({ "tags": ["ok", 3, null, "aussi"] }));
        assert_eq!(list_field(&doc, "tags"), vec!["ok", "aussi"]);
        assert_eq!(list_field(&doc, "absent"), Vec::<String>::new());
    }

    // -- timestamps ----------------------------------------------------------

    #[test]
    fn timestamp_field_decodes_rfc3339() {
        let doc = raw(json!({ "createdAt": "2024-02-10T08:30:00Z" }));
        let ts = timestamp_field(&doc, "createdAt");
        assert_eq!(ts.to_rfc3339(), "2024-02-10T08:30:00+00:00");
    }

    #[test]
    fn timestamp_field_decodes_epoch_millis() {
        let doc = raw(json!({ "createdAt": 1_707_553_800_000_i64 }));
        let ts = timestamp_field(&doc, "createdAt");
        assert_eq!(ts, Utc.timestamp_millis_opt(1_707_553_800_000).unwrap());
    }

    #[test]
    fn timestamp_field_decodes_server_handle() {
        let doc = raw(json!({ "createdAt": { "seconds": 1_707_553_800, "nanoseconds": 0 } }));
        let ts = timestamp_field(&doc, "createdAt");
        assert_eq!(ts, Utc.timestamp_opt(1_707_553_800, 0).unwrap());
    }

    #[test]
    fn timestamp_field_substitutes_now_when_missing() {
        let doc = raw(json!({}));
        let before = Utc::now();
        let ts = timestamp_field(&doc, "createdAt");
        let after = Utc::now();
        assert!(ts >= before && ts <= after);
    }

    #[test]
    fn opt_timestamp_field_preserves_absence() {
        let doc = raw(json!({ "datePublication": "2024-01-05T00:00:00Z" }));
        assert!(opt_timestamp_field(&doc, "datePublication").is_some());
        assert!(opt_timestamp_field(&doc, "expireLe").is_none());
    }

    #[test]
    fn opt_timestamp_field_treats_garbage_as_absent() {
        let doc = raw(json!({ "dateEnvoi": "pas-une-date" }));
        assert!(opt_timestamp_field(&doc, "dateEnvoi").is_none());
    }

    // -- nested objects ------------------------------------------------------

    #[test]
    fn nested_field_defaults_to_empty_map() {
        let doc = raw(json!({ "contact": { "email": "info@radc.org" } }));
        assert_eq!(str_field(&nested_field(&doc, "contact"), "email"), "info@radc.org");
        assert_eq!(str_field(&nested_field(&doc, "contact"), "telephone"), "");
        assert!(nested_field(&doc, "social").is_empty());
    }

    // -- round-trip ----------------------------------------------------------

    #[test]
    fn encode_then_decode_is_identity() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(decode_timestamp(&encode_timestamp(ts)), Some(ts));
    }
}
