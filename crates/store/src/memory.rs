//! In-memory [`DocumentStore`] implementation.
//!
//! Backs the integration tests and local development. Documents live in
//! per-collection vectors behind an async `RwLock`; ids are random UUIDs;
//! the server-time sentinel is resolved to the current UTC time at write
//! time, stored as an RFC 3339 string.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use radc_core::normalize::RawDocument;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::client::{Direction, DocumentStore, WhereOp};
use crate::document::{is_server_timestamp, Document};
use crate::error::StoreError;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document with a caller-chosen id.
    ///
    /// Test seam: lets fixtures control ids and timestamps instead of going
    /// through `create_document`. Sentinels are still resolved.
    pub async fn insert_with_id(&self, name: &str, id: &str, mut fields: RawDocument) {
        resolve_sentinels(&mut fields);
        let mut collections = self.collections.write().await;
        collections
            .entry(name.to_string())
            .or_default()
            .push(Document::new(id, fields));
    }
}

/// Replace every server-time sentinel with the current UTC time.
fn resolve_sentinels(fields: &mut RawDocument) {
    let now = Value::String(Utc::now().to_rfc3339());
    for value in fields.values_mut() {
        if is_server_timestamp(value) {
            *value = now.clone();
        }
    }
}

/// Total order over stored field values, for `order_by` and range queries.
///
/// Null/missing sorts lowest, then booleans, numbers, and strings.
/// RFC 3339 timestamp strings order correctly under lexicographic
/// comparison, which is what collection ordering relies on.
fn cmp_values(a: Option<&Value>, b: Option<&Value>) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn fetch_collection(
        &self,
        name: &str,
        order_by: &str,
        direction: Direction,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let mut docs = collections.get(name).cloned().unwrap_or_default();

        docs.sort_by(|a, b| {
            let ordering = cmp_values(a.fields.get(order_by), b.fields.get(order_by));
            match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        });

        if let Some(limit) = limit {
            docs.truncate(limit);
        }
        Ok(docs)
    }

    async fn fetch_document(&self, name: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(name)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn fetch_where(
        &self,
        name: &str,
        field: &str,
        op: WhereOp,
        value: Value,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let docs = collections
            .get(name)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| {
                        let ordering = cmp_values(doc.fields.get(field), Some(&value));
                        match op {
                            WhereOp::Eq => doc.fields.get(field) == Some(&value),
                            WhereOp::Ge => ordering != std::cmp::Ordering::Less,
                            WhereOp::Le => ordering != std::cmp::Ordering::Greater,
                        }
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn create_document(
        &self,
        name: &str,
        mut fields: RawDocument,
    ) -> Result<String, StoreError> {
        resolve_sentinels(&mut fields);
        let id = Uuid::new_v4().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(name.to_string())
            .or_default()
            .push(Document::new(id.clone(), fields));
        Ok(id)
    }

    async fn update_document(
        &self,
        name: &str,
        id: &str,
        mut fields: RawDocument,
    ) -> Result<(), StoreError> {
        resolve_sentinels(&mut fields);
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(name)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| StoreError::not_found(name, id))?;
        // Partial merge: only the provided fields change (last write wins).
        for (key, value) in fields {
            doc.fields.insert(key, value);
        }
        Ok(())
    }

    async fn delete_document(&self, name: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections
            .get_mut(name)
            .ok_or_else(|| StoreError::not_found(name, id))?;
        let before = docs.len();
        docs.retain(|d| d.id != id);
        if docs.len() == before {
            return Err(StoreError::not_found(name, id));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
