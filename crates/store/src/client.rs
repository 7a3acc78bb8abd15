//! The document-store facade trait.
//!
//! The hosted database client is not reimplemented here; this trait is the
//! seam the backend consumes it through. Handlers and repositories receive
//! a `&dyn DocumentStore` so tests can substitute the in-memory
//! implementation ([`crate::MemoryStore`]).

use async_trait::async_trait;
use radc_core::normalize::RawDocument;
use serde_json::Value;

use crate::document::Document;
use crate::error::StoreError;

/// Sort direction for [`DocumentStore::fetch_collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Comparison operators supported by [`DocumentStore::fetch_where`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhereOp {
    /// `==`
    Eq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

/// Scoped, ordered, limited reads and document writes against the store.
///
/// Server timestamps are requested by writing the
/// [`crate::document::server_timestamp`] sentinel as a field value; the
/// implementation resolves it at write time.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a collection ordered by a field, optionally capped.
    async fn fetch_collection(
        &self,
        name: &str,
        order_by: &str,
        direction: Direction,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Fetch a single document by id, `None` if absent.
    async fn fetch_document(&self, name: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Fetch the documents of a collection matching a field comparison.
    ///
    /// Used for scoped counts and joins ("donations for this user").
    async fn fetch_where(
        &self,
        name: &str,
        field: &str,
        op: WhereOp,
        value: Value,
    ) -> Result<Vec<Document>, StoreError>;

    /// Create a document, returning the store-assigned id.
    async fn create_document(&self, name: &str, fields: RawDocument)
        -> Result<String, StoreError>;

    /// Merge partial fields into an existing document.
    async fn update_document(
        &self,
        name: &str,
        id: &str,
        fields: RawDocument,
    ) -> Result<(), StoreError>;

    /// Irreversibly delete a document. No cascade.
    async fn delete_document(&self, name: &str, id: &str) -> Result<(), StoreError>;
}
