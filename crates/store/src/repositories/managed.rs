//! Generic managed-collection repository.
//!
//! Every management screen follows the same cycle: fetch a capped, ordered
//! collection, normalize each raw document, write documents back. This is
//! that cycle implemented once, parameterized by the entity type; the
//! per-screen differences (search targets, category fields) live on the
//! entity's `Filterable` implementation instead of being copy-pasted.

use std::marker::PhantomData;

use radc_core::normalize::RawDocument;

use crate::client::DocumentStore;
use crate::document::server_timestamp;
use crate::error::StoreError;
use crate::models::Entity;

pub struct Managed<T>(PhantomData<T>);

impl<T: Entity> Managed<T> {
    /// List the collection in its default server-side order, normalized.
    pub async fn list(
        store: &dyn DocumentStore,
        limit: Option<usize>,
    ) -> Result<Vec<T>, StoreError> {
        let docs = store
            .fetch_collection(T::COLLECTION, T::ORDER_FIELD, T::ORDER_DIRECTION, limit)
            .await?;
        Ok(docs
            .iter()
            .map(|doc| T::normalize(&doc.id, &doc.fields))
            .collect())
    }

    /// Fetch and normalize a single document, `None` if absent.
    pub async fn get(store: &dyn DocumentStore, id: &str) -> Result<Option<T>, StoreError> {
        let doc = store.fetch_document(T::COLLECTION, id).await?;
        Ok(doc.map(|doc| T::normalize(&doc.id, &doc.fields)))
    }

    /// Create a document, stamping `createdAt`/`updatedAt` server-side.
    ///
    /// Counters are zeroed by the entity's create DTO before the fields
    /// reach this point.
    pub async fn create(
        store: &dyn DocumentStore,
        mut fields: RawDocument,
    ) -> Result<String, StoreError> {
        fields.insert("createdAt".into(), server_timestamp());
        fields.insert("updatedAt".into(), server_timestamp());
        store.create_document(T::COLLECTION, fields).await
    }

    /// Merge partial fields into a document, refreshing `updatedAt`.
    ///
    /// The identity never changes; counters move only when the edit
    /// explicitly includes them.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        mut fields: RawDocument,
    ) -> Result<(), StoreError> {
        fields.remove("id");
        fields.remove("createdAt");
        fields.insert("updatedAt".into(), server_timestamp());
        store.update_document(T::COLLECTION, id, fields).await
    }

    /// Irreversibly delete a document. Confirmation is enforced upstream.
    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        store.delete_document(T::COLLECTION, id).await
    }
}
