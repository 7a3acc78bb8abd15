//! Repository for the `organisation` singleton settings document.

use crate::client::{Direction, DocumentStore};
use crate::document::server_timestamp;
use crate::error::StoreError;
use crate::models::organization::UpdateOrganization;
use crate::models::{Entity, Organization};

pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Fetch the settings document, fully defaulted when none exists yet.
    ///
    /// The collection holds at most one document; the first by creation
    /// date is authoritative.
    pub async fn get(store: &dyn DocumentStore) -> Result<Organization, StoreError> {
        let docs = store
            .fetch_collection(Organization::COLLECTION, "createdAt", Direction::Asc, Some(1))
            .await?;
        Ok(match docs.first() {
            Some(doc) => Organization::normalize(&doc.id, &doc.fields),
            None => Organization::normalize("", &radc_core::normalize::RawDocument::new()),
        })
    }

    /// Save the settings, creating the document on first save.
    pub async fn save(
        store: &dyn DocumentStore,
        update: UpdateOrganization,
    ) -> Result<Organization, StoreError> {
        let existing = store
            .fetch_collection(Organization::COLLECTION, "createdAt", Direction::Asc, Some(1))
            .await?;

        let mut fields = update.into_fields();
        fields.insert("updatedAt".into(), server_timestamp());

        match existing.first() {
            Some(doc) => {
                store
                    .update_document(Organization::COLLECTION, &doc.id, fields)
                    .await?;
            }
            None => {
                fields.insert("createdAt".into(), server_timestamp());
                store.create_document(Organization::COLLECTION, fields).await?;
            }
        }

        Self::get(store).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn get_without_document_returns_complete_defaults() {
        let store = MemoryStore::new();
        let org = OrganizationRepo::get(&store).await.unwrap();
        assert_eq!(org.nom, "");
        assert_eq!(org.contact.email, "");
        assert_eq!(org.social.site_web, "");
    }

    #[tokio::test]
    async fn first_save_creates_then_updates_in_place() {
        let store = MemoryStore::new();

        let update: UpdateOrganization = serde_json::from_value(json!({
            "nom": "RADC",
            "contact": { "email": "info@radc.org" },
        }))
        .unwrap();
        let first = OrganizationRepo::save(&store, update).await.unwrap();
        assert_eq!(first.nom, "RADC");
        assert_eq!(first.contact.email, "info@radc.org");

        let update: UpdateOrganization = serde_json::from_value(json!({
            "nom": "RADC Communaute",
        }))
        .unwrap();
        let second = OrganizationRepo::save(&store, update).await.unwrap();
        assert_eq!(second.id, first.id, "save must stay a singleton");
        assert_eq!(second.nom, "RADC Communaute");
    }
}
