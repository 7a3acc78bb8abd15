//! Dashboard overview stats.
//!
//! Each stat is an independent scoped fetch; a failing sub-fetch degrades
//! that stat to zero instead of failing the whole dashboard.

use crate::client::{Direction, DocumentStore};
use crate::models::{Donation, Entity, Event, Formation, Project, User};
use crate::repositories::donation_repo::DonationRepo;
use crate::repositories::managed::Managed;

pub struct DashboardRepo;

/// Overview counters shown on the console landing page.
#[derive(Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub membres: u64,
    pub projets: u64,
    pub evenements: u64,
    pub formations: u64,
    pub donations: u64,
    pub montant_collecte: f64,
}

impl DashboardRepo {
    /// Collect the overview stats, degrading failed fetches to zero.
    pub async fn overview(store: &dyn DocumentStore) -> DashboardStats {
        let donations = match Managed::<Donation>::list(store, None).await {
            Ok(donations) => donations,
            Err(err) => {
                tracing::warn!(error = %err, "Donation stats fetch failed, using defaults");
                Vec::new()
            }
        };
        let donation_stats = DonationRepo::stats(&donations);

        DashboardStats {
            membres: Self::count(store, User::COLLECTION).await,
            projets: Self::count(store, Project::COLLECTION).await,
            evenements: Self::count(store, Event::COLLECTION).await,
            formations: Self::count(store, Formation::COLLECTION).await,
            donations: donation_stats.nombre,
            montant_collecte: donation_stats.montant_total,
        }
    }

    /// Size of a collection, `0` on fetch failure.
    async fn count(store: &dyn DocumentStore, collection: &str) -> u64 {
        match store
            .fetch_collection(collection, "createdAt", Direction::Desc, None)
            .await
        {
            Ok(docs) => docs.len() as u64,
            Err(err) => {
                tracing::warn!(collection, error = %err, "Count fetch failed, using 0");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use radc_core::normalize::RawDocument;
    use serde_json::json;

    #[tokio::test]
    async fn overview_counts_collections_and_sums_donations() {
        let store = MemoryStore::new();
        store.insert_with_id("utilisateurs", "u1", RawDocument::new()).await;
        store.insert_with_id("utilisateurs", "u2", RawDocument::new()).await;
        store.insert_with_id("projets", "p1", RawDocument::new()).await;
        store
            .insert_with_id(
                "donations",
                "d1",
                json!({ "montant": 40.0 }).as_object().unwrap().clone(),
            )
            .await;

        let stats = DashboardRepo::overview(&store).await;
        assert_eq!(stats.membres, 2);
        assert_eq!(stats.projets, 1);
        assert_eq!(stats.evenements, 0);
        assert_eq!(stats.donations, 1);
        assert_eq!(stats.montant_collecte, 40.0);
    }

    #[tokio::test]
    async fn overview_on_empty_store_is_all_zero() {
        let store = MemoryStore::new();
        assert_eq!(DashboardRepo::overview(&store).await, DashboardStats::default());
    }
}
