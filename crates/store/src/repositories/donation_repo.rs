//! Repository for the `donations` collection.
//!
//! Donation rows are denormalized for display: the donor's name and the
//! project's title are looked up per record. The lookups for different
//! donations run concurrently and may complete in any order; each donation
//! only ever receives its own resolved labels, so the merge is
//! deterministic regardless of completion order.

use futures::future::join_all;
use serde_json::json;

use crate::client::{DocumentStore, WhereOp};
use crate::error::StoreError;
use crate::models::{Donation, Entity, Project, User};
use crate::repositories::managed::Managed;

pub struct DonationRepo;

/// Aggregates for the donations screen header, one linear pass.
#[derive(Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationStats {
    pub nombre: u64,
    pub montant_total: f64,
    pub montant_confirme: f64,
    pub en_attente: u64,
}

impl DonationRepo {
    /// List donations newest-first with donor and project labels resolved.
    pub async fn list_enriched(
        store: &dyn DocumentStore,
        limit: Option<usize>,
    ) -> Result<Vec<Donation>, StoreError> {
        let donations = Managed::<Donation>::list(store, limit).await?;
        let enriched = join_all(
            donations
                .into_iter()
                .map(|donation| Self::enrich(store, donation)),
        )
        .await;
        Ok(enriched)
    }

    /// Resolve the donor and project labels of one donation.
    ///
    /// A dangling or failing reference degrades to the empty label; it
    /// never fails the donation itself.
    async fn enrich(store: &dyn DocumentStore, mut donation: Donation) -> Donation {
        if donation.donateur_nom.is_empty() && !donation.donateur_id.is_empty() {
            match store.fetch_document(User::COLLECTION, &donation.donateur_id).await {
                Ok(Some(doc)) => {
                    donation.donateur_nom = User::normalize(&doc.id, &doc.fields).display_name();
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(donation_id = %donation.id, error = %err, "Donor lookup failed");
                }
            }
        }

        if donation.projet_titre.is_empty() && !donation.projet_id.is_empty() {
            match store.fetch_document(Project::COLLECTION, &donation.projet_id).await {
                Ok(Some(doc)) => {
                    donation.projet_titre = Project::normalize(&doc.id, &doc.fields).titre;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(donation_id = %donation.id, error = %err, "Project lookup failed");
                }
            }
        }

        donation
    }

    /// Donations attached to one project, newest first.
    ///
    /// Serves the project detail screen; labels stay as stored since the
    /// project is already known there.
    pub async fn for_project(
        store: &dyn DocumentStore,
        projet_id: &str,
    ) -> Result<Vec<Donation>, StoreError> {
        let docs = store
            .fetch_where(Donation::COLLECTION, "projetId", WhereOp::Eq, json!(projet_id))
            .await?;
        let mut donations: Vec<Donation> = docs
            .iter()
            .map(|doc| Donation::normalize(&doc.id, &doc.fields))
            .collect();
        donations.sort_by(|a, b| b.date_don.cmp(&a.date_don));
        Ok(donations)
    }

    /// Fold a donation list into its screen-header stats.
    pub fn stats(donations: &[Donation]) -> DonationStats {
        donations.iter().fold(DonationStats::default(), |mut acc, d| {
            acc.nombre += 1;
            acc.montant_total += d.montant;
            match d.statut.as_str() {
                "confirme" => acc.montant_confirme += d.montant,
                "en_attente" => acc.en_attente += 1,
                _ => {}
            }
            acc
        })
    }
}
