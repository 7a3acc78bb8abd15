//! Service facade for the public community pages.
//!
//! Each function returns a normalized, time-ordered, capped list ready for
//! rendering. Only published/open content is ever exposed here.

use chrono::Utc;

use crate::client::{Direction, DocumentStore};
use crate::error::StoreError;
use crate::models::{Announcement, Entity, Event, VolunteerOpportunity};

pub struct CommunityRepo;

impl CommunityRepo {
    /// Published events starting today or later, soonest first.
    pub async fn evenements_a_venir(
        store: &dyn DocumentStore,
        cap: usize,
    ) -> Result<Vec<Event>, StoreError> {
        let docs = store
            .fetch_collection(Event::COLLECTION, "dateDebut", Direction::Asc, None)
            .await?;
        let now = Utc::now();
        let mut events: Vec<Event> = docs
            .iter()
            .map(|doc| Event::normalize(&doc.id, &doc.fields))
            .filter(|event| event.statut == "publie" && event.date_debut >= now)
            .collect();
        events.truncate(cap);
        Ok(events)
    }

    /// Open volunteering opportunities, newest first.
    pub async fn opportunites_disponibles(
        store: &dyn DocumentStore,
        cap: usize,
    ) -> Result<Vec<VolunteerOpportunity>, StoreError> {
        let docs = store
            .fetch_collection(
                VolunteerOpportunity::COLLECTION,
                "createdAt",
                Direction::Desc,
                None,
            )
            .await?;
        let now = Utc::now();
        let mut opportunities: Vec<VolunteerOpportunity> = docs
            .iter()
            .map(|doc| VolunteerOpportunity::normalize(&doc.id, &doc.fields))
            .filter(|opp| {
                opp.statut == "ouverte" && opp.date_limite.is_none_or(|limite| limite >= now)
            })
            .collect();
        opportunities.truncate(cap);
        Ok(opportunities)
    }

    /// Published, unexpired announcements, most recent first.
    pub async fn annonces_publiees(
        store: &dyn DocumentStore,
        cap: usize,
    ) -> Result<Vec<Announcement>, StoreError> {
        let docs = store
            .fetch_collection(Announcement::COLLECTION, "datePublication", Direction::Desc, None)
            .await?;
        let now = Utc::now();
        let mut announcements: Vec<Announcement> = docs
            .iter()
            .map(|doc| Announcement::normalize(&doc.id, &doc.fields))
            .filter(|annonce| {
                annonce.statut == "publie" && annonce.expire_le.is_none_or(|expire| expire >= now)
            })
            .collect();
        announcements.truncate(cap);
        Ok(announcements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::Duration;
    use radc_core::normalize::RawDocument;
    use serde_json::{json, Value};

    fn fields(value: Value) -> RawDocument {
        value.as_object().unwrap().clone()
    }

    fn days_from_now(days: i64) -> String {
        (Utc::now() + Duration::days(days)).to_rfc3339()
    }

    #[tokio::test]
    async fn upcoming_events_are_published_future_and_soonest_first() {
        let store = MemoryStore::new();
        store
            .insert_with_id(
                "evenements",
                "passe",
                fields(json!({ "statut": "publie", "dateDebut": days_from_now(-1) })),
            )
            .await;
        store
            .insert_with_id(
                "evenements",
                "brouillon",
                fields(json!({ "statut": "brouillon", "dateDebut": days_from_now(3) })),
            )
            .await;
        store
            .insert_with_id(
                "evenements",
                "proche",
                fields(json!({ "statut": "publie", "dateDebut": days_from_now(2) })),
            )
            .await;
        store
            .insert_with_id(
                "evenements",
                "lointain",
                fields(json!({ "statut": "publie", "dateDebut": days_from_now(10) })),
            )
            .await;

        let events = CommunityRepo::evenements_a_venir(&store, 10).await.unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["proche", "lointain"]);
    }

    #[tokio::test]
    async fn open_opportunities_exclude_expired_deadlines() {
        let store = MemoryStore::new();
        store
            .insert_with_id(
                "opportunitesBenevolat",
                "ouverte",
                fields(json!({ "statut": "ouverte", "titre": "Distribution" })),
            )
            .await;
        store
            .insert_with_id(
                "opportunitesBenevolat",
                "expiree",
                fields(json!({ "statut": "ouverte", "dateLimite": days_from_now(-2) })),
            )
            .await;
        store
            .insert_with_id(
                "opportunitesBenevolat",
                "pourvue",
                fields(json!({ "statut": "pourvue" })),
            )
            .await;

        let opportunities = CommunityRepo::opportunites_disponibles(&store, 10).await.unwrap();
        assert_eq!(opportunities.len(), 1);
        assert_eq!(opportunities[0].id, "ouverte");
    }

    #[tokio::test]
    async fn published_announcements_are_capped_and_recent_first() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store
                .insert_with_id(
                    "annonces",
                    &format!("a{i}"),
                    fields(json!({
                        "statut": "publie",
                        "datePublication": days_from_now(-i),
                    })),
                )
                .await;
        }
        store
            .insert_with_id("annonces", "brouillon", fields(json!({ "statut": "brouillon" })))
            .await;

        let announcements = CommunityRepo::annonces_publiees(&store, 3).await.unwrap();
        let ids: Vec<&str> = announcements.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a0", "a1", "a2"]);
    }
}
