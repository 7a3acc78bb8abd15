//! Repository for the `systemLogs` collection.
//!
//! Feeds the auto-refreshing log viewer: the client polls on a fixed
//! interval and passes the newest timestamp it has seen as `since`.

use radc_core::types::Timestamp;

use crate::client::DocumentStore;
use crate::error::StoreError;
use crate::models::SystemLog;
use crate::repositories::managed::Managed;

pub struct LogRepo;

impl LogRepo {
    /// Recent log entries, newest first, optionally bounded below.
    pub async fn recent(
        store: &dyn DocumentStore,
        limit: usize,
        since: Option<Timestamp>,
    ) -> Result<Vec<SystemLog>, StoreError> {
        let mut logs = Managed::<SystemLog>::list(store, Some(limit)).await?;
        if let Some(since) = since {
            logs.retain(|log| log.created_at > since);
        }
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::{TimeZone, Utc};
    use radc_core::normalize::RawDocument;
    use serde_json::{json, Value};

    fn fields(value: Value) -> RawDocument {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn recent_is_newest_first_and_respects_since() {
        let store = MemoryStore::new();
        for (id, ts) in [
            ("vieux", "2024-01-01T00:00:00+00:00"),
            ("moyen", "2024-02-01T00:00:00+00:00"),
            ("neuf", "2024-03-01T00:00:00+00:00"),
        ] {
            store
                .insert_with_id(
                    "systemLogs",
                    id,
                    fields(json!({ "niveau": "info", "createdAt": ts })),
                )
                .await;
        }

        let all = LogRepo::recent(&store, 100, None).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["neuf", "moyen", "vieux"]);

        let since = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let newer = LogRepo::recent(&store, 100, Some(since)).await.unwrap();
        let ids: Vec<&str> = newer.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["neuf", "moyen"]);
    }
}
