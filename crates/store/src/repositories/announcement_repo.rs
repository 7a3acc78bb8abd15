//! Repository for the `annonces` collection.
//!
//! Announcements carry a publish milestone (`datePublication`). The edit
//! DTO requests an implicit stamp whenever the payload publishes, but the
//! milestone must only be set once; this repository is where the stored
//! record is consulted before the stamp is applied.

use radc_core::normalize;

use crate::client::DocumentStore;
use crate::document::is_server_timestamp;
use crate::error::StoreError;
use crate::models::announcement::UpdateAnnouncement;
use crate::models::{Announcement, Entity};
use crate::repositories::managed::Managed;

pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Merge an edit, stamping `datePublication` only on the first
    /// transition to published.
    ///
    /// An explicit date in the payload always wins. The implicit
    /// publish-time stamp is dropped when the stored record already
    /// carries a milestone, so re-saving a published announcement never
    /// moves its publish date.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        edit: UpdateAnnouncement,
    ) -> Result<(), StoreError> {
        let mut fields = edit.into_fields();

        let implicit_stamp = fields
            .get("datePublication")
            .is_some_and(is_server_timestamp);
        if implicit_stamp {
            let already_published = store
                .fetch_document(Announcement::COLLECTION, id)
                .await?
                .and_then(|doc| {
                    doc.fields
                        .get("datePublication")
                        .and_then(normalize::decode_timestamp)
                })
                .is_some();
            if already_published {
                fields.remove("datePublication");
            }
        }

        Managed::<Announcement>::update(store, id, fields).await
    }
}
