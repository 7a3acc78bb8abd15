//! Typed entity models.
//!
//! Each model is the normalized, fully-defaulted view of one store
//! collection: every required field present, timestamps decoded to UTC
//! dates, counters zeroed when absent. The `normalize` constructors are
//! total -- a malformed document degrades to placeholder content instead of
//! failing the list.

use radc_core::normalize::RawDocument;

use crate::client::Direction;

pub mod announcement;
pub mod article;
pub mod department;
pub mod donation;
pub mod event;
pub mod formation;
pub mod forum;
pub mod media;
pub mod newsletter;
pub mod notification;
pub mod opportunity;
pub mod organization;
pub mod project;
pub mod report;
pub mod system_log;
pub mod team_member;
pub mod user;

pub use announcement::Announcement;
pub use article::Article;
pub use department::Department;
pub use donation::Donation;
pub use event::Event;
pub use formation::Formation;
pub use forum::{ForumCategory, ForumPost};
pub use media::MediaFile;
pub use newsletter::Newsletter;
pub use notification::Notification;
pub use opportunity::VolunteerOpportunity;
pub use organization::Organization;
pub use project::Project;
pub use report::Report;
pub use system_log::SystemLog;
pub use team_member::TeamMember;
pub use user::User;

/// A store-backed entity: collection name, default server-side ordering,
/// and the total raw-to-typed conversion.
pub trait Entity: Sized + Send + 'static {
    /// Store collection the entity lives in.
    const COLLECTION: &'static str;

    /// Entity label used in error messages.
    const ENTITY_NAME: &'static str;

    /// Field the collection is ordered by when listed.
    const ORDER_FIELD: &'static str = "createdAt";

    /// Direction of the default ordering.
    const ORDER_DIRECTION: Direction = Direction::Desc;

    /// Convert a raw document into the fully-defaulted typed record.
    ///
    /// Never fails; missing or mistyped fields take their zero values.
    fn normalize(id: &str, raw: &RawDocument) -> Self;
}
