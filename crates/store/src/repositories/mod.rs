//! Repository layer.
//!
//! [`Managed`] provides the generic fetch/normalize/write cycle every
//! management list shares; the named repositories add the logic that is
//! specific to one collection (enrichment, public-page scoping, singleton
//! settings, stats).

pub mod announcement_repo;
pub mod community_repo;
pub mod dashboard_repo;
pub mod donation_repo;
pub mod log_repo;
pub mod managed;
pub mod organization_repo;

pub use announcement_repo::AnnouncementRepo;
pub use community_repo::CommunityRepo;
pub use dashboard_repo::{DashboardRepo, DashboardStats};
pub use donation_repo::{DonationRepo, DonationStats};
pub use log_repo::LogRepo;
pub use managed::Managed;
pub use organization_repo::OrganizationRepo;
