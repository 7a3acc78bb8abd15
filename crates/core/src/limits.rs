//! List size limits and clamping helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the store/repository layer and the API handlers.

/// Default page size for management list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum page size for management list endpoints.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Default number of entries shown on the public community pages.
pub const DEFAULT_COMMUNITY_LIMIT: i64 = 10;

/// Default number of entries served by the log viewer poll.
pub const DEFAULT_LOG_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}
