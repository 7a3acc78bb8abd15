//! HTTP request handlers.
//!
//! The managed collections share the generic handlers in [`crud`]; the
//! remaining modules cover the screens with bespoke read paths.

pub mod announcements;
pub mod community;
pub mod crud;
pub mod dashboard;
pub mod donations;
pub mod logs;
pub mod organization;
