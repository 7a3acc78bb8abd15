//! Document-store boundary for the RADC platform backend.
//!
//! The hosted document database is an external collaborator; this crate
//! owns the facade trait the rest of the backend talks through
//! ([`client::DocumentStore`]), an in-memory implementation for tests and
//! local development, the typed entity models with their `normalize`
//! constructors, and the repository layer built on top.

pub mod client;
pub mod document;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;

pub use client::{Direction, DocumentStore, WhereOp};
pub use document::{server_timestamp, Document};
pub use error::StoreError;
pub use memory::MemoryStore;
