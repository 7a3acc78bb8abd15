//! Pure domain logic for the RADC platform backend.
//!
//! This crate has no internal dependencies so it can be used by the store
//! layer, the API layer, and any future CLI tooling. It owns the two
//! contracts every management list is built on: raw-document normalization
//! and in-memory filtering/search.

pub mod error;
pub mod filter;
pub mod limits;
pub mod normalize;
pub mod tags;
pub mod types;
