use std::sync::Arc;

use radc_store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store client
/// is injected as a trait object so tests can substitute the in-memory
/// implementation.
#[derive(Clone)]
pub struct AppState {
    /// Document store client.
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Borrow the store client as the facade trait.
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
