use std::sync::Arc;

use archive_store::StreamStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Read-only client for the remote stream table.
    pub store: StreamStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
