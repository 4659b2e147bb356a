use std::sync::Arc;

use formaflow_instagram::InstagramClient;
use formaflow_storage::ObjectStore;

use crate::config::ServerConfig;
use crate::sessions::SessionRegistry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: formaflow_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Local object store backing the demo's upload buckets.
    pub store: Arc<ObjectStore>,
    /// Social-graph client (live Graph API or canned demo data).
    pub instagram: Arc<InstagramClient>,
    /// In-memory demo session registry (PIN -> wizard step).
    pub sessions: Arc<SessionRegistry>,
}
