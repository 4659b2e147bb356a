//! Competitor analysis model and DTOs.

use formaflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A competitor row from the `competitors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Competitor {
    pub id: DbId,
    pub instagram_account_id: DbId,
    pub competitor_username: String,
    pub insights: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a competitor analysis (keyed by account + username).
#[derive(Debug, Clone, Deserialize)]
pub struct SaveCompetitor {
    pub competitor_username: String,
    pub insights: Option<serde_json::Value>,
}
