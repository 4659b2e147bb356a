//! Content strategy model and DTOs.

use formaflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A strategy row from the `content_strategies` table.
///
/// The calendar/captions/formats/themes blobs are stored exactly as the
/// ai-strategy function produced them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentStrategy {
    pub id: DbId,
    pub project_id: DbId,
    pub instagram_account_id: Option<DbId>,
    pub calendar: Option<serde_json::Value>,
    pub captions: Option<serde_json::Value>,
    pub formats: Option<serde_json::Value>,
    pub themes: Option<serde_json::Value>,
    pub demo_pin: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a strategy (keyed by project + PIN). A re-generated
/// strategy replaces whichever blobs it carries.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveContentStrategy {
    pub project_id: DbId,
    pub instagram_account_id: Option<DbId>,
    pub calendar: Option<serde_json::Value>,
    pub captions: Option<serde_json::Value>,
    pub formats: Option<serde_json::Value>,
    pub themes: Option<serde_json::Value>,
}
