//! Studio entity model and DTOs.

use formaflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A studio row from the `studios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Studio {
    pub id: DbId,
    pub name: String,
    pub website: Option<String>,
    pub style: String,
    pub logo_url: Option<String>,
    pub demo_pin: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a studio (insert-or-update keyed by name + PIN).
///
/// Empty or absent optional fields preserve the stored values on update.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveStudio {
    pub name: String,
    pub website: Option<String>,
    /// Defaults to `minimalist` if empty on first save.
    pub style: Option<String>,
    pub logo_url: Option<String>,
}
