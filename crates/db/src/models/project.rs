//! Project entity model and DTOs.

use formaflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub studio_id: DbId,
    pub name: String,
    pub location: Option<String>,
    pub client: Option<String>,
    pub concept: Option<String>,
    pub stage: String,
    pub materials: Option<String>,
    pub project_type: String,
    pub demo_pin: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a project (insert-or-update keyed by studio + name + PIN).
///
/// `stage` always overwrites; the other optional fields preserve stored
/// values when empty or absent.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveProject {
    pub name: String,
    pub location: Option<String>,
    pub client: Option<String>,
    pub concept: Option<String>,
    /// A phase string; validated against `ProjectPhase` before saving.
    pub stage: String,
    pub materials: Option<String>,
    /// Defaults to `residential` if empty on first save.
    pub project_type: Option<String>,
}
