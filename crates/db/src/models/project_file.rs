//! Project file metadata model (append-only).

use formaflow_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A file metadata row from the `project_files` table.
///
/// One row per uploaded asset; `file_url` points at the object store.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectFile {
    pub id: DbId,
    pub project_id: DbId,
    pub file_name: String,
    pub file_url: String,
    pub phase: String,
    pub created_at: Timestamp,
}

/// DTO for recording an uploaded file.
#[derive(Debug, Clone)]
pub struct CreateProjectFile {
    pub project_id: DbId,
    pub file_name: String,
    pub file_url: String,
    pub phase: String,
}
