//! Repository for the `project_files` table (append-only).

use formaflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_file::{CreateProjectFile, ProjectFile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, file_name, file_url, phase, created_at";

/// Provides insert and lookup operations for uploaded file metadata.
pub struct ProjectFileRepo;

impl ProjectFileRepo {
    /// Record one uploaded asset. No upsert: every upload is a new row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectFile,
    ) -> Result<ProjectFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_files (project_id, file_name, file_url, phase)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(input.project_id)
            .bind(&input.file_name)
            .bind(&input.file_url)
            .bind(&input.phase)
            .fetch_one(pool)
            .await
    }

    /// All file rows for a project, oldest first, optionally filtered by phase.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        phase: Option<&str>,
    ) -> Result<Vec<ProjectFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_files
             WHERE project_id = $1 AND ($2::text IS NULL OR phase = $2)
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(project_id)
            .bind(phase)
            .fetch_all(pool)
            .await
    }

    /// Number of stored files for a project phase (feeds the upload cap).
    pub async fn count_for_phase(
        pool: &PgPool,
        project_id: DbId,
        phase: &str,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM project_files WHERE project_id = $1 AND phase = $2",
        )
        .bind(project_id)
        .bind(phase)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
