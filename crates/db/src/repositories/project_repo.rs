//! Repository for the `projects` table.

use formaflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{Project, SaveProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, studio_id, name, location, client, concept, stage, \
                       materials, project_type, demo_pin, created_at, updated_at";

/// Provides save and lookup operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Save a project, keyed by (studio_id, name, demo_pin).
    ///
    /// Atomic upsert on `uq_projects_studio_name_pin`. `stage` always
    /// overwrites (the wizard moves the project forward); the remaining
    /// optional fields preserve stored values when empty.
    pub async fn save(
        pool: &PgPool,
        studio_id: DbId,
        pin: &str,
        input: &SaveProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                 (studio_id, name, location, client, concept, stage, materials, project_type, demo_pin)
             VALUES
                 ($1, $2, NULLIF($3, ''), NULLIF($4, ''), NULLIF($5, ''), $6,
                  NULLIF($7, ''), COALESCE(NULLIF($8, ''), 'residential'), $9)
             ON CONFLICT ON CONSTRAINT uq_projects_studio_name_pin DO UPDATE SET
                 location = COALESCE(NULLIF($3, ''), projects.location),
                 client = COALESCE(NULLIF($4, ''), projects.client),
                 concept = COALESCE(NULLIF($5, ''), projects.concept),
                 stage = $6,
                 materials = COALESCE(NULLIF($7, ''), projects.materials),
                 project_type = COALESCE(NULLIF($8, ''), projects.project_type),
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(studio_id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.client)
            .bind(&input.concept)
            .bind(&input.stage)
            .bind(&input.materials)
            .bind(&input.project_type)
            .bind(pin)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Most recently created project for a studio + demo PIN, if any.
    pub async fn find_latest_by_studio_and_pin(
        pool: &PgPool,
        studio_id: DbId,
        pin: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE studio_id = $1 AND demo_pin = $2
             ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(studio_id)
            .bind(pin)
            .fetch_optional(pool)
            .await
    }
}
