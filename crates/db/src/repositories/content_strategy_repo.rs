//! Repository for the `content_strategies` table.

use formaflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::content_strategy::{ContentStrategy, SaveContentStrategy};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, instagram_account_id, calendar, captions, \
                       formats, themes, demo_pin, created_at, updated_at";

/// Provides save and lookup operations for content strategies.
pub struct ContentStrategyRepo;

impl ContentStrategyRepo {
    /// Save a strategy, keyed by (project_id, demo_pin).
    ///
    /// Atomic upsert on `uq_content_strategies_project_pin`; a regenerated
    /// strategy replaces the account link and whichever blobs it carries.
    pub async fn save(
        pool: &PgPool,
        pin: &str,
        input: &SaveContentStrategy,
    ) -> Result<ContentStrategy, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_strategies
                 (project_id, instagram_account_id, calendar, captions, formats, themes, demo_pin)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT ON CONSTRAINT uq_content_strategies_project_pin DO UPDATE SET
                 instagram_account_id = $2,
                 calendar = COALESCE($3, content_strategies.calendar),
                 captions = COALESCE($4, content_strategies.captions),
                 formats = COALESCE($5, content_strategies.formats),
                 themes = COALESCE($6, content_strategies.themes),
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentStrategy>(&query)
            .bind(input.project_id)
            .bind(input.instagram_account_id)
            .bind(&input.calendar)
            .bind(&input.captions)
            .bind(&input.formats)
            .bind(&input.themes)
            .bind(pin)
            .fetch_one(pool)
            .await
    }

    /// Find the strategy for a project within a demo session.
    pub async fn find_by_project_and_pin(
        pool: &PgPool,
        project_id: DbId,
        pin: &str,
    ) -> Result<Option<ContentStrategy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM content_strategies
             WHERE project_id = $1 AND demo_pin = $2"
        );
        sqlx::query_as::<_, ContentStrategy>(&query)
            .bind(project_id)
            .bind(pin)
            .fetch_optional(pool)
            .await
    }
}
