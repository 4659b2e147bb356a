//! Repository for the `competitors` table.

use formaflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::competitor::{Competitor, SaveCompetitor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, instagram_account_id, competitor_username, insights, created_at, updated_at";

/// Provides save and lookup operations for competitor analyses.
pub struct CompetitorRepo;

impl CompetitorRepo {
    /// Save a competitor analysis, keyed by (account, competitor_username).
    ///
    /// Atomic upsert on `uq_competitors_account_username`; re-analyzing a
    /// competitor replaces the stored insights blob.
    pub async fn save(
        pool: &PgPool,
        instagram_account_id: DbId,
        input: &SaveCompetitor,
    ) -> Result<Competitor, sqlx::Error> {
        let query = format!(
            "INSERT INTO competitors (instagram_account_id, competitor_username, insights)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_competitors_account_username DO UPDATE SET
                 insights = COALESCE($3, competitors.insights),
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Competitor>(&query)
            .bind(instagram_account_id)
            .bind(&input.competitor_username)
            .bind(&input.insights)
            .fetch_one(pool)
            .await
    }

    /// All competitor analyses for an account, oldest first.
    pub async fn list_by_account(
        pool: &PgPool,
        instagram_account_id: DbId,
    ) -> Result<Vec<Competitor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM competitors
             WHERE instagram_account_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Competitor>(&query)
            .bind(instagram_account_id)
            .fetch_all(pool)
            .await
    }
}
