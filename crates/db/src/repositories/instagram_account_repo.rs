//! Repository for the `instagram_accounts` table.

use formaflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::instagram_account::{InstagramAccount, SaveInstagramAccount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, followers, posts, engagement, top_posts, \
                       post_types, post_timing, demo_pin, created_at, updated_at";

/// Provides save and lookup operations for account snapshots.
pub struct InstagramAccountRepo;

impl InstagramAccountRepo {
    /// Save an account snapshot, keyed by (username, demo_pin).
    ///
    /// Atomic upsert on `uq_instagram_accounts_username_pin`. Metrics
    /// always overwrite; the analytics blobs preserve stored values when
    /// the incoming snapshot omits them.
    pub async fn save(
        pool: &PgPool,
        pin: &str,
        input: &SaveInstagramAccount,
    ) -> Result<InstagramAccount, sqlx::Error> {
        let query = format!(
            "INSERT INTO instagram_accounts
                 (username, followers, posts, engagement, top_posts, post_types, post_timing, demo_pin)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT ON CONSTRAINT uq_instagram_accounts_username_pin DO UPDATE SET
                 followers = $2,
                 posts = $3,
                 engagement = $4,
                 top_posts = COALESCE($5, instagram_accounts.top_posts),
                 post_types = COALESCE($6, instagram_accounts.post_types),
                 post_timing = COALESCE($7, instagram_accounts.post_timing),
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InstagramAccount>(&query)
            .bind(&input.username)
            .bind(input.followers)
            .bind(input.posts)
            .bind(input.engagement)
            .bind(&input.top_posts)
            .bind(&input.post_types)
            .bind(&input.post_timing)
            .bind(pin)
            .fetch_one(pool)
            .await
    }

    /// Find an account snapshot by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InstagramAccount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instagram_accounts WHERE id = $1");
        sqlx::query_as::<_, InstagramAccount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account snapshot by username within a demo session.
    pub async fn find_by_username_and_pin(
        pool: &PgPool,
        username: &str,
        pin: &str,
    ) -> Result<Option<InstagramAccount>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM instagram_accounts WHERE username = $1 AND demo_pin = $2"
        );
        sqlx::query_as::<_, InstagramAccount>(&query)
            .bind(username)
            .bind(pin)
            .fetch_optional(pool)
            .await
    }
}
