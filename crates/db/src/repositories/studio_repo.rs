//! Repository for the `studios` table.

use formaflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::studio::{SaveStudio, Studio};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, website, style, logo_url, demo_pin, created_at, updated_at";

/// Provides save and lookup operations for studios.
pub struct StudioRepo;

impl StudioRepo {
    /// Save a studio, keyed by (name, demo_pin).
    ///
    /// Atomic upsert on `uq_studios_name_pin`: empty incoming fields
    /// preserve the stored values, so revisiting the studio-setup step
    /// never clobbers earlier input.
    pub async fn save(
        pool: &PgPool,
        pin: &str,
        input: &SaveStudio,
    ) -> Result<Studio, sqlx::Error> {
        let query = format!(
            "INSERT INTO studios (name, website, style, logo_url, demo_pin)
             VALUES ($1, NULLIF($2, ''), COALESCE(NULLIF($3, ''), 'minimalist'), NULLIF($4, ''), $5)
             ON CONFLICT ON CONSTRAINT uq_studios_name_pin DO UPDATE SET
                 website = COALESCE(NULLIF($2, ''), studios.website),
                 style = COALESCE(NULLIF($3, ''), studios.style),
                 logo_url = COALESCE(NULLIF($4, ''), studios.logo_url),
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Studio>(&query)
            .bind(&input.name)
            .bind(&input.website)
            .bind(&input.style)
            .bind(&input.logo_url)
            .bind(pin)
            .fetch_one(pool)
            .await
    }

    /// Find a studio by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Studio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM studios WHERE id = $1");
        sqlx::query_as::<_, Studio>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Most recently created studio for a demo PIN, if any.
    pub async fn find_latest_by_pin(
        pool: &PgPool,
        pin: &str,
    ) -> Result<Option<Studio>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM studios WHERE demo_pin = $1
             ORDER BY created_at DESC LIMIT 1"
        );
        sqlx::query_as::<_, Studio>(&query)
            .bind(pin)
            .fetch_optional(pool)
            .await
    }

    /// All studios stored for a demo PIN, newest first.
    pub async fn list_by_pin(pool: &PgPool, pin: &str) -> Result<Vec<Studio>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM studios WHERE demo_pin = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Studio>(&query)
            .bind(pin)
            .fetch_all(pool)
            .await
    }
}
