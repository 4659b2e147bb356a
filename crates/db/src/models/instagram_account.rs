//! Instagram account snapshot model and DTOs.

use formaflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An account snapshot row from the `instagram_accounts` table.
///
/// `top_posts`, `post_types`, and `post_timing` are stored as jsonb blobs
/// in the shape the analysis functions emit.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InstagramAccount {
    pub id: DbId,
    pub username: String,
    pub followers: i64,
    pub posts: i64,
    pub engagement: f64,
    pub top_posts: Option<serde_json::Value>,
    pub post_types: Option<serde_json::Value>,
    pub post_timing: Option<serde_json::Value>,
    pub demo_pin: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving an account snapshot (keyed by username + PIN).
///
/// Metrics always overwrite: a fresh analysis supersedes the stored one.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveInstagramAccount {
    pub username: String,
    pub followers: i64,
    pub posts: i64,
    pub engagement: f64,
    pub top_posts: Option<serde_json::Value>,
    pub post_types: Option<serde_json::Value>,
    pub post_timing: Option<serde_json::Value>,
}
