//! Wire types shared by the live client and the canned dataset.

use serde::{Deserialize, Serialize};

/// An account profile as returned by the instagram-api function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub followers: i64,
    pub posts: i64,
    /// Average engagement per post as a percent of followers.
    pub engagement: f64,
    pub bio: String,
}

/// A competitor account summary (canned; the graph API exposes no
/// competitor endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorProfile {
    pub username: String,
    pub followers: i64,
    pub posts: i64,
    pub engagement: f64,
    pub top_post_types: serde_json::Value,
    pub post_frequency: String,
}
