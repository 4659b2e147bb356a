//! Instagram Graph API client with a canned-data fallback.
//!
//! When `INSTAGRAM_ACCESS_TOKEN` and `INSTAGRAM_USER_ID` are configured the
//! client talks to the real Graph API; otherwise every call serves the
//! demo dataset from [`crate::mock`]. Competitor summaries are always
//! canned, since the Graph API has no competitor endpoint.

use formaflow_core::social::{self, Post, PostType};
use serde::Deserialize;

use crate::mock;
use crate::types::{CompetitorProfile, Profile};

/// Credentials and endpoint for the Graph API, read from the environment.
#[derive(Debug, Clone)]
pub struct InstagramConfig {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
    pub api_base_url: String,
}

impl Default for InstagramConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            user_id: None,
            api_base_url: "https://graph.instagram.com".to_string(),
        }
    }
}

impl InstagramConfig {
    /// Read `INSTAGRAM_ACCESS_TOKEN`, `INSTAGRAM_USER_ID` and
    /// `INSTAGRAM_API_BASE_URL` from the environment. Unset or empty
    /// credentials leave the client in demo mode.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            access_token: non_empty("INSTAGRAM_ACCESS_TOKEN"),
            user_id: non_empty("INSTAGRAM_USER_ID"),
            api_base_url: non_empty("INSTAGRAM_API_BASE_URL")
                .unwrap_or_else(|| "https://graph.instagram.com".to_string()),
        }
    }
}

/// Errors from the Graph API layer.
#[derive(Debug, thiserror::Error)]
pub enum InstagramError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Graph API returned a non-2xx status code.
    #[error("Instagram API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Wire shape of a Graph API media item.
#[derive(Debug, Deserialize)]
struct MediaItem {
    id: String,
    #[serde(default)]
    caption: Option<String>,
    media_type: String,
    #[serde(default)]
    media_url: Option<String>,
    timestamp: formaflow_core::types::Timestamp,
    #[serde(default)]
    like_count: i64,
    #[serde(default)]
    comments_count: i64,
}

#[derive(Debug, Deserialize)]
struct MediaResponse {
    #[serde(default)]
    data: Vec<MediaItem>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    username: String,
    #[serde(default)]
    media_count: i64,
    #[serde(default)]
    followers_count: i64,
}

/// Client serving profile and post data for the social-analysis step.
pub struct InstagramClient {
    client: reqwest::Client,
    config: InstagramConfig,
}

impl InstagramClient {
    pub fn new(config: InstagramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Whether real Graph API credentials are configured.
    pub fn is_live(&self) -> bool {
        self.config.access_token.is_some() && self.config.user_id.is_some()
    }

    /// Fetch the account profile. Live mode derives the engagement rate
    /// from the fetched post list; demo mode serves the canned profile
    /// under the requested handle.
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile, InstagramError> {
        let (Some(token), Some(user_id)) = (&self.config.access_token, &self.config.user_id)
        else {
            return Ok(mock::profile(username));
        };

        let url = format!(
            "{}/{}?fields=username,media_count,followers_count&access_token={}",
            self.config.api_base_url, user_id, token
        );
        let user: UserResponse = Self::parse_response(self.client.get(url).send().await?).await?;
        let posts = self.fetch_posts().await?;

        Ok(Profile {
            username: user.username,
            followers: user.followers_count,
            posts: user.media_count,
            engagement: social::engagement_rate(&posts, user.followers_count),
            bio: String::new(),
        })
    }

    /// Fetch the recent post feed.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, InstagramError> {
        let (Some(token), Some(user_id)) = (&self.config.access_token, &self.config.user_id)
        else {
            return Ok(mock::posts());
        };

        let url = format!(
            "{}/{}/media?fields=id,caption,media_type,media_url,timestamp,like_count,comments_count&access_token={}",
            self.config.api_base_url, user_id, token
        );
        let media: MediaResponse = Self::parse_response(self.client.get(url).send().await?).await?;

        tracing::debug!(count = media.data.len(), "fetched instagram media");
        Ok(media.data.into_iter().map(media_to_post).collect())
    }

    /// Competitor summaries for the analyze step. Always canned.
    pub fn competitors(&self) -> Vec<CompetitorProfile> {
        mock::competitors()
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, InstagramError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(InstagramError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

fn media_to_post(item: MediaItem) -> Post {
    let post_type = match item.media_type.as_str() {
        "CAROUSEL_ALBUM" => PostType::Carousel,
        "VIDEO" => PostType::Video,
        // IMAGE and anything the API adds later.
        _ => PostType::Image,
    };
    Post {
        id: item.id,
        image_url: item.media_url.unwrap_or_default(),
        caption: item.caption.unwrap_or_default(),
        likes: item.like_count,
        comments: item.comments_count,
        timestamp: item.timestamp,
        post_type,
    }
}
