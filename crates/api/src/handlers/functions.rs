//! The analysis function endpoints under `/api/v1/functions`.
//!
//! These replace the original serverless functions one-for-one and keep
//! their bare JSON wire shapes (no `data` envelope). The strategy and
//! analysis generators are pure; the optional `ANALYSIS_DELAY_MS` pause is
//! the only latency, and it defaults to zero.

use std::time::Duration;

use axum::extract::State;
use axum::Json;
use formaflow_core::analysis::{analyze_account, AnalysisReport, AnalyzeRequest};
use formaflow_core::social;
use formaflow_core::strategy::{generate_strategy, ProjectBrief, StrategyDocument};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Number of entries in the `getPosts` top-posts list.
const TOP_POSTS: usize = 6;

async fn analysis_pause(state: &AppState) {
    let delay = state.config.analysis_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}

/// Request body for the ai-strategy function.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiStrategyRequest {
    pub project_data: ProjectBrief,
    /// Accepted for wire compatibility; the generator does not use it.
    pub instagram_data: serde_json::Value,
}

/// POST /api/v1/functions/ai-strategy
pub async fn ai_strategy(
    State(state): State<AppState>,
    Json(input): Json<AiStrategyRequest>,
) -> AppResult<Json<StrategyDocument>> {
    analysis_pause(&state).await;
    Ok(Json(generate_strategy(&input.project_data)))
}

/// POST /api/v1/functions/analyze-instagram
pub async fn analyze_instagram(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalysisReport>> {
    analysis_pause(&state).await;
    Ok(Json(analyze_account(&input.competitor_usernames)))
}

/// Request body for the instagram-api function.
#[derive(Debug, Deserialize)]
pub struct InstagramApiRequest {
    pub action: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// POST /api/v1/functions/instagram-api
///
/// Action-dispatched like the function it replaces:
/// `getUserProfile`, `getPosts`, `getCompetitors`.
pub async fn instagram_api(
    State(state): State<AppState>,
    Json(input): Json<InstagramApiRequest>,
) -> AppResult<Json<serde_json::Value>> {
    match input.action.as_str() {
        "getUserProfile" => {
            let username = input.username.unwrap_or_default();
            let profile = state.instagram.fetch_profile(&username).await?;
            Ok(Json(serde_json::to_value(profile).map_err(|e| {
                AppError::InternalError(format!("Profile serialization failed: {e}"))
            })?))
        }
        "getPosts" => {
            let posts = state.instagram.fetch_posts().await?;

            // Analytics are derived from the post list, so the numbers
            // always agree with it regardless of the data source.
            Ok(Json(json!({
                "posts": posts,
                "analytics": {
                    "postTypes": social::type_mix_percentages(&posts),
                    "topPosts": social::top_posts(&posts, TOP_POSTS),
                    "postTiming": social::post_timing(&posts),
                },
            })))
        }
        "getCompetitors" => Ok(Json(json!({ "competitors": state.instagram.competitors() }))),
        _ => Err(AppError::BadRequest("Invalid action".into())),
    }
}

/// Request body for the pinterest-api function.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinterestApiRequest {
    pub action: String,
    #[serde(default)]
    pub board_id: Option<String>,
}

/// POST /api/v1/functions/pinterest-api
///
/// Canned board and pin data; the demo never talks to Pinterest.
pub async fn pinterest_api(
    Json(input): Json<PinterestApiRequest>,
) -> AppResult<Json<serde_json::Value>> {
    match (input.action.as_str(), input.board_id) {
        ("getBoards", _) => Ok(Json(json!({
            "boards": [
                { "id": "architecture-inspiration", "name": "Architecture Inspiration", "pin_count": 54 },
                { "id": "material-studies", "name": "Material Studies", "pin_count": 28 },
                { "id": "urban-renewal", "name": "Urban Renewal Projects", "pin_count": 36 },
            ],
        }))),
        ("getPins", Some(_board_id)) => Ok(Json(json!({
            "pins": [
                { "id": "pin1", "image_url": "https://images.unsplash.com/photo-1600585154340-be6161a56a0c", "title": "Modern Loft Design" },
                { "id": "pin2", "image_url": "https://images.unsplash.com/photo-1600566753086-00f18fb6b3ea", "title": "Industrial Space" },
                { "id": "pin3", "image_url": "https://images.unsplash.com/photo-1600573472556-e636c2acda88", "title": "Light Study" },
                { "id": "pin4", "image_url": "https://images.unsplash.com/photo-1600585154526-990dced4db3d", "title": "Material Contrast" },
                { "id": "pin5", "image_url": "https://images.unsplash.com/photo-1601760561441-16420502c7e0", "title": "Open Plan Concept" },
                { "id": "pin6", "image_url": "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0", "title": "Circulation Study" },
            ],
        }))),
        _ => Err(AppError::BadRequest(
            "Invalid action or missing boardId".into(),
        )),
    }
}
