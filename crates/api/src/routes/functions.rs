//! Route definitions for the analysis function endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::functions;
use crate::state::AppState;

/// Routes mounted at `/functions`.
///
/// ```text
/// POST   /ai-strategy           -> ai_strategy
/// POST   /analyze-instagram     -> analyze_instagram
/// POST   /instagram-api         -> instagram_api
/// POST   /pinterest-api         -> pinterest_api
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ai-strategy", post(functions::ai_strategy))
        .route("/analyze-instagram", post(functions::analyze_instagram))
        .route("/instagram-api", post(functions::instagram_api))
        .route("/pinterest-api", post(functions::pinterest_api))
}
