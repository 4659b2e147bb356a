//! Route definitions for the `/instagram-accounts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::instagram_account;
use crate::state::AppState;

/// Routes mounted at `/instagram-accounts`.
///
/// ```text
/// POST   /                      -> save (JSON upsert)
/// POST   /{id}/competitors      -> save_competitor
/// GET    /{id}/competitors      -> list_competitors
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(instagram_account::save))
        .route(
            "/{id}/competitors",
            get(instagram_account::list_competitors).post(instagram_account::save_competitor),
        )
}
