//! Route definitions for the `/strategies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::strategy;
use crate::state::AppState;

/// Routes mounted at `/strategies`.
///
/// ```text
/// POST   /                              -> save (JSON upsert)
/// GET    /by-project/{project_id}       -> get_by_project (?pin=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(strategy::save))
        .route("/by-project/{project_id}", get(strategy::get_by_project))
}
