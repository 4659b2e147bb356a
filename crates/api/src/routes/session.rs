//! Route definitions for the `/session` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at `/session`.
///
/// ```text
/// POST   /                  -> start
/// GET    /{pin}             -> get_current
/// POST   /{pin}/advance     -> advance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(session::start))
        .route("/{pin}", get(session::get_current))
        .route("/{pin}/advance", post(session::advance))
}
