//! Route definitions for the `/studios` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::studio;
use crate::state::AppState;

/// Routes mounted at `/studios`.
///
/// ```text
/// POST   /                  -> save (JSON upsert)
/// POST   /logo              -> save_with_logo (multipart upsert)
/// GET    /by-pin/{pin}      -> get_by_pin
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(studio::save))
        .route("/logo", post(studio::save_with_logo))
        .route("/by-pin/{pin}", get(studio::get_by_pin))
}
