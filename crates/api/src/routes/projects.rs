//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, project_file};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// POST   /                          -> save (JSON upsert)
/// GET    /by-studio/{studio_id}     -> get_by_studio (?pin=)
/// POST   /{id}/files                -> upload_phase_files (multipart)
/// GET    /{id}/files                -> list_files (?phase=)
/// POST   /{id}/document             -> upload_document (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(project::save))
        .route("/by-studio/{studio_id}", get(project::get_by_studio))
        .route(
            "/{id}/files",
            get(project_file::list_files).post(project_file::upload_phase_files),
        )
        .route("/{id}/document", post(project_file::upload_document))
}
