//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use formaflow_core::error::CoreError;
use formaflow_core::phase::ProjectPhase;
use formaflow_core::session::DemoPin;
use formaflow_core::types::DbId;
use formaflow_db::models::project::{Project, SaveProject};
use formaflow_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::PinParam;
use crate::response::DataResponse;
use crate::state::AppState;

/// JSON body for the project upsert.
#[derive(Debug, Deserialize)]
pub struct SaveProjectRequest {
    pub pin: DemoPin,
    pub studio_id: DbId,
    #[serde(flatten)]
    pub project: SaveProject,
}

/// POST /api/v1/projects
///
/// Upsert a project keyed by (studio, name, PIN). `stage` always
/// overwrites; other empty fields preserve stored values.
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<SaveProjectRequest>,
) -> AppResult<Json<DataResponse<Project>>> {
    if input.project.name.trim().is_empty() {
        return Err(CoreError::Validation("Project name is required".into()).into());
    }
    ProjectPhase::from_str_db(&input.project.stage)?;

    let project =
        ProjectRepo::save(&state.pool, input.studio_id, input.pin.as_str(), &input.project)
            .await?;
    Ok(Json(DataResponse { data: project }))
}

/// GET /api/v1/projects/by-studio/{studio_id}?pin=
///
/// The most recently updated project of a studio within a session.
pub async fn get_by_studio(
    State(state): State<AppState>,
    Path(studio_id): Path<DbId>,
    Query(params): Query<PinParam>,
) -> AppResult<Json<DataResponse<Project>>> {
    let pin = DemoPin::parse(&params.pin)?;
    let project =
        ProjectRepo::find_latest_by_studio_and_pin(&state.pool, studio_id, pin.as_str())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No project for studio {studio_id} and PIN {pin}"))
            })?;
    Ok(Json(DataResponse { data: project }))
}
