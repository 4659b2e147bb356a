//! Handlers for the `/strategies` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use formaflow_core::session::DemoPin;
use formaflow_core::types::DbId;
use formaflow_db::models::content_strategy::{ContentStrategy, SaveContentStrategy};
use formaflow_db::repositories::ContentStrategyRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::PinParam;
use crate::response::DataResponse;
use crate::state::AppState;

/// JSON body for the strategy upsert.
#[derive(Debug, Deserialize)]
pub struct SaveStrategyRequest {
    pub pin: DemoPin,
    #[serde(flatten)]
    pub strategy: SaveContentStrategy,
}

/// POST /api/v1/strategies
///
/// Upsert a generated content strategy keyed by (project, PIN).
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<SaveStrategyRequest>,
) -> AppResult<Json<DataResponse<ContentStrategy>>> {
    let strategy =
        ContentStrategyRepo::save(&state.pool, input.pin.as_str(), &input.strategy).await?;
    Ok(Json(DataResponse { data: strategy }))
}

/// GET /api/v1/strategies/by-project/{project_id}?pin=
pub async fn get_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<PinParam>,
) -> AppResult<Json<DataResponse<ContentStrategy>>> {
    let pin = DemoPin::parse(&params.pin)?;
    let strategy =
        ContentStrategyRepo::find_by_project_and_pin(&state.pool, project_id, pin.as_str())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No strategy for project {project_id} and PIN {pin}"))
            })?;
    Ok(Json(DataResponse { data: strategy }))
}
