//! Handlers for the `/instagram-accounts` resource.

use axum::extract::{Path, State};
use axum::Json;
use formaflow_core::error::CoreError;
use formaflow_core::session::DemoPin;
use formaflow_core::types::DbId;
use formaflow_db::models::competitor::{Competitor, SaveCompetitor};
use formaflow_db::models::instagram_account::{InstagramAccount, SaveInstagramAccount};
use formaflow_db::repositories::{CompetitorRepo, InstagramAccountRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// JSON body for the account snapshot upsert.
#[derive(Debug, Deserialize)]
pub struct SaveAccountRequest {
    pub pin: DemoPin,
    #[serde(flatten)]
    pub account: SaveInstagramAccount,
}

/// POST /api/v1/instagram-accounts
///
/// Upsert an analyzed account snapshot keyed by (username, PIN). Metrics
/// always overwrite; analytics blobs preserve stored values when absent.
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<SaveAccountRequest>,
) -> AppResult<Json<DataResponse<InstagramAccount>>> {
    if input.account.username.trim().is_empty() {
        return Err(CoreError::Validation("Instagram username is required".into()).into());
    }

    let account =
        InstagramAccountRepo::save(&state.pool, input.pin.as_str(), &input.account).await?;
    Ok(Json(DataResponse { data: account }))
}

/// POST /api/v1/instagram-accounts/{id}/competitors
///
/// Upsert a competitor analysis keyed by (account, competitor username).
pub async fn save_competitor(
    State(state): State<AppState>,
    Path(account_id): Path<DbId>,
    Json(input): Json<SaveCompetitor>,
) -> AppResult<Json<DataResponse<Competitor>>> {
    if input.competitor_username.trim().is_empty() {
        return Err(CoreError::Validation("Competitor username is required".into()).into());
    }

    // The FK would catch this too, but a 404 reads better than a 500.
    InstagramAccountRepo::find_by_id(&state.pool, account_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InstagramAccount",
            id: account_id,
        }))?;

    let competitor = CompetitorRepo::save(&state.pool, account_id, &input).await?;
    Ok(Json(DataResponse { data: competitor }))
}

/// GET /api/v1/instagram-accounts/{id}/competitors
pub async fn list_competitors(
    State(state): State<AppState>,
    Path(account_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Competitor>>>> {
    let competitors = CompetitorRepo::list_by_account(&state.pool, account_id).await?;
    Ok(Json(DataResponse { data: competitors }))
}
