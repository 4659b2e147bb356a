//! Handlers for the demo session lifecycle.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use formaflow_core::session::DemoPin;
use formaflow_core::wizard::{DemoStep, TOTAL_STEPS};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// A session's PIN and wizard position.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub pin: DemoPin,
    pub step: DemoStep,
    pub step_number: u8,
    pub total_steps: u8,
}

impl SessionView {
    fn new(pin: DemoPin, step: DemoStep) -> Self {
        Self {
            pin,
            step,
            step_number: step.to_number(),
            total_steps: TOTAL_STEPS,
        }
    }
}

/// POST /api/v1/session
///
/// Issue a fresh PIN and register the session at the welcome step.
pub async fn start(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<SessionView>>)> {
    let (pin, step) = state.sessions.start();
    tracing::info!(%pin, "Demo session started");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SessionView::new(pin, step),
        }),
    ))
}

/// GET /api/v1/session/{pin}
pub async fn get_current(
    State(state): State<AppState>,
    Path(pin): Path<String>,
) -> AppResult<Json<DataResponse<SessionView>>> {
    let pin = DemoPin::parse(&pin)?;
    let step = state
        .sessions
        .current(&pin)
        .ok_or_else(|| AppError::NotFound(format!("No active session for PIN {pin}")))?;
    Ok(Json(DataResponse {
        data: SessionView::new(pin, step),
    }))
}

/// POST /api/v1/session/{pin}/advance
///
/// Move the session one step forward. 409 at the terminal step.
pub async fn advance(
    State(state): State<AppState>,
    Path(pin): Path<String>,
) -> AppResult<Json<DataResponse<SessionView>>> {
    let pin = DemoPin::parse(&pin)?;
    let step = state
        .sessions
        .advance(&pin)
        .ok_or_else(|| AppError::NotFound(format!("No active session for PIN {pin}")))??;
    tracing::debug!(%pin, step = step.as_str(), "Session advanced");
    Ok(Json(DataResponse {
        data: SessionView::new(pin, step),
    }))
}
