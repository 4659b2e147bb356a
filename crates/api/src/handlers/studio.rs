//! Handlers for the `/studios` resource.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use formaflow_core::error::CoreError;
use formaflow_core::naming;
use formaflow_core::session::DemoPin;
use formaflow_db::models::studio::{SaveStudio, Studio};
use formaflow_db::repositories::StudioRepo;
use formaflow_storage::BUCKET_STUDIO_LOGOS;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// JSON body for the studio upsert: session PIN plus the studio fields.
#[derive(Debug, Deserialize)]
pub struct SaveStudioRequest {
    pub pin: DemoPin,
    #[serde(flatten)]
    pub studio: SaveStudio,
}

/// POST /api/v1/studios
///
/// Upsert a studio keyed by (name, PIN). Non-empty fields overwrite,
/// empty fields preserve stored values.
pub async fn save(
    State(state): State<AppState>,
    Json(input): Json<SaveStudioRequest>,
) -> AppResult<Json<DataResponse<Studio>>> {
    if input.studio.name.trim().is_empty() {
        return Err(CoreError::Validation("Studio name is required".into()).into());
    }

    let studio = StudioRepo::save(&state.pool, input.pin.as_str(), &input.studio).await?;
    Ok(Json(DataResponse { data: studio }))
}

/// POST /api/v1/studios/logo
///
/// Upsert a studio together with its logo (multipart). Expected fields:
/// `pin`, `name`, optional `website` and `style`, and a `logo` file.
///
/// The logo object is written first; if the metadata upsert then fails,
/// the object is deleted again so no orphan survives the request.
pub async fn save_with_logo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<Studio>>> {
    let mut pin: Option<DemoPin> = None;
    let mut save = SaveStudio {
        name: String::new(),
        website: None,
        style: None,
        logo_url: None,
    };
    let mut logo: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or_default() {
            "pin" => pin = Some(DemoPin::parse(&field.text().await?)?),
            "name" => save.name = field.text().await?,
            "website" => save.website = Some(field.text().await?),
            "style" => save.style = Some(field.text().await?),
            "logo" => {
                let file_name = field
                    .file_name()
                    .unwrap_or("logo")
                    .to_string();
                let bytes = field.bytes().await?.to_vec();
                logo = Some((file_name, bytes));
            }
            other => {
                tracing::debug!(field = other, "Ignoring unexpected multipart field");
            }
        }
    }

    let pin = pin.ok_or_else(|| AppError::BadRequest("Missing 'pin' field".into()))?;
    if save.name.trim().is_empty() {
        return Err(CoreError::Validation("Studio name is required".into()).into());
    }
    let (file_name, bytes) =
        logo.ok_or_else(|| AppError::BadRequest("Missing 'logo' file field".into()))?;

    let key = naming::logo_key(&file_name);
    let stored = state.store.put(BUCKET_STUDIO_LOGOS, &key, &bytes).await?;
    save.logo_url = Some(stored.public_url.clone());

    match StudioRepo::save(&state.pool, pin.as_str(), &save).await {
        Ok(studio) => Ok(Json(DataResponse { data: studio })),
        Err(err) => {
            // Compensate: drop the just-written object so it cannot leak.
            if let Err(delete_err) = state.store.delete(BUCKET_STUDIO_LOGOS, &key).await {
                tracing::warn!(error = %delete_err, key, "Compensating logo delete failed");
            }
            Err(err.into())
        }
    }
}

/// GET /api/v1/studios/by-pin/{pin}
///
/// The most recently updated studio of a session.
pub async fn get_by_pin(
    State(state): State<AppState>,
    Path(pin): Path<String>,
) -> AppResult<Json<DataResponse<Studio>>> {
    let pin = DemoPin::parse(&pin)?;
    let studio = StudioRepo::find_latest_by_pin(&state.pool, pin.as_str())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No studio for PIN {pin}")))?;
    Ok(Json(DataResponse { data: studio }))
}
