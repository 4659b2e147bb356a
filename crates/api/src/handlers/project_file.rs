//! Handlers for project file uploads and listings.
//!
//! Phase uploads enforce the per-phase cap against what is already
//! stored: an overflowing batch is truncated and the response carries the
//! warning text. Every object write is followed by a metadata row; a failed
//! row write compensates by deleting the object again.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use formaflow_core::error::CoreError;
use formaflow_core::naming;
use formaflow_core::phase::ProjectPhase;
use formaflow_core::types::DbId;
use formaflow_core::upload::plan_batch;
use formaflow_db::models::project_file::{CreateProjectFile, ProjectFile};
use formaflow_db::repositories::{ProjectFileRepo, ProjectRepo};
use formaflow_storage::BUCKET_PROJECT_FILES;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a phase batch upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseUploadResult {
    /// Metadata rows for the files that made it in, in upload order.
    pub files: Vec<ProjectFile>,
    /// Number of files accepted out of the batch.
    pub accepted: usize,
    /// Cap warning, present iff the batch was truncated or rejected.
    pub warning: Option<String>,
}

/// POST /api/v1/projects/{id}/files
///
/// Multipart batch upload into one phase. Expected fields: `phase` (text)
/// followed by one or more `files` file fields.
pub async fn upload_phase_files(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<PhaseUploadResult>>)> {
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let mut phase: Option<ProjectPhase> = None;
    let mut batch: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or_default() {
            "phase" => phase = Some(ProjectPhase::from_str_db(&field.text().await?)?),
            "files" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await?.to_vec();
                batch.push((file_name, bytes));
            }
            other => {
                tracing::debug!(field = other, "Ignoring unexpected multipart field");
            }
        }
    }

    let phase = phase.ok_or_else(|| AppError::BadRequest("Missing 'phase' field".into()))?;
    if batch.is_empty() {
        return Err(CoreError::Validation("No files received in upload batch".into()).into());
    }

    // Enforce the cap against what this phase already holds.
    let stored = ProjectFileRepo::count_for_phase(&state.pool, project.id, phase.as_str()).await?;
    let plan = plan_batch(stored as usize, batch.len());

    let mut files = Vec::with_capacity(plan.accept);
    for (file_name, bytes) in batch.into_iter().take(plan.accept) {
        let key = naming::project_file_key(project.id, phase, &file_name);
        let object = state.store.put(BUCKET_PROJECT_FILES, &key, &bytes).await?;

        let row = CreateProjectFile {
            project_id: project.id,
            file_name,
            file_url: object.public_url,
            phase: phase.as_str().to_string(),
        };
        match ProjectFileRepo::create(&state.pool, &row).await {
            Ok(file) => files.push(file),
            Err(err) => {
                // Compensate: the object without a row would be unreachable.
                if let Err(delete_err) = state.store.delete(BUCKET_PROJECT_FILES, &key).await {
                    tracing::warn!(error = %delete_err, key, "Compensating file delete failed");
                }
                return Err(err.into());
            }
        }
    }

    tracing::info!(
        project_id = %project.id,
        phase = phase.as_str(),
        accepted = plan.accept,
        "Phase files uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PhaseUploadResult {
                files,
                accepted: plan.accept,
                warning: plan.warning.map(|w| w.message()),
            },
        }),
    ))
}

/// Result of a project document upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUploadResult {
    pub url: String,
}

/// POST /api/v1/projects/{id}/document
///
/// Upload the project's single attached document (multipart `document`
/// field). The key is stable per project, so a re-upload replaces the
/// previous document in place. No metadata row is written; the caller
/// keeps the returned URL.
pub async fn upload_document(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<DocumentUploadResult>>)> {
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let mut document: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name().unwrap_or_default() == "document" {
            let file_name = field.file_name().unwrap_or("document").to_string();
            let bytes = field.bytes().await?.to_vec();
            document = Some((file_name, bytes));
        }
    }

    let (file_name, bytes) =
        document.ok_or_else(|| AppError::BadRequest("Missing 'document' file field".into()))?;

    let key = naming::document_key(project.id, &file_name);
    let object = state.store.put(BUCKET_PROJECT_FILES, &key, &bytes).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: DocumentUploadResult {
                url: object.public_url,
            },
        }),
    ))
}

/// Query parameters for the file listing.
#[derive(Debug, Deserialize)]
pub struct ListFilesParams {
    pub phase: Option<String>,
}

/// GET /api/v1/projects/{id}/files?phase=
pub async fn list_files(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<ListFilesParams>,
) -> AppResult<Json<DataResponse<Vec<ProjectFile>>>> {
    // Validate the filter up front so a typo'd phase is a 400, not an
    // empty list.
    let phase = params
        .phase
        .as_deref()
        .map(ProjectPhase::from_str_db)
        .transpose()?;

    let files =
        ProjectFileRepo::list_by_project(&state.pool, project_id, phase.map(|p| p.as_str()))
            .await?;
    Ok(Json(DataResponse { data: files }))
}
