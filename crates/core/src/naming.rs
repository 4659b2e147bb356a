//! Object key and file name helpers.
//!
//! Uploaded assets are stored under namespaced keys so concurrent demo
//! sessions never collide: `{entity_id}/{random}.{ext}` for project files
//! and `{random}.{ext}` for studio logos.

use rand::distr::Alphanumeric;
use rand::Rng;

use crate::phase::ProjectPhase;
use crate::types::DbId;

/// Length of the random component of generated object names.
const TOKEN_LENGTH: usize = 13;

/// Fallback extension when a file name has none.
const DEFAULT_EXTENSION: &str = "bin";

/// Extract the extension from a file name (the part after the last dot).
///
/// `archive.tar.gz` yields `gz`; a name without a dot, or ending in a dot,
/// yields `None`.
pub fn file_extension(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && !ext.contains('/') => Some(ext),
        _ => None,
    }
}

/// Random lowercase alphanumeric token.
pub fn random_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

/// Key for a studio logo: `{random}.{ext}`.
pub fn logo_key(file_name: &str) -> String {
    let ext = file_extension(file_name).unwrap_or(DEFAULT_EXTENSION);
    format!("{}.{ext}", random_token())
}

/// Key for a phase-bucketed project file: `{project_id}/{phase}/{random}.{ext}`.
pub fn project_file_key(project_id: DbId, phase: ProjectPhase, file_name: &str) -> String {
    let ext = file_extension(file_name).unwrap_or(DEFAULT_EXTENSION);
    format!("{project_id}/{}/{}.{ext}", phase.as_str(), random_token())
}

/// Key for a project's single attached document: `{project_id}/document.{ext}`.
///
/// Deliberately not randomized, so re-uploading the document replaces it.
pub fn document_key(project_id: DbId, file_name: &str) -> String {
    let ext = file_extension(file_name).unwrap_or(DEFAULT_EXTENSION);
    format!("{project_id}/document.{ext}")
}
