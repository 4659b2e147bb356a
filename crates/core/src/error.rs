//! Domain error taxonomy shared across the workspace.

use crate::types::DbId;

/// Errors produced by domain logic and surfaced by the API layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain validation rule.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

/// Convenience alias for domain-level results.
pub type CoreResult<T> = Result<T, CoreError>;
