//! Upload cap rules for the project-upload step.
//!
//! Each project phase holds at most [`MAX_FILES_PER_PHASE`] files. The
//! gateway counts what a phase already stores and plans each incoming batch
//! against the remainder: a batch that would overflow the cap is truncated
//! and the caller gets a warning reporting how many files were cut. Because
//! the count comes from persisted rows, the cap spans requests.

/// Cap on stored files per phase.
pub const MAX_FILES_PER_PHASE: usize = 10;

/// Warning produced when a batch hits the per-phase cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageWarning {
    /// The phase was already full; nothing from the batch was accepted.
    PhaseFull,
    /// Part of the batch was accepted; `rejected` files were cut.
    Truncated { rejected: usize },
}

impl StageWarning {
    /// User-facing warning text.
    pub fn message(&self) -> String {
        match self {
            Self::PhaseFull => {
                format!("You can only upload a maximum of {MAX_FILES_PER_PHASE} images per phase.")
            }
            Self::Truncated { rejected } => format!(
                "{rejected} files were not added due to the {MAX_FILES_PER_PHASE} image limit per phase."
            ),
        }
    }
}

/// How much of an incoming batch a phase can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    /// Number of files to accept, `min(batch, remaining slots)`.
    pub accept: usize,
    /// Set iff the cap truncated or rejected the batch.
    pub warning: Option<StageWarning>,
}

/// Plan a batch against the per-phase cap.
pub fn plan_batch(stored_in_phase: usize, batch_size: usize) -> BatchPlan {
    if stored_in_phase >= MAX_FILES_PER_PHASE {
        return BatchPlan {
            accept: 0,
            warning: Some(StageWarning::PhaseFull),
        };
    }
    let remaining = MAX_FILES_PER_PHASE - stored_in_phase;
    let accept = batch_size.min(remaining);
    let warning = if batch_size > remaining {
        Some(StageWarning::Truncated {
            rejected: batch_size - remaining,
        })
    } else {
        None
    };
    BatchPlan { accept, warning }
}
