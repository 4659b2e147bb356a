//! Project lifecycle phases.
//!
//! Uploaded files and scheduled content are bucketed by one of six fixed
//! phase tags. The database stores the snake_case string form.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The six project lifecycle phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectPhase {
    Concept,
    Inspiration,
    Sketches,
    Drawings,
    Construction,
    Final,
}

/// All phases in timeline order.
pub const ALL_PHASES: [ProjectPhase; 6] = [
    ProjectPhase::Concept,
    ProjectPhase::Inspiration,
    ProjectPhase::Sketches,
    ProjectPhase::Drawings,
    ProjectPhase::Construction,
    ProjectPhase::Final,
];

impl ProjectPhase {
    /// Parse a phase string from the database or a request body.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "concept" => Ok(Self::Concept),
            "inspiration" => Ok(Self::Inspiration),
            "sketches" => Ok(Self::Sketches),
            "drawings" => Ok(Self::Drawings),
            "construction" => Ok(Self::Construction),
            "final" => Ok(Self::Final),
            _ => Err(CoreError::Validation(format!(
                "Invalid phase '{s}'. Must be one of: concept, inspiration, sketches, \
                 drawings, construction, final"
            ))),
        }
    }

    /// Convert to the database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Inspiration => "inspiration",
            Self::Sketches => "sketches",
            Self::Drawings => "drawings",
            Self::Construction => "construction",
            Self::Final => "final",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Concept => "Concept",
            Self::Inspiration => "Inspiration",
            Self::Sketches => "Sketches",
            Self::Drawings => "Drawings",
            Self::Construction => "Construction",
            Self::Final => "Final",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_phases() {
        for phase in ALL_PHASES {
            assert_eq!(ProjectPhase::from_str_db(phase.as_str()).unwrap(), phase);
        }
    }

    #[test]
    fn rejects_unknown_phase() {
        assert!(ProjectPhase::from_str_db("demolition").is_err());
        assert!(ProjectPhase::from_str_db("").is_err());
        assert!(ProjectPhase::from_str_db("Concept").is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&ProjectPhase::Construction).unwrap();
        assert_eq!(json, "\"construction\"");
    }
}
