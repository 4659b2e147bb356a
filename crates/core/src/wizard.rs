//! Demo wizard step sequence.
//!
//! The demo advances through five steps in a strictly linear order:
//!
//! ```text
//! welcome -> studio-setup -> project-upload -> social-analysis -> ai-strategy
//! ```
//!
//! There is no backward transition and `ai-strategy` is terminal. The step
//! pointer itself lives in the API's session registry; this module only
//! defines the sequence and its transition rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The five demo wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoStep {
    Welcome,
    StudioSetup,
    ProjectUpload,
    SocialAnalysis,
    AiStrategy,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 5;

impl DemoStep {
    /// The first step of every session.
    pub const INITIAL: DemoStep = DemoStep::Welcome;

    /// Convert a 1-based step number to a `DemoStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Welcome),
            2 => Ok(Self::StudioSetup),
            3 => Ok(Self::ProjectUpload),
            4 => Ok(Self::SocialAnalysis),
            5 => Ok(Self::AiStrategy),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between 1 and {TOTAL_STEPS}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Welcome => 1,
            Self::StudioSetup => 2,
            Self::ProjectUpload => 3,
            Self::SocialAnalysis => 4,
            Self::AiStrategy => 5,
        }
    }

    /// Parse a kebab-case step string.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "welcome" => Ok(Self::Welcome),
            "studio-setup" => Ok(Self::StudioSetup),
            "project-upload" => Ok(Self::ProjectUpload),
            "social-analysis" => Ok(Self::SocialAnalysis),
            "ai-strategy" => Ok(Self::AiStrategy),
            _ => Err(CoreError::Validation(format!(
                "Invalid demo step '{s}'. Must be one of: welcome, studio-setup, \
                 project-upload, social-analysis, ai-strategy"
            ))),
        }
    }

    /// The kebab-case string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::StudioSetup => "studio-setup",
            Self::ProjectUpload => "project-upload",
            Self::SocialAnalysis => "social-analysis",
            Self::AiStrategy => "ai-strategy",
        }
    }

    /// The step after this one, or `None` at the terminal step.
    pub fn next(self) -> Option<DemoStep> {
        match self {
            Self::Welcome => Some(Self::StudioSetup),
            Self::StudioSetup => Some(Self::ProjectUpload),
            Self::ProjectUpload => Some(Self::SocialAnalysis),
            Self::SocialAnalysis => Some(Self::AiStrategy),
            Self::AiStrategy => None,
        }
    }

    /// Whether this is the terminal step.
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Advance one step, erroring at the terminal step.
    pub fn advance(self) -> Result<DemoStep, CoreError> {
        self.next().ok_or_else(|| {
            CoreError::Conflict(format!(
                "Demo is already at the terminal step '{}'",
                self.as_str()
            ))
        })
    }
}

/// Validate a step transition.
///
/// Only a single forward step is legal: the wizard exposes no backward
/// navigation and no skipping.
pub fn validate_step_transition(current: DemoStep, next: DemoStep) -> Result<(), CoreError> {
    if current.next() == Some(next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition from '{}' to '{}'. The demo only advances one step forward.",
            current.as_str(),
            next.as_str()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_round_trip() {
        for n in 1..=TOTAL_STEPS {
            assert_eq!(DemoStep::from_number(n).unwrap().to_number(), n);
        }
    }

    #[test]
    fn step_numbers_out_of_range() {
        assert!(DemoStep::from_number(0).is_err());
        assert!(DemoStep::from_number(6).is_err());
    }

    #[test]
    fn step_strings_round_trip() {
        for n in 1..=TOTAL_STEPS {
            let step = DemoStep::from_number(n).unwrap();
            assert_eq!(DemoStep::from_str_db(step.as_str()).unwrap(), step);
        }
    }

    #[test]
    fn sequence_is_strictly_linear_and_terminates() {
        // Scenario D: walk the full wizard; the pointer must only move
        // forward and end at ai-strategy.
        let mut step = DemoStep::INITIAL;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            assert!(next.to_number() == step.to_number() + 1);
            step = next;
            assert!(!visited.contains(&step), "revisited {step:?}");
            visited.push(step);
        }
        assert_eq!(step, DemoStep::AiStrategy);
        assert_eq!(visited.len(), TOTAL_STEPS as usize);
    }

    #[test]
    fn terminal_step_has_no_transition() {
        assert!(DemoStep::AiStrategy.is_terminal());
        assert!(DemoStep::AiStrategy.advance().is_err());
        assert!(!DemoStep::Welcome.is_terminal());
    }

    #[test]
    fn forward_transition_is_valid() {
        assert!(validate_step_transition(DemoStep::Welcome, DemoStep::StudioSetup).is_ok());
        assert!(
            validate_step_transition(DemoStep::SocialAnalysis, DemoStep::AiStrategy).is_ok()
        );
    }

    #[test]
    fn backward_transition_is_rejected() {
        assert!(validate_step_transition(DemoStep::StudioSetup, DemoStep::Welcome).is_err());
        assert!(
            validate_step_transition(DemoStep::AiStrategy, DemoStep::SocialAnalysis).is_err()
        );
    }

    #[test]
    fn skipping_steps_is_rejected() {
        assert!(validate_step_transition(DemoStep::Welcome, DemoStep::ProjectUpload).is_err());
        assert!(validate_step_transition(DemoStep::Welcome, DemoStep::AiStrategy).is_err());
    }

    #[test]
    fn self_transition_is_rejected() {
        assert!(validate_step_transition(DemoStep::Welcome, DemoStep::Welcome).is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&DemoStep::StudioSetup).unwrap();
        assert_eq!(json, "\"studio-setup\"");
        let back: DemoStep = serde_json::from_str("\"ai-strategy\"").unwrap();
        assert_eq!(back, DemoStep::AiStrategy);
    }
}
