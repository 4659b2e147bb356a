//! In-memory demo session registry.
//!
//! Maps each issued PIN to its current wizard step. Sessions live only as
//! long as the process; restarting the server forgets every demo run, which
//! is acceptable for a demo (the persisted rows keyed by PIN survive).

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use formaflow_core::error::CoreError;
use formaflow_core::session::DemoPin;
use formaflow_core::wizard::DemoStep;

/// Tracks the wizard step of every active demo session.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    inner: Mutex<HashMap<DemoPin, DemoStep>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<DemoPin, DemoStep>> {
        // Poisoning only matters if a panic occurred mid-mutation; every
        // mutation here is a single insert, so the map is always consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issue a fresh PIN and register it at the initial step.
    ///
    /// Regenerates on the (rare) in-process collision so two concurrent
    /// sessions never share a step pointer.
    pub fn start(&self) -> (DemoPin, DemoStep) {
        let mut sessions = self.lock();
        loop {
            let pin = DemoPin::generate();
            if !sessions.contains_key(&pin) {
                sessions.insert(pin.clone(), DemoStep::INITIAL);
                return (pin, DemoStep::INITIAL);
            }
        }
    }

    /// Current step of a session, or `None` for an unknown PIN.
    pub fn current(&self, pin: &DemoPin) -> Option<DemoStep> {
        self.lock().get(pin).copied()
    }

    /// Advance a session one step forward.
    ///
    /// `None` for an unknown PIN; `Err` (conflict) at the terminal step.
    pub fn advance(&self, pin: &DemoPin) -> Option<Result<DemoStep, CoreError>> {
        let mut sessions = self.lock();
        let current = *sessions.get(pin)?;
        Some(current.advance().inspect(|&next| {
            sessions.insert(pin.clone(), next);
        }))
    }

    /// Number of active sessions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_registers_at_welcome() {
        let registry = SessionRegistry::new();
        let (pin, step) = registry.start();
        assert_eq!(step, DemoStep::Welcome);
        assert_eq!(registry.current(&pin), Some(DemoStep::Welcome));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_pin_has_no_step() {
        let registry = SessionRegistry::new();
        let pin = DemoPin::parse("123456").unwrap();
        assert_eq!(registry.current(&pin), None);
        assert!(registry.advance(&pin).is_none());
    }

    #[test]
    fn advance_walks_the_wizard_to_the_terminal_step() {
        let registry = SessionRegistry::new();
        let (pin, _) = registry.start();

        let mut steps = vec![registry.current(&pin).unwrap()];
        while let Some(result) = registry.advance(&pin) {
            match result {
                Ok(step) => steps.push(step),
                Err(_) => break,
            }
        }

        assert_eq!(
            steps,
            vec![
                DemoStep::Welcome,
                DemoStep::StudioSetup,
                DemoStep::ProjectUpload,
                DemoStep::SocialAnalysis,
                DemoStep::AiStrategy,
            ]
        );
        // The pointer stays parked at the terminal step.
        assert_eq!(registry.current(&pin), Some(DemoStep::AiStrategy));
    }

    #[test]
    fn sessions_are_independent() {
        let registry = SessionRegistry::new();
        let (a, _) = registry.start();
        let (b, _) = registry.start();
        assert_ne!(a, b);

        registry.advance(&a).unwrap().unwrap();
        assert_eq!(registry.current(&a), Some(DemoStep::StudioSetup));
        assert_eq!(registry.current(&b), Some(DemoStep::Welcome));
    }
}
