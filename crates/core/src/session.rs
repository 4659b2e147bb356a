//! Demo session identity.
//!
//! A demo run is identified by a 6-digit decimal PIN in lieu of real user
//! accounts. The PIN is layered onto the natural keys of every session-owned
//! entity (`demo_pin` column). It is issued once per session, never rotated,
//! and never checked for collisions against stored rows.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Number of digits in a demo PIN.
pub const PIN_LENGTH: usize = 6;

/// A validated 6-digit demo session PIN.
///
/// Passed explicitly to every gateway call rather than held in ambient
/// state, so multiple sessions can coexist in one process (and in tests).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DemoPin(String);

impl DemoPin {
    /// Generate a random PIN in `100000..=999999`.
    ///
    /// Generation cannot fail and makes no uniqueness guarantee; the demo
    /// tolerates the (one-in-900k) collision by simply sharing rows.
    pub fn generate() -> Self {
        let n: u32 = rand::rng().random_range(100_000..1_000_000);
        Self(n.to_string())
    }

    /// Parse and validate a PIN string: exactly six ASCII digits, no
    /// leading zero (generated PINs start at 100000).
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s.len() != PIN_LENGTH
            || !s.bytes().all(|b| b.is_ascii_digit())
            || s.starts_with('0')
        {
            return Err(CoreError::Validation(format!(
                "Invalid demo PIN '{s}'. Must be a 6-digit number"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// The PIN as a string slice (what gets stored in `demo_pin` columns).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DemoPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DemoPin {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DemoPin> for String {
    fn from(pin: DemoPin) -> String {
        pin.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_pin_is_six_digits() {
        for _ in 0..100 {
            let pin = DemoPin::generate();
            assert_eq!(pin.as_str().len(), PIN_LENGTH);
            assert!(pin.as_str().bytes().all(|b| b.is_ascii_digit()));
            assert!(!pin.as_str().starts_with('0'));
        }
    }

    #[test]
    fn generated_pin_round_trips_through_parse() {
        let pin = DemoPin::generate();
        let parsed = DemoPin::parse(pin.as_str()).unwrap();
        assert_eq!(pin, parsed);
    }

    #[test]
    fn parse_accepts_valid_pin() {
        assert!(DemoPin::parse("123456").is_ok());
        assert!(DemoPin::parse("999999").is_ok());
        assert!(DemoPin::parse("100000").is_ok());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(DemoPin::parse("12345").is_err());
        assert!(DemoPin::parse("1234567").is_err());
        assert!(DemoPin::parse("").is_err());
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(DemoPin::parse("12a456").is_err());
        assert!(DemoPin::parse("12 456").is_err());
    }

    #[test]
    fn parse_rejects_leading_zero() {
        assert!(DemoPin::parse("012345").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let pin = DemoPin::parse("654321").unwrap();
        let json = serde_json::to_string(&pin).unwrap();
        assert_eq!(json, "\"654321\"");
        let back: DemoPin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pin);
    }

    #[test]
    fn serde_rejects_invalid_pin() {
        assert!(serde_json::from_str::<DemoPin>("\"abc\"").is_err());
    }
}
