//! Room state errors.

use super::items::Item;
use thiserror::Error;

/// A single problem found while validating a state object.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateViolation {
    #[error("missing key '{item}'")]
    MissingKey { item: Item },

    #[error("unknown key '{key}'")]
    UnknownKey { key: String },

    #[error("'{item}' cannot be {value}, expected one of {expected:?}")]
    InvalidValue {
        item: Item,
        value: String,
        expected: &'static [&'static str],
    },
}

/// Errors raised at the coercion boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    /// Input was not parseable, not an object, or not a valid room state.
    /// `violations` lists every key-level problem when the input was an object.
    #[error("Invalid state format: {reason}. Please provide a valid dict or JSON string")]
    InvalidStateFormat {
        reason: String,
        violations: Vec<StateViolation>,
    },
}

impl StateError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        StateError::InvalidStateFormat {
            reason: reason.into(),
            violations: Vec::new(),
        }
    }

    pub fn from_violations(violations: Vec<StateViolation>) -> Self {
        let reason = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        StateError::InvalidStateFormat { reason, violations }
    }

    pub fn violations(&self) -> &[StateViolation] {
        match self {
            StateError::InvalidStateFormat { violations, .. } => violations,
        }
    }
}
