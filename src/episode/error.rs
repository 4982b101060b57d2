//! Episode errors.

use crate::actions::ActionError;
use crate::budget::LimitViolation;
use thiserror::Error;

/// Errors that can occur while driving an episode.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EpisodeError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("Step budget exhausted: {}", join(.violations))]
    BudgetExhausted { violations: Vec<LimitViolation> },
}

fn join(violations: &[LimitViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
