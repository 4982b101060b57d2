//! Build errors for episodes.

use thiserror::Error;

/// Errors that can occur when building an episode.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Step budget is zero. Call .max_steps(n) with n > 0")]
    ZeroStepBudget,

    #[error("Timeout is zero. Call .timeout_secs(n) with n > 0")]
    ZeroTimeout,
}
