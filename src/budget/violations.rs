//! Budget violations.

use std::time::Duration;
use thiserror::Error;

/// A limit the next step would break.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LimitViolation {
    #[error("Maximum steps ({max}) exceeded (current: {current})")]
    MaxStepsExceeded { max: usize, current: usize },

    #[error("Timeout ({timeout:?}) exceeded (elapsed: {elapsed:?})")]
    TimeoutExceeded {
        timeout: Duration,
        elapsed: Duration,
    },
}
