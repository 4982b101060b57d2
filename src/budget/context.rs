//! Context provided to budget checks.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Position of the step about to run within its episode.
#[derive(Clone, Copy, Debug)]
pub struct StepContext {
    /// 1-based number of the step about to run
    pub step: usize,
    pub started_at: DateTime<Utc>,
}

impl StepContext {
    /// Elapsed time since the episode started
    pub fn elapsed(&self) -> Duration {
        let now = Utc::now();
        now.signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
