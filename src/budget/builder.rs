//! Builder API for step budgets.

use crate::budget::rules::StepBudget;
use std::time::Duration;

/// Builder for [`StepBudget`]
#[derive(Debug, Default)]
pub struct BudgetBuilder {
    max_steps: Option<usize>,
    timeout: Option<Duration>,
}

impl BudgetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of action invocations
    pub fn max_steps(mut self, n: usize) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Set the wall-clock limit for the whole episode
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn build(self) -> StepBudget {
        StepBudget {
            max_steps: self.max_steps,
            timeout: self.timeout,
        }
    }
}
