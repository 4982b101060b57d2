//! Budget enforcement using Validation.

use crate::budget::context::StepContext;
use crate::budget::violations::LimitViolation;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Limits an episode must stay within.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepBudget {
    pub(crate) max_steps: Option<usize>,
    pub(crate) timeout: Option<Duration>,
}

impl StepBudget {
    /// No limits at all.
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Check every limit against the step about to run.
    /// Returns `Validation::Failure` with ALL broken limits.
    pub fn enforce(&self, context: &StepContext) -> Validation<(), NonEmptyVec<LimitViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<LimitViolation>>> = Vec::new();

        if let Some(max) = self.max_steps {
            let check = if context.step > max {
                Validation::fail(LimitViolation::MaxStepsExceeded {
                    max,
                    current: context.step,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if let Some(timeout) = self.timeout {
            let elapsed = context.elapsed();
            let check = if elapsed > timeout {
                Validation::fail(LimitViolation::TimeoutExceeded { timeout, elapsed })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::builder::BudgetBuilder;
    use chrono::Utc;

    #[test]
    fn enforcement_accumulates_all_violations() {
        let budget = BudgetBuilder::new()
            .max_steps(3)
            .timeout(Duration::from_secs(5))
            .build();

        let context = StepContext {
            step: 5,
            started_at: Utc::now() - chrono::Duration::seconds(10),
        };

        match budget.enforce(&context) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, LimitViolation::MaxStepsExceeded { max: 3, current: 5 })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, LimitViolation::TimeoutExceeded { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn last_allowed_step_passes() {
        let budget = BudgetBuilder::new().max_steps(10).build();

        let at_limit = StepContext {
            step: 10,
            started_at: Utc::now(),
        };
        assert!(budget.enforce(&at_limit).is_success());

        let over = StepContext {
            step: 11,
            started_at: Utc::now(),
        };
        assert!(budget.enforce(&over).is_failure());
    }

    #[test]
    fn timeout_enforcement() {
        let budget = BudgetBuilder::new().timeout(Duration::from_secs(1)).build();

        let fresh = StepContext {
            step: 1,
            started_at: Utc::now(),
        };
        assert!(budget.enforce(&fresh).is_success());

        let stale = StepContext {
            step: 1,
            started_at: Utc::now() - chrono::Duration::seconds(5),
        };
        assert!(budget.enforce(&stale).is_failure());
    }

    #[test]
    fn unlimited_budget_always_passes() {
        let context = StepContext {
            step: usize::MAX,
            started_at: Utc::now() - chrono::Duration::days(1),
        };
        assert!(StepBudget::unlimited().enforce(&context).is_success());
    }
}
