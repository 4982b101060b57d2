//! Step and time limits for a cleaning episode.
//!
//! Limits are checked with Stillwater's `Validation` so that a step which
//! breaks several limits reports all of them at once.
//!
//! # Example
//!
//! ```rust
//! use tidyroom::budget::{BudgetBuilder, StepContext};
//! use chrono::Utc;
//! use std::time::Duration;
//!
//! let budget = BudgetBuilder::new()
//!     .max_steps(10)
//!     .timeout(Duration::from_secs(30))
//!     .build();
//!
//! let context = StepContext { step: 3, started_at: Utc::now() };
//! assert!(budget.enforce(&context).is_success());
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::BudgetBuilder;
pub use context::StepContext;
pub use rules::StepBudget;
pub use violations::LimitViolation;
