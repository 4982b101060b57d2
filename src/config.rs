//! Episode configuration.
//!
//! The initial state, the goal and the limits are plain values injected into
//! each [`Episode`](crate::episode::Episode); nothing is process-global, so
//! any number of episodes can run side by side.

use crate::actions::ActionMode;
use crate::budget::{BudgetBuilder, StepBudget};
use crate::room::{GoalState, RoomState};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Step budget used when none is configured.
pub const DEFAULT_MAX_STEPS: usize = 10;

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything an episode needs to start.
///
/// Every field is optional in the serialized form.
///
/// # Example
///
/// ```rust
/// use tidyroom::actions::ActionMode;
/// use tidyroom::config::RoomConfig;
/// use tidyroom::room::RoomState;
///
/// let config = RoomConfig::from_json(r#"{"max_steps": 6, "mode": "strict"}"#).unwrap();
///
/// assert_eq!(config.max_steps, 6);
/// assert_eq!(config.mode, ActionMode::Strict);
/// assert_eq!(config.initial, RoomState::dirty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoomConfig {
    pub initial: RoomState,
    pub goal: GoalState,
    pub max_steps: usize,
    pub timeout_secs: Option<u64>,
    pub mode: ActionMode,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            initial: RoomState::dirty(),
            goal: GoalState::tidy(),
            max_steps: DEFAULT_MAX_STEPS,
            timeout_secs: None,
            mode: ActionMode::Lenient,
        }
    }
}

impl RoomConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Limits derived from `max_steps` and `timeout_secs`.
    pub fn budget(&self) -> StepBudget {
        let builder = BudgetBuilder::new().max_steps(self.max_steps);
        match self.timeout() {
            Some(timeout) => builder.timeout(timeout).build(),
            None => builder.build(),
        }
    }
}
