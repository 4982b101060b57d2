//! State transition history tracking.
//!
//! Provides immutable tracking of the actions applied during an episode,
//! following functional programming principles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied action.
///
/// # Example
///
/// ```rust
/// use tidyroom::core::StateTransition;
/// use tidyroom::room::{Clothes, RoomState};
/// use chrono::Utc;
///
/// let from = RoomState::dirty();
/// let transition = StateTransition {
///     action: "pick_up_clothes".to_string(),
///     from,
///     to: from.with(Clothes::Hand.into()),
///     timestamp: Utc::now(),
///     step: 1,
/// };
/// assert_eq!(transition.to.clothes, Clothes::Hand);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S> {
    /// Tool name of the action that produced this transition
    pub action: String,
    /// The state the action was applied to
    pub from: S,
    /// The state the action returned
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// 1-based step number within the episode
    pub step: usize,
}

/// Ordered history of state transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use tidyroom::core::{StateHistory, StateTransition};
/// use tidyroom::room::{Clothes, RoomState};
/// use chrono::Utc;
///
/// let start = RoomState::dirty();
/// let holding = start.with(Clothes::Hand.into());
/// let stored = holding.with(Clothes::Hamper.into());
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         action: "pick_up_clothes".to_string(),
///         from: start,
///         to: holding,
///         timestamp: Utc::now(),
///         step: 1,
///     })
///     .record(StateTransition {
///         action: "put_clothes_in_hamper".to_string(),
///         from: holding,
///         to: stored,
///         timestamp: Utc::now(),
///         step: 2,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &stored);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: Clone> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Tool names of the recorded actions, in order.
    pub fn actions(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .map(|t| t.action.as_str())
            .collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
