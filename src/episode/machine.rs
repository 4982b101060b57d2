//! Episode that threads one room state through successive tool calls.

use crate::actions::{apply, Action, ActionOutcome};
use crate::budget::{LimitViolation, StepBudget, StepContext};
use crate::config::RoomConfig;
use crate::core::{StateHistory, StateTransition};
use crate::episode::error::EpisodeError;
use crate::episode::oracle::{Decision, DecisionOracle, ToolCall};
use crate::room::{serialize, GoalState, RoomState};
use chrono::{DateTime, Utc};
use stillwater::validation::Validation;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// How a call to [`Episode::run`] ended.
#[derive(Clone, Debug, PartialEq)]
pub enum EpisodeOutcome {
    /// The oracle gave a final answer.
    Finished {
        answer: String,
        steps: usize,
        clean: bool,
    },
    /// The oracle was still invoking tools when a limit was hit.
    BudgetExhausted {
        steps: usize,
        clean: bool,
        violations: Vec<LimitViolation>,
    },
}

impl EpisodeOutcome {
    /// Whether the room matched the goal when the episode ended.
    pub fn is_clean(&self) -> bool {
        match self {
            EpisodeOutcome::Finished { clean, .. } => *clean,
            EpisodeOutcome::BudgetExhausted { clean, .. } => *clean,
        }
    }

    pub fn steps(&self) -> usize {
        match self {
            EpisodeOutcome::Finished { steps, .. } => *steps,
            EpisodeOutcome::BudgetExhausted { steps, .. } => *steps,
        }
    }
}

/// One cleaning episode.
///
/// The state returned by the latest mutating action is authoritative; the
/// input a caller passed in is never aliased.
#[derive(Debug)]
pub struct Episode {
    id: Uuid,
    config: RoomConfig,
    budget: StepBudget,
    current: RoomState,
    history: StateHistory<RoomState>,
    steps: usize,
    started_at: DateTime<Utc>,
}

impl Episode {
    /// Create an episode in the configured initial state
    pub fn new(config: RoomConfig) -> Self {
        let id = Uuid::new_v4();
        info!(episode = %id, initial = %config.initial, "starting episode");
        Self {
            id,
            budget: config.budget(),
            current: config.initial,
            config,
            history: StateHistory::new(),
            steps: 0,
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn goal(&self) -> &GoalState {
        &self.config.goal
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &RoomState {
        &self.current
    }

    /// Check if the current state meets the goal (pure)
    pub fn is_clean(&self) -> bool {
        self.config.goal.is_met_by(&self.current)
    }

    /// Number of tool calls made so far, failed ones included
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<RoomState> {
        &self.history
    }

    /// Serialized current state, the first observation handed to an oracle.
    pub fn observe(&self) -> String {
        serialize(&self.current)
    }

    /// Run one tool call and return its reply text.
    ///
    /// Every call that passes the budget check counts as a step, even when
    /// the tool name is unknown or the input is rejected.
    pub fn invoke(&mut self, call: &ToolCall) -> Result<String, EpisodeError> {
        let step = self.steps + 1;
        let context = StepContext {
            step,
            started_at: self.started_at,
        };
        if let Validation::Failure(errors) = self.budget.enforce(&context) {
            let violations: Vec<LimitViolation> = errors.iter().cloned().collect();
            warn!(episode = %self.id, step, "step budget exhausted");
            return Err(EpisodeError::BudgetExhausted { violations });
        }
        self.steps = step;

        let action: Action = call.action.parse()?;
        let outcome = apply(action, call.input.clone(), &self.config.goal, self.config.mode)?;

        if let ActionOutcome::Moved { from, to, .. } = outcome {
            self.history = self.history.record(StateTransition {
                action: action.name().to_string(),
                from,
                to,
                timestamp: Utc::now(),
                step,
            });
            self.current = to;
        }

        debug!(episode = %self.id, step, action = %action, state = %self.current, "tool call completed");
        Ok(outcome.observation())
    }

    /// Drive the episode with `oracle` until it finishes or a limit is hit.
    ///
    /// Tool errors are handed back to the oracle as observations so it can
    /// correct itself on the next step.
    pub fn run<O: DecisionOracle>(&mut self, oracle: &mut O) -> EpisodeOutcome {
        let mut observation = self.observe();

        loop {
            let call = match oracle.decide(&observation) {
                Decision::Invoke(call) => call,
                Decision::Finish(answer) => {
                    info!(episode = %self.id, steps = self.steps, clean = self.is_clean(), "episode finished");
                    return EpisodeOutcome::Finished {
                        answer,
                        steps: self.steps,
                        clean: self.is_clean(),
                    };
                }
            };

            observation = match self.invoke(&call) {
                Ok(reply) => reply,
                Err(EpisodeError::BudgetExhausted { violations }) => {
                    return EpisodeOutcome::BudgetExhausted {
                        steps: self.steps,
                        clean: self.is_clean(),
                        violations,
                    };
                }
                Err(err) => {
                    warn!(episode = %self.id, step = self.steps, error = %err, "tool call failed");
                    err.to_string()
                }
            };
        }
    }
}
