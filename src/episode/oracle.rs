//! The seam where a decision-maker plugs into an episode.

use crate::room::StateInput;
use std::collections::VecDeque;

/// A request to run one named tool against a state.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolCall {
    /// Tool name, resolved against [`Action`](crate::actions::Action) at call time
    pub action: String,
    pub input: StateInput,
}

impl ToolCall {
    pub fn new(action: impl Into<String>, input: impl Into<StateInput>) -> Self {
        Self {
            action: action.into(),
            input: input.into(),
        }
    }
}

/// What the oracle wants to do next.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    Invoke(ToolCall),
    /// Stop with a final answer.
    Finish(String),
}

/// Picks the next tool call from the latest observation.
///
/// The first observation is the serialized initial state; after that it is
/// whatever the previous tool call returned, including error text.
pub trait DecisionOracle {
    fn decide(&mut self, observation: &str) -> Decision;
}

impl<F> DecisionOracle for F
where
    F: FnMut(&str) -> Decision,
{
    fn decide(&mut self, observation: &str) -> Decision {
        self(observation)
    }
}

/// Replays a fixed list of decisions, then finishes.
#[derive(Clone, Debug, Default)]
pub struct ScriptedOracle {
    script: VecDeque<Decision>,
    observations: Vec<String>,
}

/// Answer given once the script runs out.
pub(crate) const SCRIPT_EXHAUSTED: &str = "Script exhausted.";

impl ScriptedOracle {
    pub fn new(script: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            script: script.into_iter().collect(),
            observations: Vec::new(),
        }
    }

    /// Invoke each named tool in order, passing the previous observation as input.
    ///
    /// The first call receives the initial observation; check_final_step's
    /// reply is not a state, so its successor receives the last state seen.
    pub fn chained(actions: &[&str]) -> ChainedOracle {
        ChainedOracle {
            actions: actions.iter().map(|a| a.to_string()).collect(),
            last_state: None,
            answer: None,
        }
    }

    /// Every observation seen so far, oldest first.
    pub fn observations(&self) -> &[String] {
        &self.observations
    }
}

impl DecisionOracle for ScriptedOracle {
    fn decide(&mut self, observation: &str) -> Decision {
        self.observations.push(observation.to_string());
        self.script
            .pop_front()
            .unwrap_or_else(|| Decision::Finish(SCRIPT_EXHAUSTED.to_string()))
    }
}

/// Oracle built by [`ScriptedOracle::chained`].
#[derive(Clone, Debug)]
pub struct ChainedOracle {
    actions: VecDeque<String>,
    last_state: Option<String>,
    answer: Option<String>,
}

impl DecisionOracle for ChainedOracle {
    fn decide(&mut self, observation: &str) -> Decision {
        if observation.trim_start().starts_with('{') {
            self.last_state = Some(observation.to_string());
            self.answer = None;
        } else {
            self.answer = Some(observation.to_string());
        }

        match self.actions.pop_front() {
            Some(action) => {
                let input = self
                    .last_state
                    .clone()
                    .unwrap_or_else(|| observation.to_string());
                Decision::Invoke(ToolCall::new(action, input))
            }
            None => Decision::Finish(
                self.answer
                    .take()
                    .unwrap_or_else(|| SCRIPT_EXHAUSTED.to_string()),
            ),
        }
    }
}
