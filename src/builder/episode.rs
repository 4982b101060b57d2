//! Builder for constructing episodes.

use crate::actions::ActionMode;
use crate::builder::error::BuildError;
use crate::config::RoomConfig;
use crate::episode::Episode;
use crate::room::{GoalState, RoomState};

/// Builder for constructing episodes with a fluent API.
///
/// Starts from [`RoomConfig::default`]; each call overrides one setting.
///
/// # Example
///
/// ```
/// use tidyroom::builder::EpisodeBuilder;
/// use tidyroom::room::RoomState;
///
/// let episode = EpisodeBuilder::new()
///     .initial(RoomState::dirty())
///     .max_steps(8)
///     .strict()
///     .build()
///     .unwrap();
///
/// assert_eq!(episode.current_state(), &RoomState::dirty());
/// assert_eq!(episode.steps_taken(), 0);
/// ```
#[derive(Debug, Default)]
pub struct EpisodeBuilder {
    config: RoomConfig,
}

impl EpisodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every setting with a loaded configuration.
    pub fn config(mut self, config: RoomConfig) -> Self {
        self.config = config;
        self
    }

    pub fn initial(mut self, state: RoomState) -> Self {
        self.config.initial = state;
        self
    }

    pub fn goal(mut self, goal: GoalState) -> Self {
        self.config.goal = goal;
        self
    }

    pub fn max_steps(mut self, n: usize) -> Self {
        self.config.max_steps = n;
        self
    }

    /// Wall-clock limit for the whole episode, in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = Some(secs);
        self
    }

    pub fn mode(mut self, mode: ActionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Shorthand for `.mode(ActionMode::Strict)`.
    pub fn strict(self) -> Self {
        self.mode(ActionMode::Strict)
    }

    /// Build the episode.
    /// Returns an error if a limit would stop the episode before its first step.
    pub fn build(self) -> Result<Episode, BuildError> {
        if self.config.max_steps == 0 {
            return Err(BuildError::ZeroStepBudget);
        }
        if self.config.timeout_secs == Some(0) {
            return Err(BuildError::ZeroTimeout);
        }
        Ok(Episode::new(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Books, Clothes, Wastebin};

    #[test]
    fn builder_rejects_zero_step_budget() {
        let result = EpisodeBuilder::new().max_steps(0).build();
        assert!(matches!(result, Err(BuildError::ZeroStepBudget)));
    }

    #[test]
    fn builder_rejects_zero_timeout() {
        let result = EpisodeBuilder::new().timeout_secs(0).build();
        assert!(matches!(result, Err(BuildError::ZeroTimeout)));
    }

    #[test]
    fn fluent_api_overrides_defaults() {
        let goal = GoalState::new(RoomState::new(Clothes::Hamper, Books::Shelf, Wastebin::Full));
        let episode = EpisodeBuilder::new()
            .goal(goal)
            .max_steps(4)
            .strict()
            .build()
            .unwrap();

        assert_eq!(episode.config().goal, goal);
        assert_eq!(episode.config().max_steps, 4);
        assert_eq!(episode.config().mode, ActionMode::Strict);
        assert_eq!(episode.current_state(), &RoomState::dirty());
    }

    #[test]
    fn config_then_override() {
        let config = RoomConfig::from_json(r#"{"max_steps": 3}"#).unwrap();
        let episode = EpisodeBuilder::new()
            .config(config)
            .initial(RoomState::tidy())
            .build()
            .unwrap();

        assert_eq!(episode.config().max_steps, 3);
        assert!(episode.is_clean());
    }
}
