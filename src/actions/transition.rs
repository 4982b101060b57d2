//! Applying actions to room states.

use super::{Action, ActionError};
use crate::room::{coerce, is_clean, serialize, GoalState, RoomState, StateInput};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reply of `check_final_step` when the goal is met.
pub const TIDY_MESSAGE: &str = "The room is tidy. Final state achieved.";

/// Reply of `check_final_step` when it is not.
pub const NOT_TIDY_MESSAGE: &str = "The room is not yet tidy. Continue working.";

/// Whether mutating actions check their preconditions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMode {
    /// Every transition is allowed, whatever the item's current status.
    #[default]
    Lenient,
    /// A transition whose precondition does not hold fails with
    /// `ActionError::InvalidTransition`.
    Strict,
}

/// Result of applying one action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActionOutcome {
    /// A mutating action ran; `to` is the authoritative next state.
    Moved {
        action: Action,
        from: RoomState,
        to: RoomState,
    },
    /// `check_final_step` ran.
    Checked { state: RoomState, clean: bool },
}

impl ActionOutcome {
    /// The state the caller should carry forward.
    pub fn state(&self) -> &RoomState {
        match self {
            ActionOutcome::Moved { to, .. } => to,
            ActionOutcome::Checked { state, .. } => state,
        }
    }

    /// Text handed back through the tool interface.
    pub fn observation(&self) -> String {
        match self {
            ActionOutcome::Moved { to, .. } => serialize(to),
            ActionOutcome::Checked { clean: true, .. } => TIDY_MESSAGE.to_string(),
            ActionOutcome::Checked { clean: false, .. } => NOT_TIDY_MESSAGE.to_string(),
        }
    }
}

/// Apply `action` to `input`.
///
/// The input is coerced first; a mutating action then sets exactly one field
/// and leaves the other two untouched.
///
/// # Example
///
/// ```rust
/// use tidyroom::actions::{apply, Action, ActionMode};
/// use tidyroom::room::{Clothes, GoalState, RoomState};
///
/// let outcome = apply(
///     Action::PickUpClothes,
///     RoomState::dirty(),
///     &GoalState::tidy(),
///     ActionMode::Lenient,
/// )
/// .unwrap();
///
/// assert_eq!(outcome.state().clothes, Clothes::Hand);
/// ```
pub fn apply(
    action: Action,
    input: impl Into<StateInput>,
    goal: &GoalState,
    mode: ActionMode,
) -> Result<ActionOutcome, ActionError> {
    let from = coerce(input)?;

    let Some(placement) = action.placement() else {
        let clean = is_clean(&from, goal);
        debug!(action = %action, clean, "checked room");
        return Ok(ActionOutcome::Checked { state: from, clean });
    };

    if mode == ActionMode::Strict {
        if let Some(guard) = action.precondition() {
            if !guard.check(&from) {
                let item = placement.item();
                return Err(ActionError::InvalidTransition {
                    action,
                    item,
                    found: from.get(item).label(),
                    expected: action.expected(),
                });
            }
        }
    }

    let to = from.with(placement);
    debug!(action = %action, %placement, "applied action");
    Ok(ActionOutcome::Moved { action, from, to })
}

/// Apply `action` against the tidy goal in lenient mode and return the
/// tool-call reply text.
pub fn invoke(action: Action, input: impl Into<StateInput>) -> Result<String, ActionError> {
    apply(action, input, &GoalState::tidy(), ActionMode::Lenient).map(|o| o.observation())
}

/// Report whether the room matches the tidy goal.
pub fn check_final_step(input: impl Into<StateInput>) -> Result<String, ActionError> {
    invoke(Action::CheckFinalStep, input)
}

/// Picks up clothes from the floor and holds them in the hand.
pub fn pick_up_clothes(input: impl Into<StateInput>) -> Result<String, ActionError> {
    invoke(Action::PickUpClothes, input)
}

/// Puts clothes from the hand into the hamper.
pub fn put_clothes_in_hamper(input: impl Into<StateInput>) -> Result<String, ActionError> {
    invoke(Action::PutClothesInHamper, input)
}

/// Picks up books and holds them in the hand.
pub fn pick_up_books(input: impl Into<StateInput>) -> Result<String, ActionError> {
    invoke(Action::PickUpBooks, input)
}

/// Places books from the hand on the shelf.
pub fn place_books_on_shelf(input: impl Into<StateInput>) -> Result<String, ActionError> {
    invoke(Action::PlaceBooksOnShelf, input)
}

/// Empties the wastebin.
pub fn empty_wastebin(input: impl Into<StateInput>) -> Result<String, ActionError> {
    invoke(Action::EmptyWastebin, input)
}
