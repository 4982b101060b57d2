//! The six named actions exposed to the agent driver.
//!
//! Five actions each move exactly one item to a fixed status; the sixth,
//! `check_final_step`, only reports whether the goal has been reached.
//! Every action takes a [`StateInput`](crate::room::StateInput) and answers
//! with text, because the caller talks to them through a text tool-call
//! interface.

mod error;
mod transition;

pub use error::ActionError;
pub use transition::{
    apply, check_final_step, empty_wastebin, invoke, pick_up_books, pick_up_clothes,
    place_books_on_shelf, put_clothes_in_hamper, ActionMode, ActionOutcome, NOT_TIDY_MESSAGE,
    TIDY_MESSAGE,
};

use crate::core::Guard;
use crate::room::{Books, Clothes, Item, Placement, RoomState, Wastebin};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named action callable through the tool interface.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    CheckFinalStep,
    PickUpClothes,
    PutClothesInHamper,
    PickUpBooks,
    PlaceBooksOnShelf,
    EmptyWastebin,
}

impl Action {
    /// Every action, in the order they are offered to the driver.
    pub const ALL: [Action; 6] = [
        Action::CheckFinalStep,
        Action::PickUpClothes,
        Action::PutClothesInHamper,
        Action::PickUpBooks,
        Action::PlaceBooksOnShelf,
        Action::EmptyWastebin,
    ];

    /// Tool name used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Action::CheckFinalStep => "check_final_step",
            Action::PickUpClothes => "pick_up_clothes",
            Action::PutClothesInHamper => "put_clothes_in_hamper",
            Action::PickUpBooks => "pick_up_books",
            Action::PlaceBooksOnShelf => "place_books_on_shelf",
            Action::EmptyWastebin => "empty_wastebin",
        }
    }

    /// Tool description shown to the decision oracle.
    pub fn description(&self) -> &'static str {
        match self {
            Action::CheckFinalStep => "Check whether the current state matches the final state",
            Action::PickUpClothes => "Picks up clothes from the floor and holds in the hand",
            Action::PutClothesInHamper => "Puts clothes from hand into the hamper",
            Action::PickUpBooks => "Picks up books from the floor and holds in the hand",
            Action::PlaceBooksOnShelf => "Place books from hand to the shelf",
            Action::EmptyWastebin => "Empties the wastebin if it is full.",
        }
    }

    /// The single field this action writes, or `None` for the observer.
    pub fn placement(&self) -> Option<Placement> {
        match self {
            Action::CheckFinalStep => None,
            Action::PickUpClothes => Some(Clothes::Hand.into()),
            Action::PutClothesInHamper => Some(Clothes::Hamper.into()),
            Action::PickUpBooks => Some(Books::Hand.into()),
            Action::PlaceBooksOnShelf => Some(Books::Shelf.into()),
            Action::EmptyWastebin => Some(Wastebin::Empty.into()),
        }
    }

    pub fn mutates(&self) -> bool {
        self.placement().is_some()
    }

    /// Statuses the moved item must be in for strict mode to allow the action.
    pub fn expected(&self) -> &'static [&'static str] {
        match self {
            Action::CheckFinalStep => &[],
            Action::PickUpClothes => &["floor"],
            Action::PutClothesInHamper => &["hand"],
            Action::PickUpBooks => &["scattered", "shelf"],
            Action::PlaceBooksOnShelf => &["hand"],
            Action::EmptyWastebin => &["full"],
        }
    }

    /// Strict-mode precondition, or `None` for the observer.
    pub fn precondition(&self) -> Option<Guard<RoomState>> {
        let guard = match self {
            Action::CheckFinalStep => return None,
            Action::PickUpClothes => Guard::new(|s: &RoomState| s.clothes == Clothes::Floor),
            Action::PutClothesInHamper => Guard::new(|s: &RoomState| s.clothes == Clothes::Hand),
            Action::PickUpBooks => Guard::new(|s: &RoomState| s.books != Books::Hand),
            Action::PlaceBooksOnShelf => Guard::new(|s: &RoomState| s.books == Books::Hand),
            Action::EmptyWastebin => Guard::new(|s: &RoomState| s.wastebin == Wastebin::Full),
        };
        Some(guard)
    }

    /// Item this action moves.
    pub fn item(&self) -> Option<Item> {
        self.placement().map(|p| p.item())
    }

    pub fn tool_names() -> Vec<&'static str> {
        Action::ALL.iter().map(Action::name).collect()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Action::ALL
            .into_iter()
            .find(|action| action.name() == name)
            .ok_or_else(|| ActionError::UnknownAction {
                name: name.to_string(),
                available: Action::tool_names().join(", "),
            })
    }
}

/// Name and description of one tool, as handed to a prompt.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every tool in offer order.
pub fn catalog() -> Vec<ToolSpec> {
    Action::ALL
        .iter()
        .map(|action| ToolSpec {
            name: action.name(),
            description: action.description(),
        })
        .collect()
}
