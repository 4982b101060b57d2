//! Action errors.

use super::Action;
use crate::room::{Item, StateError};
use thiserror::Error;

/// Errors that can occur when resolving or applying an action.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    #[error(transparent)]
    State(#[from] StateError),

    /// Only raised in strict mode.
    #[error("Cannot {action}: {item} is '{found}', expected one of {expected:?}")]
    InvalidTransition {
        action: Action,
        item: Item,
        found: &'static str,
        expected: &'static [&'static str],
    },

    #[error("Unknown action '{name}'. Available actions: {available}")]
    UnknownAction { name: String, available: String },
}
