//! Core state machine types and logic.
//!
//! This module contains the pure functional core shared by the room model:
//! - Item states via the `State` trait
//! - Guard predicates for strict-mode preconditions
//! - Immutable history of applied actions
//!
//! All logic in this module is pure (no side effects).

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
