//! Tidyroom: a room-tidying state machine exposed as agent tools
//!
//! A room has three tracked items, each with a closed set of statuses. Six
//! named actions move items toward the goal or report whether it is met.
//! Actions accept a typed state, a JSON value or loose text, because they are
//! meant to be called through a language model's text tool-call interface.
//!
//! # Core Concepts
//!
//! - **RoomState**: the status of clothes, books and the wastebin
//! - **GoalState**: the target a room is checked against
//! - **Coercion**: the single boundary between text and typed states
//! - **Actions**: unconditional single-field transitions plus one observer
//! - **Episode**: threads one authoritative state through successive tool calls
//!
//! # Example
//!
//! ```rust
//! use tidyroom::actions::{
//!     check_final_step, empty_wastebin, pick_up_books, pick_up_clothes,
//!     place_books_on_shelf, put_clothes_in_hamper, TIDY_MESSAGE,
//! };
//!
//! let state = "{'clothes': 'floor', 'books': 'scattered', 'wastebin': 'full'}";
//! let state = pick_up_clothes(state).unwrap();
//! let state = put_clothes_in_hamper(state).unwrap();
//! let state = pick_up_books(state).unwrap();
//! let state = place_books_on_shelf(state).unwrap();
//! let state = empty_wastebin(state).unwrap();
//!
//! assert_eq!(check_final_step(state).unwrap(), TIDY_MESSAGE);
//! ```

pub mod actions;
pub mod budget;
pub mod builder;
pub mod config;
pub mod core;
pub mod episode;
pub mod room;

// Re-export commonly used types
pub use actions::{Action, ActionError, ActionMode};
pub use builder::EpisodeBuilder;
pub use config::RoomConfig;
pub use episode::{Episode, EpisodeOutcome, ToolCall};
pub use room::{coerce, is_clean, GoalState, RoomState, StateError, StateInput};
