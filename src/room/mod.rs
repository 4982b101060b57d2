//! The room model: tracked items, state snapshots, the goal, and the
//! coercion boundary between text and structured states.

mod coerce;
mod error;
mod items;
mod state;

pub use coerce::{coerce, serialize, StateInput};
pub use error::{StateError, StateViolation};
pub use items::{Books, Clothes, Item, Placement, Wastebin};
pub use state::{is_clean, GoalState, RoomState};
