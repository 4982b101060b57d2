//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a transition may run.
//! Strict mode attaches one to each mutating action as its precondition.

use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use tidyroom::core::Guard;
/// use tidyroom::room::{Clothes, RoomState};
///
/// let clothes_on_floor = Guard::new(|room: &RoomState| room.clothes == Clothes::Floor);
///
/// assert!(clothes_on_floor.check(&RoomState::dirty()));
/// assert!(!clothes_on_floor.check(&RoomState::dirty().with(Clothes::Hand.into())));
/// ```
pub struct Guard<S> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&S)>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Books, Clothes, RoomState, Wastebin};

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &RoomState| s.wastebin == Wastebin::Full);

        assert!(guard.check(&RoomState::dirty()));
        assert!(!guard.check(&RoomState::dirty().with(Wastebin::Empty.into())));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = RoomState::dirty();
        let guard = Guard::new(|s: &RoomState| s.books != Books::Hand);

        let result1 = guard.check(&state);
        let result2 = guard.check(&state);

        assert_eq!(result1, result2);
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard = Guard::new(|s: &RoomState| {
            matches!(s.clothes, Clothes::Floor | Clothes::Hand) && s.books == Books::Scattered
        });

        assert!(guard.check(&RoomState::dirty()));
        assert!(guard.check(&RoomState::dirty().with(Clothes::Hand.into())));
        assert!(!guard.check(&RoomState::dirty().with(Clothes::Hamper.into())));
        assert!(!guard.check(&RoomState::dirty().with(Books::Shelf.into())));
    }
}
