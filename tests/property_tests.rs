//! Property-based tests for the room model and actions.
//!
//! These tests use proptest to verify properties hold across
//! every combination of item statuses.

use proptest::prelude::*;
use tidyroom::actions::{apply, Action, ActionMode, NOT_TIDY_MESSAGE, TIDY_MESSAGE};
use tidyroom::room::{
    coerce, is_clean, serialize, Books, Clothes, GoalState, Item, RoomState, StateError,
    Wastebin,
};

prop_compose! {
    fn arbitrary_state()(
        clothes in prop::sample::select(Clothes::ALL),
        books in prop::sample::select(Books::ALL),
        wastebin in prop::sample::select(Wastebin::ALL),
    ) -> RoomState {
        RoomState::new(clothes, books, wastebin)
    }
}

prop_compose! {
    fn arbitrary_action()(action in prop::sample::select(Action::ALL.to_vec())) -> Action {
        action
    }
}

fn run(action: Action, state: RoomState) -> RoomState {
    *apply(action, state, &GoalState::tidy(), ActionMode::Lenient)
        .unwrap()
        .state()
}

proptest! {
    #[test]
    fn is_clean_iff_every_item_is_tidy(state in arbitrary_state()) {
        let expected = state.clothes == Clothes::Hamper
            && state.books == Books::Shelf
            && state.wastebin == Wastebin::Empty;
        prop_assert_eq!(is_clean(&state, &GoalState::tidy()), expected);
    }

    #[test]
    fn action_changes_at_most_its_own_item(state in arbitrary_state(), action in arbitrary_action()) {
        let next = run(action, state);

        for item in Item::ALL {
            if Some(item) != action.item() {
                prop_assert_eq!(next.get(item), state.get(item));
            }
        }
        if let Some(placement) = action.placement() {
            prop_assert_eq!(next.get(placement.item()), placement);
        }
    }

    #[test]
    fn actions_are_idempotent(state in arbitrary_state(), action in arbitrary_action()) {
        let once = run(action, state);
        let twice = run(action, once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn coerce_round_trips_serialize(state in arbitrary_state()) {
        prop_assert_eq!(coerce(serialize(&state)).unwrap(), state);
    }

    #[test]
    fn single_quoted_text_matches_double_quoted(state in arbitrary_state()) {
        let double = serialize(&state);
        let single = double.replace('"', "'");
        prop_assert_eq!(coerce(single).unwrap(), coerce(double).unwrap());
    }

    #[test]
    fn check_final_step_agrees_with_goal(state in arbitrary_state()) {
        let reply = apply(Action::CheckFinalStep, state, &GoalState::tidy(), ActionMode::Lenient)
            .unwrap()
            .observation();
        let expected = if is_clean(&state, &GoalState::tidy()) {
            TIDY_MESSAGE
        } else {
            NOT_TIDY_MESSAGE
        };
        prop_assert_eq!(reply, expected);
    }

    #[test]
    fn strict_mode_matches_lenient_when_allowed(state in arbitrary_state(), action in arbitrary_action()) {
        let strict = apply(action, state, &GoalState::tidy(), ActionMode::Strict);
        match strict {
            Ok(outcome) => prop_assert_eq!(*outcome.state(), run(action, state)),
            Err(_) => {
                let allowed = action.precondition().map_or(true, |guard| guard.check(&state));
                prop_assert!(!allowed);
            }
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,64}") {
        match coerce(text) {
            Ok(_) | Err(StateError::InvalidStateFormat { .. }) => {}
        }
    }
}
