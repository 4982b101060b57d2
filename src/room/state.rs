//! Room state snapshots and the goal they are checked against.

use super::items::{Books, Clothes, Item, Placement, Wastebin};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Snapshot of every tracked item in the room.
///
/// The key set is exactly `clothes`, `books` and `wastebin`; serde rejects
/// unknown keys and the fields make missing keys unrepresentable. Fields are
/// declared in wire order, so `Display` renders
/// `{"clothes":"floor","books":"scattered","wastebin":"full"}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomState {
    pub clothes: Clothes,
    pub books: Books,
    pub wastebin: Wastebin,
}

impl RoomState {
    pub fn new(clothes: Clothes, books: Books, wastebin: Wastebin) -> Self {
        Self {
            clothes,
            books,
            wastebin,
        }
    }

    /// The untidy room an episode starts from by default.
    pub fn dirty() -> Self {
        Self::new(Clothes::Floor, Books::Scattered, Wastebin::Full)
    }

    /// The tidy room.
    pub fn tidy() -> Self {
        Self::new(Clothes::Hamper, Books::Shelf, Wastebin::Empty)
    }

    pub fn get(&self, item: Item) -> Placement {
        match item {
            Item::Clothes => Placement::Clothes(self.clothes),
            Item::Books => Placement::Books(self.books),
            Item::Wastebin => Placement::Wastebin(self.wastebin),
        }
    }

    /// Return a copy of this state with one item moved.
    pub fn with(&self, placement: Placement) -> Self {
        let mut next = *self;
        match placement {
            Placement::Clothes(c) => next.clothes = c,
            Placement::Books(b) => next.books = b,
            Placement::Wastebin(w) => next.wastebin = w,
        }
        next
    }

    /// Items whose status differs from `other`.
    pub fn diff(&self, other: &RoomState) -> Vec<Item> {
        Item::ALL
            .into_iter()
            .filter(|item| self.get(*item) != other.get(*item))
            .collect()
    }
}

impl Default for RoomState {
    fn default() -> Self {
        Self::dirty()
    }
}

impl fmt::Display for RoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// The target a room is checked against.
///
/// Immutable once built; each episode carries its own copy.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalState(RoomState);

impl GoalState {
    pub fn new(target: RoomState) -> Self {
        Self(target)
    }

    /// `{clothes: hamper, books: shelf, wastebin: empty}`.
    pub fn tidy() -> Self {
        Self(RoomState::tidy())
    }

    pub fn target(&self) -> &RoomState {
        &self.0
    }

    pub fn is_met_by(&self, state: &RoomState) -> bool {
        self.0 == *state
    }

    /// Goal check over an arbitrary JSON value.
    ///
    /// Never fails: a non-object, an absent key or a mismatched value all
    /// count as not met. Extra keys are ignored.
    pub fn is_met_by_value(&self, value: &Value) -> bool {
        let Some(map) = value.as_object() else {
            return false;
        };
        Item::ALL.into_iter().all(|item| {
            map.get(item.key()).and_then(Value::as_str) == Some(self.0.get(item).label())
        })
    }
}

impl Default for GoalState {
    fn default() -> Self {
        Self::tidy()
    }
}

/// True iff every item in `state` matches the goal.
pub fn is_clean(state: &RoomState, goal: &GoalState) -> bool {
    goal.is_met_by(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dirty_room_is_not_clean() {
        assert!(!is_clean(&RoomState::dirty(), &GoalState::tidy()));
    }

    #[test]
    fn tidy_room_is_clean() {
        assert!(is_clean(&RoomState::tidy(), &GoalState::tidy()));
    }

    #[test]
    fn one_item_out_of_place_is_not_clean() {
        let goal = GoalState::tidy();
        let tidy = RoomState::tidy();

        assert!(!is_clean(&tidy.with(Clothes::Hand.into()), &goal));
        assert!(!is_clean(&tidy.with(Books::Hand.into()), &goal));
        assert!(!is_clean(&tidy.with(Wastebin::Full.into()), &goal));
    }

    #[test]
    fn custom_goal_is_respected() {
        let goal = GoalState::new(RoomState::new(Clothes::Hand, Books::Shelf, Wastebin::Full));
        let state = RoomState::dirty()
            .with(Clothes::Hand.into())
            .with(Books::Shelf.into());

        assert!(is_clean(&state, &goal));
        assert!(!is_clean(&RoomState::tidy(), &goal));
    }

    #[test]
    fn with_changes_only_the_placed_item() {
        let start = RoomState::dirty();
        let next = start.with(Books::Hand.into());

        assert_eq!(next.books, Books::Hand);
        assert_eq!(next.clothes, start.clothes);
        assert_eq!(next.wastebin, start.wastebin);
        assert_eq!(start.diff(&next), vec![Item::Books]);
    }

    #[test]
    fn display_renders_json_in_key_order() {
        assert_eq!(
            RoomState::dirty().to_string(),
            r#"{"clothes":"floor","books":"scattered","wastebin":"full"}"#
        );
    }

    #[test]
    fn missing_key_value_is_not_clean() {
        let goal = GoalState::tidy();

        assert!(!goal.is_met_by_value(&json!({"clothes": "hamper", "books": "shelf"})));
        assert!(!goal.is_met_by_value(&json!([1, 2, 3])));
        assert!(!goal.is_met_by_value(&json!({"clothes": "hamper", "books": "shelf", "wastebin": 0})));
        assert!(goal.is_met_by_value(
            &json!({"clothes": "hamper", "books": "shelf", "wastebin": "empty", "lamp": "on"})
        ));
    }

    #[test]
    fn unknown_keys_are_rejected_by_serde() {
        let result: Result<RoomState, _> = serde_json::from_value(
            json!({"clothes": "floor", "books": "scattered", "wastebin": "full", "lamp": "on"}),
        );
        assert!(result.is_err());
    }
}
