//! Conversion between textual and structured room states.
//!
//! Tool calls arrive either as a structured value or as text produced by a
//! language model. Everything funnels through [`coerce`] before an action
//! touches it, so actions only ever see a validated [`RoomState`].

use super::error::{StateError, StateViolation};
use super::items::Item;
use super::state::RoomState;
use serde_json::{Map, Value};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Input accepted at the action boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum StateInput {
    /// An already typed state.
    Room(RoomState),
    /// A structured JSON value, typically a tool-call argument object.
    Json(Value),
    /// Serialized text. Single quotes are accepted in place of double quotes.
    Text(String),
}

impl From<RoomState> for StateInput {
    fn from(state: RoomState) -> Self {
        StateInput::Room(state)
    }
}

impl From<&RoomState> for StateInput {
    fn from(state: &RoomState) -> Self {
        StateInput::Room(*state)
    }
}

impl From<&str> for StateInput {
    fn from(text: &str) -> Self {
        StateInput::Text(text.to_string())
    }
}

impl From<String> for StateInput {
    fn from(text: String) -> Self {
        StateInput::Text(text)
    }
}

impl From<Value> for StateInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => StateInput::Text(text),
            other => StateInput::Json(other),
        }
    }
}

/// Coerce any accepted input into a validated room state.
///
/// # Example
///
/// ```rust
/// use tidyroom::room::{coerce, RoomState};
///
/// let double = coerce(r#"{"clothes": "floor", "books": "scattered", "wastebin": "full"}"#).unwrap();
/// let single = coerce("{'clothes': 'floor', 'books': 'scattered', 'wastebin': 'full'}").unwrap();
///
/// assert_eq!(double, RoomState::dirty());
/// assert_eq!(single, double);
/// assert!(coerce("not json").is_err());
/// ```
pub fn coerce(input: impl Into<StateInput>) -> Result<RoomState, StateError> {
    match input.into() {
        StateInput::Room(state) => Ok(state),
        StateInput::Json(Value::String(text)) | StateInput::Text(text) => coerce_text(&text),
        StateInput::Json(value) => coerce_value(&value),
    }
}

/// Render a state as the JSON object text returned to the caller.
pub fn serialize(state: &RoomState) -> String {
    state.to_string()
}

fn coerce_text(text: &str) -> Result<RoomState, StateError> {
    let normalized = text.replace('\'', "\"");
    let value: Value = serde_json::from_str(&normalized).map_err(|e| {
        debug!(error = %e, "state text is not valid JSON");
        StateError::invalid(format!("could not parse state text ({e})"))
    })?;
    coerce_value(&value)
}

fn coerce_value(value: &Value) -> Result<RoomState, StateError> {
    let Some(map) = value.as_object() else {
        debug!(kind = json_kind(value), "state is not an object");
        return Err(StateError::invalid(format!(
            "expected an object, found {}",
            json_kind(value)
        )));
    };

    match validate_object(map) {
        Validation::Success(_) => serde_json::from_value(Value::Object(map.clone()))
            .map_err(|e| StateError::invalid(e.to_string())),
        Validation::Failure(errors) => {
            let violations: Vec<StateViolation> = errors.iter().cloned().collect();
            debug!(count = violations.len(), "state object failed validation");
            Err(StateError::from_violations(violations))
        }
    }
}

/// Check the key set and every value, accumulating ALL violations.
fn validate_object(map: &Map<String, Value>) -> Validation<(), NonEmptyVec<StateViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<StateViolation>>> = Vec::new();

    for item in Item::ALL {
        let check = match map.get(item.key()) {
            None => Validation::fail(StateViolation::MissingKey { item }),
            Some(value) if accepts(item, value) => Validation::success(()),
            Some(value) => Validation::fail(StateViolation::InvalidValue {
                item,
                value: value.to_string(),
                expected: item.labels(),
            }),
        };
        checks.push(check);
    }

    for key in map.keys() {
        if Item::from_key(key).is_none() {
            checks.push(Validation::fail(StateViolation::UnknownKey { key: key.clone() }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn accepts(item: Item, value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|label| item.labels().contains(&label))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
