//! Core State trait for item statuses.
//!
//! Every tracked item in the room has a closed set of statuses. Each status
//! enum implements this trait, which exposes pure methods for inspecting a
//! status without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the status of a single tracked item.
///
/// All methods are pure. A status is an immutable value describing where
/// one item currently is.
///
/// # Required Traits
///
/// - `Copy`: statuses are small tags and move freely between room snapshots
/// - `PartialEq`: statuses are compared against the goal
/// - `Debug`: statuses must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: statuses cross the text tool-call boundary
///
/// # Example
///
/// ```rust
/// use tidyroom::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// #[serde(rename_all = "lowercase")]
/// enum Dishes {
///     Sink,
///     Rack,
///     Cupboard,
/// }
///
/// impl State for Dishes {
///     fn name(&self) -> &str {
///         match self {
///             Self::Sink => "sink",
///             Self::Rack => "rack",
///             Self::Cupboard => "cupboard",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Cupboard)
///     }
/// }
///
/// assert_eq!(Dishes::Rack.name(), "rack");
/// assert!(Dishes::Cupboard.is_final());
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The status label used on the wire (`"floor"`, `"shelf"`, ...).
    fn name(&self) -> &str;

    /// Check if this is the item's tidy position.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
