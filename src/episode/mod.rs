//! Cleaning episodes: the deterministic half of an agent loop.
//!
//! An [`Episode`] owns the authoritative room state and threads it through
//! each tool call. Choosing which tool to call belongs to a
//! [`DecisionOracle`], usually a language model living outside this crate.

mod error;
mod machine;
mod oracle;

pub use error::EpisodeError;
pub use machine::{Episode, EpisodeOutcome};
pub use oracle::{ChainedOracle, Decision, DecisionOracle, ScriptedOracle, ToolCall};
