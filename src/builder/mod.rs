//! Builder API for ergonomic episode construction.
//!
//! This module provides the fluent episode builder and the macro used to
//! declare item status enums.

pub mod episode;
pub mod error;
pub mod macros;

pub use episode::EpisodeBuilder;
pub use error::BuildError;
