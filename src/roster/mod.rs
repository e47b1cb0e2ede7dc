//! Roster loading
//!
//! This module supplies the team records a prediction run works on, either
//! from a JSON file or from a fixed in-memory list.

pub mod source;

// Re-export commonly used types
pub use source::{load_teams, parse_teams, JsonFileTeamSource, StaticTeamSource, TeamSource};
