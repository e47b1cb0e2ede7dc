//! Match Oracle - rating-based match outcome prediction
//!
//! This crate loads a roster of competitive teams, adjusts each team's
//! rating from its win/loss record and predicts pairwise match outcomes with
//! an Elo-style probability formula.

pub mod config;
pub mod error;
pub mod predictor;
pub mod rating;
pub mod report;
pub mod roster;
pub mod types;

// Re-export commonly used types and traits
pub use error::{OracleError, Result};
pub use types::*;

// Re-export key components
pub use predictor::MatchPredictor;
pub use rating::{update_ratings, LinearRatingUpdater, RatingUpdater};
pub use roster::{JsonFileTeamSource, StaticTeamSource, TeamSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
