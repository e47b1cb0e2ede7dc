//! Rating updates derived from each team's win/loss record
//!
//! The updater runs once over the loaded roster, after which the roster is
//! frozen and moved into the predictor.

pub mod updater;

// Re-export commonly used types
pub use updater::{update_ratings, LinearRatingUpdater, RatingUpdater, RATING_POINTS_PER_RESULT};
