//! Match outcome prediction
//!
//! This module turns a rated roster into pairwise predictions: composite
//! scores, Elo-style win chances and a confidence bucket for the favourite.

pub mod match_predictor;
pub mod scoring;

// Re-export commonly used types
pub use match_predictor::MatchPredictor;
pub use scoring::{composite_score, confidence_level, determine_prediction, win_chances};
