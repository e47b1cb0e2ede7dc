//! Score composition, Elo-style win probability and confidence bucketing

use crate::types::{ConfidenceLevel, Team, Winner};
use skillratings::elo::{expected_score, EloRating};

/// Win rate is divided by this before being added to the rating
pub const WIN_RATE_DIVISOR: f64 = 10.0;

/// Winning chance (percent) at or above which confidence is High
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 70.0;

/// Winning chance (percent) at or above which confidence is Medium
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 55.0;

/// Composite score blending long-run rating with the season win rate
pub fn composite_score(team: &Team) -> f64 {
    team.rating + (team.win_rate() / WIN_RATE_DIVISOR)
}

/// Win chances in percent for two composite scores
///
/// `p1 = 1 / (1 + 10^((score2 - score1) / 400))` and `p2 = 1 - p1`.
pub fn win_chances(score1: f64, score2: f64) -> (f64, f64) {
    let (p1, p2) = expected_score(
        &EloRating { rating: score1 },
        &EloRating { rating: score2 },
    );
    (p1 * 100.0, p2 * 100.0)
}

/// Bucket a winning chance into a confidence level
pub fn confidence_level(win_chance: f64) -> ConfidenceLevel {
    // Descending order: exactly 70.0 must be High.
    if win_chance >= HIGH_CONFIDENCE_THRESHOLD {
        ConfidenceLevel::High
    } else if win_chance >= MEDIUM_CONFIDENCE_THRESHOLD {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Pick the winner and its confidence from both win chances
pub fn determine_prediction(team1_chance: f64, team2_chance: f64) -> (Winner, ConfidenceLevel) {
    if team1_chance > team2_chance {
        (Winner::Team1, confidence_level(team1_chance))
    } else if team2_chance > team1_chance {
        (Winner::Team2, confidence_level(team2_chance))
    } else {
        (Winner::Draw, ConfidenceLevel::Low)
    }
}
