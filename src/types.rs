//! Common types used throughout the match oracle

use serde::{Deserialize, Serialize};

/// Unique identifier for teams, as supplied by the roster
pub type TeamId = String;

/// A competitive team with its season record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Lookup key used by the predictor
    pub name: String,
    pub region: String,
    pub wins: u32,
    pub losses: u32,
    pub rating: f64,
    pub world_rank: i32,
}

impl Team {
    /// Total number of matches played
    pub fn total_matches(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Win rate as a percentage, 0.0 when no matches have been played
    pub fn win_rate(&self) -> f64 {
        let total = self.total_matches();
        if total == 0 {
            return 0.0;
        }
        (f64::from(self.wins) / total as f64) * 100.0
    }
}

/// Which side of a match is predicted to win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "Team 1")]
    Team1,
    #[serde(rename = "Team 2")]
    Team2,
    Draw,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Team1 => write!(f, "Team 1"),
            Winner::Team2 => write!(f, "Team 2"),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

/// Confidence bucket for the predicted winner's chance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "High"),
            ConfidenceLevel::Medium => write!(f, "Medium"),
            ConfidenceLevel::Low => write!(f, "Low"),
        }
    }
}

/// Outcome prediction for a single pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPrediction {
    /// Names as given by the caller
    pub team1_name: String,
    pub team2_name: String,
    /// Win chances in percent, summing to 100
    pub team1_win_chance: f64,
    pub team2_win_chance: f64,
    pub predicted_winner: Winner,
    pub confidence: ConfidenceLevel,
}

impl MatchPrediction {
    /// Name of the predicted winner, or None for a draw
    pub fn winner_name(&self) -> Option<&str> {
        match self.predicted_winner {
            Winner::Team1 => Some(&self.team1_name),
            Winner::Team2 => Some(&self.team2_name),
            Winner::Draw => None,
        }
    }
}
