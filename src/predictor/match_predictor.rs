//! Pairwise match predictor over a frozen, rating-updated roster
//!
//! The predictor owns the team collection it was built from and only ever
//! hands out shared references, so a roster cannot change once predictions
//! start. It performs no I/O.

use crate::error::{OracleError, Result};
use crate::predictor::scoring::{composite_score, determine_prediction, win_chances};
use crate::types::{MatchPrediction, Team};
use std::collections::HashMap;

/// Predicts match outcomes between teams of a roster
#[derive(Debug, Clone)]
pub struct MatchPredictor {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
}

impl MatchPredictor {
    /// Create a predictor from an already rated roster
    ///
    /// When several teams share a name, lookups resolve to the first one.
    pub fn new(teams: Vec<Team>) -> Self {
        let mut index = HashMap::with_capacity(teams.len());
        for (position, team) in teams.iter().enumerate() {
            index.entry(team.name.clone()).or_insert(position);
        }

        Self { teams, index }
    }

    /// Team names in roster order
    pub fn list_teams(&self) -> Vec<String> {
        self.teams.iter().map(|team| team.name.clone()).collect()
    }

    /// Find a team by exact, case-sensitive name
    pub fn find_team(&self, name: &str) -> Option<&Team> {
        self.index.get(name).map(|&position| &self.teams[position])
    }

    /// All teams in roster order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Predict the outcome of `team1_name` against `team2_name`
    ///
    /// Fails with [`OracleError::TeamNotFound`] for the first name that is
    /// not in the roster.
    pub fn predict_match(&self, team1_name: &str, team2_name: &str) -> Result<MatchPrediction> {
        let team1 = self.lookup(team1_name)?;
        let team2 = self.lookup(team2_name)?;

        let (team1_win_chance, team2_win_chance) =
            win_chances(composite_score(team1), composite_score(team2));
        let (predicted_winner, confidence) =
            determine_prediction(team1_win_chance, team2_win_chance);

        Ok(MatchPrediction {
            team1_name: team1_name.to_string(),
            team2_name: team2_name.to_string(),
            team1_win_chance,
            team2_win_chance,
            predicted_winner,
            confidence,
        })
    }

    fn lookup(&self, name: &str) -> Result<&Team> {
        self.find_team(name).ok_or_else(|| {
            OracleError::TeamNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConfidenceLevel, Winner};

    fn team(name: &str, wins: u32, losses: u32, rating: f64) -> Team {
        Team {
            id: name.to_lowercase(),
            name: name.to_string(),
            region: "EU".to_string(),
            wins,
            losses,
            rating,
            world_rank: 0,
        }
    }

    fn create_test_predictor() -> MatchPredictor {
        MatchPredictor::new(vec![
            team("A", 10, 5, 1000.0),
            team("B", 5, 10, 1000.0),
            team("Strong", 20, 2, 1400.0),
            team("Weak", 1, 15, 1000.0),
        ])
    }

    #[test]
    fn test_list_teams_preserves_order() {
        let predictor = create_test_predictor();
        assert_eq!(predictor.list_teams(), vec!["A", "B", "Strong", "Weak"]);
        assert_eq!(predictor.len(), 4);
        assert!(!predictor.is_empty());
    }

    #[test]
    fn test_empty_roster() {
        let predictor = MatchPredictor::new(Vec::new());
        assert!(predictor.list_teams().is_empty());
        assert!(predictor.is_empty());
        assert!(predictor.predict_match("A", "B").is_err());
    }

    #[test]
    fn test_worked_example() {
        let predictor = create_test_predictor();
        let prediction = predictor.predict_match("A", "B").unwrap();

        assert!((prediction.team1_win_chance - 50.48).abs() < 0.01);
        assert!((prediction.team2_win_chance - 49.52).abs() < 0.01);
        assert_eq!(prediction.predicted_winner, Winner::Team1);
        assert_eq!(prediction.confidence, ConfidenceLevel::Low);
        assert_eq!(prediction.team1_name, "A");
        assert_eq!(prediction.team2_name, "B");
    }

    #[test]
    fn test_strong_favourite() {
        let predictor = create_test_predictor();
        let prediction = predictor.predict_match("Weak", "Strong").unwrap();

        assert_eq!(prediction.predicted_winner, Winner::Team2);
        assert_eq!(prediction.confidence, ConfidenceLevel::High);
        assert!(prediction.team2_win_chance > 90.0);
    }

    #[test]
    fn test_same_team_is_a_draw() {
        let predictor = create_test_predictor();
        let prediction = predictor.predict_match("A", "A").unwrap();

        assert_eq!(prediction.team1_win_chance, 50.0);
        assert_eq!(prediction.team2_win_chance, 50.0);
        assert_eq!(prediction.predicted_winner, Winner::Draw);
        assert_eq!(prediction.confidence, ConfidenceLevel::Low);
    }

    #[test]
    fn test_unknown_team() {
        let predictor = create_test_predictor();

        let err = predictor.predict_match("A", "Nobody").unwrap_err();
        assert_eq!(
            err.downcast_ref::<OracleError>(),
            Some(&OracleError::TeamNotFound {
                name: "Nobody".to_string()
            })
        );

        // First missing name is reported
        let err = predictor.predict_match("Ghost", "Nobody").unwrap_err();
        assert_eq!(err.to_string(), "team not found: Ghost");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let predictor = create_test_predictor();
        assert!(predictor.find_team("strong").is_none());
        assert!(predictor.predict_match("strong", "A").is_err());
    }

    #[test]
    fn test_huge_records_stay_in_range() {
        let predictor = MatchPredictor::new(vec![
            team("Veteran", u32::MAX, 2, 1000.0),
            team("Rookie", 0, 0, 1000.0),
        ]);

        let prediction = predictor.predict_match("Veteran", "Rookie").unwrap();

        // Win rate just under 100% adds just under 10 points
        assert!(prediction.team1_win_chance > 50.0);
        assert!(prediction.team1_win_chance < 52.0);
        assert!((prediction.team1_win_chance + prediction.team2_win_chance - 100.0).abs() < 1e-9);
        assert_eq!(prediction.predicted_winner, Winner::Team1);
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let predictor = MatchPredictor::new(vec![
            team("Dup", 1, 0, 1500.0),
            team("Other", 0, 0, 1000.0),
            team("Dup", 0, 1, 500.0),
        ]);

        assert_eq!(predictor.find_team("Dup").unwrap().rating, 1500.0);
        assert_eq!(predictor.list_teams(), vec!["Dup", "Other", "Dup"]);

        let prediction = predictor.predict_match("Dup", "Other").unwrap();
        assert_eq!(prediction.predicted_winner, Winner::Team1);
    }
}
