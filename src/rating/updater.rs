//! Rating updater trait and the linear win/loss implementation
//!
//! Ratings are adjusted once from each team's season record before the
//! collection is handed to the predictor.

use crate::types::Team;

/// Rating points gained per win and lost per loss
pub const RATING_POINTS_PER_RESULT: f64 = 12.0;

/// Trait for deriving updated ratings from a team's record
pub trait RatingUpdater: Send + Sync {
    /// Adjust the rating of every team in place
    ///
    /// Only the `rating` field is touched. Calling this twice applies the
    /// adjustment twice.
    fn update(&self, teams: &mut [Team]);

    /// Take ownership of a roster, update it and hand it back
    fn rate(&self, mut teams: Vec<Team>) -> Vec<Team> {
        self.update(&mut teams);
        teams
    }
}

/// Fixed linear adjustment: `rating += points * wins - points * losses`
#[derive(Debug, Clone)]
pub struct LinearRatingUpdater {
    points_per_result: f64,
}

impl LinearRatingUpdater {
    /// Create an updater with a custom per-result step
    pub fn new(points_per_result: f64) -> Self {
        Self { points_per_result }
    }

    pub fn points_per_result(&self) -> f64 {
        self.points_per_result
    }
}

impl Default for LinearRatingUpdater {
    fn default() -> Self {
        Self::new(RATING_POINTS_PER_RESULT)
    }
}

impl RatingUpdater for LinearRatingUpdater {
    fn update(&self, teams: &mut [Team]) {
        for team in teams.iter_mut() {
            team.rating += self.points_per_result * team.wins as f64;
            team.rating -= self.points_per_result * team.losses as f64;
        }
    }
}

/// Apply the default linear update to every team
pub fn update_ratings(teams: &mut [Team]) {
    LinearRatingUpdater::default().update(teams);
}
