//! Test fixtures shared by the integration tests

use match_oracle::types::Team;
use std::path::PathBuf;

/// Build a team record with the fields the predictor cares about
pub fn team(name: &str, wins: u32, losses: u32, rating: f64) -> Team {
    Team {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        region: "EU".to_string(),
        wins,
        losses,
        rating,
        world_rank: 0,
    }
}

/// A small roster with a clear favourite and a clear underdog
pub fn sample_roster() -> Vec<Team> {
    vec![
        team("Natus Vincere", 34, 12, 1000.0),
        team("FaZe Clan", 30, 15, 1000.0),
        team("Team Vitality", 28, 14, 1000.0),
        team("G2 Esports", 25, 18, 1000.0),
        team("Team Liquid", 19, 21, 1000.0),
        team("FURIA", 16, 20, 1000.0),
    ]
}

/// Write a roster to a unique JSON file in the temp directory
pub struct RosterFile {
    path: PathBuf,
}

impl RosterFile {
    pub fn new(label: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "match-oracle-it-{}-{}.json",
            label,
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("write roster fixture");
        Self { path }
    }

    pub fn from_teams(label: &str, teams: &[Team]) -> Self {
        let json = serde_json::to_string_pretty(teams).expect("serialize roster fixture");
        Self::new(label, &json)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for RosterFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
