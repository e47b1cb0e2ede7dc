//! Team sources: where a roster comes from
//!
//! A source only supplies typed team records. Structural validation of the
//! external representation happens here, never in the predictor.

use crate::error::{OracleError, Result};
use crate::types::Team;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Trait for providing the roster a prediction run works on
pub trait TeamSource: Send + Sync {
    /// Load every team record from the source
    fn load_teams(&self) -> Result<Vec<Team>>;

    /// Short description of the source for logs
    fn describe(&self) -> String;
}

/// Roster stored as a JSON array of team objects
#[derive(Debug, Clone)]
pub struct JsonFileTeamSource {
    path: PathBuf,
}

impl JsonFileTeamSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TeamSource for JsonFileTeamSource {
    fn load_teams(&self) -> Result<Vec<Team>> {
        load_teams(&self.path)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

/// Fixed in-memory roster
#[derive(Debug, Clone, Default)]
pub struct StaticTeamSource {
    teams: Vec<Team>,
}

impl StaticTeamSource {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }
}

impl TeamSource for StaticTeamSource {
    fn load_teams(&self) -> Result<Vec<Team>> {
        Ok(self.teams.clone())
    }

    fn describe(&self) -> String {
        format!("static roster of {} teams", self.teams.len())
    }
}

/// Load a roster from a JSON file
///
/// An empty file is a valid, empty roster.
pub fn load_teams(path: impl AsRef<Path>) -> Result<Vec<Team>> {
    let path = path.as_ref();
    debug!("Reading teams from {}", path.display());

    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read teams file {}", path.display()))?;

    let teams = parse_teams(&data)
        .with_context(|| format!("failed to parse teams file {}", path.display()))?;

    info!("Loaded {} teams from {}", teams.len(), path.display());
    Ok(teams)
}

/// Parse a roster from its JSON text
pub fn parse_teams(data: &str) -> Result<Vec<Team>> {
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(data).map_err(|e| {
        OracleError::InvalidTeamData {
            reason: e.to_string(),
        }
        .into()
    })
}
