//! Console and JSON rendering of rosters and predictions

use crate::error::{OracleError, Result};
use crate::types::MatchPrediction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for a prediction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = OracleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(OracleError::ConfigurationError {
                message: format!("Unknown output format: {}. Use text or json.", s),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// JSON envelope for a prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub generated_at: DateTime<Utc>,
    pub prediction: MatchPrediction,
}

impl PredictionReport {
    pub fn new(prediction: MatchPrediction) -> Self {
        Self {
            generated_at: Utc::now(),
            prediction,
        }
    }
}

/// Render the available team names, one per line
pub fn render_team_list(names: &[String]) -> String {
    names
        .iter()
        .fold(String::from("Available teams:\n"), |mut out, name| {
            out.push_str(&format!("  - {}\n", name));
            out
        })
}

/// Render the notice shown when the roster has no teams
pub fn render_empty_roster(teams_path: &Path) -> String {
    format!(
        "No teams found. Please add teams to {}\n",
        teams_path.display()
    )
}

/// Pairing shown by the default run: the first team against the fourth,
/// or against the last one when the roster is shorter
pub fn demo_pairing(names: &[String]) -> Option<(&str, &str)> {
    if names.len() < 2 {
        return None;
    }
    let opponent = &names[names.len().min(4) - 1];
    Some((names[0].as_str(), opponent.as_str()))
}

/// Render a prediction as a console block
pub fn render_prediction(prediction: &MatchPrediction) -> String {
    format!(
        "Predicted Winner: {}\nConfidence: {}\n\nWin Chances:\n  {}: {:.2}%\n  {}: {:.2}%\n",
        prediction.predicted_winner,
        prediction.confidence,
        prediction.team1_name,
        prediction.team1_win_chance,
        prediction.team2_name,
        prediction.team2_win_chance
    )
}

/// Render a prediction in the requested format
pub fn render(prediction: &MatchPrediction, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_prediction(prediction)),
        OutputFormat::Json => {
            let report = PredictionReport::new(prediction.clone());
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
