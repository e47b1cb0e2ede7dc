//! Main entry point for the match-oracle CLI
//!
//! Loads the roster, applies the rating update once and prints either the
//! team list or a prediction for a pairing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use match_oracle::config::AppConfig;
use match_oracle::report::{self, OutputFormat};
use match_oracle::{
    JsonFileTeamSource, LinearRatingUpdater, MatchPredictor, RatingUpdater, TeamSource,
};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Match Oracle - rating-based match outcome predictor
#[derive(Parser)]
#[command(
    name = "match-oracle",
    version,
    about = "Predict match outcomes between competitive teams from their ratings and records"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Roster file override
    #[arg(short, long, value_name = "FILE", help = "Override the teams JSON file")]
    teams: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the available teams
    Teams,
    /// Predict the outcome of a match
    Predict {
        /// First team name (exact match)
        team1: String,
        /// Second team name (exact match)
        team2: String,
        /// Output format (text or json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(teams) = &args.teams {
        config.data.teams_path = teams.clone();
    }

    match_oracle::config::validate_config(&config)?;
    Ok(config)
}

/// Load the roster, rate it and freeze it inside a predictor
fn build_predictor(source: &dyn TeamSource) -> Result<MatchPredictor> {
    debug!("Loading teams from {}", source.describe());
    let teams = source.load_teams()?;
    let rated = LinearRatingUpdater::default().rate(teams);
    Ok(MatchPredictor::new(rated))
}

fn print_prediction(
    predictor: &MatchPredictor,
    team1: &str,
    team2: &str,
    format: OutputFormat,
) -> Result<()> {
    let prediction = predictor.predict_match(team1, team2)?;
    print!("{}", report::render(&prediction, format)?);
    Ok(())
}

/// Banner, team list and a sample pairing
fn run_demo(predictor: &MatchPredictor, config: &AppConfig) -> Result<()> {
    println!("CS Match Predictor");
    println!("==================");

    if predictor.is_empty() {
        print!("{}", report::render_empty_roster(&config.data.teams_path));
        return Ok(());
    }

    let names = predictor.list_teams();
    println!("\n{}", report::render_team_list(&names));

    if let Some((team1, team2)) = report::demo_pairing(&names) {
        println!("Predicting match: {} vs {}", team1, team2);
        println!("--------------------------------");
        print_prediction(predictor, team1, team2, config.output.format)?;
    }

    Ok(())
}

fn run(args: Args, config: AppConfig) -> Result<()> {
    let source = JsonFileTeamSource::new(&config.data.teams_path);
    let predictor = build_predictor(&source)?;
    info!(
        "{} ready with {} teams",
        config.service.name,
        predictor.len()
    );

    match args.command {
        None => run_demo(&predictor, &config),
        Some(Command::Teams) => {
            print!("{}", report::render_team_list(&predictor.list_teams()));
            Ok(())
        }
        Some(Command::Predict {
            team1,
            team2,
            format,
        }) => {
            let format = format.unwrap_or(config.output.format);
            print_prediction(&predictor, &team1, &team2, format)
        }
    }
}

fn main() {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args, config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
