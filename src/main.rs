use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classifica::calculate::{aggregate, evolve, normalize};
use classifica::config::AppConfig;
use classifica::storage::{read_fixtures, write_evolution, write_standings, StorageConfig};
use classifica::{parse_season_label, season_label, StandingsTable};

#[derive(Parser)]
#[command(name = "classifica")]
#[command(about = "Serie A standings engine with day-by-day league table evolution")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the final league table for one season
    Rank {
        /// Season label (e.g., "2015-2016")
        #[arg(long)]
        season: String,

        /// Fixture CSV to read (defaults to the data directory layout)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output CSV path (defaults to the data directory layout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Compute the day-by-day table evolution for one season
    Evolve {
        /// Season label (e.g., "2015-2016")
        #[arg(long)]
        season: String,

        /// Fixture CSV to read (defaults to the data directory layout)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output CSV path (defaults to the data directory layout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Process every season in the configured range
    Batch {
        /// Also write day-by-day evolutions
        #[arg(long)]
        evolution: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting classifica v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Rank {
            season,
            input,
            output,
        } => {
            let year = parse_season(&season)?;
            let input = input.unwrap_or_else(|| storage.matches_file(year));
            let output = output.unwrap_or_else(|| storage.rankings_file(year));
            rank_season(year, &input, &output)?;
        }

        Commands::Evolve {
            season,
            input,
            output,
        } => {
            let year = parse_season(&season)?;
            let input = input.unwrap_or_else(|| storage.matches_file(year));
            let output = output.unwrap_or_else(|| storage.evolutions_file(year));
            evolve_season(year, &input, &output)?;
        }

        Commands::Batch { evolution } => {
            let mut failed = 0;
            for year in config.seasons.from_year..=config.seasons.to_year {
                let result = rank_season(
                    year,
                    &storage.matches_file(year),
                    &storage.rankings_file(year),
                )
                .and_then(|_| {
                    if evolution {
                        evolve_season(
                            year,
                            &storage.matches_file(year),
                            &storage.evolutions_file(year),
                        )
                    } else {
                        Ok(())
                    }
                });

                if let Err(e) = result {
                    error!("Season {} failed: {:#}", season_label(year), e);
                    failed += 1;
                }
            }

            if failed > 0 {
                anyhow::bail!("{} season(s) failed to process", failed);
            }
        }
    }

    Ok(())
}

/// Load the config file, falling back to defaults when it is absent.
fn load_config(path: &str) -> Result<AppConfig> {
    let path = PathBuf::from(path);
    if path.exists() {
        AppConfig::from_file(&path).with_context(|| format!("loading config from {:?}", path))
    } else {
        info!("No config file at {:?}, using defaults", path);
        Ok(AppConfig::default())
    }
}

fn parse_season(s: &str) -> Result<u16> {
    parse_season_label(s)
        .with_context(|| format!("Invalid season label: {} (expected e.g. 2015-2016)", s))
}

/// Read one season's fixtures and write its final league table.
fn rank_season(year: u16, input: &Path, output: &Path) -> Result<()> {
    let label = season_label(year);

    let fixtures =
        read_fixtures(input).with_context(|| format!("reading fixtures for {}", label))?;
    let records = normalize(&fixtures)?;
    let max_day = records
        .iter()
        .map(|r| r.day)
        .max()
        .with_context(|| format!("no fixtures in {:?}", input))?;

    let table = aggregate(&records, max_day)?;
    warn_incomplete(&label, &table);

    write_standings(output, &table)
        .with_context(|| format!("writing standings for {}", label))?;

    info!(
        "{}: ranked {} teams over {} days",
        label,
        table.rows.len(),
        max_day
    );
    if let Some(top) = table.rows.first() {
        info!(
            "{}: {} leads with {} points ({} goal difference)",
            label,
            top.team,
            top.total.points,
            top.total.goal_difference()
        );
    }

    Ok(())
}

/// Read one season's fixtures and write the day-by-day evolution.
fn evolve_season(year: u16, input: &Path, output: &Path) -> Result<()> {
    let label = season_label(year);

    let fixtures =
        read_fixtures(input).with_context(|| format!("reading fixtures for {}", label))?;
    let records = normalize(&fixtures)?;
    let evolution = evolve(&records)?;

    if let Some(table) = evolution.final_table() {
        warn_incomplete(&label, table);
    }

    write_evolution(output, &evolution)
        .with_context(|| format!("writing evolution for {}", label))?;

    info!(
        "{}: wrote evolution across {} days",
        label,
        evolution.tables.len()
    );

    Ok(())
}

/// A team with zero games at the season's final cutoff means the raw
/// file is missing fixtures; the table stays valid, so only warn.
fn warn_incomplete(label: &str, table: &StandingsTable) {
    let missing = table.teams_without_games();
    if !missing.is_empty() {
        warn!(
            "{}: teams with no recorded matches: {}",
            label,
            missing.join(", ")
        );
    }
}
