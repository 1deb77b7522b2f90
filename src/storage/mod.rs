//! Filesystem persistence for fixtures and computed tables.
//!
//! One CSV per season: raw match files under `raw/matches`, final
//! tables under `processed/rankings`, day-by-day evolutions under
//! `processed/evolutions`. Files are named `{year}_{year+1}.csv`.

use std::path::PathBuf;

use thiserror::Error;

mod tables;

pub use tables::{read_fixtures, write_evolution, write_standings};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn matches_dir(&self) -> PathBuf {
        self.data_dir.join("raw").join("matches")
    }

    pub fn rankings_dir(&self) -> PathBuf {
        self.data_dir.join("processed").join("rankings")
    }

    pub fn evolutions_dir(&self) -> PathBuf {
        self.data_dir.join("processed").join("evolutions")
    }

    /// File name for one season, e.g. `2005_2006.csv`.
    pub fn season_file(start_year: u16) -> String {
        format!("{}_{}.csv", start_year, start_year + 1)
    }

    pub fn matches_file(&self, start_year: u16) -> PathBuf {
        self.matches_dir().join(Self::season_file(start_year))
    }

    pub fn rankings_file(&self, start_year: u16) -> PathBuf {
        self.rankings_dir().join(Self::season_file(start_year))
    }

    pub fn evolutions_file(&self, start_year: u16) -> PathBuf {
        self.evolutions_dir().join(Self::season_file(start_year))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
