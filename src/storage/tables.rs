//! CSV reading and writing of fixtures and standings tables.
//!
//! Raw fixture files follow the scraped layout (`DAY`, `DATE`,
//! `HOME_TEAM`, `AWAY_TEAM`, `HOME_GOALS`, `AWAY_GOALS`); a leading
//! unnamed index column is tolerated. Output tables put each combined
//! total next to its home/away splits, evolution files additionally
//! carry a `DAY` column.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::{EvolutionTable, Fixture, StandingsRow, StandingsTable};

use super::StorageError;

/// Read one season's fixtures from a CSV file.
pub fn read_fixtures(path: &Path) -> Result<Vec<Fixture>, StorageError> {
    if !path.exists() {
        return Err(StorageError::PathNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut fixtures = Vec::new();
    for result in reader.deserialize() {
        fixtures.push(result?);
    }

    debug!("Read {} fixtures from {:?}", fixtures.len(), path);
    Ok(fixtures)
}

/// Write a single standings table, one row per team.
pub fn write_standings(path: &Path, table: &StandingsTable) -> Result<(), StorageError> {
    ensure_dir(path)?;

    let mut writer = csv::Writer::from_path(path)?;
    for row in &table.rows {
        writer.serialize(CsvStandingsRow::new(None, row))?;
    }
    writer.flush()?;

    info!("Wrote {} standings rows to {:?}", table.rows.len(), path);
    Ok(())
}

/// Write a day-by-day evolution, one row per team per cutoff day.
pub fn write_evolution(path: &Path, evolution: &EvolutionTable) -> Result<(), StorageError> {
    ensure_dir(path)?;

    let mut writer = csv::Writer::from_path(path)?;
    let mut count = 0;
    for table in &evolution.tables {
        for row in &table.rows {
            writer.serialize(CsvStandingsRow::new(Some(table.cutoff_day), row))?;
            count += 1;
        }
    }
    writer.flush()?;

    info!(
        "Wrote {} evolution rows ({} days) to {:?}",
        count,
        evolution.tables.len(),
        path
    );
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Flat CSV row for a standings table, columns named after the raw
/// file conventions. `day` is only present in evolution files.
#[derive(Debug, Serialize)]
struct CsvStandingsRow<'a> {
    #[serde(rename = "DAY", skip_serializing_if = "Option::is_none")]
    day: Option<u32>,
    #[serde(rename = "RANKING")]
    ranking: u32,
    #[serde(rename = "TEAM")]
    team: &'a str,
    #[serde(rename = "GAMES")]
    games: u32,
    #[serde(rename = "GAMES_HOME")]
    games_home: u32,
    #[serde(rename = "GAMES_AWAY")]
    games_away: u32,
    #[serde(rename = "WINS")]
    wins: u32,
    #[serde(rename = "WINS_HOME")]
    wins_home: u32,
    #[serde(rename = "WINS_AWAY")]
    wins_away: u32,
    #[serde(rename = "DRAWS")]
    draws: u32,
    #[serde(rename = "DRAWS_HOME")]
    draws_home: u32,
    #[serde(rename = "DRAWS_AWAY")]
    draws_away: u32,
    #[serde(rename = "LOSSES")]
    losses: u32,
    #[serde(rename = "LOSSES_HOME")]
    losses_home: u32,
    #[serde(rename = "LOSSES_AWAY")]
    losses_away: u32,
    #[serde(rename = "POINTS")]
    points: u32,
    #[serde(rename = "POINTS_HOME")]
    points_home: u32,
    #[serde(rename = "POINTS_AWAY")]
    points_away: u32,
    #[serde(rename = "GOALS_FOR")]
    goals_for: u32,
    #[serde(rename = "GOALS_FOR_HOME")]
    goals_for_home: u32,
    #[serde(rename = "GOALS_FOR_AWAY")]
    goals_for_away: u32,
    #[serde(rename = "GOALS_AGAINST")]
    goals_against: u32,
    #[serde(rename = "GOALS_AGAINST_HOME")]
    goals_against_home: u32,
    #[serde(rename = "GOALS_AGAINST_AWAY")]
    goals_against_away: u32,
}

impl<'a> CsvStandingsRow<'a> {
    fn new(day: Option<u32>, row: &'a StandingsRow) -> Self {
        Self {
            day,
            ranking: row.ranking,
            team: &row.team,
            games: row.total.games,
            games_home: row.home.games,
            games_away: row.away.games,
            wins: row.total.wins,
            wins_home: row.home.wins,
            wins_away: row.away.wins,
            draws: row.total.draws,
            draws_home: row.home.draws,
            draws_away: row.away.draws,
            losses: row.total.losses,
            losses_home: row.home.losses,
            losses_away: row.away.losses,
            points: row.total.points,
            points_home: row.home.points,
            points_away: row.away.points,
            goals_for: row.total.goals_for,
            goals_for_home: row.home.goals_for,
            goals_for_away: row.away.goals_for,
            goals_against: row.total.goals_against,
            goals_against_home: row.home.goals_against,
            goals_against_away: row.away.goals_against,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::{aggregate, evolve, normalize};
    use pretty_assertions::assert_eq;

    fn sample_fixtures() -> Vec<Fixture> {
        vec![
            Fixture::new(1, "Juventus", "Milan", 2, 0),
            Fixture::new(2, "Milan", "Juventus", 1, 1),
        ]
    }

    #[test]
    fn test_read_fixtures_with_index_column_and_empty_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2005_2006.csv");
        // Leading unnamed column as written by the scraper's dataframe dump.
        fs::write(
            &path,
            ",DAY,DATE,HOME_TEAM,AWAY_TEAM,HOME_GOALS,AWAY_GOALS\n\
             0,1,2005-08-28,Juventus,Milan,2,0\n\
             1,2,,Milan,Juventus,1,1\n",
        )
        .unwrap();

        let fixtures = read_fixtures(&path).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].home_team, "Juventus");
        assert_eq!(
            fixtures[0].date,
            chrono::NaiveDate::from_ymd_opt(2005, 8, 28)
        );
        assert!(fixtures[1].date.is_none());
        assert_eq!(fixtures[1].away_goals, 1);
    }

    #[test]
    fn test_read_fixtures_missing_file() {
        let err = read_fixtures(Path::new("/nonexistent/2005_2006.csv")).unwrap_err();
        assert!(matches!(err, StorageError::PathNotFound(_)));
    }

    #[test]
    fn test_write_standings_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("2005_2006.csv");

        let records = normalize(&sample_fixtures()).unwrap();
        let table = aggregate(&records, 2).unwrap();
        write_standings(&path, &table).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("RANKING,TEAM,GAMES,"));
        assert!(header.contains("POINTS,POINTS_HOME,POINTS_AWAY"));

        // Juventus: 4 points (one win, one draw), ranked first.
        let first = lines.next().unwrap();
        assert!(first.starts_with("1,Juventus,2,"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_write_evolution_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2005_2006.csv");

        let records = normalize(&sample_fixtures()).unwrap();
        let evolution = evolve(&records).unwrap();
        write_evolution(&path, &evolution).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[0].starts_with("DAY,RANKING,TEAM,"));
        // 2 days x 2 teams.
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("1,"));
        assert!(lines[4].starts_with("2,"));
    }
}
