//! Standings models — aggregated per-team rows and ranked tables.

use serde::{Deserialize, Serialize};

/// Aggregated counts for one team at one venue (or combined).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSplit {
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl VenueSplit {
    /// Field-wise sum of two splits.
    pub fn combine(&self, other: &VenueSplit) -> VenueSplit {
        VenueSplit {
            games: self.games + other.games,
            wins: self.wins + other.wins,
            draws: self.draws + other.draws,
            losses: self.losses + other.losses,
            points: self.points + other.points,
            goals_for: self.goals_for + other.goals_for,
            goals_against: self.goals_against + other.goals_against,
        }
    }

    /// Goals scored minus goals conceded.
    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }
}

/// One team's aggregated standings at a cutoff day.
///
/// `total` always equals `home.combine(&away)`; a team with no
/// qualifying matches keeps all-zero splits rather than being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// Position in the table (1 = best)
    pub ranking: u32,

    /// Team name
    pub team: String,

    /// Combined home + away totals
    pub total: VenueSplit,

    /// Home-only totals
    pub home: VenueSplit,

    /// Away-only totals
    pub away: VenueSplit,
}

/// Full league table at one cutoff day, ordered by ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsTable {
    /// Match day up to and including which results are counted
    pub cutoff_day: u32,

    /// One row per distinct team, rankings forming 1..=N
    pub rows: Vec<StandingsRow>,
}

impl StandingsTable {
    /// Get a team's row by name.
    pub fn get_team(&self, name: &str) -> Option<&StandingsRow> {
        self.rows.iter().find(|r| r.team == name)
    }

    /// Teams that have not played a single match at this cutoff.
    ///
    /// At the final cutoff a non-empty result signals missing data
    /// upstream; at earlier cutoffs it is normal.
    pub fn teams_without_games(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.total.games == 0)
            .map(|r| r.team.as_str())
            .collect()
    }
}

/// Day-by-day league tables across a season, ascending by cutoff day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTable {
    pub tables: Vec<StandingsTable>,
}

impl EvolutionTable {
    /// The table at the season's last day.
    pub fn final_table(&self) -> Option<&StandingsTable> {
        self.tables.last()
    }
}
