//! Oriented records — a fixture reinterpreted from one team's side.

use serde::{Deserialize, Serialize};

use super::Fixture;

/// Which side a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Venue {
    Home,
    Away,
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Venue::Home => write!(f, "HOME"),
            Venue::Away => write!(f, "AWAY"),
        }
    }
}

/// Outcome of a fixture from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// Classify a score line seen from one side.
    pub fn from_goals(goals_for: u32, goals_against: u32) -> Self {
        if goals_for > goals_against {
            MatchResult::Win
        } else if goals_for == goals_against {
            MatchResult::Draw
        } else {
            MatchResult::Loss
        }
    }

    /// League points awarded for this result.
    pub fn points(&self) -> u32 {
        match self {
            MatchResult::Win => 3,
            MatchResult::Draw => 1,
            MatchResult::Loss => 0,
        }
    }
}

/// One side of a fixture, carrying that team's result classification
/// and points earned. Every fixture yields exactly two of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientedRecord {
    /// Match day of the originating fixture
    pub day: u32,

    /// Team this record belongs to
    pub team: String,

    /// Side the team played on
    pub venue: Venue,

    /// Goals scored by this team
    pub goals_for: u32,

    /// Goals conceded by this team
    pub goals_against: u32,

    /// Result from this team's point of view
    pub result: MatchResult,

    /// Points earned (3/1/0)
    pub points: u32,
}

impl OrientedRecord {
    /// Build the record for one side of a fixture.
    pub fn from_fixture(fixture: &Fixture, venue: Venue) -> Self {
        let (team, goals_for, goals_against) = match venue {
            Venue::Home => (&fixture.home_team, fixture.home_goals, fixture.away_goals),
            Venue::Away => (&fixture.away_team, fixture.away_goals, fixture.home_goals),
        };
        let result = MatchResult::from_goals(goals_for, goals_against);

        Self {
            day: fixture.day,
            team: team.clone(),
            venue,
            goals_for,
            goals_against,
            result,
            points: result.points(),
        }
    }
}
