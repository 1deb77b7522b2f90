//! Fixture model — a single scheduled match between two teams.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One played fixture of a season, as found in the raw match files.
///
/// Field names mirror the raw CSV columns. `date` is carried for
/// provenance only; the engine keys everything on `day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Match day (1-based round number)
    #[serde(rename = "DAY")]
    pub day: u32,

    /// Calendar date of the match, when known
    #[serde(rename = "DATE", default, deserialize_with = "de_opt_date")]
    pub date: Option<NaiveDate>,

    /// Home team name
    #[serde(rename = "HOME_TEAM")]
    pub home_team: String,

    /// Away team name
    #[serde(rename = "AWAY_TEAM")]
    pub away_team: String,

    /// Goals scored by the home team
    #[serde(rename = "HOME_GOALS")]
    pub home_goals: u32,

    /// Goals scored by the away team
    #[serde(rename = "AWAY_GOALS")]
    pub away_goals: u32,
}

impl Fixture {
    /// Create a new Fixture without a calendar date.
    pub fn new(
        day: u32,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            day,
            date: None,
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals,
            away_goals,
        }
    }

    /// Attach a calendar date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Raw files leave the date column empty for some rows; treat an empty
/// string the same as a missing value.
fn de_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
