//! Grouped aggregation of oriented records into a ranked table.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{MatchResult, OrientedRecord, StandingsRow, StandingsTable, Venue, VenueSplit};

use super::EngineError;

/// Build the league table from `records`, counting matches with
/// `day <= cutoff_day`.
///
/// Every team appearing anywhere in `records` gets a row, all-zero if
/// it has not played by the cutoff. Team count and ranking length are
/// derived from the data, never assumed.
///
/// Ties on points break on goal difference, then goals for, then team
/// name, so the output is deterministic for a given input.
pub fn aggregate(
    records: &[OrientedRecord],
    cutoff_day: u32,
) -> Result<StandingsTable, EngineError> {
    if cutoff_day < 1 {
        return Err(EngineError::InvalidCutoff(cutoff_day));
    }

    // Accumulators keyed by team over the FULL record set: a team with
    // no qualifying matches at this cutoff still gets zeroed splits.
    let mut accumulators: BTreeMap<&str, (VenueSplit, VenueSplit)> = BTreeMap::new();

    for record in records {
        let (home, away) = accumulators.entry(record.team.as_str()).or_default();
        if record.day > cutoff_day {
            continue;
        }

        let split = match record.venue {
            Venue::Home => home,
            Venue::Away => away,
        };
        split.games += 1;
        match record.result {
            MatchResult::Win => split.wins += 1,
            MatchResult::Draw => split.draws += 1,
            MatchResult::Loss => split.losses += 1,
        }
        split.points += record.points;
        split.goals_for += record.goals_for;
        split.goals_against += record.goals_against;
    }

    let mut rows: Vec<StandingsRow> = accumulators
        .into_iter()
        .map(|(team, (home, away))| StandingsRow {
            ranking: 0,
            team: team.to_string(),
            total: home.combine(&away),
            home,
            away,
        })
        .collect();

    rows.sort_by(compare_rows);
    for (index, row) in rows.iter_mut().enumerate() {
        row.ranking = index as u32 + 1;
    }

    Ok(StandingsTable { cutoff_day, rows })
}

/// Ranking order: points desc, goal difference desc, goals for desc,
/// team name asc.
fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.total
        .points
        .cmp(&a.total.points)
        .then_with(|| b.total.goal_difference().cmp(&a.total.goal_difference()))
        .then_with(|| b.total.goals_for.cmp(&a.total.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}
