//! Day-by-day table evolution across a season.

use crate::models::{EvolutionTable, OrientedRecord};

use super::{aggregate, EngineError};

/// Compute the league table at every cutoff day from 1 to the season's
/// last day, in ascending day order.
///
/// The season length is the maximum day present in `records`; a day
/// with no fixtures still gets a table (identical to the previous
/// day's). Each day is an independent `aggregate` call.
pub fn evolve(records: &[OrientedRecord]) -> Result<EvolutionTable, EngineError> {
    let max_day = records
        .iter()
        .map(|r| r.day)
        .max()
        .ok_or(EngineError::EmptyInput)?;

    let mut tables = Vec::with_capacity(max_day as usize);
    for day in 1..=max_day {
        tables.push(aggregate(records, day)?);
    }

    Ok(EvolutionTable { tables })
}
