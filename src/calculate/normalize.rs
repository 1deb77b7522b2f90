//! Fixture normalization.

use crate::models::{Fixture, OrientedRecord, Venue};

use super::EngineError;

/// Turn each two-sided fixture into two oriented per-team records,
/// one from the home team's perspective and one from the away team's,
/// both tagged with the fixture's match day.
///
/// The output order is unspecified; `aggregate` does not depend on it.
pub fn normalize(fixtures: &[Fixture]) -> Result<Vec<OrientedRecord>, EngineError> {
    let mut records = Vec::with_capacity(fixtures.len() * 2);

    for fixture in fixtures {
        validate(fixture)?;
        records.push(OrientedRecord::from_fixture(fixture, Venue::Home));
        records.push(OrientedRecord::from_fixture(fixture, Venue::Away));
    }

    Ok(records)
}

/// Reject fixtures that would silently corrupt aggregation. Goal
/// counts are unsigned by type, so only the day and team names can be
/// malformed here.
fn validate(fixture: &Fixture) -> Result<(), EngineError> {
    if fixture.day == 0 {
        return Err(EngineError::InvalidFixture(format!(
            "{} vs {}: match day must be >= 1",
            fixture.home_team, fixture.away_team
        )));
    }
    if fixture.home_team.trim().is_empty() || fixture.away_team.trim().is_empty() {
        return Err(EngineError::InvalidFixture(format!(
            "day {}: empty team name",
            fixture.day
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchResult;

    #[test]
    fn test_normalize_emits_two_records_per_fixture() {
        let fixtures = vec![
            Fixture::new(1, "Juventus", "Milan", 2, 0),
            Fixture::new(1, "Roma", "Lazio", 1, 1),
        ];

        let records = normalize(&fixtures).unwrap();
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_normalize_goal_conservation() {
        let fixtures = vec![Fixture::new(1, "Juventus", "Milan", 3, 2)];
        let records = normalize(&fixtures).unwrap();

        let home = records.iter().find(|r| r.venue == Venue::Home).unwrap();
        let away = records.iter().find(|r| r.venue == Venue::Away).unwrap();

        assert_eq!(home.goals_for, away.goals_against);
        assert_eq!(home.goals_against, away.goals_for);
    }

    #[test]
    fn test_normalize_result_complementarity() {
        let fixtures = vec![Fixture::new(1, "Juventus", "Milan", 0, 1)];
        let records = normalize(&fixtures).unwrap();

        let home = records.iter().find(|r| r.venue == Venue::Home).unwrap();
        let away = records.iter().find(|r| r.venue == Venue::Away).unwrap();

        assert_eq!(home.result, MatchResult::Loss);
        assert_eq!(away.result, MatchResult::Win);
        assert_ne!(home.points, away.points);
        assert_eq!(home.points + away.points, 3);
    }

    #[test]
    fn test_normalize_draw_awards_one_point_each() {
        let fixtures = vec![Fixture::new(7, "Inter", "Napoli", 2, 2)];
        let records = normalize(&fixtures).unwrap();

        assert!(records
            .iter()
            .all(|r| r.result == MatchResult::Draw && r.points == 1));
    }

    #[test]
    fn test_normalize_tags_day() {
        let fixtures = vec![Fixture::new(12, "Inter", "Napoli", 1, 0)];
        let records = normalize(&fixtures).unwrap();

        assert!(records.iter().all(|r| r.day == 12));
    }

    #[test]
    fn test_normalize_rejects_day_zero() {
        let fixtures = vec![Fixture::new(0, "Inter", "Napoli", 1, 0)];
        let err = normalize(&fixtures).unwrap_err();

        assert!(matches!(err, EngineError::InvalidFixture(_)));
    }

    #[test]
    fn test_normalize_rejects_empty_team_name() {
        let fixtures = vec![Fixture::new(1, "", "Napoli", 1, 0)];
        let err = normalize(&fixtures).unwrap_err();

        assert!(matches!(err, EngineError::InvalidFixture(_)));
    }

    #[test]
    fn test_normalize_empty_input_is_empty_output() {
        assert!(normalize(&[]).unwrap().is_empty());
    }
}
