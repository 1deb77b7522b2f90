//! # Classifica
//!
//! A Serie A standings engine: from raw season fixtures to ranked
//! league tables and their day-by-day evolution.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (fixtures, oriented records, standings)
//! - **calculate**: The pure standings computation engine
//! - **storage**: CSV persistence for fixtures and computed tables
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;

/// Format a season label from its starting year (e.g., 2005 -> "2005-2006").
pub fn season_label(start_year: u16) -> String {
    format!("{}-{}", start_year, start_year + 1)
}

/// Parse a season label (e.g., "2005-2006") into its starting year.
///
/// The second year must be the first plus one; a bare starting year
/// is also accepted.
pub fn parse_season_label(s: &str) -> Option<u16> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    match s.split_once('-') {
        Some((first, second)) => {
            let start: u16 = first.parse().ok()?;
            let end: u16 = second.parse().ok()?;
            (end == start.checked_add(1)?).then_some(start)
        }
        None => s.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_label() {
        assert_eq!(season_label(2005), "2005-2006");
        assert_eq!(season_label(2015), "2015-2016");
    }

    #[test]
    fn test_parse_season_label_full() {
        assert_eq!(parse_season_label("2005-2006"), Some(2005));
        assert_eq!(parse_season_label(" 2015-2016 "), Some(2015));
    }

    #[test]
    fn test_parse_season_label_bare_year() {
        assert_eq!(parse_season_label("2010"), Some(2010));
    }

    #[test]
    fn test_parse_season_label_mismatched_years() {
        assert_eq!(parse_season_label("2005-2007"), None);
        assert_eq!(parse_season_label("2005-2005"), None);
    }

    #[test]
    fn test_parse_season_label_invalid() {
        assert_eq!(parse_season_label("abc"), None);
        assert_eq!(parse_season_label("2005-"), None);
    }

    #[test]
    fn test_parse_season_label_empty() {
        assert_eq!(parse_season_label(""), None);
    }

    #[test]
    fn test_parse_season_label_round_trips() {
        assert_eq!(parse_season_label(&season_label(1998)), Some(1998));
    }
}
