//! Standings calculation engine.
//!
//! Pure functions from fixture data to ranked league tables:
//! - `normalize`: each two-sided fixture into two per-team records
//! - `aggregate`: oriented records into a ranked table at a day cutoff
//! - `evolve`: one table per cutoff day across the whole season
//!
//! The engine performs no I/O and never logs; errors propagate to the
//! caller unchanged.

use thiserror::Error;

mod aggregate;
mod evolve;
mod normalize;

pub use aggregate::aggregate;
pub use evolve::evolve;
pub use normalize::normalize;

/// Errors raised by the standings engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),

    #[error("Invalid cutoff day: {0} (must be >= 1)")]
    InvalidCutoff(u32),

    #[error("No oriented records given")]
    EmptyInput,
}
