//! Core data models for the standings engine.

mod fixture;
mod oriented;
mod standings;

pub use fixture::*;
pub use oriented::*;
pub use standings::*;
