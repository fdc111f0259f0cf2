//! Standings computed from completed matches.
//!
//! Nothing here is cached or stored: every call to
//! [`StandingsAggregator::compute`] rebuilds the table from the matches it is
//! given.

pub mod aggregator;
pub mod models;

pub use aggregator::StandingsAggregator;
pub use models::{Standings, StandingsEntry};
