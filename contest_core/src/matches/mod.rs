//! Matches and result recording.

pub mod models;

pub use models::{BYE_COMMENT, Match, MatchResult, MatchStatus, Participant};
