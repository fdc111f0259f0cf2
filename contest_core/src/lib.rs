//! # Contest Core
//!
//! A competitive-gaming contest engine: contest lifecycle, bracket
//! generation, match results and standings.
//!
//! ## Architecture
//!
//! A contest moves through three statuses:
//!
//! - **PreRegistration**: the roster is open
//! - **InProgress**: the roster is frozen, matches are played
//! - **Completed**: terminal
//!
//! The domain types are plain synchronous values. Persistence and
//! per-contest serialization of mutations live in [`service`].
//!
//! ## Core Modules
//!
//! - [`contest`]: Contest aggregate, players and the status state machine
//! - [`matches`]: Match entity and result recording
//! - [`bracket`]: Round-robin and seeded single-elimination generation
//! - [`standings`]: Win/loss aggregation and ranking
//! - [`service`]: Repository-backed orchestration
//!
//! ## Example
//!
//! ```
//! use contest_core::{BracketGenerator, Contest, ContestFormat, GameTitleId};
//!
//! let mut contest =
//!     Contest::new("Weekly", GameTitleId::new(), ContestFormat::SingleElimination, 3).unwrap();
//! for name in ["Alice", "Bob", "Charlie"] {
//!     contest.add_player(name, None).unwrap();
//! }
//!
//! let matches = BracketGenerator::new().generate(&contest).unwrap();
//! assert_eq!(matches.len(), 3);
//! ```

pub mod errors;
pub use errors::{DomainError, DomainResult, ValidationError};

pub mod ids;
pub use ids::{ContestId, GameTitleId, MatchId, PlayerId};

pub mod game_title;
pub use game_title::GameTitle;

/// Contest aggregate and lifecycle.
pub mod contest;
pub use contest::{Contest, ContestFormat, ContestStatus, Player};

/// Matches and result recording.
pub mod matches;
pub use matches::{Match, MatchResult, MatchStatus, Participant};

pub mod bracket;
pub use bracket::BracketGenerator;

pub mod standings;
pub use standings::{Standings, StandingsAggregator, StandingsEntry};

pub mod service;
pub use service::{ContestService, ErrorKind, ServiceError, ServiceResult};
