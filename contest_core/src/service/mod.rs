//! Orchestration over the contest core.
//!
//! [`ContestService`] loads aggregates from repositories, applies one domain
//! operation, and saves the result. Mutations to a single contest are
//! serialized through [`ContestLocks`]; different contests proceed in
//! parallel.
//!
//! ## Example
//!
//! ```
//! use contest_core::contest::ContestFormat;
//! use contest_core::matches::MatchResult;
//! use contest_core::service::ContestService;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), contest_core::service::ServiceError> {
//! let service = ContestService::in_memory();
//! let title = service.create_game_title("Tekken 8").await?;
//! let contest = service
//!     .create_contest("Friday Cup", title.id, ContestFormat::RoundRobin, 3)
//!     .await?;
//!
//! service.add_player(contest.id, "Alice", None).await?;
//! service.add_player(contest.id, "Bob", None).await?;
//!
//! let matches = service.generate_bracket(contest.id).await?;
//! service
//!     .record_result(contest.id, matches[0].id, MatchResult::score(2, 1))
//!     .await?;
//!
//! let standings = service.standings(contest.id).await?;
//! assert_eq!(standings.entries[0].player_name, "Alice");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod locks;
pub mod manager;
pub mod repository;

pub use errors::{ErrorKind, ServiceError, ServiceResult};
pub use locks::ContestLocks;
pub use manager::ContestService;
pub use repository::{
    ContestRepository, GameTitleRepository, InMemoryContestRepository,
    InMemoryGameTitleRepository, InMemoryMatchRepository, MatchRepository,
};
