//! Domain error types.
//!
//! Every error here is raised synchronously by an entity constructor or
//! mutator. A failing call leaves the entity untouched.

use thiserror::Error;

use crate::contest::ContestStatus;

/// Malformed input to an entity constructor or mutator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name empty after trimming whitespace
    #[error("{field} must not be blank")]
    BlankName { field: &'static str },

    /// Seed was zero or negative
    #[error("seed must be a positive integer, got {0}")]
    NonPositiveSeed(i32),

    /// Best-of was zero or even
    #[error("best_of must be a positive odd integer, got {0}")]
    InvalidBestOf(u32),

    /// Both sides of a match are the same player
    #[error("a player cannot be paired against themselves")]
    SelfPairing,

    /// A win count is above ceil(best_of / 2)
    #[error("wins cannot exceed {max_wins} for best_of={best_of}, got {wins}")]
    WinsExceedCap {
        wins: u32,
        max_wins: u32,
        best_of: u32,
    },

    /// Both sides have the same win count
    #[error("draw is not allowed: wins must differ (both {0})")]
    Draw(u32),
}

/// Errors raised by the contest and match aggregates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("contest cannot be modified in status {status}")]
    ModificationNotAllowed { status: ContestStatus },

    #[error("cannot transition from {from} to {to}")]
    InvalidTransition {
        from: ContestStatus,
        to: ContestStatus,
    },
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
