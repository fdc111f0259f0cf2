//! Service error types.

use thiserror::Error;

use crate::contest::ContestStatus;
use crate::errors::{DomainError, ValidationError};
use crate::ids::{ContestId, GameTitleId, MatchId, PlayerId};

/// Coarse error classes, for mapping onto transport status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    ModificationNotAllowed,
    InvalidTransition,
    NotFound,
    Conflict,
    Internal,
}

/// Service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Rejected by the contest or match aggregate
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Contest not found: {0}")]
    ContestNotFound(ContestId),

    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Game title not found: {0}")]
    GameTitleNotFound(GameTitleId),

    #[error("Game title {game_title_id} is used by {contests} contest(s)")]
    GameTitleInUse {
        game_title_id: GameTitleId,
        contests: usize,
    },

    #[error("Bracket already generated for contest {contest_id} ({existing} matches)")]
    BracketAlreadyGenerated {
        contest_id: ContestId,
        existing: usize,
    },

    #[error("Insufficient players: need {needed}, have {current}")]
    NotEnoughPlayers { needed: usize, current: usize },

    #[error("Matches cannot be changed in status {status}")]
    MatchModificationNotAllowed { status: ContestStatus },

    /// Failure inside a repository backend
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Domain(err.into())
    }
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Domain(DomainError::Validation(_)) => ErrorKind::Validation,
            ServiceError::Domain(DomainError::ModificationNotAllowed { .. })
            | ServiceError::MatchModificationNotAllowed { .. } => {
                ErrorKind::ModificationNotAllowed
            }
            ServiceError::Domain(DomainError::InvalidTransition { .. }) => {
                ErrorKind::InvalidTransition
            }
            ServiceError::ContestNotFound(_)
            | ServiceError::MatchNotFound(_)
            | ServiceError::PlayerNotFound(_)
            | ServiceError::GameTitleNotFound(_) => ErrorKind::NotFound,
            ServiceError::GameTitleInUse { .. } | ServiceError::BracketAlreadyGenerated { .. } => {
                ErrorKind::Conflict
            }
            ServiceError::NotEnoughPlayers { .. } => ErrorKind::Validation,
            ServiceError::Storage(_) => ErrorKind::Internal,
        }
    }

    /// A message safe to show to API clients
    ///
    /// Storage errors are replaced with a generic message.
    pub fn client_message(&self) -> String {
        match self {
            ServiceError::Storage(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
