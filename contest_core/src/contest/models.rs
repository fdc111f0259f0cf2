//! Contest value types and the player entity.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::ValidationError;
use crate::game_title::validate_name;
use crate::ids::{ContestId, PlayerId};

/// Bracket format of a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestFormat {
    /// Everyone plays everyone once
    RoundRobin,
    /// A match loss removes a player from contention
    SingleElimination,
}

impl fmt::Display for ContestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContestFormat::RoundRobin => write!(f, "ROUND_ROBIN"),
            ContestFormat::SingleElimination => write!(f, "SINGLE_ELIMINATION"),
        }
    }
}

impl FromStr for ContestFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROUND_ROBIN" => Ok(ContestFormat::RoundRobin),
            "SINGLE_ELIMINATION" => Ok(ContestFormat::SingleElimination),
            other => Err(format!("unknown contest format: {other}")),
        }
    }
}

/// Lifecycle status of a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestStatus {
    /// Accepting roster changes
    PreRegistration,
    /// Matches are being played
    InProgress,
    /// Finished
    Completed,
}

/// Every legal `(current, requested)` status pair.
///
/// Anything not listed, including staying in the same status, is rejected.
pub const VALID_TRANSITIONS: &[(ContestStatus, ContestStatus)] = &[
    (ContestStatus::PreRegistration, ContestStatus::InProgress),
    (ContestStatus::InProgress, ContestStatus::Completed),
];

impl ContestStatus {
    /// Whether moving from `self` to `next` is a legal transition
    pub fn can_transition_to(self, next: ContestStatus) -> bool {
        VALID_TRANSITIONS.contains(&(self, next))
    }

    /// Whether the roster may be changed in this status
    pub fn allows_roster_changes(self) -> bool {
        self == ContestStatus::PreRegistration
    }
}

impl fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContestStatus::PreRegistration => write!(f, "PRE_REGISTRATION"),
            ContestStatus::InProgress => write!(f, "IN_PROGRESS"),
            ContestStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl FromStr for ContestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRE_REGISTRATION" => Ok(ContestStatus::PreRegistration),
            "IN_PROGRESS" => Ok(ContestStatus::InProgress),
            "COMPLETED" => Ok(ContestStatus::Completed),
            other => Err(format!("unknown contest status: {other}")),
        }
    }
}

/// A player registered in one contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Owning contest
    pub contest_id: ContestId,
    pub name: String,
    /// Lower is stronger. `None` sorts after every seeded player.
    pub seed: Option<u32>,
}

impl Player {
    pub(crate) fn new(
        contest_id: ContestId,
        name: &str,
        seed: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name, "player name")?;
        let seed = match seed {
            Some(s) if s <= 0 => return Err(ValidationError::NonPositiveSeed(s)),
            Some(s) => Some(s.unsigned_abs()),
            None => None,
        };

        Ok(Self {
            id: PlayerId::new(),
            contest_id,
            name,
            seed,
        })
    }
}
