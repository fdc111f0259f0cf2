//! Match entity.

use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::contest::state_machine::max_wins;
use crate::errors::{DomainResult, ValidationError};
use crate::ids::{ContestId, MatchId, PlayerId};

/// Comment attached to auto-completed bye matches
pub const BYE_COMMENT: &str = "BYE";

/// Match status. `Pending -> Completed` is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Pending,
    Completed,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Pending => write!(f, "PENDING"),
            MatchStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// One side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "player_id", rename_all = "snake_case")]
pub enum Participant {
    /// A registered player
    Player(PlayerId),
    /// Empty bracket slot facing a player who advances automatically
    Bye,
    /// Winner of an earlier match that has not been played yet
    ToBeDecided,
}

impl Participant {
    /// The player behind this side, if it is a real one
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            Participant::Player(id) => Some(*id),
            Participant::Bye | Participant::ToBeDecided => None,
        }
    }

    pub fn is_player(&self, player_id: PlayerId) -> bool {
        self.player_id() == Some(player_id)
    }
}

impl From<PlayerId> for Participant {
    fn from(id: PlayerId) -> Self {
        Participant::Player(id)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Player(id) => write!(f, "{id}"),
            Participant::Bye => write!(f, "BYE"),
            Participant::ToBeDecided => write!(f, "TBD"),
        }
    }
}

/// Outcome submitted for a match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub player1_character: Option<String>,
    pub player2_character: Option<String>,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub comment: Option<String>,
}

impl MatchResult {
    /// A result with win counts only
    pub fn score(player1_wins: u32, player2_wins: u32) -> Self {
        Self {
            player1_wins,
            player2_wins,
            ..Self::default()
        }
    }

    pub fn with_characters(mut self, player1: &str, player2: &str) -> Self {
        self.player1_character = Some(player1.to_string());
        self.player2_character = Some(player2.to_string());
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}

/// A best-of-N pairing between two sides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub contest_id: ContestId,
    pub player1: Participant,
    pub player2: Participant,
    pub player1_character: Option<String>,
    pub player2_character: Option<String>,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub comment: Option<String>,
    pub status: MatchStatus,
    /// Elimination round, starting at 1. `None` for round-robin.
    pub round: Option<u32>,
    pub match_order: u32,
}

impl Match {
    /// Create a pending match with no games played
    ///
    /// # Errors
    ///
    /// `SelfPairing` if both sides are the same registered player.
    pub fn new(
        contest_id: ContestId,
        player1: Participant,
        player2: Participant,
        round: Option<u32>,
        match_order: u32,
    ) -> Result<Self, ValidationError> {
        if matches!((player1, player2), (Participant::Player(a), Participant::Player(b)) if a == b)
        {
            return Err(ValidationError::SelfPairing);
        }

        Ok(Self {
            id: MatchId::new(),
            contest_id,
            player1,
            player2,
            player1_character: None,
            player2_character: None,
            player1_wins: 0,
            player2_wins: 0,
            comment: None,
            status: MatchStatus::Pending,
            round,
            match_order,
        })
    }

    /// An already completed bye match: the present player wins 1-0
    pub(crate) fn bye(
        contest_id: ContestId,
        player: PlayerId,
        player_is_first: bool,
        round: u32,
        match_order: u32,
    ) -> Self {
        let (player1, player2, player1_wins, player2_wins) = if player_is_first {
            (Participant::Player(player), Participant::Bye, 1, 0)
        } else {
            (Participant::Bye, Participant::Player(player), 0, 1)
        };

        Self {
            id: MatchId::new(),
            contest_id,
            player1,
            player2,
            player1_character: None,
            player2_character: None,
            player1_wins,
            player2_wins,
            comment: Some(BYE_COMMENT.to_string()),
            status: MatchStatus::Completed,
            round: Some(round),
            match_order,
        }
    }

    /// Record the outcome and mark the match completed
    ///
    /// Overwrites characters, win counts and comment. Nothing else changes,
    /// and nothing changes at all when validation fails.
    pub fn record_result(&mut self, result: MatchResult, best_of: u32) -> DomainResult<()> {
        let max_wins = max_wins(best_of);
        for wins in [result.player1_wins, result.player2_wins] {
            if wins > max_wins {
                return Err(ValidationError::WinsExceedCap {
                    wins,
                    max_wins,
                    best_of,
                }
                .into());
            }
        }
        if result.player1_wins == result.player2_wins {
            return Err(ValidationError::Draw(result.player1_wins).into());
        }

        self.player1_character = result.player1_character;
        self.player2_character = result.player2_character;
        self.player1_wins = result.player1_wins;
        self.player2_wins = result.player2_wins;
        self.comment = result.comment;
        self.status = MatchStatus::Completed;
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn is_bye(&self) -> bool {
        self.player1 == Participant::Bye || self.player2 == Participant::Bye
    }

    /// Winning side of a completed match
    pub fn winner(&self) -> Option<Participant> {
        if !self.is_completed() {
            return None;
        }
        Some(if self.player1_wins > self.player2_wins {
            self.player1
        } else {
            self.player2
        })
    }

    /// Whether `player_id` plays on either side
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player1.is_player(player_id) || self.player2.is_player(player_id)
    }

    /// Display order: round-less matches first, then by round and match order
    pub fn display_order(&self, other: &Match) -> Ordering {
        (self.round, self.match_order).cmp(&(other.round, other.match_order))
    }
}
