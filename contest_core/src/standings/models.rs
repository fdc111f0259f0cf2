//! Standings table types.

use serde::{Deserialize, Serialize};

use crate::contest::ContestFormat;
use crate::ids::{ContestId, PlayerId};

/// One player's row in the standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    /// 1-based position in the sorted table
    pub rank: usize,
    pub player_id: PlayerId,
    pub player_name: String,
    pub wins: u32,
    pub losses: u32,
    pub matches_played: u32,
    /// Games won across all counted matches
    pub game_wins: u32,
    /// Games won by opponents across all counted matches
    pub game_losses: u32,
}

impl StandingsEntry {
    pub(crate) fn new(player_id: PlayerId, player_name: &str) -> Self {
        Self {
            rank: 0,
            player_id,
            player_name: player_name.to_string(),
            wins: 0,
            losses: 0,
            matches_played: 0,
            game_wins: 0,
            game_losses: 0,
        }
    }

    /// Game wins minus game losses
    pub fn game_difference(&self) -> i64 {
        i64::from(self.game_wins) - i64::from(self.game_losses)
    }
}

/// Ranked standings for one contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub contest_id: ContestId,
    pub format: ContestFormat,
    pub entries: Vec<StandingsEntry>,
}

impl Standings {
    /// Entry for `player_id`, if they are on the roster
    pub fn entry(&self, player_id: PlayerId) -> Option<&StandingsEntry> {
        self.entries.iter().find(|e| e.player_id == player_id)
    }

    /// The top-ranked entry
    pub fn leader(&self) -> Option<&StandingsEntry> {
        self.entries.first()
    }
}
