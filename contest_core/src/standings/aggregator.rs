//! Standings aggregation for both contest formats.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::models::{Standings, StandingsEntry};
use crate::contest::{Contest, ContestFormat};
use crate::ids::PlayerId;
use crate::matches::{Match, Participant};

/// Stateless standings calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct StandingsAggregator;

impl StandingsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Rank the contest roster from its completed matches.
    ///
    /// Pending matches are ignored, so passing the full match list or only
    /// the completed ones gives the same table. Round-robin ranks by wins then
    /// game difference; elimination ranks by wins then matches played. Ties
    /// keep roster order.
    pub fn compute(&self, contest: &Contest, matches: &[Match]) -> Standings {
        let mut entries: Vec<StandingsEntry> = contest
            .players
            .iter()
            .map(|p| StandingsEntry::new(p.id, &p.name))
            .collect();
        let index: HashMap<PlayerId, usize> = contest
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();

        let slot = |side: &Participant| side.player_id().and_then(|id| index.get(&id).copied());

        for m in matches.iter().filter(|m| m.is_completed()) {
            let first = slot(&m.player1);
            let second = slot(&m.player2);

            match contest.format {
                // a round-robin match only counts when both players are on the roster
                ContestFormat::RoundRobin => {
                    if let (Some(a), Some(b)) = (first, second) {
                        tally(&mut entries[a], m.player1_wins, m.player2_wins);
                        tally(&mut entries[b], m.player2_wins, m.player1_wins);
                    }
                }
                ContestFormat::SingleElimination => {
                    if let Some(a) = first {
                        tally(&mut entries[a], m.player1_wins, m.player2_wins);
                    }
                    if let Some(b) = second {
                        tally(&mut entries[b], m.player2_wins, m.player1_wins);
                    }
                }
            }
        }

        let ordering: fn(&StandingsEntry, &StandingsEntry) -> Ordering = match contest.format {
            ContestFormat::RoundRobin => |a, b| {
                b.wins
                    .cmp(&a.wins)
                    .then_with(|| b.game_difference().cmp(&a.game_difference()))
            },
            ContestFormat::SingleElimination => |a, b| {
                b.wins
                    .cmp(&a.wins)
                    .then_with(|| b.matches_played.cmp(&a.matches_played))
            },
        };
        entries.sort_by(ordering);

        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        Standings {
            contest_id: contest.id,
            format: contest.format,
            entries,
        }
    }
}

/// Count one match for one side given its own and its opponent's game wins
fn tally(entry: &mut StandingsEntry, own: u32, opponent: u32) {
    entry.matches_played += 1;
    entry.game_wins += own;
    entry.game_losses += opponent;
    if own > opponent {
        entry.wins += 1;
    } else {
        entry.losses += 1;
    }
}
