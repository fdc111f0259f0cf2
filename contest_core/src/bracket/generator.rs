//! Round-robin and single-elimination match generation.

use log::debug;

use super::seeding::{arrange_slots, next_power_of_two};
use crate::contest::{Contest, ContestFormat};
use crate::errors::DomainResult;
use crate::ids::PlayerId;
use crate::matches::{Match, Participant};

/// Who comes out of a bracket slot into the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advancing {
    /// Already decided (bye winner)
    Known(PlayerId),
    /// Depends on a match that has not been played
    Unknown,
}

impl From<Advancing> for Participant {
    fn from(advancing: Advancing) -> Self {
        match advancing {
            Advancing::Known(id) => Participant::Player(id),
            Advancing::Unknown => Participant::ToBeDecided,
        }
    }
}

/// Stateless generator for a contest's full match list.
///
/// Calling it twice for one contest produces a second, independent set of
/// matches; refusing to regenerate is the caller's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketGenerator;

impl BracketGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate matches for the contest's format
    pub fn generate(&self, contest: &Contest) -> DomainResult<Vec<Match>> {
        match contest.format {
            ContestFormat::RoundRobin => self.generate_round_robin(contest),
            ContestFormat::SingleElimination => self.generate_single_elimination(contest),
        }
    }

    /// One pending match per unordered pair of players, in roster order.
    ///
    /// `n` players give `n * (n - 1) / 2` matches numbered from 1, all
    /// without a round.
    pub fn generate_round_robin(&self, contest: &Contest) -> DomainResult<Vec<Match>> {
        let players = &contest.players;
        let mut matches = Vec::with_capacity(players.len() * players.len().saturating_sub(1) / 2);
        let mut match_order = 1;

        for (i, first) in players.iter().enumerate() {
            for second in &players[i + 1..] {
                matches.push(Match::new(
                    contest.id,
                    first.id.into(),
                    second.id.into(),
                    None,
                    match_order,
                )?);
                match_order += 1;
            }
        }

        debug!(
            "Generated {} round-robin matches for contest {} ({} players)",
            matches.len(),
            contest.id,
            players.len()
        );
        Ok(matches)
    }

    /// The whole single-elimination tree, first round through the final.
    ///
    /// The bracket is padded to the next power of two. A player facing an
    /// empty slot gets a completed bye match and advances by name; every
    /// other later-round side is [`Participant::ToBeDecided`]. A bracket of
    /// `size` slots yields `size - 1` matches.
    pub fn generate_single_elimination(&self, contest: &Contest) -> DomainResult<Vec<Match>> {
        let size = next_power_of_two(contest.players.len());
        let mut matches = Vec::with_capacity(size.saturating_sub(1));
        if size < 2 {
            return Ok(matches);
        }

        let slots = arrange_slots(&contest.players, size);
        let mut match_order = 1;
        let mut round = 1;
        let mut advancing = Vec::with_capacity(size / 2);

        for pair in slots.chunks_exact(2) {
            match (pair[0], pair[1]) {
                (None, None) => advancing.push(Advancing::Unknown),
                (Some(player), None) | (None, Some(player)) => {
                    let player_is_first = pair[0].is_some();
                    matches.push(Match::bye(
                        contest.id,
                        player.id,
                        player_is_first,
                        round,
                        match_order,
                    ));
                    advancing.push(Advancing::Known(player.id));
                    match_order += 1;
                }
                (Some(first), Some(second)) => {
                    matches.push(Match::new(
                        contest.id,
                        first.id.into(),
                        second.id.into(),
                        Some(round),
                        match_order,
                    )?);
                    advancing.push(Advancing::Unknown);
                    match_order += 1;
                }
            }
        }

        while advancing.len() > 1 {
            round += 1;
            let mut next = Vec::with_capacity(advancing.len() / 2);

            for pair in advancing.chunks_exact(2) {
                matches.push(Match::new(
                    contest.id,
                    pair[0].into(),
                    pair[1].into(),
                    Some(round),
                    match_order,
                )?);
                next.push(Advancing::Unknown);
                match_order += 1;
            }

            advancing = next;
        }

        debug!(
            "Generated {} single-elimination matches over {} rounds for contest {} ({} players, {} slots)",
            matches.len(),
            round,
            contest.id,
            contest.players.len(),
            size
        );
        Ok(matches)
    }
}
