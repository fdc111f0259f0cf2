//! Property-based tests for bracket generation and standings using proptest
//!
//! These tests check the structural guarantees of both formats across
//! arbitrary roster sizes and seedings.
use contest_core::{
    BracketGenerator, Contest, ContestFormat, GameTitleId, MatchResult, MatchStatus, PlayerId,
    StandingsAggregator, bracket::next_power_of_two,
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn contest_with(format: ContestFormat, seeds: &[Option<i32>]) -> Contest {
    let mut contest = Contest::new("Property Cup", GameTitleId::new(), format, 3).unwrap();
    for (i, seed) in seeds.iter().enumerate() {
        contest
            .add_player(&format!("Player {}", i + 1), *seed)
            .unwrap();
    }
    contest
}

// Strategy for a roster: each player is either unseeded or seeded 1-64
fn roster_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(prop::option::of(1i32..=64), min..=max)
}

// Strategy for a roster where seeds 1..=n are a permutation
fn fully_seeded_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Option<i32>>> {
    (min..=max)
        .prop_flat_map(|n| Just((1..=n as i32).map(Some).collect::<Vec<_>>()).prop_shuffle())
}

fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a.as_uuid() < b.as_uuid() { (a, b) } else { (b, a) }
}

proptest! {
    #[test]
    fn test_round_robin_covers_every_pair_once(seeds in roster_strategy(0, 24)) {
        let contest = contest_with(ContestFormat::RoundRobin, &seeds);
        let matches = BracketGenerator::new().generate_round_robin(&contest).unwrap();
        let n = contest.players.len();

        prop_assert_eq!(matches.len(), n * n.saturating_sub(1) / 2);
        prop_assert!(matches.iter().all(|m| m.status == MatchStatus::Pending));
        prop_assert!(matches.iter().all(|m| m.round.is_none()));

        let mut pairs = HashSet::new();
        for m in &matches {
            let a = m.player1.player_id().unwrap();
            let b = m.player2.player_id().unwrap();
            prop_assert_ne!(a, b);
            prop_assert!(pairs.insert(pair_key(a, b)), "pair generated twice");
        }
    }

    #[test]
    fn test_elimination_match_count(seeds in roster_strategy(2, 40)) {
        let contest = contest_with(ContestFormat::SingleElimination, &seeds);
        let matches = BracketGenerator::new().generate_single_elimination(&contest).unwrap();

        prop_assert_eq!(matches.len(), next_power_of_two(seeds.len()) - 1);
    }

    #[test]
    fn test_elimination_first_round_places_everyone_once(seeds in roster_strategy(2, 40)) {
        let contest = contest_with(ContestFormat::SingleElimination, &seeds);
        let matches = BracketGenerator::new().generate_single_elimination(&contest).unwrap();
        let size = next_power_of_two(seeds.len());

        let first_round: Vec<_> = matches.iter().filter(|m| m.round == Some(1)).collect();
        prop_assert_eq!(first_round.len(), size / 2);

        let mut seen = HashSet::new();
        for m in &first_round {
            for side in [m.player1, m.player2] {
                if let Some(id) = side.player_id() {
                    prop_assert!(seen.insert(id), "player placed twice");
                }
            }
        }
        prop_assert_eq!(seen.len(), seeds.len());

        let byes = first_round.iter().filter(|m| m.is_bye()).count();
        prop_assert_eq!(byes, size - seeds.len());
        for m in first_round.iter().filter(|m| m.is_bye()) {
            prop_assert_eq!(m.status, MatchStatus::Completed);
            prop_assert!(m.winner().and_then(|w| w.player_id()).is_some());
        }
    }

    #[test]
    fn test_elimination_order_is_strictly_increasing(seeds in roster_strategy(2, 40)) {
        let contest = contest_with(ContestFormat::SingleElimination, &seeds);
        let matches = BracketGenerator::new().generate_single_elimination(&contest).unwrap();

        for pair in matches.windows(2) {
            prop_assert!(pair[0].match_order < pair[1].match_order);
            prop_assert!(pair[0].round <= pair[1].round);
        }
    }

    #[test]
    fn test_top_two_seeds_start_in_opposite_halves(seeds in fully_seeded_strategy(3, 40)) {
        let contest = contest_with(ContestFormat::SingleElimination, &seeds);
        let matches = BracketGenerator::new().generate_single_elimination(&contest).unwrap();
        let half = next_power_of_two(seeds.len()) / 4;

        let seed_of: HashMap<PlayerId, u32> = contest
            .players
            .iter()
            .filter_map(|p| p.seed.map(|s| (p.id, s)))
            .collect();
        let first_round: Vec<_> = matches.iter().filter(|m| m.round == Some(1)).collect();
        let position = |seed: u32| {
            first_round.iter().position(|m| {
                [m.player1, m.player2]
                    .iter()
                    .any(|side| side.player_id().and_then(|id| seed_of.get(&id)) == Some(&seed))
            })
        };

        let top = position(1).unwrap();
        let second = position(2).unwrap();
        prop_assert_ne!(top < half, second < half);
    }

    #[test]
    fn test_standings_wins_equal_losses(
        seeds in roster_strategy(2, 12),
        outcomes in prop::collection::vec(any::<bool>(), 66),
    ) {
        let contest = contest_with(ContestFormat::RoundRobin, &seeds);
        let mut matches = BracketGenerator::new().generate_round_robin(&contest).unwrap();
        for (m, first_wins) in matches.iter_mut().zip(&outcomes) {
            let score = if *first_wins { MatchResult::score(2, 1) } else { MatchResult::score(0, 2) };
            m.record_result(score, contest.best_of).unwrap();
        }

        let standings = StandingsAggregator::new().compute(&contest, &matches);
        let wins: u32 = standings.entries.iter().map(|e| e.wins).sum();
        let losses: u32 = standings.entries.iter().map(|e| e.losses).sum();
        prop_assert_eq!(wins, losses);
        prop_assert_eq!(wins as usize, matches.len());
        prop_assert_eq!(standings.entries.len(), contest.players.len());

        for pair in standings.entries.windows(2) {
            prop_assert!(pair[0].wins >= pair[1].wins);
        }
    }
}
