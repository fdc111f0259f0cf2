//! Bracket Preview Example
//!
//! Demonstrates seeded single-elimination generation and standings.

use contest_core::{
    BracketGenerator, Contest, ContestFormat, DomainError, GameTitleId, MatchResult,
    StandingsAggregator,
};

fn main() -> Result<(), DomainError> {
    println!("=== Single Elimination Preview ===\n");

    let mut contest = Contest::new(
        "Regional Qualifier",
        GameTitleId::new(),
        ContestFormat::SingleElimination,
        3,
    )?;
    let roster = [
        ("Daigo", Some(1)),
        ("Punk", Some(2)),
        ("Tokido", Some(3)),
        ("MenaRD", None),
        ("Kazunoko", None),
    ];
    for (name, seed) in roster {
        contest.add_player(name, seed)?;
    }

    let name_of = |side: contest_core::Participant| match side.player_id() {
        Some(id) => contest
            .player(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string()),
        None => side.to_string(),
    };

    let mut matches = BracketGenerator::new().generate(&contest)?;
    for m in &matches {
        println!(
            "Round {} #{:<2} {:>10} vs {:<10} [{}]",
            m.round.unwrap_or_default(),
            m.match_order,
            name_of(m.player1),
            name_of(m.player2),
            m.status
        );
    }

    // Play out every pending first-round match in favour of player 1
    println!("\nRecording first-round results...\n");
    for m in matches
        .iter_mut()
        .filter(|m| m.round == Some(1) && !m.is_completed())
    {
        m.record_result(MatchResult::score(2, 1), contest.best_of)?;
    }

    let standings = StandingsAggregator::new().compute(&contest, &matches);
    for entry in &standings.entries {
        println!(
            "{}. {:<10} W{} L{} ({} played)",
            entry.rank, entry.player_name, entry.wins, entry.losses, entry.matches_played
        );
    }

    Ok(())
}
