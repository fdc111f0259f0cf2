//! Seed ordering and bracket slot placement.

use crate::contest::Player;

/// Smallest power of two that is `>= n`. Zero and one players both give 1.
pub fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Players strongest seed first, unseeded players last.
///
/// The sort is stable, so equal seeds and all unseeded players keep their
/// registration order.
pub fn seed_order(players: &[Player]) -> Vec<&Player> {
    let mut ordered: Vec<&Player> = players.iter().collect();
    ordered.sort_by_key(|p| (p.seed.is_none(), p.seed));
    ordered
}

/// Zero-based seed rank occupying each slot of a bracket of `size` slots.
///
/// Built by repeated mirroring: every rank `r` in a bracket of `n` slots is
/// split into the pair `(r, 2n - 1 - r)`, with the pair reversed at odd slot
/// indices. Rank 0 ends up in the first slot and rank 1 in the last, each
/// first-round pair is `(r, size - 1 - r)`, and successive seeds alternate
/// between halves.
///
/// `size` must be a power of two.
pub fn slot_order(size: usize) -> Vec<usize> {
    debug_assert!(size.is_power_of_two());

    let mut order = vec![0];
    while order.len() < size {
        let span = order.len() * 2;
        order = order
            .iter()
            .enumerate()
            .flat_map(|(i, &rank)| {
                let mirror = span - 1 - rank;
                if i % 2 == 0 {
                    [rank, mirror]
                } else {
                    [mirror, rank]
                }
            })
            .collect();
    }
    order
}

/// Place players into `size` bracket slots. `None` marks an empty slot.
pub fn arrange_slots(players: &[Player], size: usize) -> Vec<Option<&Player>> {
    let ranked = seed_order(players);
    slot_order(size)
        .into_iter()
        .map(|rank| ranked.get(rank).copied())
        .collect()
}
