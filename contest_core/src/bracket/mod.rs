//! Bracket generation.
//!
//! Turns a contest roster into the complete list of matches for its format:
//! every pairing for round-robin, or a full single-elimination tree with byes
//! and seed separation.

pub mod generator;
pub mod seeding;

pub use generator::BracketGenerator;
pub use seeding::{arrange_slots, next_power_of_two, seed_order, slot_order};
