//! The contest aggregate root and its lifecycle rules.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use super::models::{ContestFormat, ContestStatus, Player};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::game_title::validate_name;
use crate::ids::{ContestId, GameTitleId, PlayerId};

/// A contest and its roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: ContestId,
    pub name: String,
    pub game_title_id: GameTitleId,
    pub format: ContestFormat,
    /// Positive odd number of games per match
    pub best_of: u32,
    pub status: ContestStatus,
    pub created_at: DateTime<Utc>,
    /// Registration order is preserved
    pub players: Vec<Player>,
}

impl Contest {
    /// Create a contest in [`ContestStatus::PreRegistration`] with an empty roster
    pub fn new(
        name: &str,
        game_title_id: GameTitleId,
        format: ContestFormat,
        best_of: u32,
    ) -> DomainResult<Self> {
        let name = validate_name(name, "contest name")?;
        validate_best_of(best_of)?;

        Ok(Self {
            id: ContestId::new(),
            name,
            game_title_id,
            format,
            best_of,
            status: ContestStatus::PreRegistration,
            created_at: Utc::now(),
            players: Vec::new(),
        })
    }

    /// Register a new player
    ///
    /// # Errors
    ///
    /// `ModificationNotAllowed` outside pre-registration, `Validation` for a
    /// blank name or a non-positive seed.
    pub fn add_player(&mut self, name: &str, seed: Option<i32>) -> DomainResult<Player> {
        self.ensure_modifiable()?;
        let player = Player::new(self.id, name, seed)?;
        self.players.push(player.clone());
        Ok(player)
    }

    /// Remove a player from the roster. Unknown ids are ignored.
    pub fn remove_player(&mut self, player_id: PlayerId) -> DomainResult<()> {
        self.ensure_modifiable()?;
        self.players.retain(|p| p.id != player_id);
        Ok(())
    }

    /// Move the contest to `next` if the pair is in the transition table
    pub fn transition_status(&mut self, next: ContestStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        info!("Contest {} moved from {} to {}", self.id, self.status, next);
        self.status = next;
        Ok(())
    }

    /// Look up a roster player
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Whether `player_id` is currently on the roster
    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.player(player_id).is_some()
    }

    /// Games needed to take a match: `ceil(best_of / 2)`
    pub fn max_wins(&self) -> u32 {
        max_wins(self.best_of)
    }

    fn ensure_modifiable(&self) -> DomainResult<()> {
        if !self.status.allows_roster_changes() {
            return Err(DomainError::ModificationNotAllowed {
                status: self.status,
            });
        }
        Ok(())
    }
}

/// Games needed to take a best-of-`best_of` match
pub const fn max_wins(best_of: u32) -> u32 {
    best_of.div_ceil(2)
}

/// A best-of value must be a positive odd integer
pub fn validate_best_of(best_of: u32) -> Result<(), ValidationError> {
    if best_of == 0 || best_of % 2 == 0 {
        return Err(ValidationError::InvalidBestOf(best_of));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(format: ContestFormat) -> Contest {
        Contest::new("Friday Night", GameTitleId::new(), format, 3).unwrap()
    }

    #[test]
    fn test_new_contest_starts_in_pre_registration() {
        let contest = contest(ContestFormat::RoundRobin);
        assert_eq!(contest.status, ContestStatus::PreRegistration);
        assert!(contest.players.is_empty());
        assert_eq!(contest.max_wins(), 2);
    }

    #[test]
    fn test_best_of_must_be_positive_and_odd() {
        for best_of in [0, 2, 4] {
            let err = Contest::new("X", GameTitleId::new(), ContestFormat::RoundRobin, best_of)
                .unwrap_err();
            assert_eq!(
                err,
                DomainError::Validation(ValidationError::InvalidBestOf(best_of))
            );
        }
        assert!(Contest::new("X", GameTitleId::new(), ContestFormat::RoundRobin, 1).is_ok());
    }

    #[test]
    fn test_blank_contest_name_rejected() {
        assert!(matches!(
            Contest::new(" ", GameTitleId::new(), ContestFormat::RoundRobin, 3),
            Err(DomainError::Validation(ValidationError::BlankName { .. }))
        ));
    }

    #[test]
    fn test_add_and_remove_player() {
        let mut contest = contest(ContestFormat::RoundRobin);
        let alice = contest.add_player("Alice", Some(1)).unwrap();
        let bob = contest.add_player("Bob", None).unwrap();

        assert_eq!(contest.players.len(), 2);
        assert_eq!(alice.contest_id, contest.id);
        assert!(contest.has_player(bob.id));

        contest.remove_player(alice.id).unwrap();
        assert_eq!(contest.players, vec![bob]);

        // removing an unknown id is a no-op
        contest.remove_player(PlayerId::new()).unwrap();
        assert_eq!(contest.players.len(), 1);
    }

    #[test]
    fn test_invalid_player_leaves_roster_untouched() {
        let mut contest = contest(ContestFormat::RoundRobin);
        assert!(contest.add_player("", None).is_err());
        assert!(contest.add_player("Zed", Some(0)).is_err());
        assert!(contest.players.is_empty());
    }

    #[test]
    fn test_roster_frozen_after_registration() {
        let mut contest = contest(ContestFormat::SingleElimination);
        let alice = contest.add_player("Alice", None).unwrap();

        contest.transition_status(ContestStatus::InProgress).unwrap();
        assert_eq!(
            contest.add_player("Bob", None).unwrap_err(),
            DomainError::ModificationNotAllowed {
                status: ContestStatus::InProgress
            }
        );
        assert!(contest.remove_player(alice.id).is_err());

        contest.transition_status(ContestStatus::Completed).unwrap();
        assert_eq!(
            contest.remove_player(alice.id).unwrap_err(),
            DomainError::ModificationNotAllowed {
                status: ContestStatus::Completed
            }
        );
        assert_eq!(contest.players.len(), 1);
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut contest = contest(ContestFormat::RoundRobin);

        assert_eq!(
            contest
                .transition_status(ContestStatus::Completed)
                .unwrap_err(),
            DomainError::InvalidTransition {
                from: ContestStatus::PreRegistration,
                to: ContestStatus::Completed,
            }
        );
        assert!(
            contest
                .transition_status(ContestStatus::PreRegistration)
                .is_err()
        );
        assert_eq!(contest.status, ContestStatus::PreRegistration);

        contest.transition_status(ContestStatus::InProgress).unwrap();
        assert!(contest.transition_status(ContestStatus::InProgress).is_err());
        contest.transition_status(ContestStatus::Completed).unwrap();
        assert!(contest.transition_status(ContestStatus::Completed).is_err());
    }

    #[test]
    fn test_max_wins() {
        assert_eq!(max_wins(1), 1);
        assert_eq!(max_wins(3), 2);
        assert_eq!(max_wins(5), 3);
        assert_eq!(max_wins(7), 4);
    }
}
