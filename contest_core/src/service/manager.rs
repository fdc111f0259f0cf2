//! Contest service: repository-backed use cases over the domain core.

use std::sync::Arc;
use tokio::sync::{OwnedMutexGuard, RwLock};

use super::errors::{ServiceError, ServiceResult};
use super::locks::ContestLocks;
use super::repository::{
    ContestRepository, GameTitleRepository, InMemoryContestRepository,
    InMemoryGameTitleRepository, InMemoryMatchRepository, MatchRepository,
};
use crate::bracket::BracketGenerator;
use crate::contest::{Contest, ContestFormat, ContestStatus, Player};
use crate::game_title::GameTitle;
use crate::ids::{ContestId, GameTitleId, MatchId, PlayerId};
use crate::matches::{Match, MatchResult, Participant};
use crate::standings::{Standings, StandingsAggregator};

/// Players needed before a bracket can be generated
pub const MIN_BRACKET_PLAYERS: usize = 2;

/// Contest service
#[derive(Clone)]
pub struct ContestService {
    contests: Arc<dyn ContestRepository>,
    matches: Arc<dyn MatchRepository>,
    game_titles: Arc<dyn GameTitleRepository>,
    locks: Arc<ContestLocks>,
    /// Shared by contest creation, exclusive for game title deletion
    title_guard: Arc<RwLock<()>>,
    generator: BracketGenerator,
    aggregator: StandingsAggregator,
}

impl ContestService {
    /// Create a service over the given repositories
    pub fn new(
        contests: Arc<dyn ContestRepository>,
        matches: Arc<dyn MatchRepository>,
        game_titles: Arc<dyn GameTitleRepository>,
    ) -> Self {
        Self {
            contests,
            matches,
            game_titles,
            locks: Arc::new(ContestLocks::new()),
            title_guard: Arc::new(RwLock::new(())),
            generator: BracketGenerator::new(),
            aggregator: StandingsAggregator::new(),
        }
    }

    /// Create a service backed by empty in-memory repositories
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryContestRepository::new()),
            Arc::new(InMemoryMatchRepository::new()),
            Arc::new(InMemoryGameTitleRepository::new()),
        )
    }

    // === Game titles ===

    pub async fn create_game_title(&self, name: &str) -> ServiceResult<GameTitle> {
        let title = GameTitle::new(name)?;
        self.game_titles.save(&title).await?;
        log::info!("Created game title {} '{}'", title.id, title.name);
        Ok(title)
    }

    /// All game titles, sorted by name
    pub async fn list_game_titles(&self) -> ServiceResult<Vec<GameTitle>> {
        let mut titles = self.game_titles.find_all().await?;
        titles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(titles)
    }

    pub async fn get_game_title(&self, id: GameTitleId) -> ServiceResult<GameTitle> {
        self.game_titles
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::GameTitleNotFound(id))
    }

    pub async fn rename_game_title(&self, id: GameTitleId, name: &str) -> ServiceResult<GameTitle> {
        let mut title = self.get_game_title(id).await?;
        title.rename(name)?;
        self.game_titles.save(&title).await?;
        Ok(title)
    }

    /// Delete a game title that no contest references
    pub async fn delete_game_title(&self, id: GameTitleId) -> ServiceResult<()> {
        let _titles = self.title_guard.write().await;
        self.get_game_title(id).await?;

        let in_use = self.contests.find_by_game_title(id).await?.len();
        if in_use > 0 {
            log::warn!("Refusing to delete game title {} used by {} contest(s)", id, in_use);
            return Err(ServiceError::GameTitleInUse {
                game_title_id: id,
                contests: in_use,
            });
        }

        self.game_titles.delete(id).await?;
        log::info!("Deleted game title {}", id);
        Ok(())
    }

    // === Contests ===

    /// Create a contest in pre-registration for an existing game title
    pub async fn create_contest(
        &self,
        name: &str,
        game_title_id: GameTitleId,
        format: ContestFormat,
        best_of: u32,
    ) -> ServiceResult<Contest> {
        let _titles = self.title_guard.read().await;
        self.get_game_title(game_title_id).await?;

        let contest = Contest::new(name, game_title_id, format, best_of)?;
        self.contests.save(&contest).await?;
        log::info!(
            "Created contest {} '{}' ({}, best of {})",
            contest.id,
            contest.name,
            contest.format,
            contest.best_of
        );
        Ok(contest)
    }

    pub async fn get_contest(&self, id: ContestId) -> ServiceResult<Contest> {
        self.contests
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::ContestNotFound(id))
    }

    /// Lock a contest and load it under the lock
    ///
    /// Unknown ids never get a registry entry. A contest deleted while
    /// waiting for the lock has its entry dropped again.
    async fn lock_contest(&self, id: ContestId) -> ServiceResult<(OwnedMutexGuard<()>, Contest)> {
        self.get_contest(id).await?;

        let guard = self.locks.acquire(id).await;
        match self.contests.find_by_id(id).await? {
            Some(contest) => Ok((guard, contest)),
            None => {
                drop(guard);
                self.locks.forget(id).await;
                Err(ServiceError::ContestNotFound(id))
            }
        }
    }

    /// All contests, newest first
    pub async fn list_contests(&self) -> ServiceResult<Vec<Contest>> {
        let mut contests = self.contests.find_all().await?;
        contests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(contests)
    }

    /// Delete a contest together with its matches
    pub async fn delete_contest(&self, id: ContestId) -> ServiceResult<()> {
        let (guard, _) = self.lock_contest(id).await?;

        let removed = self.matches.delete_by_contest(id).await?;
        self.contests.delete(id).await?;
        drop(guard);
        self.locks.forget(id).await;

        log::info!("Deleted contest {} and {} match(es)", id, removed);
        Ok(())
    }

    pub async fn update_status(&self, id: ContestId, status: ContestStatus) -> ServiceResult<Contest> {
        let (_guard, mut contest) = self.lock_contest(id).await?;

        if let Err(err) = contest.transition_status(status) {
            log::warn!("Rejected status change on contest {}: {}", id, err);
            return Err(err.into());
        }

        self.contests.save(&contest).await?;
        Ok(contest)
    }

    /// Register a player. Returns the new player.
    pub async fn add_player(
        &self,
        id: ContestId,
        name: &str,
        seed: Option<i32>,
    ) -> ServiceResult<Player> {
        let (_guard, mut contest) = self.lock_contest(id).await?;

        let player = match contest.add_player(name, seed) {
            Ok(player) => player,
            Err(err) => {
                log::warn!("Rejected player registration on contest {}: {}", id, err);
                return Err(err.into());
            }
        };

        self.contests.save(&contest).await?;
        log::debug!("Contest {} registered player {} '{}'", id, player.id, player.name);
        Ok(player)
    }

    /// Remove a player from the roster. Returns the updated contest.
    pub async fn remove_player(&self, id: ContestId, player_id: PlayerId) -> ServiceResult<Contest> {
        let (_guard, mut contest) = self.lock_contest(id).await?;

        // A frozen roster reports the status, not the missing player
        if contest.status.allows_roster_changes() && !contest.has_player(player_id) {
            return Err(ServiceError::PlayerNotFound(player_id));
        }
        if let Err(err) = contest.remove_player(player_id) {
            log::warn!("Rejected player removal on contest {}: {}", id, err);
            return Err(err.into());
        }

        self.contests.save(&contest).await?;
        Ok(contest)
    }

    // === Matches ===

    /// Generate every match of the contest's format
    ///
    /// Refused when the contest already has matches.
    pub async fn generate_bracket(&self, id: ContestId) -> ServiceResult<Vec<Match>> {
        let (_guard, contest) = self.lock_contest(id).await?;

        let existing = self.matches.find_by_contest(id).await?.len();
        if existing > 0 {
            log::warn!("Bracket for contest {} already has {} match(es)", id, existing);
            return Err(ServiceError::BracketAlreadyGenerated {
                contest_id: id,
                existing,
            });
        }
        if contest.players.len() < MIN_BRACKET_PLAYERS {
            return Err(ServiceError::NotEnoughPlayers {
                needed: MIN_BRACKET_PLAYERS,
                current: contest.players.len(),
            });
        }

        let mut matches = self.generator.generate(&contest)?;
        self.matches.save_all(&matches).await?;
        matches.sort_by(|a, b| a.display_order(b));

        log::info!(
            "Generated {} bracket with {} match(es) for contest {}",
            contest.format,
            matches.len(),
            id
        );
        Ok(matches)
    }

    /// Matches of a contest ordered by round, then match order
    pub async fn list_matches(&self, id: ContestId) -> ServiceResult<Vec<Match>> {
        self.get_contest(id).await?;
        let mut matches = self.matches.find_by_contest(id).await?;
        matches.sort_by(|a, b| a.display_order(b));
        Ok(matches)
    }

    /// Add a single pending match between two roster players
    pub async fn add_match(
        &self,
        id: ContestId,
        player1: PlayerId,
        player2: PlayerId,
        round: Option<u32>,
        match_order: u32,
    ) -> ServiceResult<Match> {
        let (_guard, contest) = self.lock_contest(id).await?;

        if contest.status == ContestStatus::Completed {
            return Err(ServiceError::MatchModificationNotAllowed {
                status: contest.status,
            });
        }
        for player_id in [player1, player2] {
            if !contest.has_player(player_id) {
                return Err(ServiceError::PlayerNotFound(player_id));
            }
        }

        let m = Match::new(
            id,
            Participant::Player(player1),
            Participant::Player(player2),
            round,
            match_order,
        )?;
        self.matches.save(&m).await?;
        log::debug!("Contest {} added match {}", id, m.id);
        Ok(m)
    }

    pub async fn get_match(&self, id: ContestId, match_id: MatchId) -> ServiceResult<Match> {
        self.matches
            .find_by_id(match_id)
            .await?
            .filter(|m| m.contest_id == id)
            .ok_or(ServiceError::MatchNotFound(match_id))
    }

    /// Record a match outcome using the contest's best-of
    pub async fn record_result(
        &self,
        id: ContestId,
        match_id: MatchId,
        result: MatchResult,
    ) -> ServiceResult<Match> {
        let (_guard, contest) = self.lock_contest(id).await?;
        let mut m = self.get_match(id, match_id).await?;

        if let Err(err) = m.record_result(result, contest.best_of) {
            log::warn!("Rejected result for match {}: {}", match_id, err);
            return Err(err.into());
        }

        self.matches.save(&m).await?;
        log::info!(
            "Match {} completed {}-{}",
            match_id,
            m.player1_wins,
            m.player2_wins
        );
        Ok(m)
    }

    /// Delete a match, except while the contest is in progress
    pub async fn delete_match(&self, id: ContestId, match_id: MatchId) -> ServiceResult<()> {
        let (_guard, contest) = self.lock_contest(id).await?;

        if contest.status == ContestStatus::InProgress {
            return Err(ServiceError::MatchModificationNotAllowed {
                status: contest.status,
            });
        }

        self.get_match(id, match_id).await?;
        self.matches.delete(match_id).await?;
        Ok(())
    }

    // === Standings ===

    pub async fn standings(&self, id: ContestId) -> ServiceResult<Standings> {
        let contest = self.get_contest(id).await?;
        let matches = self.matches.find_by_contest(id).await?;
        Ok(self.aggregator.compute(&contest, &matches))
    }
}
