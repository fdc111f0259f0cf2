//! Repository trait definitions and in-memory implementations.
//!
//! The service only talks to these traits, so a persistent backend can be
//! swapped in without touching orchestration code.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::errors::ServiceResult;
use crate::contest::Contest;
use crate::game_title::GameTitle;
use crate::ids::{ContestId, GameTitleId, MatchId};
use crate::matches::Match;

/// Trait for contest persistence
#[async_trait]
pub trait ContestRepository: Send + Sync {
    /// Insert or replace a contest
    async fn save(&self, contest: &Contest) -> ServiceResult<()>;

    async fn find_by_id(&self, id: ContestId) -> ServiceResult<Option<Contest>>;

    async fn find_all(&self) -> ServiceResult<Vec<Contest>>;

    /// Contests referencing a game title
    async fn find_by_game_title(&self, game_title_id: GameTitleId) -> ServiceResult<Vec<Contest>>;

    /// Remove a contest. Returns whether it existed.
    async fn delete(&self, id: ContestId) -> ServiceResult<bool>;
}

/// Trait for match persistence
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Insert or replace a match
    async fn save(&self, m: &Match) -> ServiceResult<()>;

    /// Insert or replace several matches at once
    async fn save_all(&self, matches: &[Match]) -> ServiceResult<()>;

    async fn find_by_id(&self, id: MatchId) -> ServiceResult<Option<Match>>;

    /// All matches of a contest, in no particular order
    async fn find_by_contest(&self, contest_id: ContestId) -> ServiceResult<Vec<Match>>;

    /// Remove a match. Returns whether it existed.
    async fn delete(&self, id: MatchId) -> ServiceResult<bool>;

    /// Remove every match of a contest. Returns how many were removed.
    async fn delete_by_contest(&self, contest_id: ContestId) -> ServiceResult<usize>;
}

/// Trait for game title persistence
#[async_trait]
pub trait GameTitleRepository: Send + Sync {
    async fn save(&self, title: &GameTitle) -> ServiceResult<()>;

    async fn find_by_id(&self, id: GameTitleId) -> ServiceResult<Option<GameTitle>>;

    async fn find_all(&self) -> ServiceResult<Vec<GameTitle>>;

    async fn delete(&self, id: GameTitleId) -> ServiceResult<bool>;
}

/// Contest storage held in process memory
#[derive(Debug, Default)]
pub struct InMemoryContestRepository {
    contests: RwLock<HashMap<ContestId, Contest>>,
}

impl InMemoryContestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContestRepository for InMemoryContestRepository {
    async fn save(&self, contest: &Contest) -> ServiceResult<()> {
        self.contests
            .write()
            .await
            .insert(contest.id, contest.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ContestId) -> ServiceResult<Option<Contest>> {
        Ok(self.contests.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> ServiceResult<Vec<Contest>> {
        Ok(self.contests.read().await.values().cloned().collect())
    }

    async fn find_by_game_title(&self, game_title_id: GameTitleId) -> ServiceResult<Vec<Contest>> {
        Ok(self
            .contests
            .read()
            .await
            .values()
            .filter(|c| c.game_title_id == game_title_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ContestId) -> ServiceResult<bool> {
        Ok(self.contests.write().await.remove(&id).is_some())
    }
}

/// Match storage held in process memory
#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    matches: RwLock<HashMap<MatchId, Match>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn save(&self, m: &Match) -> ServiceResult<()> {
        self.matches.write().await.insert(m.id, m.clone());
        Ok(())
    }

    async fn save_all(&self, matches: &[Match]) -> ServiceResult<()> {
        let mut store = self.matches.write().await;
        for m in matches {
            store.insert(m.id, m.clone());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: MatchId) -> ServiceResult<Option<Match>> {
        Ok(self.matches.read().await.get(&id).cloned())
    }

    async fn find_by_contest(&self, contest_id: ContestId) -> ServiceResult<Vec<Match>> {
        Ok(self
            .matches
            .read()
            .await
            .values()
            .filter(|m| m.contest_id == contest_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: MatchId) -> ServiceResult<bool> {
        Ok(self.matches.write().await.remove(&id).is_some())
    }

    async fn delete_by_contest(&self, contest_id: ContestId) -> ServiceResult<usize> {
        let mut store = self.matches.write().await;
        let before = store.len();
        store.retain(|_, m| m.contest_id != contest_id);
        Ok(before - store.len())
    }
}

/// Game title storage held in process memory
#[derive(Debug, Default)]
pub struct InMemoryGameTitleRepository {
    titles: RwLock<HashMap<GameTitleId, GameTitle>>,
}

impl InMemoryGameTitleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameTitleRepository for InMemoryGameTitleRepository {
    async fn save(&self, title: &GameTitle) -> ServiceResult<()> {
        self.titles.write().await.insert(title.id, title.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: GameTitleId) -> ServiceResult<Option<GameTitle>> {
        Ok(self.titles.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> ServiceResult<Vec<GameTitle>> {
        Ok(self.titles.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: GameTitleId) -> ServiceResult<bool> {
        Ok(self.titles.write().await.remove(&id).is_some())
    }
}
