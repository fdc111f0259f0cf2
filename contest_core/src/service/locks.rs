//! Per-contest mutation locks.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::ids::ContestId;

/// Registry of one async mutex per contest
#[derive(Debug, Default)]
pub struct ContestLocks {
    locks: RwLock<HashMap<ContestId, Arc<Mutex<()>>>>,
}

impl ContestLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `contest_id`. Released when the guard drops.
    pub async fn acquire(&self, contest_id: ContestId) -> OwnedMutexGuard<()> {
        let existing = self.locks.read().await.get(&contest_id).cloned();
        let lock = match existing {
            Some(lock) => lock,
            None => self
                .locks
                .write()
                .await
                .entry(contest_id)
                .or_default()
                .clone(),
        };
        lock.lock_owned().await
    }

    /// Drop the registry entry for a deleted contest
    pub async fn forget(&self, contest_id: ContestId) {
        self.locks.write().await.remove(&contest_id);
    }

    /// Number of contests with a registered lock
    pub async fn len(&self) -> usize {
        self.locks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.locks.read().await.is_empty()
    }
}
