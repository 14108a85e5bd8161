//! Shared board store.
//!
//! Owns the single state tree. The only write path is [`Store::dispatch`],
//! which runs the reducer under the write lock so dispatches are serialized.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::board::{self, Action, AppState};

/// Handle to the board state. Clones share the same tree.
#[derive(Clone, Debug, Default)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
        }
    }

    /// Clone of the current state.
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Run the reducer against the current state and store the result.
    pub async fn dispatch(&self, action: Action) -> AppState {
        let mut guard = self.state.write().await;
        let next = board::reduce(&guard, &action);

        if next == *guard {
            debug!(action = action.kind(), "Dispatch left board unchanged");
        } else {
            info!(
                action = action.kind(),
                lists = next.lists.len(),
                tasks = next.task_count(),
                "Board updated"
            );
        }

        *guard = next.clone();
        next
    }
}
