use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::core::{reduce, Action, MatchingState};

/// Errors that can occur with session store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

/// In-memory session store.
///
/// Each session owns one [`MatchingState`] behind a write lock, so actions
/// dispatched against the same session apply in strict order and no handler
/// ever observes a half-applied transition. Sessions are evicted after an
/// idle TTL; everything is rebuilt from backend fetches on the next visit.
pub struct SessionManager {
    sessions: Cache<String, Arc<RwLock<MatchingState>>>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(max_sessions: u64, idle_ttl_secs: u64) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(Duration::from_secs(idle_ttl_secs))
            .build();

        Self { sessions }
    }

    /// Create a fresh session and return its id plus the initial state
    pub async fn create(&self) -> (String, MatchingState) {
        let id = uuid::Uuid::new_v4().to_string();
        let state = MatchingState::initial();
        self.sessions
            .insert(id.clone(), Arc::new(RwLock::new(state.clone())))
            .await;

        tracing::debug!("Created session {}", id);
        (id, state)
    }

    /// Current state snapshot for a session
    pub async fn snapshot(&self, id: &str) -> Result<MatchingState, StoreError> {
        let entry = self
            .sessions
            .get(id)
            .await
            .ok_or_else(|| StoreError::SessionNotFound(id.to_string()))?;

        let state = entry.read().await;
        Ok(state.clone())
    }

    /// Run one action through the reducer and return the resulting state
    pub async fn dispatch(&self, id: &str, action: Action) -> Result<MatchingState, StoreError> {
        let entry = self
            .sessions
            .get(id)
            .await
            .ok_or_else(|| StoreError::SessionNotFound(id.to_string()))?;

        let mut state = entry.write().await;
        *state = reduce(&state, action);
        Ok(state.clone())
    }

    /// Dispatch variant for fire-and-forget callers (the feedback timer):
    /// a session evicted in the meantime is not an error.
    pub async fn dispatch_if_present(&self, id: &str, action: Action) {
        if let Err(StoreError::SessionNotFound(_)) = self.dispatch(id, action).await {
            tracing::trace!("Dropping action for evicted session {}", id);
        }
    }

    /// Drop a session
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        if self.sessions.get(id).await.is_none() {
            return Err(StoreError::SessionNotFound(id.to_string()));
        }
        self.sessions.invalidate(id).await;
        tracing::debug!("Removed session {}", id);
        Ok(())
    }

    /// Number of live sessions (approximate, per moka semantics)
    pub fn session_count(&self) -> u64 {
        self.sessions.entry_count()
    }
}
