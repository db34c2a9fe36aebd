use std::sync::Arc;
use std::time::Duration;

use crate::core::{Action, MatchingState};
use crate::models::SwipeDecision;
use crate::services::store::{SessionManager, StoreError};

/// Default delay before the transient swipe direction resets.
pub const DEFAULT_RESET_DELAY_MS: u64 = 300;

/// Coordinates the transient swipe-direction flag.
///
/// Applying the swipe is synchronous; the direction flag is then cleared by a
/// single-shot timer so the UI animation window is decoupled from the
/// authoritative suggestion/history data. The timer is fire-and-forget: it is
/// not awaited, and overlapping swipes simply schedule independent resets
/// whose effect is idempotent.
pub struct SwipeFeedback {
    sessions: Arc<SessionManager>,
    reset_delay: Duration,
}

impl SwipeFeedback {
    pub fn new(sessions: Arc<SessionManager>, reset_delay: Duration) -> Self {
        Self {
            sessions,
            reset_delay,
        }
    }

    pub fn with_default_delay(sessions: Arc<SessionManager>) -> Self {
        Self::new(sessions, Duration::from_millis(DEFAULT_RESET_DELAY_MS))
    }

    /// Apply a swipe and schedule the direction reset.
    ///
    /// Returns the state immediately after the swipe transition, with the
    /// direction flag still set. If the session was evicted by the time the
    /// timer fires, the reset quietly drops.
    pub async fn handle_swipe(
        &self,
        session_id: &str,
        decision: SwipeDecision,
        match_id: &str,
    ) -> Result<MatchingState, StoreError> {
        let state = self
            .sessions
            .dispatch(
                session_id,
                Action::ApplySwipe {
                    decision,
                    match_id: match_id.to_string(),
                    at: chrono::Utc::now(),
                },
            )
            .await?;

        let sessions = Arc::clone(&self.sessions);
        let id = session_id.to_string();
        let delay = self.reset_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sessions
                .dispatch_if_present(&id, Action::ClearSwipeDirection)
                .await;
        });

        Ok(state)
    }
}
