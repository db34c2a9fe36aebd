// Integration tests for the session service

use collab_match::core::Action;
use collab_match::models::{
    MatchSuggestion, ProfileRef, ScoreBreakdown, SuggestionStatus, SwipeDecision, SwipeDirection,
};
use collab_match::services::{SessionManager, SwipeFeedback};
use std::sync::Arc;
use std::time::Duration;

fn suggestion(id: &str, score: f64) -> MatchSuggestion {
    MatchSuggestion {
        id: id.to_string(),
        profile: ProfileRef {
            profile_id: format!("profile-{}", id),
            display_name: format!("Creator {}", id),
            niche_tags: vec!["tech".to_string(), "gaming".to_string()],
            rizz_score: 66.0,
            is_verified: true,
        },
        compatibility_score: score,
        breakdown: ScoreBreakdown {
            niche: score,
            audience: score - 5.0,
            engagement: score + 3.0,
            trust: score,
        },
        status: SuggestionStatus::Suggested,
        action_taken_at: None,
    }
}

#[tokio::test]
async fn test_full_swipe_session() {
    let sessions = Arc::new(SessionManager::new(100, 60));
    let feedback = SwipeFeedback::new(Arc::clone(&sessions), Duration::from_millis(10));

    let (id, initial) = sessions.create().await;
    assert!(initial.suggestions.is_empty());

    // Backend fetch lands a batch of candidates.
    sessions
        .dispatch(
            &id,
            Action::SetSuggestions(vec![
                suggestion("a", 88.0),
                suggestion("b", 75.0),
                suggestion("c", 64.0),
            ]),
        )
        .await
        .unwrap();

    // Decide the whole deck.
    let state = feedback
        .handle_swipe(&id, SwipeDecision::Like, "a")
        .await
        .unwrap();
    assert_eq!(state.current_suggestion().unwrap().id, "b");

    let state = feedback
        .handle_swipe(&id, SwipeDecision::Pass, "b")
        .await
        .unwrap();
    assert_eq!(state.current_suggestion().unwrap().id, "c");

    let state = feedback
        .handle_swipe(&id, SwipeDecision::Like, "c")
        .await
        .unwrap();
    assert!(state.suggestions.is_empty());
    assert_eq!(state.current_index, None);

    // Most recent decision first.
    let ids: Vec<_> = state.history.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
    assert_eq!(state.history[0].status, SuggestionStatus::Liked);
    assert_eq!(state.history[1].status, SuggestionStatus::Passed);
    assert!(state.history.iter().all(|h| h.action_taken_at.is_some()));
}

#[tokio::test]
async fn test_swipe_direction_resets_after_delay() {
    // The direction flag is set immediately and cleared once the
    // feedback delay elapses.
    let sessions = Arc::new(SessionManager::new(100, 60));
    let feedback = SwipeFeedback::new(Arc::clone(&sessions), Duration::from_millis(25));

    let (id, _) = sessions.create().await;
    sessions
        .dispatch(&id, Action::SetSuggestions(vec![suggestion("a", 80.0)]))
        .await
        .unwrap();

    let state = feedback
        .handle_swipe(&id, SwipeDecision::Like, "a")
        .await
        .unwrap();
    assert_eq!(state.swipe_direction, Some(SwipeDirection::Right));

    tokio::time::sleep(Duration::from_millis(120)).await;

    let settled = sessions.snapshot(&id).await.unwrap();
    assert_eq!(settled.swipe_direction, None);
}

#[tokio::test]
async fn test_refresh_race_does_not_corrupt_state() {
    // A background refresh replaces the deck between the UI reading the
    // current candidate and the swipe arriving: the stale swipe drops.
    let sessions = Arc::new(SessionManager::new(100, 60));
    let feedback = SwipeFeedback::new(Arc::clone(&sessions), Duration::from_millis(10));

    let (id, _) = sessions.create().await;
    sessions
        .dispatch(&id, Action::SetSuggestions(vec![suggestion("old", 70.0)]))
        .await
        .unwrap();

    // Refresh lands first.
    sessions
        .dispatch(
            &id,
            Action::SetSuggestions(vec![suggestion("new-1", 82.0), suggestion("new-2", 79.0)]),
        )
        .await
        .unwrap();

    // The swipe for the old deck arrives late.
    let state = feedback
        .handle_swipe(&id, SwipeDecision::Like, "old")
        .await
        .unwrap();

    assert_eq!(state.suggestions.len(), 2);
    assert!(state.history.is_empty());
    assert_eq!(state.current_suggestion().unwrap().id, "new-1");
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let sessions = Arc::new(SessionManager::new(100, 60));

    let (first, _) = sessions.create().await;
    let (second, _) = sessions.create().await;

    sessions
        .dispatch(&first, Action::SetSuggestions(vec![suggestion("a", 80.0)]))
        .await
        .unwrap();

    let untouched = sessions.snapshot(&second).await.unwrap();
    assert!(untouched.suggestions.is_empty());

    let first_state = sessions.snapshot(&first).await.unwrap();
    assert_eq!(first_state.suggestions.len(), 1);
}

#[tokio::test]
async fn test_reset_mid_session_keeps_decisions() {
    let sessions = Arc::new(SessionManager::new(100, 60));
    let feedback = SwipeFeedback::new(Arc::clone(&sessions), Duration::from_millis(10));

    let (id, _) = sessions.create().await;
    sessions
        .dispatch(
            &id,
            Action::SetSuggestions(vec![suggestion("a", 85.0), suggestion("b", 72.0)]),
        )
        .await
        .unwrap();
    feedback
        .handle_swipe(&id, SwipeDecision::Like, "a")
        .await
        .unwrap();

    let state = sessions.dispatch(&id, Action::ResetMatching).await.unwrap();

    assert!(state.suggestions.is_empty());
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].id, "a");

    // A new deck starts cleanly against the preserved history.
    let state = sessions
        .dispatch(&id, Action::SetSuggestions(vec![suggestion("c", 90.0)]))
        .await
        .unwrap();
    assert_eq!(state.current_index, Some(0));
    assert_eq!(state.history.len(), 1);
}
