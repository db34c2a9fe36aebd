use crate::core::state::MatchingState;
use crate::models::{MatchSuggestion, SuggestionStatus, SwipeDecision, SwipeDirection};

/// Apply a like/pass decision to the candidate at the cursor.
///
/// This is the one transition that touches suggestions, history, and cursor
/// together, so it runs as a single pure function over the whole state.
///
/// If the candidate at the cursor is missing or its id does not equal
/// `match_id`, the swipe is a stale UI event (e.g. a background refresh
/// replaced the list mid-interaction) and the state is returned unchanged.
/// No error is raised; callers must not treat the mismatch as a failure.
pub fn apply_swipe(
    state: &MatchingState,
    decision: SwipeDecision,
    match_id: &str,
    at: chrono::DateTime<chrono::Utc>,
) -> MatchingState {
    let cursor = match state.current_index {
        Some(i) if i < state.suggestions.len() => i,
        _ => return state.clone(),
    };

    if state.suggestions[cursor].id != match_id {
        return state.clone();
    }

    let mut decided = state.suggestions[cursor].clone();
    decided.status = match decision {
        SwipeDecision::Like => SuggestionStatus::Liked,
        SwipeDecision::Pass => SuggestionStatus::Passed,
    };
    decided.action_taken_at = Some(at);

    let history = dedup_prepend(&state.history, decided);

    // Remove by position, not id: the active list never holds duplicates.
    let suggestions: Vec<MatchSuggestion> = state
        .suggestions
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != cursor)
        .map(|(_, s)| s.clone())
        .collect();

    MatchingState {
        current_index: clamp_cursor(cursor, suggestions.len()),
        swipe_direction: Some(SwipeDirection::from(decision)),
        suggestions,
        history,
        ..state.clone()
    }
}

/// Prepend `item` to `history`, removing any older entry with the same id so
/// the newest decision is the sole copy.
pub fn dedup_prepend(history: &[MatchSuggestion], item: MatchSuggestion) -> Vec<MatchSuggestion> {
    let mut out = Vec::with_capacity(history.len() + 1);
    let id = item.id.clone();
    out.push(item);
    out.extend(history.iter().filter(|h| h.id != id).cloned());
    out
}

/// Clamp a cursor against a (possibly shorter) list length. An empty list has
/// no active candidate.
pub fn clamp_cursor(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(index.min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileRef, ScoreBreakdown};
    use chrono::Utc;

    fn suggestion(id: &str) -> MatchSuggestion {
        MatchSuggestion {
            id: id.to_string(),
            profile: ProfileRef {
                profile_id: format!("profile-{}", id),
                display_name: format!("Creator {}", id),
                niche_tags: vec!["gaming".to_string()],
                rizz_score: 65.0,
                is_verified: false,
            },
            compatibility_score: 80.0,
            breakdown: ScoreBreakdown::default(),
            status: SuggestionStatus::Suggested,
            action_taken_at: None,
        }
    }

    fn state_with(ids: &[&str]) -> MatchingState {
        MatchingState {
            suggestions: ids.iter().map(|id| suggestion(id)).collect(),
            current_index: if ids.is_empty() { None } else { Some(0) },
            ..MatchingState::initial()
        }
    }

    #[test]
    fn test_like_moves_candidate_to_history() {
        let state = state_with(&["a", "b"]);
        let next = apply_swipe(&state, SwipeDecision::Like, "a", Utc::now());

        assert_eq!(next.suggestions.len(), 1);
        assert_eq!(next.suggestions[0].id, "b");
        assert_eq!(next.history.len(), 1);
        assert_eq!(next.history[0].id, "a");
        assert_eq!(next.history[0].status, SuggestionStatus::Liked);
        assert!(next.history[0].action_taken_at.is_some());
        assert_eq!(next.current_index, Some(0));
        assert_eq!(next.swipe_direction, Some(SwipeDirection::Right));
    }

    #[test]
    fn test_pass_sets_left_direction() {
        let state = state_with(&["a"]);
        let next = apply_swipe(&state, SwipeDecision::Pass, "a", Utc::now());

        assert_eq!(next.history[0].status, SuggestionStatus::Passed);
        assert_eq!(next.swipe_direction, Some(SwipeDirection::Left));
        assert!(next.suggestions.is_empty());
        assert_eq!(next.current_index, None);
    }

    #[test]
    fn test_stale_id_is_noop() {
        let state = state_with(&["a", "b"]);
        let next = apply_swipe(&state, SwipeDecision::Like, "b", Utc::now());
        assert_eq!(next, state);
    }

    #[test]
    fn test_swipe_on_empty_list_is_noop() {
        let state = state_with(&[]);
        let next = apply_swipe(&state, SwipeDecision::Like, "a", Utc::now());
        assert_eq!(next, state);
    }

    #[test]
    fn test_cursor_clamps_after_last_removal() {
        let mut state = state_with(&["a", "b"]);
        state.current_index = Some(1);
        let next = apply_swipe(&state, SwipeDecision::Like, "b", Utc::now());

        assert_eq!(next.suggestions.len(), 1);
        assert_eq!(next.current_index, Some(0));
    }

    #[test]
    fn test_dedup_prepend_replaces_older_entry() {
        let mut old = suggestion("a");
        old.status = SuggestionStatus::Liked;
        let history = vec![old, suggestion("b")];

        let mut newer = suggestion("a");
        newer.status = SuggestionStatus::Passed;
        let merged = dedup_prepend(&history, newer);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, "a");
        assert_eq!(merged[0].status, SuggestionStatus::Passed);
        assert_eq!(merged[1].id, "b");
    }

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(0, 0), None);
        assert_eq!(clamp_cursor(0, 1), Some(0));
        assert_eq!(clamp_cursor(3, 2), Some(1));
    }
}
