use crate::core::actions::Action;
use crate::core::filters::{merge_filters, merge_history_filters};
use crate::core::state::MatchingState;
use crate::core::swipe::{apply_swipe, clamp_cursor, dedup_prepend};
use crate::models::MatchFilters;

/// The single transition function: old state + action -> new state.
///
/// Pure and infallible. Actions that reference state that no longer exists
/// (a stale swipe target, an unknown id to remove) leave the state unchanged
/// rather than erroring; out-of-order UI events are expected.
pub fn reduce(state: &MatchingState, action: Action) -> MatchingState {
    match action {
        Action::SetSuggestions(suggestions) => MatchingState {
            current_index: if suggestions.is_empty() { None } else { Some(0) },
            suggestions,
            ..state.clone()
        },

        // Direct navigation: bounds are the caller's responsibility here,
        // clamping happens in the swipe transition.
        Action::SetCurrentIndex(index) => MatchingState {
            current_index: Some(index),
            ..state.clone()
        },

        Action::UpdateFilters(patch) => MatchingState {
            filters: merge_filters(&state.filters, &patch),
            ..state.clone()
        },

        Action::ResetFilters => MatchingState {
            filters: MatchFilters::default(),
            ..state.clone()
        },

        Action::RemoveSuggestion(id) => remove_suggestion(state, &id),

        Action::ApplySwipe {
            decision,
            match_id,
            at,
        } => apply_swipe(state, decision, &match_id, at),

        Action::ClearSwipeDirection => MatchingState {
            swipe_direction: None,
            ..state.clone()
        },

        Action::SetLoading(is_loading) => MatchingState {
            is_loading,
            ..state.clone()
        },

        Action::SetError(error) => MatchingState {
            error,
            ..state.clone()
        },

        Action::SetPanelOpen(panel_open) => MatchingState {
            panel_open,
            ..state.clone()
        },

        Action::AddToHistory(item) => MatchingState {
            history: dedup_prepend(&state.history, item),
            ..state.clone()
        },

        Action::SetHistory(history) => MatchingState {
            history,
            ..state.clone()
        },

        Action::UpdateHistoryFilters(patch) => MatchingState {
            history_filters: merge_history_filters(&state.history_filters, &patch),
            ..state.clone()
        },

        Action::SetRizzScore(rizz_score) => MatchingState {
            rizz_score,
            ..state.clone()
        },

        Action::SetLeaderboard(leaderboard) => MatchingState {
            leaderboard,
            ..state.clone()
        },

        Action::SetRizzScoreLoading(rizz_score_loading) => MatchingState {
            rizz_score_loading,
            ..state.clone()
        },

        Action::ShowMatchAnimation { mutual } => MatchingState {
            show_match_animation: true,
            is_mutual_match: mutual,
            ..state.clone()
        },

        Action::HideMatchAnimation => MatchingState {
            show_match_animation: false,
            is_mutual_match: false,
            ..state.clone()
        },

        // History, history filters, rizz score, and leaderboard survive a
        // reset; everything else returns to its initial value.
        Action::ResetMatching => MatchingState {
            history: state.history.clone(),
            history_filters: state.history_filters.clone(),
            rizz_score: state.rizz_score.clone(),
            leaderboard: state.leaderboard.clone(),
            rizz_score_loading: state.rizz_score_loading,
            ..MatchingState::initial()
        },
    }
}

/// Remove a suggestion by id without recording a decision (block/report).
///
/// Unknown ids are ignored. The cursor is re-clamped with the same rule the
/// swipe transition uses, so a removal near the end of the list cannot leave
/// the cursor dangling.
fn remove_suggestion(state: &MatchingState, id: &str) -> MatchingState {
    let suggestions: Vec<_> = state
        .suggestions
        .iter()
        .filter(|s| s.id != id)
        .cloned()
        .collect();

    if suggestions.len() == state.suggestions.len() {
        return state.clone();
    }

    let current_index = state
        .current_index
        .and_then(|i| clamp_cursor(i, suggestions.len()));

    MatchingState {
        suggestions,
        current_index,
        ..state.clone()
    }
}
