use serde::{Deserialize, Serialize};

use crate::models::{
    HistoryFilters, LeaderboardEntry, MatchFilters, MatchSuggestion, RizzScore, SwipeDirection,
};

/// Complete matching state for one session.
///
/// This is the single source of truth the UI renders from. Every field is
/// only ever changed by [`reduce`](crate::core::reduce); nothing outside the
/// reducer mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingState {
    /// Undecided candidates, in presentation order.
    pub suggestions: Vec<MatchSuggestion>,
    /// Index of the currently displayed suggestion. `None` means the list is
    /// empty or past its end (no active candidate).
    #[serde(rename = "currentMatchIndex")]
    pub current_index: Option<usize>,
    pub filters: MatchFilters,
    #[serde(rename = "isLoading")]
    pub is_loading: bool,
    /// Last fetch failure reported by the suggestions collaborator.
    pub error: Option<String>,
    #[serde(rename = "isFilterPanelOpen")]
    pub panel_open: bool,
    /// Transient animation flag, reset by the feedback coordinator.
    #[serde(rename = "swipeDirection")]
    pub swipe_direction: Option<SwipeDirection>,
    #[serde(rename = "showMatchAnimation")]
    pub show_match_animation: bool,
    #[serde(rename = "isMutualMatch")]
    pub is_mutual_match: bool,
    /// Decided candidates, most recent first, de-duplicated by id.
    pub history: Vec<MatchSuggestion>,
    #[serde(rename = "historyFilters")]
    pub history_filters: HistoryFilters,
    #[serde(rename = "rizzScore")]
    pub rizz_score: Option<RizzScore>,
    pub leaderboard: Vec<LeaderboardEntry>,
    #[serde(rename = "isRizzScoreLoading")]
    pub rizz_score_loading: bool,
}

impl MatchingState {
    /// The documented initial state.
    pub fn initial() -> Self {
        Self {
            suggestions: vec![],
            current_index: None,
            filters: MatchFilters::default(),
            is_loading: false,
            error: None,
            panel_open: false,
            swipe_direction: None,
            show_match_animation: false,
            is_mutual_match: false,
            history: vec![],
            history_filters: HistoryFilters::default(),
            rizz_score: None,
            leaderboard: vec![],
            rizz_score_loading: false,
        }
    }

    /// The suggestion the cursor currently points at, if any.
    pub fn current_suggestion(&self) -> Option<&MatchSuggestion> {
        self.current_index.and_then(|i| self.suggestions.get(i))
    }
}

impl Default for MatchingState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let state = MatchingState::initial();
        assert!(state.suggestions.is_empty());
        assert!(state.current_index.is_none());
        assert!(state.current_suggestion().is_none());
        assert!(state.history.is_empty());
        assert_eq!(state.filters, MatchFilters::default());
    }

    #[test]
    fn test_current_suggestion_out_of_bounds_is_none() {
        let state = MatchingState {
            current_index: Some(3),
            ..MatchingState::initial()
        };
        assert!(state.current_suggestion().is_none());
    }
}
