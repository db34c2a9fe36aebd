use crate::models::{
    HistoryFilterPatch, LeaderboardEntry, MatchFilterPatch, MatchSuggestion, RizzScore,
    SwipeDecision,
};

/// Every state transition the matching store accepts.
///
/// Actions carry all inputs a transition needs, including timestamps, so the
/// reducer itself stays a pure function.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the suggestions wholesale (after a fetch); cursor back to the
    /// first candidate.
    SetSuggestions(Vec<MatchSuggestion>),
    /// Move the cursor directly (manual navigation). Bounds are the caller's
    /// responsibility.
    SetCurrentIndex(usize),
    UpdateFilters(MatchFilterPatch),
    ResetFilters,
    /// Drop a suggestion without recording a decision (block/report).
    RemoveSuggestion(String),
    /// Apply a like/pass decision to the candidate at the cursor.
    ApplySwipe {
        decision: SwipeDecision,
        match_id: String,
        at: chrono::DateTime<chrono::Utc>,
    },
    ClearSwipeDirection,
    SetLoading(bool),
    SetError(Option<String>),
    SetPanelOpen(bool),
    AddToHistory(MatchSuggestion),
    SetHistory(Vec<MatchSuggestion>),
    UpdateHistoryFilters(HistoryFilterPatch),
    SetRizzScore(Option<RizzScore>),
    SetLeaderboard(Vec<LeaderboardEntry>),
    SetRizzScoreLoading(bool),
    ShowMatchAnimation { mutual: bool },
    HideMatchAnimation,
    /// Back to the initial state, except history, history filters, rizz
    /// score, and leaderboard, which survive.
    ResetMatching,
}
