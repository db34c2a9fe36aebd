// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AudienceRange, HistoryFilterPatch, HistoryFilters, LeaderboardEntry, MatchFilterPatch,
    MatchFilters, MatchSuggestion, ProfileRef, RizzScore, ScoreBreakdown, ScoreRange,
    SuggestionStatus, SwipeDecision, SwipeDirection,
};
pub use requests::{
    SetCursorRequest, SetHistoryRequest, SetPanelRequest, SetRizzLoadingRequest, SetStatusRequest,
    SetSuggestionsRequest, ShowAnimationRequest, SwipeRequest,
};
pub use responses::{CreateSessionResponse, ErrorResponse, HealthResponse};
