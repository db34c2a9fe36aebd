use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::double_option;
use crate::models::MatchSuggestion;

/// Request to apply a swipe decision to the current suggestion
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeRequest {
    /// "like" or "pass"
    #[validate(length(min = 1))]
    pub decision: String,
    #[validate(length(min = 1))]
    #[serde(alias = "match_id", rename = "matchId")]
    pub match_id: String,
}

/// Request to replace the session's suggestion list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSuggestionsRequest {
    #[serde(default)]
    pub suggestions: Vec<MatchSuggestion>,
}

/// Request to move the cursor directly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCursorRequest {
    pub index: usize,
}

/// Fetch-status update from the suggestions collaborator.
///
/// `error` distinguishes absent (leave as is) from explicit null (clear).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStatusRequest {
    #[serde(alias = "is_loading", rename = "isLoading", default)]
    pub is_loading: Option<bool>,
    #[serde(default, with = "double_option")]
    pub error: Option<Option<String>>,
}

/// Request to toggle the filter panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPanelRequest {
    pub open: bool,
}

/// Request to replace the decision history wholesale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetHistoryRequest {
    #[serde(default)]
    pub history: Vec<MatchSuggestion>,
}

/// Request to flag the rizz-score fetch as in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRizzLoadingRequest {
    pub loading: bool,
}

/// Request to surface the mutual-match celebration overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowAnimationRequest {
    #[serde(alias = "is_mutual_match", rename = "isMutualMatch", default)]
    pub is_mutual_match: bool,
}
