use crate::models::{HistoryFilterPatch, HistoryFilters, MatchFilterPatch, MatchFilters};

/// Shallow-merge a partial filter edit into the current filters.
///
/// Only fields present in the patch change; everything else keeps its prior
/// value. `location` uses a double option so an explicit null clears it.
pub fn merge_filters(current: &MatchFilters, patch: &MatchFilterPatch) -> MatchFilters {
    MatchFilters {
        audience_size: patch.audience_size.unwrap_or(current.audience_size),
        rizz_score: patch.rizz_score.unwrap_or(current.rizz_score),
        location: match &patch.location {
            Some(value) => value.clone(),
            None => current.location.clone(),
        },
        niches: patch.niches.clone().unwrap_or_else(|| current.niches.clone()),
        platforms: patch
            .platforms
            .clone()
            .unwrap_or_else(|| current.platforms.clone()),
        engagement_rate: patch.engagement_rate.unwrap_or(current.engagement_rate),
        requires_collab_history: patch
            .requires_collab_history
            .unwrap_or(current.requires_collab_history),
        verified_only: patch.verified_only.unwrap_or(current.verified_only),
        premium_only: patch.premium_only.unwrap_or(current.premium_only),
    }
}

/// Same shallow-merge semantics for the history view state.
pub fn merge_history_filters(
    current: &HistoryFilters,
    patch: &HistoryFilterPatch,
) -> HistoryFilters {
    HistoryFilters {
        status: match &patch.status {
            Some(value) => *value,
            None => current.status,
        },
        page: patch.page.unwrap_or(current.page),
        page_size: patch.page_size.unwrap_or(current.page_size),
    }
}
