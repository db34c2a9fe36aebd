//! Collab Match - swipe-session state service for creator collaboration matching
//!
//! This library owns the per-session matching state: the undecided suggestion
//! list and its cursor, user filters, the decided-match history, and the
//! transient swipe/celebration flags. All transitions run through one pure
//! reducer; the HTTP layer and the feedback timer are thin shells around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{reduce, Action, MatchingState};
pub use crate::models::{
    MatchFilters, MatchSuggestion, SuggestionStatus, SwipeDecision, SwipeDirection,
};
pub use crate::services::{SessionManager, StoreError, SwipeFeedback};
