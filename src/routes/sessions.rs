use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{Action, MatchingState};
use crate::models::{
    ErrorResponse, HealthResponse, HistoryFilterPatch, LeaderboardEntry, MatchFilterPatch,
    MatchSuggestion, RizzScore, SetCursorRequest, SetHistoryRequest, SetPanelRequest,
    SetRizzLoadingRequest, SetStatusRequest, SetSuggestionsRequest, ShowAnimationRequest,
    SwipeDecision, SwipeRequest,
};
use crate::models::responses::CreateSessionResponse;
use crate::services::{SessionManager, StoreError, SwipeFeedback};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    pub feedback: Arc<SwipeFeedback>,
}

/// Configure all session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}", web::delete().to(delete_session))
        .route("/sessions/{id}/suggestions", web::put().to(set_suggestions))
        .route(
            "/sessions/{id}/suggestions/{match_id}",
            web::delete().to(remove_suggestion),
        )
        .route("/sessions/{id}/swipe", web::post().to(swipe))
        .route("/sessions/{id}/cursor", web::put().to(set_cursor))
        .route("/sessions/{id}/filters", web::patch().to(update_filters))
        .route("/sessions/{id}/filters", web::delete().to(reset_filters))
        .route("/sessions/{id}/status", web::put().to(set_status))
        .route("/sessions/{id}/panel", web::put().to(set_panel))
        .route("/sessions/{id}/history", web::put().to(set_history))
        .route("/sessions/{id}/history", web::post().to(add_to_history))
        .route(
            "/sessions/{id}/history/filters",
            web::patch().to(update_history_filters),
        )
        .route("/sessions/{id}/rizz-score", web::put().to(set_rizz_score))
        .route(
            "/sessions/{id}/rizz-score/loading",
            web::put().to(set_rizz_loading),
        )
        .route("/sessions/{id}/leaderboard", web::put().to(set_leaderboard))
        .route(
            "/sessions/{id}/animation/show",
            web::post().to(show_animation),
        )
        .route(
            "/sessions/{id}/animation/hide",
            web::post().to(hide_animation),
        )
        .route("/sessions/{id}/reset", web::post().to(reset_matching));
}

/// Map a store result to the standard snapshot / error responses
fn state_response(result: Result<MatchingState, StoreError>) -> HttpResponse {
    match result {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(StoreError::SessionNotFound(id)) => {
            tracing::debug!("Request for unknown session {}", id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Session not found".to_string(),
                message: format!("No active session with id {}", id),
                status_code: 404,
            })
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sessions: state.sessions.session_count(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create a new matching session
///
/// POST /api/v1/sessions
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let (session_id, initial) = state.sessions.create().await;
    tracing::info!("Session {} created", session_id);

    HttpResponse::Created().json(CreateSessionResponse {
        session_id,
        state: initial,
    })
}

/// Full state snapshot for a session
///
/// GET /api/v1/sessions/{id}
async fn get_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    state_response(state.sessions.snapshot(&path).await)
}

/// Drop a session
///
/// DELETE /api/v1/sessions/{id}
async fn delete_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.sessions.remove(&path).await {
        Ok(()) => {
            tracing::info!("Session {} removed", path.as_str());
            HttpResponse::NoContent().finish()
        }
        Err(StoreError::SessionNotFound(id)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Session not found".to_string(),
            message: format!("No active session with id {}", id),
            status_code: 404,
        }),
    }
}

/// Replace the suggestion list after a fetch
///
/// PUT /api/v1/sessions/{id}/suggestions
async fn set_suggestions(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SetSuggestionsRequest>,
) -> impl Responder {
    let count = req.suggestions.len();
    let result = state
        .sessions
        .dispatch(&path, Action::SetSuggestions(req.into_inner().suggestions))
        .await;

    if result.is_ok() {
        tracing::debug!("Session {}: {} suggestions loaded", path.as_str(), count);
    }
    state_response(result)
}

/// Remove a suggestion without a decision (block/report flow)
///
/// DELETE /api/v1/sessions/{id}/suggestions/{match_id}
async fn remove_suggestion(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (session_id, match_id) = path.into_inner();
    state_response(
        state
            .sessions
            .dispatch(&session_id, Action::RemoveSuggestion(match_id))
            .await,
    )
}

/// Apply a swipe decision to the current suggestion
///
/// POST /api/v1/sessions/{id}/swipe
///
/// Request body:
/// ```json
/// {
///   "decision": "like|pass",
///   "matchId": "string"
/// }
/// ```
async fn swipe(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SwipeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for swipe request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let decision = match req.decision.to_lowercase().as_str() {
        "like" => SwipeDecision::Like,
        "pass" => SwipeDecision::Pass,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid decision".to_string(),
                message: "Decision must be one of: like, pass".to_string(),
                status_code: 400,
            });
        }
    };

    tracing::debug!(
        "Session {}: swipe {:?} on {}",
        path.as_str(),
        decision,
        req.match_id
    );

    state_response(
        state
            .feedback
            .handle_swipe(&path, decision, &req.match_id)
            .await,
    )
}

/// Move the cursor directly (manual navigation)
///
/// PUT /api/v1/sessions/{id}/cursor
async fn set_cursor(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SetCursorRequest>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::SetCurrentIndex(req.index))
            .await,
    )
}

/// Merge a partial filter edit
///
/// PATCH /api/v1/sessions/{id}/filters
async fn update_filters(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<MatchFilterPatch>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::UpdateFilters(req.into_inner()))
            .await,
    )
}

/// Restore the default filters
///
/// DELETE /api/v1/sessions/{id}/filters
async fn reset_filters(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    state_response(state.sessions.dispatch(&path, Action::ResetFilters).await)
}

/// Update loading/error flags from the fetch collaborator
///
/// PUT /api/v1/sessions/{id}/status
async fn set_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SetStatusRequest>,
) -> impl Responder {
    let mut result = state.sessions.snapshot(&path).await;

    if let Some(is_loading) = req.is_loading {
        result = state
            .sessions
            .dispatch(&path, Action::SetLoading(is_loading))
            .await;
    }
    if result.is_ok() {
        if let Some(error) = &req.error {
            result = state
                .sessions
                .dispatch(&path, Action::SetError(error.clone()))
                .await;
        }
    }

    state_response(result)
}

/// Toggle the filter panel flag
///
/// PUT /api/v1/sessions/{id}/panel
async fn set_panel(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SetPanelRequest>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::SetPanelOpen(req.open))
            .await,
    )
}

/// Replace the decision history wholesale
///
/// PUT /api/v1/sessions/{id}/history
async fn set_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SetHistoryRequest>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::SetHistory(req.into_inner().history))
            .await,
    )
}

/// Append one decided match to the history
///
/// POST /api/v1/sessions/{id}/history
async fn add_to_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<MatchSuggestion>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::AddToHistory(req.into_inner()))
            .await,
    )
}

/// Merge a partial history-view edit
///
/// PATCH /api/v1/sessions/{id}/history/filters
async fn update_history_filters(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<HistoryFilterPatch>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::UpdateHistoryFilters(req.into_inner()))
            .await,
    )
}

/// Replace the rizz score projection
///
/// PUT /api/v1/sessions/{id}/rizz-score
async fn set_rizz_score(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<Option<RizzScore>>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::SetRizzScore(req.into_inner()))
            .await,
    )
}

/// Flag the rizz-score fetch as in flight
///
/// PUT /api/v1/sessions/{id}/rizz-score/loading
async fn set_rizz_loading(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SetRizzLoadingRequest>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::SetRizzScoreLoading(req.loading))
            .await,
    )
}

/// Replace the leaderboard projection
///
/// PUT /api/v1/sessions/{id}/leaderboard
async fn set_leaderboard(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<Vec<LeaderboardEntry>>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::SetLeaderboard(req.into_inner()))
            .await,
    )
}

/// Surface the mutual-match celebration overlay
///
/// POST /api/v1/sessions/{id}/animation/show
async fn show_animation(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ShowAnimationRequest>,
) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(
                &path,
                Action::ShowMatchAnimation {
                    mutual: req.is_mutual_match,
                },
            )
            .await,
    )
}

/// Hide the celebration overlay
///
/// POST /api/v1/sessions/{id}/animation/hide
async fn hide_animation(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    state_response(
        state
            .sessions
            .dispatch(&path, Action::HideMatchAnimation)
            .await,
    )
}

/// Reset the matching state, preserving history and leaderboard
///
/// POST /api/v1/sessions/{id}/reset
async fn reset_matching(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    state_response(state.sessions.dispatch(&path, Action::ResetMatching).await)
}
