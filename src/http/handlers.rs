use super::state::AppState;
use crate::meeting::{Meeting, NewMeeting};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use tracing::info;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /meetings
/// Create a meeting and return the stored record with its assigned id.
///
/// Body decoding happens in the `Json` extractor, so a missing
/// `application/json` content type or a malformed body is rejected
/// before the store is touched.
pub async fn create_meeting(
    State(state): State<AppState>,
    Json(req): Json<NewMeeting>,
) -> impl IntoResponse {
    let meeting = state.store.create(req).await;
    info!("Created meeting {} ({})", meeting.id, meeting.title);

    (StatusCode::CREATED, Json(meeting))
}

/// GET /meetings
/// List every stored meeting. Serialization runs on a snapshot taken
/// under the store lock, after the lock is released.
pub async fn list_meetings(State(state): State<AppState>) -> impl IntoResponse {
    let meetings: Vec<Meeting> = state.store.list().await;
    (StatusCode::OK, Json(meetings))
}

/// GET /meetings/:meeting_id
/// Fetch a single meeting by id
pub async fn get_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&meeting_id).await {
        Some(meeting) => (StatusCode::OK, Json(meeting)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Meeting {} not found", meeting_id),
            }),
        )
            .into_response(),
    }
}

/// GET /meetings/random
/// Redirect to a randomly chosen meeting rather than returning a body.
/// An empty store is an ordinary not-found, not an error.
pub async fn random_meeting(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.pick_random().await {
        Some(meeting) => {
            info!("Random pick resolved to meeting {}", meeting.id);
            (
                StatusCode::FOUND,
                [(header::LOCATION, format!("/meetings/{}", meeting.id))],
            )
                .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No meetings stored".to_string(),
            }),
        )
            .into_response(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
