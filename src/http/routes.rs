use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Meeting collection
        .route(
            "/meetings",
            get(handlers::list_meetings).post(handlers::create_meeting),
        )
        // Static segment must be registered alongside the id route;
        // the router prefers it over the :meeting_id capture.
        .route("/meetings/random", get(handlers::random_meeting))
        .route("/meetings/:meeting_id", get(handlers::get_meeting))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
