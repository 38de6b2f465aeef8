//! HTTP API for the meeting scheduler
//!
//! This module provides the REST surface over the in-memory store:
//! - POST /meetings - Create a meeting
//! - GET /meetings - List all meetings
//! - GET /meetings/random - Redirect to a randomly picked meeting
//! - GET /meetings/:meeting_id - Fetch one meeting by id
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
