use crate::meeting::MeetingStore;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The one store every request handler reads and writes.
    pub store: Arc<MeetingStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MeetingStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
