//! Meeting domain model and the in-memory store
//!
//! The store is the only shared mutable state in the service: a map
//! from meeting id to meeting record behind a single exclusive lock.
//! It is always constructed explicitly and passed by reference, never
//! held as a process-wide singleton, so tests can run independent
//! stores side by side.

mod model;
mod store;

pub use model::{Meeting, NewMeeting, Participant};
pub use store::MeetingStore;
