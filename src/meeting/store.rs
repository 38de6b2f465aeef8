use super::model::{Meeting, NewMeeting};
use chrono::Utc;
use rand::Rng;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// The in-memory meeting store.
///
/// One instance is shared by every request handler; all access to the
/// map goes through a single exclusive lock. The store is volatile by
/// design: contents live exactly as long as the process.
pub struct MeetingStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    /// meeting id → meeting; each key equals its value's `id` field.
    entries: HashMap<String, Meeting>,

    /// Monotonic suffix for id assignment. Combined with the
    /// nanosecond timestamp so two creates landing on the same clock
    /// reading still get distinct ids.
    next_seq: u64,
}

impl MeetingStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                entries: HashMap::new(),
                next_seq: 0,
            }),
        }
    }

    /// Assign an id and insert the meeting.
    ///
    /// Id assignment and insertion happen under one lock acquisition,
    /// so concurrent creates can never race between picking an id and
    /// claiming it.
    pub async fn create(&self, new: NewMeeting) -> Meeting {
        let now = Utc::now();
        // timestamp_nanos_opt is None only past the year 2262.
        let nanos = now.timestamp_nanos_opt().unwrap_or_default();

        let mut inner = self.inner.lock().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;

        let meeting = Meeting {
            id: format!("{}-{}", nanos, seq),
            title: new.title,
            participants: new.participants,
            start_time: new.start_time,
            end_time: new.end_time,
            created_at: now,
        };
        inner.entries.insert(meeting.id.clone(), meeting.clone());
        drop(inner);

        debug!("Stored meeting {}", meeting.id);
        meeting
    }

    /// Snapshot of every stored meeting. Each call is internally
    /// consistent; iteration order is unspecified and may differ
    /// between calls.
    pub async fn list(&self) -> Vec<Meeting> {
        let inner = self.inner.lock().await;
        inner.entries.values().cloned().collect()
    }

    /// Look up a meeting by id.
    pub async fn get(&self, id: &str) -> Option<Meeting> {
        let inner = self.inner.lock().await;
        inner.entries.get(id).cloned()
    }

    /// Pick one stored meeting uniformly at random.
    ///
    /// The choice is made against an id snapshot taken under the lock,
    /// then the lock is released before rolling the dice. Not
    /// cryptographic, and doesn't need to be. Returns `None` on an
    /// empty store; a single-entry store always yields that entry.
    pub async fn pick_random(&self) -> Option<Meeting> {
        let ids: Vec<String> = {
            let inner = self.inner.lock().await;
            inner.entries.keys().cloned().collect()
        };

        let target = match ids.len() {
            0 => return None,
            1 => &ids[0],
            n => &ids[rand::thread_rng().gen_range(0..n)],
        };

        // No delete operation exists, so the snapshot id is still
        // present here.
        self.get(target).await
    }

    pub async fn len(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MeetingStore {
    fn default() -> Self {
        Self::new()
    }
}
