use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person invited to a meeting.
///
/// Nothing here is validated: names need not be unique, emails are not
/// checked for shape, and RSVP is whatever string the caller sent
/// ("yes"/"no"/"maybe" by convention).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "RSVP")]
    pub rsvp: String,
}

/// A scheduled meeting as stored and served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Store-assigned identifier, immutable once assigned.
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Title")]
    pub title: String,

    /// Kept in submission order; the order carries no meaning.
    #[serde(rename = "Participants")]
    pub participants: Vec<Participant>,

    #[serde(rename = "Start Time")]
    pub start_time: DateTime<Utc>,

    #[serde(rename = "End Time")]
    pub end_time: DateTime<Utc>,

    /// When the record entered the store.
    #[serde(rename = "Creation TimeStamp")]
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied part of a meeting, before the store assigns an
/// id and creation timestamp.
///
/// The store does not check `start_time < end_time`; callers are
/// trusted to supply a sane window.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMeeting {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Participants", default)]
    pub participants: Vec<Participant>,

    #[serde(rename = "Start Time")]
    pub start_time: DateTime<Utc>,

    #[serde(rename = "End Time")]
    pub end_time: DateTime<Utc>,
}
