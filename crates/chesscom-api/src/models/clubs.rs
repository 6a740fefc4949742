use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, TimestampSeconds};

/// A club the player belongs to. The membership listing only guarantees the
/// identifying fields; the rest is filled in for full club records.
#[skip_serializing_none]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerClub {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub club_id: Option<u64>,
    pub url: String,
    pub icon: Option<String>,
    pub country: Option<String>,
    pub average_daily_rating: Option<u32>,
    pub members_count: Option<u32>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub created: Option<DateTime<Utc>>,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub last_activity: DateTime<Utc>,
    /// When the player joined the club.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub joined: Option<DateTime<Utc>>,
    pub visibility: Option<String>,
    pub join_request: Option<String>,
    pub rules: Option<String>,
    pub description: Option<String>,
}

/// `GET /player/{username}/clubs`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerClubs {
    pub clubs: Vec<PlayerClub>,
}
