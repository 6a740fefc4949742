use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, TimestampSeconds};

/// `GET /player/{username}`
#[skip_serializing_none]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub avatar: Option<String>,
    pub player_id: u64,
    pub url: String,
    pub name: Option<String>,
    pub username: String,
    /// GM, IM, FM, ... Only present for titled players.
    pub title: Option<String>,
    pub followers: u64,
    /// Country resource URL, e.g. `https://api.chess.com/pub/country/US`.
    pub country: String,
    pub location: Option<String>,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub last_online: DateTime<Utc>,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub joined: DateTime<Utc>,
    pub status: String,
    pub is_streamer: bool,
    pub verified: Option<bool>,
    pub league: Option<String>,
    pub twitch_url: Option<String>,
    pub fide: Option<u32>,
}

impl PlayerProfile {
    /// ISO code at the end of the country URL.
    pub fn country_code(&self) -> Option<&str> {
        self.country
            .rsplit('/')
            .next()
            .filter(|code| !code.is_empty())
    }
}
