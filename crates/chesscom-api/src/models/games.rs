use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, TimestampSeconds};
use uuid::Uuid;

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub rating: u32,
    /// `win`, `checkmated`, `resigned`, `timeout`, `agreed`, ...
    pub result: String,
    pub username: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub uuid: Option<Uuid>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Accuracies {
    pub white: f64,
    pub black: f64,
}

/// A finished or in-progress game.
#[skip_serializing_none]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerGame {
    pub url: String,
    pub pgn: Option<String>,
    pub fen: String,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub start_time: Option<DateTime<Utc>>,
    pub time_control: String,
    /// Absent while the game is still being played.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub end_time: Option<DateTime<Utc>>,
    pub rated: bool,
    pub accuracies: Option<Accuracies>,
    pub tcn: Option<String>,
    pub uuid: Option<Uuid>,
    pub initial_setup: Option<String>,
    pub time_class: String,
    pub rules: String,
    /// Opening URL, e.g. `https://www.chess.com/openings/Sicilian-Defense`.
    pub eco: Option<String>,
    pub tournament: Option<String>,
    #[serde(rename = "match")]
    pub team_match: Option<String>,
    pub white: GamePlayer,
    pub black: GamePlayer,
}

impl PlayerGame {
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// The side `username` played, compared case-insensitively.
    pub fn player(&self, username: &str) -> Option<&GamePlayer> {
        [&self.white, &self.black]
            .into_iter()
            .find(|player| player.username.eq_ignore_ascii_case(username))
    }
}

/// `GET /player/{username}/games` and `GET /player/{username}/games/{YYYY}/{MM}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerGames {
    pub games: Vec<PlayerGame>,
}

/// `GET /player/{username}/games/to-move`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerGamesToMove {
    pub games: Vec<PlayerGame>,
}
