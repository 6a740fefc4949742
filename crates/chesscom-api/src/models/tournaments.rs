use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentPlayer {
    pub username: String,
    pub points: f64,
    pub rank: u32,
    pub is_winner: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerTournament {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    /// `registered`, `in_progress`, `finished`, ...
    pub status: String,
    pub players: Vec<TournamentPlayer>,
}

impl PlayerTournament {
    pub fn winners(&self) -> impl Iterator<Item = &TournamentPlayer> + '_ {
        self.players.iter().filter(|player| player.is_winner)
    }
}

/// `GET /player/{username}/tournaments`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerTournaments {
    pub tournaments: Vec<PlayerTournament>,
}
