use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMatchPlayer {
    pub username: String,
    pub board: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardPlayer {
    pub username: String,
    pub rating: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardScore {
    pub board: u32,
    pub player_white: BoardPlayer,
    pub player_black: BoardPlayer,
    pub result: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerTeamMatch {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub players: Vec<TeamMatchPlayer>,
    pub board_scores: Vec<BoardScore>,
}

impl PlayerTeamMatch {
    /// Board the given player sits on in this match.
    pub fn board_of(&self, username: &str) -> Option<u32> {
        self.players
            .iter()
            .find(|player| player.username.eq_ignore_ascii_case(username))
            .map(|player| player.board)
    }
}

/// `GET /player/{username}/matches`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerTeamMatches {
    pub team_matches: Vec<PlayerTeamMatch>,
}
