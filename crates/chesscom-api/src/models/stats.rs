use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, TimestampSeconds};

/// Rated game modes reported by `GET /player/{username}/stats`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    Daily,
    Daily960,
    Rapid,
    Bullet,
    Blitz,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Daily,
        GameMode::Daily960,
        GameMode::Rapid,
        GameMode::Bullet,
        GameMode::Blitz,
    ];

    /// Key of the mode in the stats object.
    pub fn key(&self) -> &'static str {
        match self {
            GameMode::Daily => "chess_daily",
            GameMode::Daily960 => "chess960_daily",
            GameMode::Rapid => "chess_rapid",
            GameMode::Bullet => "chess_bullet",
            GameMode::Blitz => "chess_blitz",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LastRating {
    pub rating: u32,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub date: DateTime<Utc>,
    /// Glicko rating deviation.
    pub rd: u32,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestRating {
    pub rating: u32,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub date: DateTime<Utc>,
    /// URL of the game in which the rating was reached.
    pub game: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
    // Daily modes only.
    pub time_per_move: Option<u32>,
    pub timeout_percent: Option<f64>,
}

impl GameRecord {
    pub fn games(&self) -> u32 {
        self.win + self.loss + self.draw
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameModeStats {
    pub last: LastRating,
    pub best: Option<BestRating>,
    pub record: GameRecord,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TacticsRating {
    pub rating: u32,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TacticsStats {
    pub highest: TacticsRating,
    pub lowest: TacticsRating,
}

#[skip_serializing_none]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleRushScore {
    pub score: u32,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub date: Option<DateTime<Utc>>,
    pub total_attempts: Option<u32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleRushStats {
    pub best: Option<PuzzleRushScore>,
}

/// `GET /player/{username}/stats`
///
/// A mode the player has never played is absent, not zeroed.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub chess_daily: Option<GameModeStats>,
    pub chess960_daily: Option<GameModeStats>,
    pub chess_rapid: Option<GameModeStats>,
    pub chess_bullet: Option<GameModeStats>,
    pub chess_blitz: Option<GameModeStats>,
    pub fide: Option<u32>,
    pub tactics: Option<TacticsStats>,
    pub puzzle_rush: Option<PuzzleRushStats>,
}

impl PlayerStats {
    pub fn mode(&self, mode: GameMode) -> Option<&GameModeStats> {
        match mode {
            GameMode::Daily => self.chess_daily.as_ref(),
            GameMode::Daily960 => self.chess960_daily.as_ref(),
            GameMode::Rapid => self.chess_rapid.as_ref(),
            GameMode::Bullet => self.chess_bullet.as_ref(),
            GameMode::Blitz => self.chess_blitz.as_ref(),
        }
    }

    /// Modes the player has a rating in.
    pub fn modes(&self) -> impl Iterator<Item = (GameMode, &GameModeStats)> + '_ {
        GameMode::ALL
            .into_iter()
            .filter_map(|mode| self.mode(mode).map(|stats| (mode, stats)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_modes_stay_missing() {
        let body = json!({
            "chess_blitz": {
                "last": { "rating": 2000, "date": 1678886400, "rd": 50 },
                "record": { "win": 100, "loss": 50, "draw": 10 }
            },
            "fide": 2150
        });
        let stats: PlayerStats = serde_json::from_value(body.clone()).unwrap();
        assert!(stats.chess_bullet.is_none());
        assert!(stats.mode(GameMode::Bullet).is_none());
        let modes: Vec<_> = stats.modes().map(|(mode, _)| mode).collect();
        assert_eq!(modes, vec![GameMode::Blitz]);
        assert_eq!(stats.chess_blitz.as_ref().unwrap().record.games(), 160);

        let value = serde_json::to_value(&stats).unwrap();
        assert!(value.get("chess_bullet").is_none());
        assert_eq!(value, body);
    }

    #[test]
    fn full_stats_decode() {
        let body = json!({
            "chess_daily": {
                "last": { "rating": 1450, "date": 1678000000, "rd": 120 },
                "best": {
                    "rating": 1600,
                    "date": 1600000000,
                    "game": "https://www.chess.com/game/daily/123"
                },
                "record": {
                    "win": 30, "loss": 20, "draw": 2,
                    "time_per_move": 5000, "timeout_percent": 1.5
                }
            },
            "tactics": {
                "highest": { "rating": 2500, "date": 1500000000 },
                "lowest": { "rating": 400, "date": 1400000000 }
            },
            "puzzle_rush": {
                "best": { "total_attempts": 40, "score": 35, "date": 1678886400 }
            }
        });
        let stats: PlayerStats = serde_json::from_value(body.clone()).unwrap();
        let daily = stats.mode(GameMode::Daily).unwrap();
        assert_eq!(daily.best.as_ref().unwrap().rating, 1600);
        assert_eq!(daily.record.timeout_percent, Some(1.5));
        assert_eq!(stats.tactics.as_ref().unwrap().lowest.rating, 400);
        let rush = stats.puzzle_rush.as_ref().unwrap().best.as_ref().unwrap();
        assert_eq!(rush.date.unwrap().timestamp(), 1678886400);
        assert_eq!(serde_json::to_value(&stats).unwrap(), body);
    }

    #[test]
    fn empty_puzzle_rush_is_accepted() {
        let stats: PlayerStats = serde_json::from_value(json!({ "puzzle_rush": {} })).unwrap();
        assert_eq!(stats.puzzle_rush, Some(PuzzleRushStats { best: None }));
        assert_eq!(GameMode::Daily960.to_string(), "chess960_daily");
    }

    #[test]
    fn puzzle_rush_date_round_trips() {
        let body = json!({ "puzzle_rush": { "best": { "score": 35, "date": 1678886400 } } });
        let stats: PlayerStats = serde_json::from_value(body.clone()).unwrap();
        let best = stats.puzzle_rush.as_ref().unwrap().best.as_ref().unwrap();
        assert_eq!(best.total_attempts, None);
        assert_eq!(serde_json::to_value(&stats).unwrap(), body);
    }
}
