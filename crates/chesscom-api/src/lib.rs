use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

mod error;
pub use error::{Error, Result};

pub mod models;

/// Root of the Chess.com Published-Data API.
pub const DEFAULT_BASE_URL: &str = "https://api.chess.com/pub";

/// Chess.com asks API consumers to identify themselves; override it with
/// something that includes contact details via [`ApiBuilder::user_agent`].
pub const DEFAULT_USER_AGENT: &str = concat!(
    "chesscom-api/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_REPOSITORY"),
    ")"
);

#[derive(Clone, Debug)]
pub struct ApiBuilder {
    base_url: String,
    user_agent: String,
}

impl Default for ApiBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the transport. An unusable user agent surfaces here rather than
    /// on the first request.
    #[instrument]
    pub fn build(self) -> Result<Api> {
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .build()?;
        Ok(Api {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Read-only client for the player endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct Api {
    client: reqwest::Client,
    base_url: String,
}

impl Api {
    /// Client against [`DEFAULT_BASE_URL`] with [`DEFAULT_USER_AGENT`].
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> ApiBuilder {
        ApiBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = ?url, "Sending request");
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| log_failure(Error::from_failure(e, None)))?;
        if let Some(failure) = res.error_for_status_ref().err() {
            let body = res.bytes().await.ok();
            return Err(log_failure(Error::from_failure(failure, body.as_deref())));
        }
        res.json::<T>()
            .await
            .map_err(|e| log_failure(Error::from_failure(e, None)))
    }

    #[instrument(skip(self))]
    pub async fn get_player_profile(&self, username: &str) -> Result<models::PlayerProfile> {
        let profile = self.get(&format!("/player/{username}")).await?;
        info!("Got player profile");
        Ok(profile)
    }

    #[instrument(skip(self))]
    pub async fn get_player_stats(&self, username: &str) -> Result<models::PlayerStats> {
        let stats: models::PlayerStats = self.get(&format!("/player/{username}/stats")).await?;
        info!(modes = stats.modes().count(), "Got player stats");
        Ok(stats)
    }

    /// Games the player currently has in progress.
    #[instrument(skip(self))]
    pub async fn get_player_games(&self, username: &str) -> Result<models::PlayerGames> {
        let games: models::PlayerGames = self.get(&format!("/player/{username}/games")).await?;
        info!(count = games.games.len(), "Got player games");
        Ok(games)
    }

    /// Games from one monthly archive. `month` is used as given, so pass it
    /// zero-padded (`"05"`); see [`models::ArchiveMonth::month_string`].
    #[instrument(skip(self))]
    pub async fn get_player_games_for_month(
        &self,
        username: &str,
        year: i32,
        month: &str,
    ) -> Result<models::PlayerGames> {
        let games: models::PlayerGames = self
            .get(&format!("/player/{username}/games/{year}/{month}"))
            .await?;
        info!(count = games.games.len(), "Got monthly player games");
        Ok(games)
    }

    #[instrument(skip(self))]
    pub async fn get_player_monthly_archives(
        &self,
        username: &str,
    ) -> Result<models::PlayerMonthlyArchives> {
        let archives: models::PlayerMonthlyArchives = self
            .get(&format!("/player/{username}/games/archives"))
            .await?;
        info!(count = archives.archives.len(), "Got monthly archives");
        Ok(archives)
    }

    #[instrument(skip(self))]
    pub async fn get_player_games_to_move(
        &self,
        username: &str,
    ) -> Result<models::PlayerGamesToMove> {
        let games: models::PlayerGamesToMove = self
            .get(&format!("/player/{username}/games/to-move"))
            .await?;
        info!(count = games.games.len(), "Got games to move");
        Ok(games)
    }

    #[instrument(skip(self))]
    pub async fn get_player_clubs(&self, username: &str) -> Result<models::PlayerClubs> {
        let clubs: models::PlayerClubs = self.get(&format!("/player/{username}/clubs")).await?;
        info!(count = clubs.clubs.len(), "Got player clubs");
        Ok(clubs)
    }

    #[instrument(skip(self))]
    pub async fn get_player_team_matches(
        &self,
        username: &str,
    ) -> Result<models::PlayerTeamMatches> {
        let matches: models::PlayerTeamMatches =
            self.get(&format!("/player/{username}/matches")).await?;
        info!(count = matches.team_matches.len(), "Got team matches");
        Ok(matches)
    }

    #[instrument(skip(self))]
    pub async fn get_player_tournaments(
        &self,
        username: &str,
    ) -> Result<models::PlayerTournaments> {
        let tournaments: models::PlayerTournaments = self
            .get(&format!("/player/{username}/tournaments"))
            .await?;
        info!(count = tournaments.tournaments.len(), "Got player tournaments");
        Ok(tournaments)
    }
}

fn log_failure(error: Error) -> Error {
    tracing::error!(
        status = ?error.status_code(),
        error = %error.message(),
        "Request failed"
    );
    error
}
