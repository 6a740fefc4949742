use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chesscom_api::{models, Api};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

mod config;
use config::FetchConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Fetch player data from the Chess.com Published-Data API")]
struct Args {
    /// Path to config json file
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,

    /// API root, overrides the config file
    #[arg(long)]
    base_url: Option<String>,

    /// User-Agent to send, overrides the config file
    #[arg(long)]
    user_agent: Option<String>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn overrides(&self) -> FetchConfig {
        FetchConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Public profile
    Profile { username: String },
    /// Ratings per game mode
    Stats { username: String },
    /// Games in progress, or one month of the archive with --year/--month
    Games {
        username: String,
        #[arg(long, requires = "month")]
        year: Option<i32>,
        #[arg(long, requires = "year", value_parser = parse_month)]
        month: Option<String>,
    },
    /// Months that have archived games
    Archives { username: String },
    /// Daily games waiting for the player's move
    ToMove { username: String },
    Clubs { username: String },
    Matches { username: String },
    Tournaments { username: String },
    /// Profile, stats, archives, clubs, matches and tournaments at once
    All { username: String },
}

/// Accept `5` or `05`, hand the API `05`.
fn parse_month(month: &str) -> Result<String, String> {
    match month.parse::<u32>() {
        Ok(m @ 1..=12) => Ok(format!("{m:02}")),
        _ => Err(format!("{month} is not a month (1-12)")),
    }
}

#[derive(Serialize)]
struct PlayerOverview {
    profile: models::PlayerProfile,
    stats: models::PlayerStats,
    archives: models::PlayerMonthlyArchives,
    clubs: models::PlayerClubs,
    team_matches: models::PlayerTeamMatches,
    tournaments: models::PlayerTournaments,
}

#[instrument(skip(api))]
async fn fetch(api: &Api, command: Command) -> Result<Value> {
    let value = match command {
        Command::Profile { username } => {
            serde_json::to_value(api.get_player_profile(&username).await?)?
        }
        Command::Stats { username } => {
            serde_json::to_value(api.get_player_stats(&username).await?)?
        }
        Command::Games {
            username,
            year: Some(year),
            month: Some(month),
        } => serde_json::to_value(
            api.get_player_games_for_month(&username, year, &month)
                .await?,
        )?,
        Command::Games { username, .. } => {
            serde_json::to_value(api.get_player_games(&username).await?)?
        }
        Command::Archives { username } => {
            serde_json::to_value(api.get_player_monthly_archives(&username).await?)?
        }
        Command::ToMove { username } => {
            serde_json::to_value(api.get_player_games_to_move(&username).await?)?
        }
        Command::Clubs { username } => {
            serde_json::to_value(api.get_player_clubs(&username).await?)?
        }
        Command::Matches { username } => {
            serde_json::to_value(api.get_player_team_matches(&username).await?)?
        }
        Command::Tournaments { username } => {
            serde_json::to_value(api.get_player_tournaments(&username).await?)?
        }
        Command::All { username } => {
            let (profile, stats, archives, clubs, team_matches, tournaments) = tokio::try_join!(
                api.get_player_profile(&username),
                api.get_player_stats(&username),
                api.get_player_monthly_archives(&username),
                api.get_player_clubs(&username),
                api.get_player_team_matches(&username),
                api.get_player_tournaments(&username),
            )?;
            serde_json::to_value(PlayerOverview {
                profile,
                stats,
                archives,
                clubs,
                team_matches,
                tournaments,
            })?
        }
    };
    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the JSON, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FetchConfig::load(args.config.as_deref(), args.overrides())?;
    let api = config.api().context("Failed to build API client")?;
    info!(base_url = %api.base_url(), "Fetching");

    let value = fetch(&api, args.command).await.map_err(|e| {
        match e
            .downcast_ref::<chesscom_api::Error>()
            .and_then(|e| e.status_code())
        {
            Some(status) => e.context(format!("Chess.com answered {status}")),
            None => e,
        }
    })?;

    let out = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{out}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn month_scoped_games() {
        let args = Args::try_parse_from([
            "chesscom-fetch",
            "games",
            "erik",
            "--year",
            "2023",
            "--month",
            "5",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Command::Games {
                username: "erik".to_string(),
                year: Some(2023),
                month: Some("05".to_string()),
            }
        );
    }

    #[test]
    fn year_needs_month() {
        assert!(
            Args::try_parse_from(["chesscom-fetch", "games", "erik", "--year", "2023"]).is_err()
        );
        assert!(Args::try_parse_from([
            "chesscom-fetch",
            "games",
            "erik",
            "--year",
            "2023",
            "--month",
            "13",
        ])
        .is_err());
    }

    #[test]
    fn global_flags_become_overrides() {
        let args = Args::try_parse_from([
            "chesscom-fetch",
            "--base-url",
            "http://localhost:9000/pub",
            "--compact",
            "to-move",
            "erik",
        ])
        .unwrap();
        assert!(args.compact);
        assert_eq!(
            args.overrides(),
            FetchConfig {
                base_url: Some("http://localhost:9000/pub".to_string()),
                user_agent: None,
            }
        );
        assert_eq!(
            args.command,
            Command::ToMove {
                username: "erik".to_string()
            }
        );
    }

    #[test]
    fn month_parser() {
        assert_eq!(parse_month("05").unwrap(), "05");
        assert_eq!(parse_month("12").unwrap(), "12");
        assert!(parse_month("0").is_err());
        assert!(parse_month("may").is_err());
    }
}
