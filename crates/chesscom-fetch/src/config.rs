use std::path::Path;

use anyhow::{bail, Context as _, Result};
use chesscom_api::Api;
use figment::{
    providers::{Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Client settings. Unset fields fall back to the library defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct FetchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl FetchConfig {
    /// Read the optional JSON config file and lay `overrides` over it.
    #[instrument]
    pub fn load(path: Option<&Path>, overrides: FetchConfig) -> Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !path.is_file() {
                bail!("Config file {} does not exist", path.display());
            }
            figment = figment.merge(Json::file(path));
        }
        let config: FetchConfig = figment
            .merge(Serialized::defaults(overrides))
            .extract()
            .context("Failed to read config")?;
        debug!(config = ?config, "Loaded config");
        Ok(config)
    }

    pub fn api(&self) -> chesscom_api::Result<Api> {
        let mut builder = Api::builder();
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_no_overrides_is_default() {
        let config = FetchConfig::load(None, FetchConfig::default()).unwrap();
        assert_eq!(config, FetchConfig::default());
        let api = config.api().unwrap();
        assert_eq!(api.base_url(), chesscom_api::DEFAULT_BASE_URL);
    }

    #[test]
    fn overrides_win_over_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "chesscom.json",
                r#"{"base_url": "http://localhost:9000/pub/", "user_agent": "from-file"}"#,
            )?;
            let config = FetchConfig::load(
                Some(Path::new("chesscom.json")),
                FetchConfig {
                    user_agent: Some("from-cli".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
            assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000/pub/"));
            assert_eq!(config.user_agent.as_deref(), Some("from-cli"));
            assert_eq!(config.api().unwrap().base_url(), "http://localhost:9000/pub");
            Ok(())
        });
    }

    #[test]
    fn missing_file_is_an_error() {
        figment::Jail::expect_with(|_jail| {
            let err = FetchConfig::load(Some(Path::new("nope.json")), FetchConfig::default())
                .unwrap_err();
            assert!(err.to_string().contains("nope.json"));
            Ok(())
        });
    }
}
