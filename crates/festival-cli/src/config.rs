//! CLI configuration: a TOML file layered with `FESTIVAL_`-prefixed
//! environment variables. The language preference persists in the same
//! file and is rewritten when toggled.

use std::path::PathBuf;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use festival_client::ApiConfig;
use festival_model::Language;

const ENV_PREFIX: &str = "FESTIVAL_";

/// Persisted CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// API base URL; `FESTIVAL_API_BASE_URL` or the built-in default
    /// apply when unset.
    pub base_url: Option<String>,
    /// Separate origin for media attachment paths.
    pub media_base: Option<String>,
    /// Saved interface language.
    pub language: Language,
}

impl CliConfig {
    /// Load from the config file merged with `FESTIVAL_` environment
    /// variables; env wins over file, file over defaults.
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::from(Serialized::defaults(CliConfig::default()))
                .merge(Toml::file(config_path()))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        figment.extract().context("read CLI configuration")
    }

    /// Write the configuration back to the config file, creating its
    /// parent directory when needed.
    pub fn save(&self) -> Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let rendered = toml::to_string_pretty(self).context("serialize CLI configuration")?;
        std::fs::write(&path, rendered).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// Build the client configuration this CLI config describes.
    pub fn api_config(&self) -> ApiConfig {
        let mut api = match &self.base_url {
            Some(base_url) => ApiConfig::new(base_url.clone()),
            None => ApiConfig::from_env(),
        };
        api.media_base = self.media_base.clone();
        api
    }
}

/// `~/.config/festival-archive/config.toml`, or a local file when no
/// config directory exists.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("festival-archive").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("festival-archive.toml"))
}
