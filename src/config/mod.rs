//! Configuration (Figment-based)
//!
//! Merged from three sources, later ones winning:
//! 1. Built-in defaults
//! 2. Project config (`flowscout.toml`)
//! 3. Environment variables (`FLOWSCOUT_*`, `__` as the section separator,
//!    e.g. `FLOWSCOUT_GITHUB__TOKEN`)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{flow, github};
use crate::types::{Result, ScoutError};

/// Project config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "flowscout.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github: GithubConfig,
    pub flow: FlowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub api_base: String,
    /// API token. Optional, but unauthenticated search is rate-limited
    /// hard enough that real use wants one.
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: github::DEFAULT_API_BASE.to_string(),
            token: None,
            user_agent: github::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: github::DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub testnet_api_base: String,
    pub mainnet_api_base: String,
    pub timeout_secs: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            testnet_api_base: flow::TESTNET_API_BASE.to_string(),
            mainnet_api_base: flow::MAINNET_API_BASE.to_string(),
            timeout_secs: flow::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let endpoints = [
            ("github.api_base", &self.github.api_base),
            ("flow.testnet_api_base", &self.flow.testnet_api_base),
            ("flow.mainnet_api_base", &self.flow.mainnet_api_base),
        ];
        for (label, value) in endpoints {
            Url::parse(value)
                .map_err(|e| ScoutError::Config(format!("invalid {label} '{value}': {e}")))?;
        }
        if self.github.timeout_secs == 0 || self.flow.timeout_secs == 0 {
            return Err(ScoutError::Config(
                "timeouts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(PROJECT_CONFIG_FILE))
            .merge(Env::prefixed("FLOWSCOUT_").split("__"))
            .extract()
            .map_err(|e| ScoutError::Config(format!("configuration error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
