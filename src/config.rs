//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Secrets (the Telegram bot token) are referenced by env-var name in the
//! config and resolved at runtime via `std::env::var`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub agent: AgentConfig,
    pub feed: FeedConfig,
    pub filters: FilterConfig,
    pub risk: RiskConfig,
    pub telegram: TelegramConfig,
    pub files: FilesConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    pub name: String,
    pub poll_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    /// New-pairs endpoint, e.g. `https://api.dexscreener.com/latest/dex/pairs/new`.
    pub endpoint: String,
    /// Maximum pairs to request per poll.
    pub batch_limit: u32,
}

/// Static-filter thresholds applied before any network risk check.
#[derive(Debug, Deserialize, Clone)]
pub struct FilterConfig {
    /// Minimum pooled liquidity in USD (exclusive).
    pub min_liquidity: f64,
    /// Minimum 24h volume in USD (exclusive).
    pub min_volume: f64,
    /// Maximum pair age in seconds (exclusive).
    pub max_age_secs: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RiskConfig {
    /// Base URL of the rugcheck-style scoring service.
    pub rugcheck_url: String,
    /// Full URL of the fake-volume detection endpoint.
    pub pocker_api_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelegramConfig {
    pub bot_token_env: String,
    /// Chat that receives buy-signal notifications.
    pub chat_id: String,
    /// Optional separate chat for operational alerts.
    #[serde(default)]
    pub alert_chat_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    pub token_denylist: String,
    pub creator_denylist: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite file path; created if missing.
    pub path: String,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Resolve an environment variable name to its value.
    /// Useful for loading secrets referenced in the config.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}
