//! Subcommand implementations.

pub mod history;
pub mod init;
pub mod leaderboard;
pub mod tiers;

use std::path::Path;

use anyhow::{Context, Result};
use tierlist_core::{Config, RestStore};
use tracing::{debug, warn};

/// Store settings given on the command line or through the environment.
#[derive(Debug, Default)]
pub struct StoreOverrides {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        warn!("Config file {} not found, using defaults", path);
        return Ok(Config::default());
    }
    let config =
        Config::load(path).with_context(|| format!("Failed to load config from {}", path))?;
    debug!("Loaded config from {}", path);
    Ok(config)
}

/// Build the HTTP store from config with command-line overrides applied.
pub fn open_store(config: &Config, overrides: &StoreOverrides) -> Result<RestStore> {
    let mut store_config = config.store.clone();
    if let Some(url) = &overrides.url {
        store_config.url = Some(url.clone());
    }
    if let Some(key) = &overrides.api_key {
        store_config.api_key = Some(key.clone());
    }
    RestStore::from_config(&store_config)
        .context("Set [store].url in the config file, or pass --url / TIERLIST_STORE_URL")
}

pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
