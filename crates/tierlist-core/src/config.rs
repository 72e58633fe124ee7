//! Configuration file support.
//!
//! The config lives in a TOML file (`tierlist.toml` by default). Every field
//! is optional; command-line flags override what the file sets.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tier::{PointScheme, Tier, TierScoreTable};

pub const DEFAULT_PLAYERS_TABLE: &str = "tiers";
pub const DEFAULT_HISTORY_TABLE: &str = "history";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_CONFIG_TEMPLATE: &str = "\
# tierlist configuration
# All values here can be overridden by CLI flags.

[store]
# Base URL of the record store (PostgREST / Supabase project URL)
# url = \"https://example.supabase.co\"

# Anonymous API key. Prefer the TIERLIST_API_KEY env var.
# api_key = \"\"

# players_table = \"tiers\"
# history_table = \"history\"
# timeout_secs = 30

[scoring]
# One of: classic, linear, exponential, quadratic
# scheme = \"classic\"

# Per-tier overrides on top of the scheme
# [scoring.points]
# HT1 = 1000
# U = 0
";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub players_table: String,
    pub history_table: String,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            players_table: DEFAULT_PLAYERS_TABLE.to_string(),
            history_table: DEFAULT_HISTORY_TABLE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub scheme: PointScheme,
    /// Tier label -> points, applied on top of `scheme`.
    pub points: BTreeMap<String, u32>,
}

impl ScoringConfig {
    pub fn score_table(&self) -> Result<TierScoreTable> {
        let overrides = self
            .points
            .iter()
            .map(|(label, &points)| {
                label
                    .trim()
                    .parse::<Tier>()
                    .map(|tier| (tier, points))
                    .map_err(|_| {
                        Error::ConfigParseError(format!(
                            "unknown tier in [scoring.points]: {}",
                            label
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(TierScoreTable::from_scheme(self.scheme).with_overrides(overrides))
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the commented template. Fails if the file already exists.
    pub fn write_template<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        Ok(())
    }
}
