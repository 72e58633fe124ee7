//! PostgREST-style HTTP record store.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::{
    DEFAULT_HISTORY_TABLE, DEFAULT_PLAYERS_TABLE, DEFAULT_TIMEOUT_SECS, StoreConfig,
};
use crate::error::{Error, Result};
use crate::history::HistoryEntry;
use crate::player::Player;
use crate::store::RecordStore;

const REST_PATH: &str = "rest/v1";
const HISTORY_ORDER: &str = "time.desc";

/// Reads tables over HTTP with a blocking agent.
///
/// Each fetch is a single attempt; there is no retry.
pub struct RestStore {
    agent: ureq::Agent,
    base_url: String,
    api_key: Option<String>,
    players_table: String,
    history_table: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            agent: build_agent(DEFAULT_TIMEOUT_SECS),
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
            players_table: DEFAULT_PLAYERS_TABLE.to_string(),
            history_table: DEFAULT_HISTORY_TABLE.to_string(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let base_url = config
            .url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| Error::StoreNotConfigured("no store url set".to_string()))?;

        Ok(Self {
            agent: build_agent(config.timeout_secs),
            base_url,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            players_table: config.players_table.clone(),
            history_table: config.history_table.clone(),
        })
    }

    /// URL selecting every column of `table`, optionally ordered.
    pub fn table_url(&self, table: &str, order: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}/{}?select=*",
            self.base_url.trim_end_matches('/'),
            REST_PATH,
            table
        );
        if let Some(order) = order {
            url.push_str("&order=");
            url.push_str(order);
        }
        url
    }

    fn fetch_table<T: DeserializeOwned>(&self, table: &str, order: Option<&str>) -> Result<Vec<T>> {
        let url = self.table_url(table, order);
        debug!("GET {}", url);

        self.get_json(&url).map_err(|e| Error::Fetch {
            table: table.to_string(),
            message: e.to_string(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let mut request = self.agent.get(url).header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", &format!("Bearer {}", key));
        }
        let mut response = request.call()?;
        let rows: Vec<T> = response.body_mut().read_json()?;
        Ok(rows)
    }
}

impl RecordStore for RestStore {
    fn fetch_players(&self) -> Result<Vec<Player>> {
        let players: Vec<Player> = self.fetch_table(&self.players_table, None)?;
        info!("Fetched {} players", players.len());
        Ok(players)
    }

    fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
        let history: Vec<HistoryEntry> =
            self.fetch_table(&self.history_table, Some(HISTORY_ORDER))?;
        info!("Fetched {} history entries", history.len());
        Ok(history)
    }
}

fn build_agent(timeout_secs: u64) -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(timeout_secs)))
        .build();
    config.into()
}
