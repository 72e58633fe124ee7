//! In-memory record store for testing.

use std::cell::Cell;

use crate::error::{Error, Result};
use crate::history::HistoryEntry;
use crate::player::Player;
use crate::store::RecordStore;

/// Serves fixed records, optionally failing one or both tables.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    players: Vec<Player>,
    history: Vec<HistoryEntry>,
    fail_players: bool,
    fail_history: bool,
    fetches: Cell<usize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }

    pub fn failing_players(mut self) -> Self {
        self.fail_players = true;
        self
    }

    pub fn failing_history(mut self) -> Self {
        self.fail_history = true;
        self
    }

    /// Number of fetch calls served so far, successful or not.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    fn record_fetch(&self, table: &str, fail: bool) -> Result<()> {
        self.fetches.set(self.fetches.get() + 1);
        if fail {
            return Err(Error::Fetch {
                table: table.to_string(),
                message: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}

impl RecordStore for MockStore {
    fn fetch_players(&self) -> Result<Vec<Player>> {
        self.record_fetch("tiers", self.fail_players)?;
        Ok(self.players.clone())
    }

    fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
        self.record_fetch("history", self.fail_history)?;
        Ok(self.history.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_serves_records() {
        let store = MockStore::new().with_players(vec![Player::new("a", "A")]);
        assert_eq!(store.fetch_players().unwrap().len(), 1);
        assert!(store.fetch_history().unwrap().is_empty());
        assert_eq!(store.fetch_count(), 2);
    }

    #[test]
    fn test_mock_failure() {
        let store = MockStore::new().failing_history();
        assert!(store.fetch_players().is_ok());
        assert!(matches!(store.fetch_history(), Err(Error::Fetch { .. })));
    }
}
