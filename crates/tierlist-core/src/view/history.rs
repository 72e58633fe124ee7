use tracing::{info, warn};

use crate::error::Result;
use crate::history::{HistoryEntry, PlayerDirectory, sort_newest_first};
use crate::store::RecordStore;
use crate::view::ViewState;

/// Everything the history page renders.
#[derive(Debug, Clone, Default)]
pub struct HistoryData {
    /// Newest first.
    pub entries: Vec<HistoryEntry>,
    pub directory: PlayerDirectory,
}

/// State behind the test history page. At most one entry is expanded.
#[derive(Debug, Default)]
pub struct HistoryController {
    state: ViewState<HistoryData>,
    expanded: Option<String>,
}

impl HistoryController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch history and players. Both must succeed.
    pub fn load<S: RecordStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        self.state = ViewState::Loading;
        self.expanded = None;

        let fetched = store
            .fetch_history()
            .and_then(|history| Ok((history, store.fetch_players()?)));
        let (mut entries, players) = match fetched {
            Ok(data) => data,
            Err(e) => {
                warn!("Error fetching history: {}", e);
                self.state = ViewState::Failed(e.to_string());
                return Err(e);
            }
        };

        sort_newest_first(&mut entries);
        info!("Loaded {} history entries", entries.len());

        self.state = ViewState::Ready(HistoryData {
            entries,
            directory: PlayerDirectory::new(players),
        });
        Ok(())
    }

    /// Expand `key`, or collapse it if it is already expanded.
    pub fn toggle_expanded(&mut self, key: &str) {
        if self.expanded.as_deref() == Some(key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key.to_string());
        }
    }

    pub fn is_expanded(&self, entry: &HistoryEntry) -> bool {
        self.expanded.as_deref() == Some(entry.key().as_str())
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn state(&self) -> &ViewState<HistoryData> {
        &self.state
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        self.state
            .ready()
            .map(|data| data.entries.as_slice())
            .unwrap_or_default()
    }
}
