use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::error::Result;
use crate::mode::FilterMode;
use crate::player::RowKey;
use crate::ranking::{RankedEntry, rank, row_order};
use crate::scoring::{ScoredPlayer, score_players};
use crate::store::RecordStore;
use crate::tier::TierScoreTable;
use crate::transition::{Animation, LayoutProvider, TransitionController, TransitionTicket};
use crate::view::ViewState;

/// State behind the leaderboard page.
///
/// Typical flow:
/// 1. [`load`](Self::load) once the page mounts
/// 2. render [`entries`](Self::entries)
/// 3. on a filter change, [`request_filter`](Self::request_filter) with the
///    current layout, re-render, then call
///    [`on_layout_committed`](Self::on_layout_committed) with the ticket
pub struct LeaderboardController {
    table: TierScoreTable,
    state: ViewState<Vec<ScoredPlayer>>,
    filter: FilterMode,
    entries: Vec<RankedEntry>,
    transitions: TransitionController,
}

impl LeaderboardController {
    pub fn new(table: TierScoreTable) -> Self {
        Self {
            table,
            state: ViewState::Loading,
            filter: FilterMode::Overall,
            entries: Vec::new(),
            transitions: TransitionController::new(),
        }
    }

    /// Fetch and score all players.
    ///
    /// Resets the filter to overall. A failed fetch leaves the controller in
    /// [`ViewState::Failed`] and returns the error.
    pub fn load<S: RecordStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        self.state = ViewState::Loading;
        self.filter = FilterMode::Overall;
        self.entries.clear();
        self.transitions.cancel();

        let players = match store.fetch_players() {
            Ok(players) => players,
            Err(e) => {
                warn!("Error fetching players: {}", e);
                self.state = ViewState::Failed(e.to_string());
                return Err(e);
            }
        };

        let scored = score_players(players, &self.table);
        // Mode rankings start from the overall order so equal keys stay in
        // the order the overall board shows them.
        let by_points: Vec<ScoredPlayer> = rank(&scored, FilterMode::Overall)
            .into_iter()
            .map(|entry| entry.player)
            .collect();
        info!("Loaded {} players", by_points.len());

        self.entries = rank(&by_points, self.filter);
        self.state = ViewState::Ready(by_points);
        Ok(())
    }

    /// Switch the active filter.
    ///
    /// Captures the current layout first. Returns the ticket to pass to
    /// [`on_layout_committed`](Self::on_layout_committed), or `None` when
    /// nothing changes.
    pub fn request_filter<L: LayoutProvider + ?Sized>(
        &mut self,
        filter: FilterMode,
        layout: &L,
    ) -> Option<TransitionTicket> {
        if filter == self.filter {
            return None;
        }
        let ticket = self.transitions.begin(layout);
        self.filter = filter;
        if let ViewState::Ready(players) = &self.state {
            self.entries = rank(players, filter);
        }
        Some(ticket)
    }

    /// The renderer has committed the layout for `ticket`.
    ///
    /// Returns the row animations to start; empty for stale tickets.
    pub fn on_layout_committed<L: LayoutProvider + ?Sized>(
        &mut self,
        ticket: TransitionTicket,
        layout: &L,
    ) -> BTreeMap<RowKey, Animation> {
        self.transitions
            .complete(ticket, layout)
            .unwrap_or_default()
    }

    pub fn state(&self) -> &ViewState<Vec<ScoredPlayer>> {
        &self.state
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn row_order(&self) -> Vec<RowKey> {
        row_order(&self.entries)
    }

    pub fn score_table(&self) -> &TierScoreTable {
        &self.table
    }
}

impl Default for LeaderboardController {
    fn default() -> Self {
        Self::new(TierScoreTable::default())
    }
}
