//! Remote record store access.
//!
//! The core only needs two read operations. [`RecordStore`] abstracts them so
//! views can be driven by [`RestStore`] in production and [`MockStore`] in
//! tests.

mod mock;
mod rest;

pub use mock::*;
pub use rest::*;

use crate::error::Result;
use crate::history::HistoryEntry;
use crate::player::Player;

/// Read-only access to the player and history tables.
pub trait RecordStore {
    /// Fetch every player row.
    fn fetch_players(&self) -> Result<Vec<Player>>;

    /// Fetch every history row.
    fn fetch_history(&self) -> Result<Vec<HistoryEntry>>;
}
