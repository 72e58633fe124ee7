//! Tier test history.
//!
//! This module contains:
//! - `HistoryEntry`, `TestFight` - records from the remote `history` table
//! - `TierOutcome` - promoted / demoted / retained classification
//! - `PlayerDirectory` - case-insensitive username lookup for history names

mod directory;
mod entry;

pub use directory::*;
pub use entry::*;
