pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod mode;
pub mod player;
pub mod ranking;
pub mod scoring;
mod serde_util;
pub mod store;
pub mod tier;
pub mod transition;
pub mod view;

pub use config::Config;
pub use error::{Error, Result};
pub use history::{HistoryEntry, PlayerDirectory, TestFight, TierOutcome};
pub use mode::{FilterMode, ModeKey};
pub use player::{Player, RowKey};
pub use ranking::{RankKey, RankedEntry, rank};
pub use scoring::{ScoredPlayer, compute_points, score_players};
pub use store::{MockStore, RecordStore, RestStore};
pub use tier::{PointScheme, Tier, TierScoreTable};
pub use transition::{
    Animation, Delta, LayoutProvider, MockLayout, PositionSnapshot, Rect, TransitionController,
    TransitionTicket, compute_deltas,
};
pub use view::{HistoryController, LeaderboardController, ViewState};
