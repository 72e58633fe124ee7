//! View controllers.
//!
//! A controller owns all state for one page for as long as the page is
//! mounted: the fetched records, the active selection and, for the
//! leaderboard, the pending row transition. Dropping the controller is the
//! unmount.

mod history;
mod leaderboard;

pub use history::*;
pub use leaderboard::*;

/// Load state of a page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Ready(T),
    /// Terminal for this load; only a fresh load recovers.
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
