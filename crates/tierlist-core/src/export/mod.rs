//! Export formats for leaderboards and history.

mod console;
mod json;

pub use console::*;
pub use json::*;
