//! Row transition engine.
//!
//! When the ordering changes, rows should slide from where they were to
//! where they are now instead of jump-cutting. The sequence is:
//!
//! 1. capture a [`PositionSnapshot`] of the current layout
//! 2. apply the re-rank
//! 3. once the renderer reports the new layout is committed, capture again
//! 4. [`compute_deltas`] and hand each row an [`Animation`]
//!
//! [`TransitionController`] owns the snapshot between steps 1 and 3.

mod animation;
mod controller;
mod geometry;
mod layout;

pub use animation::*;
pub use controller::*;
pub use geometry::*;
pub use layout::*;
