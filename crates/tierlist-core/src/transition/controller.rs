use std::collections::BTreeMap;

use tracing::debug;

use crate::player::RowKey;
use crate::transition::{Animation, LayoutProvider, PositionSnapshot, compute_deltas};

/// Identifies one capture/commit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionTicket(u64);

#[derive(Debug)]
struct PendingTransition {
    ticket: TransitionTicket,
    before: PositionSnapshot,
}

/// Holds the "before" snapshot between a re-rank request and the renderer's
/// layout-commit notification.
///
/// Only the most recent request is kept. A commit notification for an older
/// ticket is ignored so intermediate orderings never animate.
#[derive(Debug, Default)]
pub struct TransitionController {
    pending: Option<PendingTransition>,
    next_ticket: u64,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current layout. Call before applying the re-rank.
    pub fn begin<L: LayoutProvider + ?Sized>(&mut self, layout: &L) -> TransitionTicket {
        let ticket = TransitionTicket(self.next_ticket);
        self.next_ticket += 1;

        let before = PositionSnapshot::capture(layout);
        debug!("Captured {} row positions ({:?})", before.len(), ticket);

        if let Some(stale) = self.pending.replace(PendingTransition { ticket, before }) {
            debug!("Superseding pending transition {:?}", stale.ticket);
        }
        ticket
    }

    /// Capture the committed layout and build the row animations.
    ///
    /// Returns `None` when `ticket` is not the latest request or when nothing
    /// was on screen at capture time.
    pub fn complete<L: LayoutProvider + ?Sized>(
        &mut self,
        ticket: TransitionTicket,
        layout: &L,
    ) -> Option<BTreeMap<RowKey, Animation>> {
        if self.pending.as_ref().map(|p| p.ticket) != Some(ticket) {
            debug!("Ignoring stale layout commit {:?}", ticket);
            return None;
        }
        let pending = self.pending.take()?;
        if pending.before.is_empty() {
            debug!("No captured positions, skipping animation");
            return None;
        }

        let after = PositionSnapshot::capture(layout);
        let animations: BTreeMap<RowKey, Animation> = compute_deltas(&pending.before, &after)
            .into_iter()
            .map(|(key, delta)| (key, Animation::slide(delta)))
            .collect();
        debug!("Started {} animations", animations.len());
        Some(animations)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any captured snapshot.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
