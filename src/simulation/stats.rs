//! Running counters for a simulation session.

/// Counters accumulated by [`SimBank`](super::SimBank) while events run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankStats {
    /// Calls accepted through the dispatcher, idle returns included.
    pub calls_submitted: usize,
    /// Calls folded into a trip in progress instead of queued.
    pub calls_merged: usize,
    /// Trips that reached their target floor.
    pub trips_completed: usize,
    /// Intermediate stops actually served.
    pub intermediate_stops_served: usize,
    /// Relocations triggered by the idle-return timer.
    pub idle_returns: usize,
}

impl BankStats {
    /// One-line summary string for display.
    pub fn summary(&self) -> String {
        format!(
            "calls: {} ({} merged) | trips: {} | stops served: {} | idle returns: {}",
            self.calls_submitted,
            self.calls_merged,
            self.trips_completed,
            self.intermediate_stops_served,
            self.idle_returns
        )
    }
}
