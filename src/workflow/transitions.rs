//! Legal-transition graph over maintenance-event statuses.
//!
//! The graph is intentionally cyclic: completed events can be reopened,
//! cancelled events replanned, and so on. No status is terminal, which is
//! why none of the rows below is empty. Self-transitions are never legal.

use crate::event::MaintenanceEventStatus;

impl MaintenanceEventStatus {
    /// The statuses this one may move to, straight from the transition table.
    ///
    /// | From        | Allowed to                                |
    /// |-------------|-------------------------------------------|
    /// | Planned     | InProgress, Cancelled, Postponed          |
    /// | InProgress  | Completed, Cancelled, Postponed, Planned  |
    /// | Completed   | InProgress, Cancelled                     |
    /// | Cancelled   | Planned                                   |
    /// | Postponed   | Planned, InProgress, Cancelled            |
    pub fn valid_next_states(self) -> &'static [MaintenanceEventStatus] {
        use MaintenanceEventStatus::*;
        match self {
            Planned => &[InProgress, Cancelled, Postponed],
            InProgress => &[Completed, Cancelled, Postponed, Planned],
            Completed => &[InProgress, Cancelled],
            Cancelled => &[Planned],
            Postponed => &[Planned, InProgress, Cancelled],
        }
    }

    /// Pair lookup against the table. False for everything the table does
    /// not list, including all self-transitions.
    pub fn can_transition_to(self, target: MaintenanceEventStatus) -> bool {
        self.valid_next_states().contains(&target)
    }
}
