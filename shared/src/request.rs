/// Lifecycle of a screen's list fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Identifies one issued request so late responses can be recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Issues tickets for a stream of requests where only the newest result counts.
///
/// Every `issue` supersedes the previous ticket. `invalidate` supersedes
/// all outstanding tickets without issuing a new one, which is what a screen
/// does when it is torn down.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_invalidate_drops_outstanding_tickets() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue();
        tracker.invalidate();
        assert!(!tracker.is_current(ticket));
    }
}
