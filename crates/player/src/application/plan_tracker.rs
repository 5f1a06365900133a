//! Generation lifecycle with stale-result protection
//!
//! Each generation gets a [`RequestTicket`]. A result is only committed when
//! its ticket is still the active one; a view that goes away cancels its
//! ticket, so a late result lands nowhere.

use growthwise_engine::GeneratedPlan;

/// Proof that a generation was started. Not `Clone`: one commit per ticket.
#[derive(Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlanStatus {
    #[default]
    Idle,
    Generating,
    Ready(GeneratedPlan),
}

#[derive(Debug, Clone, Default)]
pub struct PlanTracker {
    next_id: u64,
    active: Option<u64>,
    status: PlanStatus,
}

impl PlanTracker {
    pub fn status(&self) -> &PlanStatus {
        &self.status
    }

    pub fn plan(&self) -> Option<&GeneratedPlan> {
        match &self.status {
            PlanStatus::Ready(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.status == PlanStatus::Generating
    }

    /// Start a generation; any earlier ticket becomes stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.next_id += 1;
        self.active = Some(self.next_id);
        self.status = PlanStatus::Generating;
        RequestTicket(self.next_id)
    }

    /// Store the result if `ticket` is still active. Returns whether it was stored.
    pub fn commit(&mut self, ticket: RequestTicket, plan: GeneratedPlan) -> bool {
        if self.active != Some(ticket.0) {
            tracing::debug!(
                ticket = ticket.0,
                active = ?self.active,
                "Discarding plan for a stale request"
            );
            return false;
        }
        self.active = None;
        self.status = PlanStatus::Ready(plan);
        true
    }

    /// Forget the ticket with this id if it is still pending.
    pub fn cancel(&mut self, ticket_id: u64) {
        if self.active == Some(ticket_id) {
            tracing::debug!(ticket = ticket_id, "Cancelled pending plan request");
            self.active = None;
            self.status = PlanStatus::Idle;
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.status = PlanStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use growthwise_domain::Language;
    use growthwise_engine::PlanSource;

    fn plan(content: &str) -> GeneratedPlan {
        GeneratedPlan {
            content: content.to_string(),
            language: Language::En,
            source: PlanSource::Remote,
            generated_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_commit_with_active_ticket() {
        let mut tracker = PlanTracker::default();
        let ticket = tracker.begin();
        assert!(tracker.is_generating());

        assert!(tracker.commit(ticket, plan("# Plan")));
        assert_eq!(tracker.plan().unwrap().content, "# Plan");
        assert!(!tracker.is_generating());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut tracker = PlanTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_ne!(first.id(), second.id());

        assert!(!tracker.commit(first, plan("old")));
        assert!(tracker.is_generating());

        assert!(tracker.commit(second, plan("new")));
        assert_eq!(tracker.plan().unwrap().content, "new");
    }

    #[test]
    fn test_cancelled_ticket_cannot_commit() {
        let mut tracker = PlanTracker::default();
        let ticket = tracker.begin();
        tracker.cancel(ticket.id());
        assert_eq!(tracker.status(), &PlanStatus::Idle);

        assert!(!tracker.commit(ticket, plan("late")));
        assert_eq!(tracker.status(), &PlanStatus::Idle);
    }

    #[test]
    fn test_cancel_after_commit_keeps_plan() {
        let mut tracker = PlanTracker::default();
        let ticket = tracker.begin();
        let id = ticket.id();
        tracker.commit(ticket, plan("kept"));

        tracker.cancel(id);
        assert_eq!(tracker.plan().unwrap().content, "kept");
    }
}
