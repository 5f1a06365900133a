//! Plan state: the generated plan and the request currently in flight

use dioxus::prelude::*;

use crate::application::plan_tracker::{PlanStatus, PlanTracker, RequestTicket};
use growthwise_engine::GeneratedPlan;

#[derive(Clone, Copy)]
pub struct PlanState {
    tracker: Signal<PlanTracker>,
}

impl PlanState {
    pub fn new() -> Self {
        Self {
            tracker: Signal::new(PlanTracker::default()),
        }
    }

    pub fn status(&self) -> PlanStatus {
        self.tracker.read().status().clone()
    }

    pub fn is_idle(&self) -> bool {
        *self.tracker.peek().status() == PlanStatus::Idle
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.tracker.write().begin()
    }

    pub fn commit(&mut self, ticket: RequestTicket, plan: GeneratedPlan) -> bool {
        self.tracker.write().commit(ticket, plan)
    }

    pub fn cancel(&mut self, ticket_id: u64) {
        self.tracker.write().cancel(ticket_id);
    }

    /// Drop the previous plan before a new submission
    pub fn clear(&mut self) {
        self.tracker.write().clear();
    }
}

impl Default for PlanState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_plan_state() -> PlanState {
    use_context::<PlanState>()
}
