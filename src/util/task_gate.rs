//! Generation tickets for superseding async work.
//!
//! A component starting an async read or fetch takes a [`Ticket`]; starting
//! the next one (or calling [`TaskGate::cancel`]) invalidates every earlier
//! ticket, so a late completion can tell it is stale and drop its result.

#[cfg(test)]
#[path = "task_gate_test.rs"]
mod task_gate_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Proof that a task was the latest one started on its gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared generation counter. Clones observe the same generation.
#[derive(Clone, Debug, Default)]
pub struct TaskGate {
    generation: Arc<AtomicU64>,
}

impl TaskGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new task, superseding any in flight.
    #[must_use]
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Invalidate every outstanding ticket without starting new work.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    /// Whether `ticket` still belongs to the most recent task.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket.0
    }
}
