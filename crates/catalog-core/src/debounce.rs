//! Debouncer
//!
//! Coalesces rapid input into one value after a quiet period.
//! Clock-agnostic: callers pass `now` as a duration since any fixed origin,
//! or arm a timer per `Ticket` and call `fire` when it expires.

use std::time::Duration;

/// Handle for one pending emission; only the latest ticket can fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due: Duration,
    ticket: Ticket,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    issued: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            issued: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new raw value; replaces (cancels) any pending one and restarts the timer
    pub fn push(&mut self, value: T, now: Duration) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(Pending {
            value,
            due: now + self.delay,
            ticket,
        });
        ticket
    }

    /// When the pending value is due, if any
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Emit the pending value once its quiet period has elapsed
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.due);
        if due {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Timer for `ticket` expired: emit only if nothing newer was pushed since
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        let current = self.pending.as_ref().is_some_and(|p| p.ticket == ticket);
        if current {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
