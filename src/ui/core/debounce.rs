//! Time-coalescing scheduler.
//!
//! A [`Debouncer`] holds at most one pending job. Scheduling a new job drops
//! the previous one unfired, so a burst of requests collapses into a single
//! run of the last job once the delay has elapsed without a newer request.
//!
//! Jobs never run inside [`Debouncer::schedule`]. They are handed back by
//! [`Debouncer::poll`] when due, which the owner calls from its tick. A zero
//! delay therefore still waits for the next poll, and every request made
//! within the same tick coalesces.

use super::clock::{Clock, SystemClock};
use tokio::time::{Duration, Instant};

struct PendingJob<J> {
    due_at: Instant,
    job: J,
}

/// Single-slot debounce scheduler.
///
/// Each owner keeps its own instance; instances share nothing.
pub struct Debouncer<J, C: Clock = SystemClock> {
    clock: C,
    pending: Option<PendingJob<J>>,
}

impl<J> Debouncer<J, SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<J> Default for Debouncer<J, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J, C: Clock> Debouncer<J, C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock, pending: None }
    }

    /// Register `job` to become due after `delay`, replacing any job that
    /// has not fired yet.
    pub fn schedule(&mut self, delay: Duration, job: J) {
        let due_at = self.clock.now() + delay;
        if self.pending.replace(PendingJob { due_at, job }).is_some() {
            log::trace!("debounce: replaced pending job");
        }
    }

    /// Take the pending job if its delay has elapsed.
    pub fn poll(&mut self) -> Option<J> {
        let now = self.clock.now();
        let due = self.pending.as_ref().is_some_and(|p| now >= p.due_at);
        if due {
            self.pending.take().map(|p| p.job)
        } else {
            None
        }
    }

    /// Drop the pending job without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending job becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due_at)
    }
}

impl<F: FnOnce(), C: Clock> Debouncer<F, C> {
    /// Invoke the pending callback if it is due. Returns whether it ran.
    pub fn run_due(&mut self) -> bool {
        match self.poll() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}
