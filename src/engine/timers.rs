use std::time::Duration;

use crate::config::DF;

#[derive(Debug)]
struct PendingTimer<A> {
    /// Arming order, breaks ties between equal due times
    seq: u64,
    due: Duration,
    action: A,
}

/// One-shot timers on a simulated clock, tracked together so a run can be
/// cancelled in one call. Nothing here reads the wall clock.
#[derive(Debug)]
pub struct TimerSet<A> {
    pending: Vec<PendingTimer<A>>,
    next_seq: u64,
}

impl<A> Default for TimerSet<A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<A> TimerSet<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, due: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        if DF.log_timers {
            log::info!("⏱ timer #{} armed for {:?}", seq, due);
        }
        self.pending.push(PendingTimer { seq, due, action });
    }

    /// Drops every outstanding timer. Returns how many were live.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        if DF.log_timers && n > 0 {
            log::info!("⏱ cancelled {} pending timers", n);
        }
        n
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Removes and returns every timer due at or before `now`, earliest first.
    /// Timers sharing a due time come out in the order they were armed.
    pub fn take_due(&mut self, now: Duration) -> Vec<(Duration, A)> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = rest;
        due.sort_by_key(|t| (t.due, t.seq));
        if DF.log_timers && !due.is_empty() {
            log::info!("⏱ {} timers fired at {:?}", due.len(), now);
        }
        due.into_iter().map(|t| (t.due, t.action)).collect()
    }
}
