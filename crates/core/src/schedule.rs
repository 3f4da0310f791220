//! Delayed tasks.
//!
//! [`Scheduler::schedule_after`] is the only timer primitive in the
//! application. The event loop calls [`Scheduler::take_due`] on every tick;
//! nothing is ever cancelled once scheduled.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug)]
struct Scheduled<T> {
    due: Instant,
    seq: u64,
    task: T,
}

/// Queue of tasks waiting for their due time.
pub struct Scheduler<T> {
    clock: Box<dyn Clock>,
    pending: Vec<Scheduled<T>>,
    next_seq: u64,
}

impl<T> Scheduler<T> {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    /// Run `task` once `delay` has elapsed.
    pub fn schedule_after(&mut self, delay: Duration, task: T) {
        let due = self.clock.now() + delay;
        self.pending.push(Scheduled {
            due,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    /// Remove and return every task whose time has come.
    ///
    /// Tasks come out ordered by due time; ties keep scheduling order.
    pub fn take_due(&mut self) -> Vec<T> {
        let now = self.clock.now();
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = pending;

        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.task).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> std::fmt::Debug for Scheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.pending.len())
            .finish()
    }
}
