use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::rc::{Rc, Weak};
use std::time::Duration;

use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};

use super::animator::{Scheduler, TimerHandle};

/// Schedules ticks with the browser's `setTimeout`.
///
/// Only usable on the client, i.e. from an effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Option<TimeoutHandle>;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle {
        set_timeout_with_handle(callback, delay)
            .map_err(|error| log::error!("Could not schedule typewriter tick: {error:?}"))
            .ok()
    }
}

impl TimerHandle for Option<TimeoutHandle> {
    fn cancel(self) {
        if let Some(handle) = self {
            handle.clear();
        }
    }
}

/// A scheduler running on a virtual clock that only moves when told to.
///
/// Timers fire in due-time order, ties broken by scheduling order, so runs
/// are reproducible. Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    sequence: u64,
    order: BinaryHeap<Reverse<(Duration, u64)>>,
    // Live timers by sequence number. Cancelled timers are removed from here
    // and skipped when they reach the top of `order`.
    callbacks: HashMap<u64, Box<dyn FnOnce()>>,
}

pub struct ManualHandle {
    sequence: u64,
    queue: Weak<RefCell<Queue>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().callbacks.remove(&self.sequence);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut queue = self.queue.borrow_mut();
        let sequence = queue.sequence;
        queue.sequence += 1;
        let due = queue.now + delay;
        queue.order.push(Reverse((due, sequence)));
        queue.callbacks.insert(sequence, callback);
        ManualHandle {
            sequence,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.queue.borrow().callbacks.len()
    }

    /// Move the clock forward by `by`, firing every timer that falls due,
    /// including the ones scheduled by callbacks along the way. Returns how
    /// many callbacks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let deadline = self.now() + by;
        let mut fired = 0;
        while let Some(callback) = self.pop_due(deadline) {
            // The queue must not be borrowed here: callbacks schedule and
            // cancel timers.
            callback();
            fired += 1;
        }
        self.queue.borrow_mut().now = deadline;
        fired
    }

    fn pop_due(&self, deadline: Duration) -> Option<Box<dyn FnOnce()>> {
        let mut queue = self.queue.borrow_mut();
        while let Some(&Reverse((due, sequence))) = queue.order.peek() {
            if due > deadline {
                return None;
            }
            queue.order.pop();
            if let Some(callback) = queue.callbacks.remove(&sequence) {
                queue.now = due;
                return Some(callback);
            }
        }
        None
    }
}
