//! `PendingEvents` — per-scenario queue of demand events yet to arrive.
//!
//! A scenario starts with at most one event per customer.  Each step fires
//! every event whose arrival time has passed; the waiting policy may also
//! pull the soonest one forward.  A min-heap keyed on
//! `(arrival_time, node)` serves both in O(log E) without rescanning all
//! nodes, and breaks arrival-time ties towards the lower node index.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use dvrp_core::NodeId;

/// A demand event waiting to arrive at `node`.
#[derive(Copy, Clone, Debug)]
pub struct PendingEvent {
    pub arrival_time: f64,
    pub node:         NodeId,
    pub demand:       u32,
}

impl PartialEq for PendingEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PendingEvent {}

impl PartialOrd for PendingEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.arrival_time
            .total_cmp(&other.arrival_time)
            .then(self.node.cmp(&other.node))
    }
}

/// Min-heap of a scenario's pending events.
#[derive(Clone, Debug, Default)]
pub struct PendingEvents {
    heap: BinaryHeap<Reverse<PendingEvent>>,
}

impl PendingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PendingEvent) {
        self.heap.push(Reverse(event));
    }

    /// The soonest event, if any.
    pub fn peek(&self) -> Option<&PendingEvent> {
        self.heap.peek().map(|Reverse(e)| e)
    }

    /// Remove and return the soonest event if it has arrived by `now`.
    pub fn pop_due(&mut self, now: f64) -> Option<PendingEvent> {
        if self.peek()?.arrival_time <= now {
            self.pop_next()
        } else {
            None
        }
    }

    /// Remove and return the soonest event regardless of time.
    pub fn pop_next(&mut self) -> Option<PendingEvent> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl FromIterator<PendingEvent> for PendingEvents {
    fn from_iter<I: IntoIterator<Item = PendingEvent>>(iter: I) -> Self {
        Self { heap: iter.into_iter().map(Reverse).collect() }
    }
}
