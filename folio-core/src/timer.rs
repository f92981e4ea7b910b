//! Deadline-ordered queue of deferred messages.

use crate::clock::Millis;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct TimerId(u64);

/// Tasks keyed by `(deadline, id)`, so tasks sharing a deadline run in the
/// order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: BTreeMap<(Millis, TimerId), T>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to become due `after` the given `now`.
    pub fn schedule(&mut self, now: Millis, after: Millis, task: T) {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.insert((now + after, id), task);
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// earliest first.
    pub fn pop_due(&mut self, now: Millis) -> Vec<T> {
        let mut due = Vec::new();
        while let Some(entry) = self.entries.first_entry() {
            if entry.key().0 > now {
                break;
            }
            due.push(entry.remove());
        }
        due
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.keys().next().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_deadline_then_insertion_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(Millis(0), Millis(50), "late");
        queue.schedule(Millis(0), Millis(10), "first");
        queue.schedule(Millis(0), Millis(10), "second");

        assert_eq!(queue.next_deadline(), Some(Millis(10)));
        assert!(queue.pop_due(Millis(9)).is_empty());
        assert_eq!(queue.pop_due(Millis(10)), vec!["first", "second"]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_due(Millis(1_000)), vec!["late"]);
        assert!(queue.is_empty());
    }
}
