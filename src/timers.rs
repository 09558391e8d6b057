//! Deferred callbacks driven by the UI tick.
//!
//! Nothing here sleeps: the event loop passes the current instant and the
//! queue hands back whatever became due.

use std::time::{Duration, Instant};

/// One-shot tasks scheduled for a future instant.
#[derive(Debug)]
pub struct TimerQueue<T> {
    pending: Vec<(Instant, T)>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T: PartialEq> TimerQueue<T> {
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) {
        self.pending.push((now + delay, task));
    }

    /// Schedules `task`, dropping any pending copy of it first.
    pub fn debounce(&mut self, now: Instant, delay: Duration, task: T) {
        self.pending.retain(|(_, pending)| *pending != task);
        self.schedule(now, delay, task);
    }

    /// Removes and returns every task due at `now`, in deadline order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());
        for (deadline, task) in self.pending.drain(..) {
            if deadline <= now {
                due.push((deadline, task));
            } else {
                remaining.push((deadline, task));
            }
        }
        self.pending = remaining;
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, task)| task).collect()
    }

    pub fn is_pending(&self, task: &T) -> bool {
        self.pending.iter().any(|(_, pending)| pending == task)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Repeating interval that can be cleared and restarted.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn clear(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true once per elapsed period; missed periods collapse into one firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                let mut upcoming = next + self.period;
                while upcoming <= now {
                    upcoming += self.period;
                }
                self.next = Some(upcoming);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_only_due_tasks_in_order() {
        let start = Instant::now();
        let mut queue = TimerQueue::default();
        queue.schedule(start, Duration::from_millis(150), "b");
        queue.schedule(start, Duration::from_millis(100), "a");
        queue.schedule(start, Duration::from_millis(500), "c");

        assert!(queue.drain_due(start + Duration::from_millis(50)).is_empty());
        assert_eq!(
            queue.drain_due(start + Duration::from_millis(200)),
            vec!["a", "b"]
        );
        assert_eq!(queue.len(), 1);
        assert!(queue.is_pending(&"c"));
    }

    #[test]
    fn debounce_replaces_pending_task() {
        let start = Instant::now();
        let mut queue = TimerQueue::default();
        queue.debounce(start, Duration::from_millis(100), 1);
        queue.debounce(start + Duration::from_millis(80), Duration::from_millis(100), 1);

        assert!(queue.drain_due(start + Duration::from_millis(120)).is_empty());
        assert_eq!(queue.drain_due(start + Duration::from_millis(180)), vec![1]);
    }

    #[test]
    fn interval_fires_once_per_period_until_cleared() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_secs(30));
        assert!(!interval.poll(start + Duration::from_secs(60)));

        interval.start(start);
        assert!(!interval.poll(start + Duration::from_secs(29)));
        assert!(interval.poll(start + Duration::from_secs(30)));
        assert!(!interval.poll(start + Duration::from_secs(31)));
        assert!(interval.poll(start + Duration::from_secs(95)));
        assert!(!interval.poll(start + Duration::from_secs(96)));

        interval.clear();
        assert!(!interval.is_running());
        assert!(!interval.poll(start + Duration::from_secs(200)));
    }
}
