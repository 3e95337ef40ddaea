use std::time::{Duration, Instant};

/// Opaque handle to a scheduled repeating task. Cancelling an already
/// cancelled handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(u64);

struct Entry<T> {
    id: u64,
    period: Duration,
    next_due: Instant,
    task: T,
}

/// Single-threaded repeating-timer set. Nothing fires on its own: the
/// owner polls it from the event loop and runs whatever came due.
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T: Copy> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a task firing every `period`, first due one full period
    /// after `now`.
    pub fn schedule_repeating(&mut self, period: Duration, now: Instant, task: T) -> Handle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            period,
            next_due: now + period,
            task,
        });
        Handle(id)
    }

    /// Deregister a task. In-flight work is unaffected; the task simply
    /// never fires again.
    pub fn cancel(&mut self, handle: Handle) {
        self.entries.retain(|e| e.id != handle.0);
    }

    /// Collect every task due at `now`, re-arming each relative to `now`
    /// rather than its missed deadline, so a stalled loop produces one
    /// late tick instead of a burst.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let mut fired = Vec::new();
        for entry in &mut self.entries {
            if entry.next_due <= now {
                fired.push(entry.task);
                entry.next_due = now + entry.period;
            }
        }
        fired
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
