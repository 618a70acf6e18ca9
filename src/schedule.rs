//! Deferred task scheduling
//!
//! The chrome owns two kinds of timers: the hover-collapse grace period on
//! the sidebar and the alert fade/removal pair. Both must be cancelable
//! (a re-entering pointer supersedes a pending collapse), so tasks are
//! scheduled against explicit handles rather than fire-and-forget. The
//! current time is always passed in by the caller, which lets tests drive
//! the clock deterministically.

use std::time::{Duration, Instant};

/// Work items that can be deferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Remove the sidebar "expanded" marker after the hover grace period.
    CollapseSidebar,
    /// Start fading out the success alert with this id.
    FadeAlert(u64),
    /// Remove the alert with this id from the page.
    RemoveAlert(u64),
}

/// Handle for a scheduled task, used to cancel it before it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskHandle(u64);

struct Entry {
    handle: TaskHandle,
    due: Instant,
    task: Task,
}

/// Deferred task queue.
#[derive(Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: Task) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            due: now + delay,
            task,
        });
        handle
    }

    /// Cancel a pending task. Canceling an already-fired handle is a no-op.
    pub fn cancel(&mut self, handle: TaskHandle) {
        self.entries.retain(|e| e.handle != handle);
    }

    /// Remove and return every task due at `now`, ordered by due time.
    pub fn fire_due(&mut self, now: Instant) -> Vec<Task> {
        let mut due: Vec<(Instant, Task)> = Vec::new();
        self.entries.retain(|e| {
            if e.due <= now {
                due.push((e.due, e.task));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, task)| task).collect()
    }

    /// Whether any task is still pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_when_due() {
        let base = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(base, Duration::from_millis(300), Task::CollapseSidebar);

        assert!(sched.fire_due(base + Duration::from_millis(299)).is_empty());
        assert_eq!(
            sched.fire_due(base + Duration::from_millis(300)),
            vec![Task::CollapseSidebar]
        );
        assert!(sched.is_empty());
    }

    #[test]
    fn canceled_task_never_fires() {
        let base = Instant::now();
        let mut sched = Scheduler::new();
        let handle = sched.schedule(base, Duration::from_millis(300), Task::CollapseSidebar);
        sched.cancel(handle);

        assert!(sched.fire_due(base + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn fires_in_due_order() {
        let base = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(base, Duration::from_millis(3300), Task::RemoveAlert(1));
        sched.schedule(base, Duration::from_millis(3000), Task::FadeAlert(1));

        let fired = sched.fire_due(base + Duration::from_secs(4));
        assert_eq!(fired, vec![Task::FadeAlert(1), Task::RemoveAlert(1)]);
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let base = Instant::now();
        let mut sched = Scheduler::new();
        let handle = sched.schedule(base, Duration::from_millis(10), Task::FadeAlert(7));
        sched.schedule(base, Duration::from_millis(20), Task::RemoveAlert(7));

        assert_eq!(
            sched.fire_due(base + Duration::from_millis(10)),
            vec![Task::FadeAlert(7)]
        );
        sched.cancel(handle);
        assert_eq!(
            sched.fire_due(base + Duration::from_millis(20)),
            vec![Task::RemoveAlert(7)]
        );
        assert!(sched.fire_due(base + Duration::from_millis(20)).is_empty());
    }
}
