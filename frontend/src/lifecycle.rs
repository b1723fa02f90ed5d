//! Cancellation plumbing shared by every timer, listener and frame loop.
//!
//! Anything that keeps a callback alive in the browser hands back a
//! [`Registration`]. Dropping it runs the teardown exactly once, so a
//! component that stores its registrations cannot leak them on any exit path.

use gloo_timers::callback::{Interval, Timeout};
use std::rc::Rc;

#[must_use = "dropping a Registration cancels it immediately"]
pub struct Registration {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Registration {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Keeps a value alive until the registration is dropped.
    pub fn holding<T: 'static>(value: T) -> Self {
        Self::new(move || drop(value))
    }

}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

/// Fixed-interval and one-shot timers.
pub trait Scheduler {
    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Registration;
    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Registration;
}

pub type SharedScheduler = Rc<dyn Scheduler>;

/// `setInterval`/`setTimeout` through gloo. Dropping a gloo timer clears it.
#[derive(Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn interval(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> Registration {
        Registration::holding(Interval::new(period_ms, move || callback()))
    }

    fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Registration {
        Registration::holding(Timeout::new(delay_ms, callback))
    }
}

#[cfg(test)]
pub mod testing {
    //! Virtual clock used by the unit tests in place of the browser timers.

    use super::{Registration, Scheduler};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    enum Task {
        Repeating(Box<dyn FnMut()>),
        Once(Box<dyn FnOnce()>),
    }

    struct Entry {
        seq: u64,
        due: u64,
        period: Option<u64>,
        task: Option<Task>,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct State {
        now: u64,
        next_seq: u64,
        entries: Vec<Entry>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        state: Rc<RefCell<State>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.state.borrow().now
        }

        /// Timers that are scheduled and not cancelled.
        pub fn pending(&self) -> usize {
            self.state
                .borrow()
                .entries
                .iter()
                .filter(|e| !e.cancelled.get())
                .count()
        }

        /// Moves the clock forward, firing due timers in order.
        pub fn advance(&self, ms: u64) {
            let target = self.state.borrow().now + ms;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    state.entries.retain(|e| !e.cancelled.get());
                    let pick = state
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= target)
                        .min_by_key(|(_, e)| (e.due, e.seq))
                        .map(|(i, _)| i);
                    match pick {
                        Some(i) => {
                            let mut entry = state.entries.remove(i);
                            state.now = entry.due;
                            let task = entry.task.take();
                            Some((entry, task))
                        }
                        None => {
                            state.now = target;
                            None
                        }
                    }
                };

                let Some((mut entry, task)) = next else { break };
                match task {
                    Some(Task::Repeating(mut f)) => {
                        f();
                        if !entry.cancelled.get() {
                            let mut state = self.state.borrow_mut();
                            entry.due += entry.period.unwrap_or(1).max(1);
                            entry.task = Some(Task::Repeating(f));
                            state.entries.push(entry);
                        }
                    }
                    Some(Task::Once(f)) => {
                        entry.cancelled.set(true);
                        f();
                    }
                    None => {}
                }
            }
        }

        fn push(&self, delay: u64, period: Option<u64>, task: Task) -> Registration {
            let cancelled = Rc::new(Cell::new(false));
            let mut state = self.state.borrow_mut();
            let seq = state.next_seq;
            state.next_seq += 1;
            let due = state.now + delay;
            state.entries.push(Entry {
                seq,
                due,
                period,
                task: Some(task),
                cancelled: cancelled.clone(),
            });
            Registration::new(move || cancelled.set(true))
        }
    }

    impl Scheduler for ManualScheduler {
        fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Registration {
            let period = u64::from(period_ms);
            self.push(period, Some(period), Task::Repeating(callback))
        }

        fn timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Registration {
            self.push(u64::from(delay_ms), None, Task::Once(callback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;
    use std::cell::Cell;

    #[test]
    fn registration_runs_teardown_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let registration = Registration::new(move || c.set(c.get() + 1));
        assert_eq!(count.get(), 0);
        drop(registration);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dropping_interval_guard_stops_it() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let guard = scheduler.interval(10, Box::new(move || h.set(h.get() + 1)));
        scheduler.advance(35);
        assert_eq!(hits.get(), 3);
        drop(guard);
        scheduler.advance(100);
        assert_eq!(hits.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn timeout_fires_at_its_deadline() {
        let scheduler = ManualScheduler::new();
        let fired_at = Rc::new(Cell::new(None));
        let f = fired_at.clone();
        let s = scheduler.clone();
        let _guard = scheduler.timeout(50, Box::new(move || f.set(Some(s.now()))));
        scheduler.advance(49);
        assert_eq!(fired_at.get(), None);
        scheduler.advance(1);
        assert_eq!(fired_at.get(), Some(50));
        assert_eq!(scheduler.pending(), 0);
    }
}
