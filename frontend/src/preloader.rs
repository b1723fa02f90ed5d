//! Load counter that gates the main content.
//!
//! A fixed interval advances the counter from 0 to 100. The tick that reaches
//! 100 cancels the interval and raises the complete flag, which starts the
//! curtain exit. The completion callback runs once, after the exit delay.

use crate::config;
use crate::lifecycle::{Registration, SharedScheduler};
use log::{debug, info};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub const LOAD_COMPLETE: u8 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadProgress(u8);

impl LoadProgress {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= LOAD_COMPLETE
    }

    pub fn advanced(self) -> Self {
        Self(self.0.saturating_add(1).min(LOAD_COMPLETE))
    }
}

/// Root phase of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppPhase {
    Loading,
    Revealing,
    Ready,
}

impl AppPhase {
    pub fn on_progress_complete(self) -> Self {
        match self {
            AppPhase::Loading => AppPhase::Revealing,
            other => other,
        }
    }

    pub fn on_exit_finished(self) -> Self {
        match self {
            AppPhase::Revealing => AppPhase::Ready,
            other => other,
        }
    }

    pub fn content_mounted(self) -> bool {
        self == AppPhase::Ready
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderEvent {
    Progress(LoadProgress),
    /// Counter hit 100; the exit animation starts now.
    Revealing,
}

struct Inner {
    progress: LoadProgress,
    complete: bool,
    ticker: Option<Registration>,
    exit: Option<Registration>,
    observer: Rc<dyn Fn(PreloaderEvent)>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

/// One preloader lifetime. Dropping it cancels both timers and the pending
/// completion callback.
pub struct PreloaderRun {
    inner: Rc<RefCell<Inner>>,
}

impl PreloaderRun {
    pub fn start(
        scheduler: SharedScheduler,
        observer: impl Fn(PreloaderEvent) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            progress: LoadProgress::default(),
            complete: false,
            ticker: None,
            exit: None,
            observer: Rc::new(observer),
            on_complete: Some(Box::new(on_complete)),
        }));

        let weak = Rc::downgrade(&inner);
        let tick_scheduler = scheduler.clone();
        let ticker = scheduler.interval(
            config::PRELOADER_TICK_MS,
            Box::new(move || tick(&weak, &tick_scheduler)),
        );
        inner.borrow_mut().ticker = Some(ticker);
        debug!("preloader started");

        Self { inner }
    }

    #[cfg(test)]
    pub fn progress(&self) -> LoadProgress {
        self.inner.borrow().progress
    }

    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        self.inner.borrow().complete
    }
}

impl Drop for PreloaderRun {
    fn drop(&mut self) {
        let (ticker, exit, on_complete) = {
            let mut inner = self.inner.borrow_mut();
            (
                inner.ticker.take(),
                inner.exit.take(),
                inner.on_complete.take(),
            )
        };
        drop(ticker);
        drop(exit);
        if on_complete.is_some() {
            debug!("preloader torn down before completion");
        }
    }
}

fn tick(weak: &Weak<RefCell<Inner>>, scheduler: &SharedScheduler) {
    let Some(inner) = weak.upgrade() else { return };

    let (observer, progress, finished_ticker) = {
        let mut state = inner.borrow_mut();
        if state.complete {
            return;
        }
        state.progress = state.progress.advanced();
        let finished = if state.progress.is_complete() {
            state.complete = true;
            state.ticker.take()
        } else {
            None
        };
        (state.observer.clone(), state.progress, finished)
    };

    observer(PreloaderEvent::Progress(progress));

    if let Some(ticker) = finished_ticker {
        drop(ticker);
        info!("load progress complete, starting exit transition");
        observer(PreloaderEvent::Revealing);

        let weak = weak.clone();
        let exit = scheduler.timeout(
            config::PRELOADER_EXIT_DELAY_MS,
            Box::new(move || finish(&weak)),
        );
        inner.borrow_mut().exit = Some(exit);
    }
}

fn finish(weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else { return };
    let on_complete = inner.borrow_mut().on_complete.take();
    if let Some(on_complete) = on_complete {
        on_complete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::testing::ManualScheduler;
    use std::cell::Cell;

    const TICK: u64 = config::PRELOADER_TICK_MS as u64;
    const EXIT: u64 = config::PRELOADER_EXIT_DELAY_MS as u64;

    struct Harness {
        scheduler: ManualScheduler,
        run: PreloaderRun,
        progress_log: Rc<RefCell<Vec<u8>>>,
        reached_full_at: Rc<Cell<Option<u64>>>,
        completions: Rc<RefCell<Vec<u64>>>,
    }

    fn harness() -> Harness {
        let scheduler = ManualScheduler::new();
        let progress_log = Rc::new(RefCell::new(Vec::new()));
        let reached_full_at = Rc::new(Cell::new(None));
        let completions = Rc::new(RefCell::new(Vec::new()));

        let log = progress_log.clone();
        let reached = reached_full_at.clone();
        let clock = scheduler.clone();
        let done = completions.clone();
        let done_clock = scheduler.clone();
        let run = PreloaderRun::start(
            Rc::new(scheduler.clone()),
            move |event| match event {
                PreloaderEvent::Progress(p) => log.borrow_mut().push(p.value()),
                PreloaderEvent::Revealing => reached.set(Some(clock.now())),
            },
            move || done.borrow_mut().push(done_clock.now()),
        );
        Harness {
            scheduler,
            run,
            progress_log,
            reached_full_at,
            completions,
        }
    }

    #[test]
    fn progress_after_n_ticks_is_capped_at_100() {
        let p = harness();
        for n in 1..=130u64 {
            p.scheduler.advance(TICK);
            assert_eq!(u64::from(p.run.progress().value()), n.min(100));
        }
        let log = p.progress_log.borrow();
        assert_eq!(log.len(), 100);
        assert!(log.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn interval_is_cancelled_at_100() {
        let p = harness();
        p.scheduler.advance(TICK * 100);
        assert!(p.run.is_complete());
        // only the exit delay remains
        assert_eq!(p.scheduler.pending(), 1);
    }

    #[test]
    fn completion_fires_once_after_the_exit_delay() {
        let p = harness();
        p.scheduler.advance(TICK * 100 + EXIT + 10_000);

        let reached = p.reached_full_at.get().expect("counter reached 100");
        let completions = p.completions.borrow();
        assert_eq!(completions.len(), 1);
        let elapsed = completions[0] - reached;
        assert!(elapsed >= EXIT);
        assert!(elapsed < EXIT + TICK);
        assert_eq!(p.scheduler.pending(), 0);
    }

    #[test]
    fn completion_never_fires_early() {
        let p = harness();
        p.scheduler.advance(TICK * 100 + EXIT - 1);
        assert!(p.completions.borrow().is_empty());
        p.scheduler.advance(1);
        assert_eq!(p.completions.borrow().len(), 1);
    }

    #[test]
    fn early_teardown_cancels_everything() {
        let p = harness();
        p.scheduler.advance(TICK * 40);
        let completions = p.completions.clone();
        drop(p.run);
        assert_eq!(p.scheduler.pending(), 0);
        p.scheduler.advance(TICK * 200 + EXIT);
        assert!(completions.borrow().is_empty());
    }

    #[test]
    fn teardown_during_exit_delay_drops_the_callback() {
        let p = harness();
        p.scheduler.advance(TICK * 100 + 100);
        let completions = p.completions.clone();
        drop(p.run);
        p.scheduler.advance(EXIT);
        assert!(completions.borrow().is_empty());
        assert_eq!(p.scheduler.pending(), 0);
    }

    #[test]
    fn app_phase_only_moves_forward() {
        let phase = AppPhase::Loading;
        assert_eq!(phase.on_exit_finished(), AppPhase::Loading);
        let phase = phase.on_progress_complete();
        assert_eq!(phase, AppPhase::Revealing);
        assert_eq!(phase.on_progress_complete(), AppPhase::Revealing);
        assert!(!phase.content_mounted());
        let phase = phase.on_exit_finished();
        assert_eq!(phase, AppPhase::Ready);
        assert!(phase.content_mounted());
        assert_eq!(phase.on_progress_complete(), AppPhase::Ready);
    }
}
