use crate::config;
use crate::lifecycle::{Registration, SharedScheduler};
use crate::storage::SharedStore;
use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentDecision {
    Accepted,
    Declined,
}

impl ConsentDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentDecision::Accepted => "accepted",
            ConsentDecision::Declined => "declined",
        }
    }
}

pub fn stored_decision(storage: &SharedStore) -> Option<ConsentDecision> {
    match storage.get(config::CONSENT_KEY)?.as_str() {
        "accepted" => Some(ConsentDecision::Accepted),
        "declined" => Some(ConsentDecision::Declined),
        _ => None,
    }
}

/// Shows the banner after a delay when no decision is stored. Returns the
/// pending timer, or `None` when the banner should stay hidden.
pub fn schedule_banner(
    storage: &SharedStore,
    scheduler: &SharedScheduler,
    show: impl FnOnce() + 'static,
) -> Option<Registration> {
    if let Some(decision) = stored_decision(storage) {
        info!("cookie consent already {}", decision.as_str());
        return None;
    }
    Some(scheduler.timeout(config::CONSENT_BANNER_DELAY_MS, Box::new(show)))
}

pub fn record_decision(storage: &SharedStore, decision: ConsentDecision) {
    storage.set(config::CONSENT_KEY, decision.as_str());
    info!("cookie consent {}", decision.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::testing::ManualScheduler;
    use crate::storage::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() -> (SharedStore, ManualScheduler, SharedScheduler) {
        let scheduler = ManualScheduler::new();
        let shared: SharedScheduler = Rc::new(scheduler.clone());
        (Rc::new(MemoryStore::default()), scheduler, shared)
    }

    #[test]
    fn banner_appears_after_delay_and_not_before() {
        let (storage, clock, scheduler) = setup();
        let visible = Rc::new(Cell::new(false));
        let v = visible.clone();
        let _timer = schedule_banner(&storage, &scheduler, move || v.set(true));

        clock.advance(u64::from(config::CONSENT_BANNER_DELAY_MS) - 1);
        assert!(!visible.get());
        clock.advance(1);
        assert!(visible.get());
    }

    #[test]
    fn accepted_decision_persists_and_suppresses_next_session() {
        let (storage, clock, scheduler) = setup();
        record_decision(&storage, ConsentDecision::Accepted);
        assert_eq!(
            storage.get(config::CONSENT_KEY).as_deref(),
            Some("accepted")
        );
        assert_eq!(stored_decision(&storage), Some(ConsentDecision::Accepted));

        let shown = Rc::new(Cell::new(false));
        let s = shown.clone();
        assert!(schedule_banner(&storage, &scheduler, move || s.set(true)).is_none());
        clock.advance(10_000);
        assert!(!shown.get());
    }

    #[test]
    fn declined_is_remembered_too() {
        let (storage, _, scheduler) = setup();
        record_decision(&storage, ConsentDecision::Declined);
        assert!(schedule_banner(&storage, &scheduler, || {}).is_none());
        assert_eq!(stored_decision(&storage), Some(ConsentDecision::Declined));
    }

    #[test]
    fn unrecognised_stored_value_still_asks() {
        let (storage, clock, scheduler) = setup();
        storage.set(config::CONSENT_KEY, "maybe");
        assert_eq!(stored_decision(&storage), None);

        let shown = Rc::new(Cell::new(false));
        let s = shown.clone();
        let _timer = schedule_banner(&storage, &scheduler, move || s.set(true));
        clock.advance(u64::from(config::CONSENT_BANNER_DELAY_MS));
        assert!(shown.get());
    }

    #[test]
    fn unmount_before_delay_cancels_timer() {
        let (storage, clock, scheduler) = setup();
        let shown = Rc::new(Cell::new(false));
        let s = shown.clone();
        let timer = schedule_banner(&storage, &scheduler, move || s.set(true));
        drop(timer);
        clock.advance(5_000);
        assert!(!shown.get());
        assert_eq!(clock.pending(), 0);
    }
}
