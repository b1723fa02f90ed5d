//! Reveal-on-visible animations.
//!
//! Each animated block owns a tiny state machine fed by an
//! IntersectionObserver. The CSS does the tweening; the controller only
//! decides whether the `revealed` class is present.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Stay revealed once seen.
    Once,
    /// Hide again when leaving the viewport so the animation replays.
    Replay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealController {
    policy: RevealPolicy,
    state: RevealState,
}

impl RevealController {
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            state: RevealState::Hidden,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds one intersection signal. Returns true when the state changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let next = match (self.state, intersecting, self.policy) {
            (RevealState::Hidden, true, _) => RevealState::Revealed,
            (RevealState::Revealed, false, RevealPolicy::Replay) => RevealState::Hidden,
            (state, _, _) => state,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

/// Visibility of `node`, driven by an IntersectionObserver that is
/// disconnected when the caller unmounts.
#[hook]
pub fn use_reveal(node: NodeRef, policy: RevealPolicy, threshold: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut controller = RevealController::new(policy);
                let callback =
                    Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if controller.observe(entry.is_intersecting()) {
                                revealed.set(controller.is_revealed());
                            }
                        }
                    });

                let options = IntersectionObserverInit::new();
                options.set_threshold(&threshold.into());
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                );

                let observer = match (observer, node.cast::<web_sys::Element>()) {
                    (Ok(observer), Some(element)) => {
                        observer.observe(&element);
                        Some(observer)
                    }
                    (Err(e), _) => {
                        warn!("IntersectionObserver unavailable: {:?}", e);
                        None
                    }
                    (Ok(_), None) => None,
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_policy_never_hides_again() {
        let mut c = RevealController::new(RevealPolicy::Once);
        assert!(c.observe(true));
        assert!(!c.observe(false));
        assert!(!c.observe(true));
        assert!(c.is_revealed());
    }

    #[test]
    fn repeated_enter_is_a_no_op() {
        let mut c = RevealController::new(RevealPolicy::Replay);
        assert!(c.observe(true));
        for _ in 0..5 {
            assert!(!c.observe(true));
        }
        assert_eq!(c.state(), RevealState::Revealed);
    }

    #[test]
    fn replay_policy_cycles_with_the_viewport() {
        let mut c = RevealController::new(RevealPolicy::Replay);
        assert!(!c.observe(false));
        assert!(c.observe(true));
        assert!(c.observe(false));
        assert_eq!(c.state(), RevealState::Hidden);
        assert!(c.observe(true));
        assert!(c.is_revealed());
    }
}
