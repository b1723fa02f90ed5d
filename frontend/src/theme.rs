//! Display mode store.
//!
//! The `dark` class on `<html>` is the live flag every stylesheet keys off;
//! local storage only seeds it at startup and records each toggle. Consumers
//! never watch the DOM: they subscribe to the store and get called after both
//! the flag and the persisted value have been written.

use crate::config;
use crate::lifecycle::Registration;
use crate::storage::{MemoryStore, SharedStore};
use log::{debug, info, warn};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use web_sys::window;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// The element whose class list carries the mode.
pub trait PresentationRoot {
    fn is_dark(&self) -> bool;
    fn set_dark(&self, dark: bool);
}

/// `document.documentElement`.
pub struct DocumentRoot {
    element: web_sys::Element,
}

impl DocumentRoot {
    pub fn current() -> Option<Self> {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|element| Self { element })
    }
}

impl PresentationRoot for DocumentRoot {
    fn is_dark(&self) -> bool {
        self.element.class_list().contains("dark")
    }

    fn set_dark(&self, dark: bool) {
        let classes = self.element.class_list();
        let result = if dark {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(e) = result {
            warn!("failed to update root class: {:?}", e);
        }
    }
}

/// A root with no DOM behind it.
#[derive(Default)]
pub struct DetachedRoot {
    dark: Cell<bool>,
}

impl PresentationRoot for DetachedRoot {
    fn is_dark(&self) -> bool {
        self.dark.get()
    }

    fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
    }
}

type Listener = Rc<dyn Fn(Theme)>;

pub struct ThemeStore {
    root: Box<dyn PresentationRoot>,
    storage: SharedStore,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

impl ThemeStore {
    /// Resolves the initial mode (persisted value, else dark) and applies it
    /// to the root before anything renders.
    pub fn new(root: Box<dyn PresentationRoot>, storage: SharedStore) -> Rc<Self> {
        let initial = storage
            .get(config::THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or(Theme::Dark);
        root.set_dark(initial.is_dark());
        info!("theme resolved to {}", initial.as_str());

        Rc::new(Self {
            root,
            storage,
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    pub fn get(&self) -> Theme {
        if self.root.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.root.set_dark(next.is_dark());
        self.storage.set(config::THEME_KEY, next.as_str());
        debug!("theme toggled to {}", next.as_str());

        // Snapshot so listeners may subscribe or unsubscribe while notified
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(next);
        }
        next
    }

    pub fn subscribe(self: &Rc<Self>, listener: impl Fn(Theme) + 'static) -> Registration {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));

        let store: Weak<Self> = Rc::downgrade(self);
        Registration::new(move || {
            if let Some(store) = store.upgrade() {
                store.listeners.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Context handed to every component that needs the mode.
#[derive(Clone)]
pub struct ThemeContext(pub Rc<ThemeStore>);

impl PartialEq for ThemeContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ThemeContext {
    pub fn detached() -> Self {
        Self(ThemeStore::new(
            Box::new(DetachedRoot::default()),
            Rc::new(MemoryStore::default()),
        ))
    }
}

/// Store from `context`, or a detached one built on first need and kept in
/// `fallback` for later renders.
fn resolve_store(
    context: Option<ThemeContext>,
    fallback: &RefCell<Option<Rc<ThemeStore>>>,
) -> Rc<ThemeStore> {
    match context {
        Some(ctx) => ctx.0,
        None => fallback
            .borrow_mut()
            .get_or_insert_with(|| {
                warn!("no theme context; using a detached store");
                ThemeContext::detached().0
            })
            .clone(),
    }
}

#[hook]
pub fn use_theme_store() -> Rc<ThemeStore> {
    let context = use_context::<ThemeContext>();
    let fallback = use_mut_ref(|| None::<Rc<ThemeStore>>);
    resolve_store(context, &fallback)
}

/// Current mode, re-rendering the caller on every toggle.
#[hook]
pub fn use_theme() -> (Theme, Callback<()>) {
    let store = use_theme_store();
    let theme = use_state(|| store.get());

    {
        let theme = theme.clone();
        let store = store.clone();
        use_effect_with_deps(
            move |ctx: &ThemeContext| {
                theme.set(ctx.0.get());
                let subscription = ctx.0.subscribe(move |t| theme.set(t));
                move || drop(subscription)
            },
            ThemeContext(store),
        );
    }

    let toggle = Callback::from(move |_: ()| {
        store.toggle();
    });
    (*theme, toggle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KeyValueStore;

    fn store_with(persisted: Option<&str>) -> (Rc<ThemeStore>, Rc<MemoryStore>) {
        let storage = Rc::new(MemoryStore::default());
        if let Some(v) = persisted {
            storage.set(config::THEME_KEY, v);
        }
        let store = ThemeStore::new(Box::new(DetachedRoot::default()), storage.clone());
        (store, storage)
    }

    #[test]
    fn fresh_session_defaults_to_dark() {
        let (store, storage) = store_with(None);
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(storage.get(config::THEME_KEY), None);
    }

    #[test]
    fn persisted_light_seeds_the_root() {
        let (store, _) = store_with(Some("light"));
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn garbage_persisted_value_falls_back_to_dark() {
        let (store, _) = store_with(Some("sepia"));
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn double_toggle_round_trips() {
        for start in [None, Some("light")] {
            let (store, _) = store_with(start);
            let before = store.get();
            store.toggle();
            store.toggle();
            assert_eq!(store.get(), before);
        }
    }

    #[test]
    fn live_and_persisted_agree_after_toggle() {
        let (store, storage) = store_with(None);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(storage.get(config::THEME_KEY).as_deref(), Some("light"));
        assert_eq!(store.get(), Theme::Light);

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.get(config::THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn listeners_see_the_committed_state() {
        let (store, storage) = store_with(None);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let inner_store = store.clone();
        let inner_storage = storage.clone();
        let _sub = store.subscribe(move |t| {
            s.borrow_mut().push((
                t,
                inner_store.get(),
                inner_storage.get(config::THEME_KEY),
            ));
        });
        store.toggle();
        assert_eq!(
            *seen.borrow(),
            vec![(Theme::Light, Theme::Light, Some("light".to_string()))]
        );
    }

    #[test]
    fn dropped_subscription_is_not_notified() {
        let (store, _) = store_with(None);
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let sub = store.subscribe(move |_| h.set(h.get() + 1));
        store.toggle();
        drop(sub);
        store.toggle();
        assert_eq!(hits.get(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn provided_context_skips_the_fallback() {
        let (store, _) = store_with(None);
        let fallback = RefCell::new(None);
        let resolved = resolve_store(Some(ThemeContext(store.clone())), &fallback);
        assert!(Rc::ptr_eq(&resolved, &store));
        assert!(fallback.borrow().is_none());
    }

    #[test]
    fn missing_context_builds_one_fallback() {
        let fallback = RefCell::new(None);
        let first = resolve_store(None, &fallback);
        let second = resolve_store(None, &fallback);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.get(), Theme::Dark);
    }
}
