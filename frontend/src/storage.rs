use log::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::window;

/// Client-local persistent key/value entries.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub type SharedStore = Rc<dyn KeyValueStore>;

/// `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Option<Self> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|storage| Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!("failed to persist {}: {:?}", key, e);
        }
    }
}

/// Session-only fallback when local storage is disabled.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

pub fn browser_store() -> SharedStore {
    match LocalStorage::open() {
        Some(storage) => Rc::new(storage),
        None => {
            warn!("local storage unavailable, preferences will not survive a reload");
            Rc::new(MemoryStore::default())
        }
    }
}
