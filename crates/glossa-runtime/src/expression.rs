#![forbid(unsafe_code)]

//! Live translation bindings.
//!
//! A [`TranslationBinding`] is a derived string value: it reads the store's
//! current table every time it is evaluated and is re-evaluated after every
//! locale switch.
//!
//! Evaluation follows three rules, in order:
//!
//! | Store state | Key in table | Value |
//! |-------------|--------------|-------|
//! | No table (not even lazily) | - | the key itself |
//! | Table present | no | the fallback |
//! | Table present | yes | the table's value |
//!
//! A raw key on screen means "nothing loaded yet"; a fallback means "this
//! entry is missing from the catalog".

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::reactive::{Subscription, ValueSource};
use crate::store::TranslationStore;

/// A string that follows one catalog key through locale switches.
#[derive(Clone)]
pub struct TranslationBinding {
    store: TranslationStore,
    key: Rc<str>,
    fallback: Rc<str>,
}

impl TranslationBinding {
    /// Bind `key` on `store`, showing `fallback` when the key is missing.
    #[must_use]
    pub fn new(store: TranslationStore, key: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            store,
            key: Rc::from(key.into()),
            fallback: Rc::from(fallback.into()),
        }
    }

    /// Evaluate against the store's current table.
    #[must_use]
    pub fn get(&self) -> String {
        let Some(table) = self.store.current_table() else {
            return self.key.to_string();
        };
        match table.get(&self.key) {
            Some(value) => value.to_string(),
            None => {
                debug!(key = %self.key, locale = table.locale(), "missing translation, using fallback");
                self.fallback.to_string()
            }
        }
    }

    /// The catalog key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Text shown when the key is missing from a loaded table.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// The store this binding reads from.
    #[must_use]
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Call `callback` with the re-evaluated text after every switch.
    pub fn subscribe(&self, callback: impl Fn(String) + 'static) -> Subscription {
        let this = self.clone();
        self.store.subscribe(move |_| callback(this.get()))
    }
}

impl ValueSource<String> for TranslationBinding {
    fn current(&self) -> String {
        self.get()
    }

    fn watch(&self, callback: Box<dyn Fn(String)>) -> Subscription {
        self.subscribe(callback)
    }
}

impl fmt::Debug for TranslationBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationBinding")
            .field("key", &self.key)
            .field("fallback", &self.fallback)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::StringProperty;
    use glossa_catalog::{MemoryCatalogSource, TranslationTable};

    fn store() -> TranslationStore {
        let source = MemoryCatalogSource::new()
            .with_table(
                "language",
                TranslationTable::builder("en")
                    .entry("title", "Settings")
                    .entry("save", "Save")
                    .build(),
            )
            .with_table(
                "language",
                TranslationTable::builder("fr").entry("title", "Paramètres").build(),
            );
        TranslationStore::builder(source).default_locale("zz").build()
    }

    #[test]
    fn no_table_yields_key() {
        let store = store();
        let binding = store.bind("title", "Fallback");
        assert_eq!(binding.get(), "title");
    }

    #[test]
    fn present_key_yields_value() {
        let store = store();
        store.switch_locale("en").unwrap();
        assert_eq!(store.bind("title", "Fallback").get(), "Settings");
    }

    #[test]
    fn missing_key_yields_fallback() {
        let store = store();
        store.switch_locale("fr").unwrap();
        assert_eq!(store.bind("save", "Save?").get(), "Save?");
    }

    #[test]
    fn empty_fallback_is_allowed() {
        let store = store();
        store.switch_locale("fr").unwrap();
        assert_eq!(store.bind("save", "").get(), "");
    }

    #[test]
    fn property_follows_switches() {
        let store = store();
        let text = StringProperty::default();
        text.bind(&store.bind("title", "?"));
        assert_eq!(text.get(), "title");

        store.switch_locale("en").unwrap();
        assert_eq!(text.get(), "Settings");
        store.switch_locale("fr").unwrap();
        assert_eq!(text.get(), "Paramètres");
    }

    #[test]
    fn set_base_name_shows_keys_until_next_switch() {
        let store = store();
        store.switch_locale("en").unwrap();
        let binding = store.bind("title", "?");
        assert_eq!(binding.get(), "Settings");

        store.set_base_name("language");
        assert_eq!(binding.get(), "title");
        store.switch_locale("en").unwrap();
        assert_eq!(binding.get(), "Settings");
    }

    #[test]
    fn subscription_drop_stops_updates() {
        let store = store();
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let sub = store.bind("title", "?").subscribe(move |v| s.borrow_mut().push(v));

        store.switch_locale("en").unwrap();
        drop(sub);
        store.switch_locale("fr").unwrap();
        assert_eq!(*seen.borrow(), vec!["Settings".to_string()]);
    }

    #[test]
    fn accessors() {
        let store = store();
        let binding = store.bind("k", "f");
        assert_eq!(binding.key(), "k");
        assert_eq!(binding.fallback(), "f");
        assert!(binding.store().ptr_eq(&store));
    }
}
