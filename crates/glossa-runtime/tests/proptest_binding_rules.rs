//! Property-based tests for the store and translation bindings.
//!
//! 1. Three-way evaluation: no table → key, missing → fallback, present → value
//! 2. Every successful switch notifies exactly once, repeats included
//! 3. A failed switch changes nothing observable

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use glossa_catalog::MemoryCatalogSource;
use glossa_runtime::{StringProperty, TranslationStore, TranslationTable};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.]{0,12}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,;'!?-]{0,24}"
}

fn store_with(entries: HashMap<String, String>) -> TranslationStore {
    let source = MemoryCatalogSource::new().with_table("language", TranslationTable::new("fr", entries));
    TranslationStore::builder(source).default_locale("en").build()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Three-way evaluation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn evaluation_follows_store_state(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 0..16),
        key in key_strategy(),
        fallback in value_strategy(),
    ) {
        let store = store_with(entries.clone());
        let binding = store.bind(key.clone(), fallback.clone());

        // Nothing for the default locale: the raw key shows.
        prop_assert_eq!(binding.get(), key.clone());

        store.switch_locale("fr").unwrap();
        let expected = entries.get(&key).cloned().unwrap_or(fallback.clone());
        prop_assert_eq!(binding.get(), expected.clone());
        prop_assert_eq!(store.translate(&key, &fallback), expected);
    }

    #[test]
    fn bound_property_matches_binding(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..16),
        fallback in value_strategy(),
    ) {
        let store = store_with(entries.clone());
        let properties: Vec<(String, StringProperty)> = entries
            .keys()
            .map(|key| {
                let property = StringProperty::default();
                property.bind(&store.bind(key.clone(), fallback.clone()));
                (key.clone(), property)
            })
            .collect();

        store.switch_locale("fr").unwrap();
        for (key, property) in &properties {
            prop_assert_eq!(Some(&property.get()), entries.get(key));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Notification count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn each_switch_notifies_once(switches in 1_usize..8) {
        let store = store_with(HashMap::new());
        let count = Rc::new(Cell::new(0_usize));
        let c = Rc::clone(&count);
        let _sub = store.subscribe(move |_| c.set(c.get() + 1));

        for _ in 0..switches {
            store.switch_locale("fr").unwrap();
        }
        prop_assert_eq!(count.get(), switches);
        prop_assert_eq!(store.revision(), switches as u64);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Failed switches
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn failed_switch_is_invisible(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 0..8),
        missing in "(de|ja|ko|zh)",
    ) {
        let store = store_with(entries);
        store.switch_locale("fr").unwrap();
        let before = store.current_table();
        let count = Rc::new(Cell::new(0_usize));
        let c = Rc::clone(&count);
        let _sub = store.subscribe(move |_| c.set(c.get() + 1));

        prop_assert!(store.switch_locale(&missing).is_err());
        prop_assert_eq!(count.get(), 0);
        prop_assert_eq!(store.locale(), "fr");
        prop_assert_eq!(store.current_table(), before);
    }
}
