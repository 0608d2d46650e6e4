//! Property-based invariant tests for the catalog layer.
//!
//! 1. Table lookup returns exactly what was inserted, absent keys are `None`
//! 2. Locale normalization never panics and is idempotent
//! 3. Candidate chains shrink monotonically and end at the primary subtag
//! 4. Bundle resolution: the most specific bundle wins every shared key
//! 5. The `.properties` reader never panics on arbitrary input
//! 6. Simple `key=value` lines read back verbatim

use std::collections::HashMap;

use glossa_catalog::properties::parse_properties;
use glossa_catalog::{
    CatalogSource, MemoryCatalogSource, TranslationTable, candidate_locales, normalize_locale,
};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.]{0,12}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,;'!?-]{0,24}"
}

fn locale_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{2}",
        "[a-z]{2}-[A-Z]{2}",
        "[a-z]{2}-[A-Z][a-z]{3}-[A-Z]{2}",
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Table lookup
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn table_returns_inserted_values(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 0..32),
        probe in key_strategy(),
    ) {
        let table = TranslationTable::new("en", entries.clone());
        for (key, value) in &entries {
            prop_assert_eq!(table.get(key), Some(value.as_str()));
            prop_assert!(table.contains_key(key));
        }
        prop_assert_eq!(table.get(&probe).is_some(), entries.contains_key(&probe));
        prop_assert_eq!(table.len(), entries.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Locale normalization
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,24}") {
        if let Some(once) = normalize_locale(&raw) {
            let twice = normalize_locale(&once);
            prop_assert_eq!(twice.as_deref(), Some(once.as_str()));
            prop_assert!(!once.contains('_'));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Candidate chains
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn candidates_shrink_to_primary(locale in locale_strategy()) {
        let chain = candidate_locales(&locale);
        prop_assert_eq!(chain.first().map(String::as_str), Some(locale.as_str()));
        for pair in chain.windows(2) {
            prop_assert!(pair[0].starts_with(pair[1].as_str()));
            prop_assert!(pair[0].len() > pair[1].len());
        }
        let primary = locale.split('-').next().unwrap_or_default();
        prop_assert_eq!(chain.last().map(String::as_str), Some(primary));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Most specific bundle wins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn specific_bundle_overrides_root(
        locale in locale_strategy(),
        root in prop::collection::hash_map(key_strategy(), value_strategy(), 1..16),
        specific in prop::collection::hash_map(key_strategy(), value_strategy(), 1..16),
    ) {
        let source = MemoryCatalogSource::new()
            .with_table("language", TranslationTable::new("", root.clone()))
            .with_table("language", TranslationTable::new(locale.clone(), specific.clone()));

        let table = source.load("language", &locale).unwrap();
        let mut expected: HashMap<String, String> = root;
        expected.extend(specific);
        prop_assert_eq!(table.len(), expected.len());
        for (key, value) in &expected {
            prop_assert_eq!(table.get(key), Some(value.as_str()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Properties reader
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn properties_reader_never_panics(input in "\\PC{0,256}") {
        let _ = parse_properties(&input);
    }

    #[test]
    fn plain_lines_read_back(
        entries in prop::collection::vec((key_strategy(), "[A-Za-z0-9][A-Za-z0-9 ,.]{0,20}"), 0..16),
    ) {
        let doc: String = entries
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        let parsed = parse_properties(&doc).unwrap();
        prop_assert_eq!(parsed, entries);
    }
}
