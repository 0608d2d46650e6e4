//! Immutable key → string tables, one per locale.
//!
//! # Invariants
//!
//! 1. **Immutable after construction**: a [`TranslationTable`] exposes no
//!    mutating methods. Replacing text means publishing a new table.
//!
//! 2. **Missing keys are normal**: [`TranslationTable::get`] returns `None`
//!    for an absent key; callers pick their own fallback.
//!
//! 3. **Thread safety**: tables are `Send + Sync` and are shared behind
//!    `Arc` by the runtime store.

use std::collections::HashMap;

use crate::locale::Locale;

/// Strings for a single locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Create a table from an already-collected map.
    #[must_use]
    pub fn new(locale: impl Into<Locale>, entries: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            entries,
        }
    }

    /// Create an empty table for `locale`.
    #[must_use]
    pub fn empty(locale: impl Into<Locale>) -> Self {
        Self::new(locale, HashMap::new())
    }

    /// Start building a table for `locale`.
    #[must_use]
    pub fn builder(locale: impl Into<Locale>) -> TranslationTableBuilder {
        TranslationTableBuilder {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Locale this table was loaded for.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the table provides `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Layer `self` over `parent`: keys in `self` win, the rest come from
    /// `parent`. The result carries `self`'s locale.
    #[must_use]
    pub fn over(self, parent: &TranslationTable) -> Self {
        let mut entries = parent.entries.clone();
        entries.extend(self.entries);
        Self {
            locale: self.locale,
            entries,
        }
    }
}

/// Incremental builder for a [`TranslationTable`].
///
/// Later inserts of the same key replace earlier ones.
#[derive(Debug, Clone)]
pub struct TranslationTableBuilder {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl TranslationTableBuilder {
    /// Add one entry.
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add one entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of entries collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze into an immutable table.
    #[must_use]
    pub fn build(self) -> TranslationTable {
        TranslationTable {
            locale: self.locale,
            entries: self.entries,
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TranslationTableBuilder {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
