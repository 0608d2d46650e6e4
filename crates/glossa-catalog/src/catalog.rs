//! Catalog sources: where translation tables come from.
//!
//! # Invariants
//!
//! 1. **Resolution chain terminates**: a lookup for `(base, locale)` tries
//!    each candidate from [`candidate_locales`] once, then the root bundle,
//!    and stops.
//!
//! 2. **Most specific wins**: when several candidates exist their entries are
//!    merged, more specific bundles overriding less specific ones.
//!
//! 3. **Not found means nothing at all**: [`CatalogError::NotFound`] is only
//!    returned when no candidate (root included) exists. A locale with no
//!    bundle of its own still resolves to the root bundle when one exists.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | No bundle | No candidate exists for the pair | `Err(NotFound)` |
//! | Unreadable bundle | I/O error on an existing file | `Err(Io)` |
//! | Malformed bundle | Bad escape, non-string JSON value | `Err(Parse)` |
//! | Blank locale | Empty tag passed to a source | Resolves root bundle only |

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;

use crate::locale::{Locale, candidate_locales};
use crate::table::TranslationTable;

/// Errors from catalog loading.
#[derive(Debug)]
pub enum CatalogError {
    /// No bundle exists for the requested base name and locale.
    NotFound { base_name: String, locale: Locale },
    /// A bundle exists but could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A bundle could not be parsed.
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    /// A locale string was malformed.
    InvalidLocale(String),
}

impl CatalogError {
    /// Whether this is the "no bundle at all" condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { base_name, locale } => {
                write!(f, "no catalog found for base '{base_name}' and locale '{locale}'")
            }
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse {
                path,
                line,
                message,
            } => write!(f, "parse error in {} at line {line}: {message}", path.display()),
            Self::InvalidLocale(l) => write!(f, "invalid locale: {l}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Something that can produce a [`TranslationTable`] for a base name and locale.
pub trait CatalogSource {
    /// Load the resolved table for `base_name` in `locale`.
    fn load(&self, base_name: &str, locale: &str) -> Result<TranslationTable, CatalogError>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Rc<S> {
    fn load(&self, base_name: &str, locale: &str) -> Result<TranslationTable, CatalogError> {
        (**self).load(base_name, locale)
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for Arc<S> {
    fn load(&self, base_name: &str, locale: &str) -> Result<TranslationTable, CatalogError> {
        (**self).load(base_name, locale)
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn load(&self, base_name: &str, locale: &str) -> Result<TranslationTable, CatalogError> {
        (**self).load(base_name, locale)
    }
}

/// Bundle name for a base name and locale: `language` + `fr-CA` → `language_fr_CA`.
///
/// A blank locale names the root bundle, which is just the base name.
#[must_use]
pub fn bundle_name(base_name: &str, locale: &str) -> String {
    let locale = locale.trim();
    if locale.is_empty() {
        base_name.to_string()
    } else {
        format!("{base_name}_{}", locale.replace('-', "_"))
    }
}

/// Walk the bundle chain for `(base_name, locale)` and merge what `fetch` finds.
///
/// `fetch` receives each candidate locale (most specific first, root as `""`)
/// and returns `Ok(None)` when that bundle does not exist.
pub(crate) fn resolve_chain(
    base_name: &str,
    locale: &str,
    mut fetch: impl FnMut(&str) -> Result<Option<TranslationTable>, CatalogError>,
) -> Result<TranslationTable, CatalogError> {
    let mut candidates = candidate_locales(locale);
    candidates.push(String::new());

    let mut found = Vec::new();
    for candidate in &candidates {
        if let Some(table) = fetch(candidate)? {
            debug!(bundle = %bundle_name(base_name, candidate), entries = table.len(), "bundle found");
            found.push(table);
        }
    }

    // Fold from the root upward so specific bundles override general ones.
    let mut layers = found.into_iter().rev();
    let Some(mut merged) = layers.next() else {
        return Err(CatalogError::NotFound {
            base_name: base_name.to_string(),
            locale: locale.to_string(),
        });
    };
    for layer in layers {
        merged = layer.over(&merged);
    }
    Ok(merged)
}

/// In-memory catalog source, keyed by bundle name.
///
/// # Example
///
/// ```
/// use glossa_catalog::{CatalogSource, MemoryCatalogSource, TranslationTable};
///
/// let source = MemoryCatalogSource::new()
///     .with_table("language", TranslationTable::builder("").entry("ok", "OK").build())
///     .with_table("language", TranslationTable::builder("es").entry("ok", "Vale").build());
///
/// assert_eq!(source.load("language", "es-MX").unwrap().get("ok"), Some("Vale"));
/// assert_eq!(source.load("language", "de").unwrap().get("ok"), Some("OK"));
/// assert!(source.load("messages", "es").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogSource {
    bundles: HashMap<String, TranslationTable>,
}

impl MemoryCatalogSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `table` under `base_name`, using the table's own locale.
    #[must_use]
    pub fn with_table(mut self, base_name: &str, table: TranslationTable) -> Self {
        self.insert(base_name, table);
        self
    }

    /// Register `table` under `base_name` in place. Replaces any previous
    /// table for the same bundle.
    pub fn insert(&mut self, base_name: &str, table: TranslationTable) {
        let name = bundle_name(base_name, table.locale());
        self.bundles.insert(name, table);
    }

    /// Registered bundle names (unordered).
    #[must_use]
    pub fn bundles(&self) -> Vec<&str> {
        self.bundles.keys().map(String::as_str).collect()
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn load(&self, base_name: &str, locale: &str) -> Result<TranslationTable, CatalogError> {
        resolve_chain(base_name, locale, |candidate| {
            Ok(self.bundles.get(&bundle_name(base_name, candidate)).cloned())
        })
    }
}
