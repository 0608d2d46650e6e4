#![forbid(unsafe_code)]

//! The translation store: which table is current, and who to tell when it
//! changes.
//!
//! A [`TranslationStore`] owns a [`CatalogSource`], a base name, the active
//! locale and the *current* [`TranslationTable`]. [`TranslationStore::switch_locale`]
//! loads a table, swaps it in atomically, and notifies every subscriber in
//! subscription order. Live [`TranslationBinding`]s and the listeners that
//! indexed-collection binders install are both plain subscribers.
//!
//! # Invariants
//!
//! 1. At most one table is current. Readers observe either the previous or
//!    the new table, never a partially updated one (`ArcSwapOption` swap).
//! 2. Subscribers are notified only after a successful switch, after the
//!    swap, synchronously, in registration order.
//! 3. A failed switch leaves table, locale and revision untouched.
//! 4. `revision()` increments once per successful switch. Switching twice to
//!    the same locale notifies twice; there is no de-duplication.
//!
//! # Lazy default
//!
//! Until the first explicit switch, [`TranslationStore::current_table`]
//! loads the default-locale table on first access. That load publishes
//! silently (no notification) and is attempted only once; a failure is
//! logged and the store stays empty. [`TranslationStore::set_base_name`]
//! disables the lazy load: the store stays empty until the next switch.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Catalog not found | No bundle for `(base, locale)` | `warn!`, `Err(NotFound)`, store unchanged |
//! | Unreadable catalog | I/O or parse error | `warn!`, `Err(..)`, store unchanged |
//! | Blank locale | `switch_locale("")` | `Err(InvalidLocale)`, store unchanged |
//! | Default missing | Lazy load failed | `warn!` once, `current_table()` is `None` |

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use glossa_catalog::{CatalogError, CatalogSource, Locale, TranslationTable};
use tracing::{debug, info, warn};

use crate::config::{DEFAULT_BASE_NAME, StoreConfig};
use crate::expression::TranslationBinding;
use crate::locale::{detect_system_locale, normalize_locale, normalize_or_default};
use crate::reactive::{Observable, Subscription};

thread_local! {
    static GLOBAL_STORE: RefCell<Option<TranslationStore>> = const { RefCell::new(None) };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    /// Never switched; the default table may still be loaded lazily.
    Pristine,
    /// The lazy default load has been attempted.
    DefaultAttempted,
    /// At least one explicit switch succeeded.
    Switched,
    /// The base name changed; empty until the next switch.
    Invalidated,
}

struct StoreInner {
    source: Box<dyn CatalogSource>,
    current: ArcSwapOption<TranslationTable>,
    base_name: RefCell<String>,
    locale: RefCell<Locale>,
    state: Cell<LoadState>,
    revision: Observable<u64>,
}

/// Shared handle to a translation store.
///
/// Cloning the handle shares the store. The store is single-threaded
/// (`!Send`); use one per UI thread.
#[derive(Clone)]
pub struct TranslationStore {
    inner: Rc<StoreInner>,
}

impl fmt::Debug for TranslationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationStore")
            .field("base_name", &*self.inner.base_name.borrow())
            .field("locale", &*self.inner.locale.borrow())
            .field("state", &self.inner.state.get())
            .field("loaded", &self.is_loaded())
            .field("revision", &self.revision())
            .finish()
    }
}

/// Builder for a [`TranslationStore`].
#[must_use]
pub struct StoreBuilder {
    source: Box<dyn CatalogSource>,
    base_name: String,
    default_locale: Option<Locale>,
}

impl StoreBuilder {
    /// Catalog family to load (default `language`).
    pub fn base_name(mut self, name: impl Into<String>) -> Self {
        self.base_name = name.into();
        self
    }

    /// Locale for the lazy default load (default: system locale).
    pub fn default_locale(mut self, locale: impl AsRef<str>) -> Self {
        self.default_locale = Some(normalize_or_default(locale.as_ref()));
        self
    }

    /// Finish the store. Nothing is loaded yet.
    pub fn build(self) -> TranslationStore {
        TranslationStore {
            inner: Rc::new(StoreInner {
                source: self.source,
                current: ArcSwapOption::empty(),
                base_name: RefCell::new(self.base_name),
                locale: RefCell::new(self.default_locale.unwrap_or_else(detect_system_locale)),
                state: Cell::new(LoadState::Pristine),
                revision: Observable::new(0),
            }),
        }
    }
}

impl TranslationStore {
    /// Create a store over `source` with the default base name and the
    /// system locale.
    #[must_use]
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self::builder(source).build()
    }

    /// Start configuring a store over `source`.
    pub fn builder(source: impl CatalogSource + 'static) -> StoreBuilder {
        StoreBuilder {
            source: Box::new(source),
            base_name: DEFAULT_BASE_NAME.to_string(),
            default_locale: None,
        }
    }

    /// Create a directory-backed store from configuration.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::builder(config.catalog_source())
            .base_name(config.base_name.clone())
            .default_locale(config.resolved_default_locale())
            .build()
    }

    /// The thread's default store.
    ///
    /// Created on first use from [`StoreConfig::default`] unless one was
    /// installed with [`TranslationStore::install_global`].
    #[must_use]
    pub fn global() -> Self {
        GLOBAL_STORE.with(|slot| {
            slot.borrow_mut()
                .get_or_insert_with(|| Self::from_config(&StoreConfig::default()))
                .clone()
        })
    }

    /// Make `store` the thread's default, returning the previous one.
    pub fn install_global(store: TranslationStore) -> Option<TranslationStore> {
        GLOBAL_STORE.with(|slot| slot.borrow_mut().replace(store))
    }

    /// Load the table for the current base name and `locale`, publish it and
    /// notify subscribers.
    ///
    /// On failure nothing changes and no subscriber runs; the error is
    /// logged at `warn` and returned.
    pub fn switch_locale(&self, locale: &str) -> Result<Arc<TranslationTable>, CatalogError> {
        let Some(locale) = normalize_locale(locale) else {
            warn!(locale, "refusing to switch to a blank locale");
            return Err(CatalogError::InvalidLocale(locale.to_string()));
        };
        let base_name = self.base_name();
        info!(%locale, %base_name, "switching locale");

        let table = match self.inner.source.load(&base_name, &locale) {
            Ok(table) => Arc::new(table),
            Err(err) => {
                warn!(%locale, %base_name, error = %err, "failed to load catalog, keeping current table");
                return Err(err);
            }
        };

        self.inner.current.store(Some(Arc::clone(&table)));
        *self.inner.locale.borrow_mut() = locale;
        self.inner.state.set(LoadState::Switched);
        info!(entries = table.len(), "locale switched");

        // Always bumps, so every successful switch notifies.
        self.inner.revision.update(|rev| *rev += 1);
        Ok(table)
    }

    /// Change the catalog family used by later switches.
    ///
    /// The current table is dropped and the lazy default load is disabled,
    /// so bindings resolve to raw keys until the next successful switch.
    /// Subscribers are not notified.
    pub fn set_base_name(&self, name: impl Into<String>) {
        let name = name.into();
        debug!(base_name = %name, "base name changed, current table cleared");
        *self.inner.base_name.borrow_mut() = name;
        self.inner.current.store(None);
        self.inner.state.set(LoadState::Invalidated);
    }

    /// Current catalog family.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.inner.base_name.borrow().clone()
    }

    /// Active locale: the last successfully switched-to locale, or the
    /// default locale before any switch.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.inner.locale.borrow().clone()
    }

    /// The current table, loading the default-locale table on first access
    /// if nothing was ever switched to.
    #[must_use]
    pub fn current_table(&self) -> Option<Arc<TranslationTable>> {
        if let Some(table) = self.inner.current.load_full() {
            return Some(table);
        }
        if self.inner.state.get() != LoadState::Pristine {
            return None;
        }
        self.inner.state.set(LoadState::DefaultAttempted);

        let base_name = self.base_name();
        let locale = self.locale();
        match self.inner.source.load(&base_name, &locale) {
            Ok(table) => {
                debug!(%locale, %base_name, "loaded default catalog");
                let table = Arc::new(table);
                self.inner.current.store(Some(Arc::clone(&table)));
                Some(table)
            }
            Err(err) => {
                warn!(
                    %locale,
                    %base_name,
                    error = %err,
                    "failed to load the default catalog; localized text will show keys"
                );
                None
            }
        }
    }

    /// Whether a table is currently published (no lazy load).
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.current.load().is_some()
    }

    /// One-shot lookup: the translation of `key`, or `fallback` when the key
    /// is missing or no table is loaded.
    #[must_use]
    pub fn translate(&self, key: &str, fallback: &str) -> String {
        match self.current_table() {
            Some(table) => match table.get(key) {
                Some(value) => value.to_string(),
                None => {
                    debug!(key, locale = table.locale(), "missing key, using fallback");
                    fallback.to_string()
                }
            },
            None => fallback.to_string(),
        }
    }

    /// Create a live binding for `key`; see [`TranslationBinding`].
    #[must_use]
    pub fn bind(&self, key: impl Into<String>, fallback: impl Into<String>) -> TranslationBinding {
        TranslationBinding::new(self.clone(), key, fallback)
    }

    /// Run `callback` with the new table after every successful switch.
    pub fn subscribe(&self, callback: impl Fn(&Arc<TranslationTable>) + 'static) -> Subscription {
        let store: Weak<StoreInner> = Rc::downgrade(&self.inner);
        self.inner.revision.subscribe(move |_| {
            let Some(inner) = store.upgrade() else {
                return;
            };
            if let Some(table) = inner.current.load_full() {
                callback(&table);
            }
        })
    }

    /// Number of successful switches so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    /// Whether two handles point at the same store.
    #[must_use]
    pub fn ptr_eq(&self, other: &TranslationStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
