#![forbid(unsafe_code)]

//! Observable translation store and live string bindings for glossa.
//!
//! # Role in glossa
//! `glossa-runtime` owns the *current* translation table. Everything that
//! displays localized text reads through a [`TranslationStore`], either once
//! with [`TranslationStore::translate`] or continuously through a
//! [`TranslationBinding`] bound to a [`Property`].
//!
//! # How it fits in the system
//! Catalog loading lives in `glossa-catalog`; control binding lives in
//! `glossa-controls`, which only needs the store, bindings and the reactive
//! primitives exported here.
//!
//! ```rust,ignore
//! let store = TranslationStore::from_config(&StoreConfig::from_toml_file("glossa.toml")?);
//! let title = StringProperty::default();
//! title.bind(&store.bind("window.title", "Settings"));
//! store.switch_locale("fr")?; // title now shows the French entry
//! ```

pub mod config;
pub mod expression;
pub mod locale;
pub mod reactive;
pub mod store;

pub use config::{ConfigError, DEFAULT_BASE_NAME, DEFAULT_CATALOG_DIR, StoreConfig};
pub use expression::TranslationBinding;
pub use locale::{detect_system_locale, normalize_or_default};
pub use reactive::{BindingScope, Observable, Property, StringProperty, Subscription, ValueSource};
pub use store::{StoreBuilder, TranslationStore};

pub use glossa_catalog::{CatalogError, CatalogSource, Locale, TranslationTable};
