#![forbid(unsafe_code)]

//! glossa public facade crate.
//!
//! Re-exports the catalog, runtime and control layers under one name and
//! offers a prelude for the usual setup: configure a store, bind a view,
//! switch locales.

use std::fmt;

// --- Catalog re-exports ----------------------------------------------------

pub use glossa_catalog::{
    CatalogError, CatalogFormat, CatalogSource, DirectoryCatalogSource, Locale,
    MemoryCatalogSource, TranslationTable, TranslationTableBuilder, normalize_locale,
};

// --- Runtime re-exports ----------------------------------------------------

pub use glossa_runtime::{
    BindingScope, ConfigError, Observable, Property, StoreConfig, StringProperty, Subscription,
    TranslationBinding, TranslationStore, ValueSource, detect_system_locale,
};

// --- Controls re-exports ---------------------------------------------------

#[cfg(feature = "controls")]
pub use glossa_controls::{
    AutoBinder, BindError, BindReport, Bindable, BinderRegistry, Control, ControlBinder,
    SkipReason, bindable_fields,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for glossa setup code.
#[derive(Debug)]
pub enum Error {
    /// A catalog could not be loaded.
    Catalog(CatalogError),
    /// The configuration could not be read.
    Config(ConfigError),
    /// A control could not be bound.
    #[cfg(feature = "controls")]
    Bind(BindError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            #[cfg(feature = "controls")]
            Self::Bind(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::Config(err) => Some(err),
            #[cfg(feature = "controls")]
            Self::Bind(err) => Some(err),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "controls")]
impl From<BindError> for Error {
    fn from(err: BindError) -> Self {
        Self::Bind(err)
    }
}

/// Standard result type for glossa setup code.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Locale, Property, Result, StoreConfig, StringProperty, Subscription,
        TranslationBinding, TranslationStore, TranslationTable,
    };

    #[cfg(feature = "controls")]
    pub use crate::{AutoBinder, Bindable, Control, bindable_fields};

    #[cfg(feature = "controls")]
    pub use crate::widgets;

    pub use crate::{catalog, runtime};
}

pub use glossa_catalog as catalog;
#[cfg(feature = "controls")]
pub use glossa_controls as controls;
#[cfg(feature = "controls")]
pub use glossa_controls::widgets;
pub use glossa_runtime as runtime;
