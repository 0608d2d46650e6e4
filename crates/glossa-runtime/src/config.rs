#![forbid(unsafe_code)]

//! Store configuration.
//!
//! Captures where catalogs live and which family and locale to start with,
//! so hosts can configure localization from a file instead of code.
//!
//! # Loading
//!
//! ```toml
//! # glossa.toml
//! base_name = "messages"
//! default_locale = "es-MX"
//! catalog_dir = "assets/i18n"
//! format = "json"
//! ```
//!
//! ```rust,ignore
//! let config = StoreConfig::from_toml_file("glossa.toml")?;
//! let store = TranslationStore::from_config(&config);
//! ```
//!
//! # Defaults
//!
//! Every field has a default, so an empty document is valid: base name
//! `language`, `.properties` bundles under `resources/`, and the system
//! locale.

use std::fmt;
use std::path::{Path, PathBuf};

use glossa_catalog::{CatalogFormat, DirectoryCatalogSource, Locale};
use serde::{Deserialize, Serialize};

use crate::locale::{detect_system_locale, normalize_or_default};

/// Default catalog family name.
pub const DEFAULT_BASE_NAME: &str = "language";

/// Default catalog directory.
pub const DEFAULT_CATALOG_DIR: &str = "resources";

/// Configuration for a directory-backed [`TranslationStore`](crate::TranslationStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Catalog family loaded on every switch (`language` → `language_fr.properties`).
    pub base_name: String,

    /// Locale loaded lazily before any explicit switch. `None` means detect
    /// from the environment.
    pub default_locale: Option<Locale>,

    /// Directory holding the bundle files.
    pub catalog_dir: PathBuf,

    /// Bundle file format.
    pub format: CatalogFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            default_locale: None,
            catalog_dir: PathBuf::from(DEFAULT_CATALOG_DIR),
            format: CatalogFormat::default(),
        }
    }
}

impl StoreConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// The locale to start with: the configured one, normalized, or the
    /// detected system locale.
    #[must_use]
    pub fn resolved_default_locale(&self) -> Locale {
        match &self.default_locale {
            Some(locale) => normalize_or_default(locale),
            None => detect_system_locale(),
        }
    }

    /// Catalog source described by this configuration.
    #[must_use]
    pub fn catalog_source(&self) -> DirectoryCatalogSource {
        DirectoryCatalogSource::with_format(self.catalog_dir.clone(), self.format)
    }
}

/// Errors from loading a [`StoreConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}
