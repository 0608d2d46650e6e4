//! Catalog source backed by bundle files in a directory.
//!
//! Bundles are named after [`bundle_name`]: with base name `language` and
//! format [`CatalogFormat::Properties`], locale `fr-CA` resolves
//! `language_fr_CA.properties`, `language_fr.properties` and
//! `language.properties` inside the directory.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::catalog::{CatalogError, CatalogSource, bundle_name, resolve_chain};
use crate::locale::is_locale_tag;
use crate::properties::parse_properties;
use crate::table::TranslationTable;

/// On-disk bundle format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// `.properties` files.
    #[default]
    Properties,
    /// Flat JSON objects mapping keys to strings.
    Json,
}

impl CatalogFormat {
    /// File extension (without the dot).
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Json => "json",
        }
    }

    fn parse(self, path: &Path, text: &str) -> Result<HashMap<String, String>, CatalogError> {
        match self {
            Self::Properties => parse_properties(text)
                .map(|entries| entries.into_iter().collect())
                .map_err(|err| CatalogError::Parse {
                    path: path.to_path_buf(),
                    line: err.line,
                    message: err.message,
                }),
            Self::Json => serde_json::from_str(text).map_err(|err| CatalogError::Parse {
                path: path.to_path_buf(),
                line: err.line(),
                message: err.to_string(),
            }),
        }
    }
}

/// Loads bundles from files under one directory.
#[derive(Debug, Clone)]
pub struct DirectoryCatalogSource {
    dir: PathBuf,
    format: CatalogFormat,
}

impl DirectoryCatalogSource {
    /// Read `.properties` bundles from `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_format(dir, CatalogFormat::Properties)
    }

    /// Read bundles of the given format from `dir`.
    #[must_use]
    pub fn with_format(dir: impl Into<PathBuf>, format: CatalogFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    /// Directory bundles are read from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Bundle format.
    #[must_use]
    pub fn format(&self) -> CatalogFormat {
        self.format
    }

    /// Path of the bundle file for `(base_name, locale)`.
    #[must_use]
    pub fn bundle_path(&self, base_name: &str, locale: &str) -> PathBuf {
        self.dir.join(format!(
            "{}.{}",
            bundle_name(base_name, locale),
            self.format.extension()
        ))
    }

    fn read_bundle(&self, base_name: &str, locale: &str) -> Result<Option<TranslationTable>, CatalogError> {
        let path = self.bundle_path(base_name, locale);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                trace!(path = %path.display(), "bundle file absent");
                return Ok(None);
            }
            Err(source) => return Err(CatalogError::Io { path, source }),
        };
        let entries = self.format.parse(&path, &text)?;
        Ok(Some(TranslationTable::new(locale, entries)))
    }
}

impl CatalogSource for DirectoryCatalogSource {
    fn load(&self, base_name: &str, locale: &str) -> Result<TranslationTable, CatalogError> {
        if !is_locale_tag(locale.trim()) {
            return Err(CatalogError::InvalidLocale(locale.to_string()));
        }
        resolve_chain(base_name, locale, |candidate| {
            self.read_bundle(base_name, candidate)
        })
    }
}
