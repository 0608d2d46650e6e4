#![forbid(unsafe_code)]

//! Translation tables and catalog sources for glossa.
//!
//! Provides the immutable per-locale [`TranslationTable`], locale identifier
//! helpers, and the [`CatalogSource`] seam used by the runtime store to load
//! a table for a `(base name, locale)` pair.
//!
//! # Role in glossa
//! `glossa-catalog` isolates everything about *where strings come from* so the
//! binding engine in `glossa-runtime` only ever sees finished tables. It does
//! not depend on the reactive layer or on any control type.
//!
//! # Bundle resolution
//! Sources resolve a locale the way resource bundles do: for base name
//! `language` and locale `fr-CA` the candidates are `language_fr_CA`,
//! `language_fr` and `language`. Every candidate that exists contributes its
//! entries, the most specific one winning on conflicts.

pub mod catalog;
pub mod directory;
pub mod locale;
pub mod properties;
pub mod table;

pub use catalog::{CatalogError, CatalogSource, MemoryCatalogSource, bundle_name};
pub use directory::{CatalogFormat, DirectoryCatalogSource};
pub use locale::{Locale, candidate_locales, is_locale_tag, normalize_locale};
pub use table::{TranslationTable, TranslationTableBuilder};
