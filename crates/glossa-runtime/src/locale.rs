#![forbid(unsafe_code)]

//! System locale detection.
//!
//! The store's default locale comes from configuration when set, and from
//! the process environment otherwise.

use std::env;

pub use glossa_catalog::{Locale, normalize_locale};

/// Detect the system locale from environment variables.
///
/// Preference order: `LC_ALL`, then `LANG`. Falls back to `"en"` when unknown.
#[must_use]
pub fn detect_system_locale() -> Locale {
    let lc_all = env::var("LC_ALL").ok();
    let lang = env::var("LANG").ok();
    detect_system_locale_from(lc_all.as_deref(), lang.as_deref())
}

/// Normalize `raw`, falling back to `"en"` when it is blank.
#[must_use]
pub fn normalize_or_default(raw: &str) -> Locale {
    normalize_locale(raw).unwrap_or_else(|| "en".to_string())
}

fn detect_system_locale_from(lc_all: Option<&str>, lang: Option<&str>) -> Locale {
    lc_all
        .and_then(normalize_locale)
        .or_else(|| lang.and_then(normalize_locale))
        .unwrap_or_else(|| "en".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_system_locale_prefers_lc_all() {
        let locale = detect_system_locale_from(Some("fr_FR.UTF-8"), Some("en_US.UTF-8"));
        assert_eq!(locale, "fr-FR");
    }

    #[test]
    fn detect_system_locale_uses_lang_when_lc_all_missing() {
        let locale = detect_system_locale_from(None, Some("en_US.UTF-8"));
        assert_eq!(locale, "en-US");
    }

    #[test]
    fn detect_system_locale_skips_blank_lc_all() {
        let locale = detect_system_locale_from(Some(""), Some("es_MX"));
        assert_eq!(locale, "es-MX");
    }

    #[test]
    fn detect_system_locale_defaults_to_en() {
        let locale = detect_system_locale_from(None, None);
        assert_eq!(locale, "en");
    }

    #[test]
    fn normalize_or_default_handles_blank() {
        assert_eq!(normalize_or_default("  "), "en");
        assert_eq!(normalize_or_default("pt_BR"), "pt-BR");
    }
}
