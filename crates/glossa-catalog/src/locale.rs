//! Locale identifiers and bundle candidate chains.
//!
//! Locales are plain BCP-47-style strings (`"en"`, `"en-US"`, `"pt-BR"`).
//! They are normalized once at the edges (store construction, locale switch)
//! so everything downstream can compare them with `==`.

/// Locale identifier (e.g., `"en"`, `"en-US"`, `"ru"`).
pub type Locale = String;

/// Normalize a raw locale tag as found in environment variables or config.
///
/// Strips any `.encoding` and `@modifier` suffix, converts `_` separators to
/// `-` and maps the `C` / `POSIX` pseudo-locales to `"en"`. Returns `None` for
/// blank input and for tags with characters other than ASCII letters, digits
/// and separators, so a locale can never name a path outside a catalog
/// directory.
///
/// ```
/// use glossa_catalog::normalize_locale;
///
/// assert_eq!(normalize_locale("fr_FR.UTF-8").as_deref(), Some("fr-FR"));
/// assert_eq!(normalize_locale("POSIX").as_deref(), Some("en"));
/// assert_eq!(normalize_locale("   "), None);
/// assert_eq!(normalize_locale("en/../../etc"), None);
/// ```
#[must_use]
pub fn normalize_locale(raw: &str) -> Option<Locale> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw);
    let raw = raw.trim();
    if raw.is_empty() || !is_locale_tag(raw) {
        return None;
    }
    let mut normalized = raw.replace('_', "-");
    if normalized.eq_ignore_ascii_case("c") || normalized.eq_ignore_ascii_case("posix") {
        normalized.clear();
        normalized.push_str("en");
    }
    Some(normalized)
}

/// `true` when `tag` holds only ASCII letters, digits, `-` and `_`.
#[must_use]
pub fn is_locale_tag(tag: &str) -> bool {
    tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Candidate locales for a bundle lookup, most specific first.
///
/// Each candidate drops the last `-` subtag of the previous one. The root
/// bundle (no locale suffix) is not part of the list; sources try it last.
///
/// ```
/// use glossa_catalog::candidate_locales;
///
/// assert_eq!(candidate_locales("zh-Hant-TW"), vec!["zh-Hant-TW", "zh-Hant", "zh"]);
/// assert!(candidate_locales("").is_empty());
/// ```
#[must_use]
pub fn candidate_locales(locale: &str) -> Vec<Locale> {
    let mut candidates = Vec::new();
    let mut current = locale.trim();
    while !current.is_empty() {
        candidates.push(current.to_string());
        match current.rfind('-') {
            Some(idx) => current = current[..idx].trim_end_matches('-'),
            None => break,
        }
    }
    candidates
}
