#![no_main]

use arbitrary::Arbitrary;
use glossa_catalog::{
    CatalogSource, MemoryCatalogSource, TranslationTable, candidate_locales, normalize_locale,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    raw_locale: String,
    bundles: Vec<(String, Vec<(String, String)>)>,
}

fuzz_target!(|input: Input| {
    let Some(locale) = normalize_locale(&input.raw_locale) else {
        return;
    };

    let candidates = candidate_locales(&locale);
    for pair in candidates.windows(2) {
        assert!(pair[0].len() > pair[1].len());
    }

    let mut source = MemoryCatalogSource::new();
    for (bundle_locale, entries) in input.bundles.into_iter().take(8) {
        source.insert("language", TranslationTable::new(bundle_locale, entries.into_iter().collect()));
    }
    // Loading may fail, but never panics.
    let _ = source.load("language", &locale);
});
