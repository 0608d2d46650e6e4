#![no_main]

use glossa_catalog::properties::parse_properties;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The reader must never panic, whatever the text.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(entries) = parse_properties(text) {
        // Every entry comes from at least one input line.
        assert!(entries.len() <= text.lines().count());
    }
});
