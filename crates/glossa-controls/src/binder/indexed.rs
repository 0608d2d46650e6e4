#![forbid(unsafe_code)]

use glossa_runtime::TranslationStore;
use tracing::{debug, trace};

use super::{ControlBinder, bind_live};
use crate::capability::Control;

/// Localizes the elements of a string collection under `key.<index>`.
///
/// Elements are values, not properties, so they are rewritten in place:
/// once when bound, then by a listener that runs after every locale switch.
/// The listener lives as long as the collection and is replaced when the
/// collection is bound again. An element whose key is missing from the new
/// table keeps its previous text.
///
/// Collections with a placeholder (combo boxes) bind it live under `key`.
/// Empty and non-string collections are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedListBinder;

impl ControlBinder for IndexedListBinder {
    fn name(&self) -> &'static str {
        "indexed-list"
    }

    fn supports(&self, control: &dyn Control) -> bool {
        control.as_indexed().is_some()
    }

    fn bind(&self, control: &dyn Control, key: &str, store: &TranslationStore) {
        let Some(list) = control.as_indexed() else {
            return;
        };
        let Some(items) = list.string_items() else {
            debug!(kind = control.kind(), key, "collection elements are not strings, skipping");
            return;
        };
        if items.is_empty() {
            debug!(kind = control.kind(), key, "collection is empty, skipping");
            return;
        }

        if let Some(prompt) = list.prompt_property() {
            bind_live(prompt, key, store);
        }

        let count = items.len();
        for index in 0..count {
            if let Some(original) = items.get(index) {
                items.set(index, store.translate(&format!("{key}.{index}"), &original));
            }
        }

        let writer = items.writer();
        let prefix = key.to_string();
        let listener = store.subscribe(move |table| {
            for index in 0..count {
                let item_key = format!("{prefix}.{index}");
                match table.get(&item_key) {
                    Some(value) => {
                        writer.set(index, value.to_string());
                    }
                    None => trace!(key = %item_key, "no entry for element, keeping text"),
                }
            }
        });
        items.replace_localizer(listener);
    }
}
