#![forbid(unsafe_code)]

use glossa_runtime::TranslationStore;
use tracing::{debug, warn};

use super::{ControlBinder, bind_live};
use crate::capability::Control;

/// Binds a menu's own text under `key` and each identified child under
/// `key.<child id>`.
///
/// Children without an identifier are skipped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuBinder;

impl ControlBinder for MenuBinder {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn supports(&self, control: &dyn Control) -> bool {
        control.as_named_children().is_some()
    }

    fn bind(&self, control: &dyn Control, key: &str, store: &TranslationStore) {
        if let Some(text) = control.as_text() {
            bind_live(text.text_property(), key, store);
        }
        let Some(container) = control.as_named_children() else {
            return;
        };
        for (position, child) in container.named_children().into_iter().enumerate() {
            match child.id.as_deref().map(str::trim) {
                Some(id) if !id.is_empty() => {
                    let child_key = format!("{key}.{id}");
                    debug!(key = %child_key, "binding menu item");
                    bind_live(&child.text, &child_key, store);
                }
                _ => warn!(key, position, "menu item without id, skipping"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{ContextMenu, Menu, MenuItem};
    use glossa_catalog::MemoryCatalogSource;
    use glossa_runtime::TranslationTable;

    fn store() -> TranslationStore {
        let source = MemoryCatalogSource::new()
            .with_table(
                "language",
                TranslationTable::builder("en")
                    .entry("menu.file", "File")
                    .entry("menu.file.open", "Open")
                    .entry("menu.file.quit", "Quit")
                    .build(),
            )
            .with_table(
                "language",
                TranslationTable::builder("pt")
                    .entry("menu.file", "Arquivo")
                    .entry("menu.file.open", "Abrir")
                    .entry("menu.file.quit", "Sair")
                    .entry("edit.copy", "Copiar")
                    .build(),
            );
        TranslationStore::builder(source).default_locale("en").build()
    }

    #[test]
    fn binds_menu_and_identified_items() {
        let store = store();
        let menu = Menu::new("File")
            .item(MenuItem::new("Open").with_id("open"))
            .item(MenuItem::new("Separator"))
            .item(MenuItem::new("Quit").with_id("quit"));
        MenuBinder.bind(&menu, "menu.file", &store);

        store.switch_locale("pt").unwrap();
        let texts: Vec<String> = menu.items().iter().map(MenuItem::text).collect();
        assert_eq!(menu.text(), "Arquivo");
        assert_eq!(texts, vec!["Abrir", "Separator", "Sair"]);
    }

    #[test]
    fn context_menu_binds_children_only() {
        let store = store();
        let menu = ContextMenu::new()
            .item(MenuItem::new("Copy").with_id("copy"))
            .item(MenuItem::new("Paste").with_id("  "));
        MenuBinder.bind(&menu, "edit", &store);

        store.switch_locale("pt").unwrap();
        assert_eq!(menu.items()[0].text(), "Copiar");
        assert_eq!(menu.items()[1].text(), "Paste");
    }
}
