#![forbid(unsafe_code)]

//! Menus. Items are addressed by identifier, not position, so reordering a
//! menu never changes which entry an item reads.

use std::cell::RefCell;
use std::rc::Rc;

use glossa_runtime::StringProperty;

use crate::capability::{Control, NamedChild, NamedChildren, TextHolder};

/// One entry of a [`Menu`] or [`ContextMenu`].
#[derive(Debug, Clone, Default)]
pub struct MenuItem {
    id: Option<String>,
    text: StringProperty,
}

impl MenuItem {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: StringProperty::new(text.into()),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.get()
    }

    fn as_named_child(&self) -> NamedChild {
        NamedChild {
            id: self.id.clone(),
            text: self.text.clone(),
        }
    }
}

impl TextHolder for MenuItem {
    fn text_property(&self) -> &StringProperty {
        &self.text
    }
}

impl Control for MenuItem {
    fn kind(&self) -> &'static str {
        "MenuItem"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn as_text(&self) -> Option<&dyn TextHolder> {
        Some(self)
    }
}

/// A titled drop-down of [`MenuItem`]s.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    id: Option<String>,
    text: StringProperty,
    items: Rc<RefCell<Vec<MenuItem>>>,
}

impl Menu {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: StringProperty::new(text.into()),
            items: Rc::default(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append `item` and return the menu.
    #[must_use]
    pub fn item(self, item: MenuItem) -> Self {
        self.add_item(item);
        self
    }

    pub fn add_item(&self, item: MenuItem) {
        self.items.borrow_mut().push(item);
    }

    #[must_use]
    pub fn items(&self) -> Vec<MenuItem> {
        self.items.borrow().clone()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.get()
    }
}

impl TextHolder for Menu {
    fn text_property(&self) -> &StringProperty {
        &self.text
    }
}

impl NamedChildren for Menu {
    fn named_children(&self) -> Vec<NamedChild> {
        self.items.borrow().iter().map(MenuItem::as_named_child).collect()
    }
}

impl Control for Menu {
    fn kind(&self) -> &'static str {
        "Menu"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn as_text(&self) -> Option<&dyn TextHolder> {
        Some(self)
    }

    fn as_named_children(&self) -> Option<&dyn NamedChildren> {
        Some(self)
    }
}

/// A popup menu with no title of its own.
#[derive(Debug, Clone, Default)]
pub struct ContextMenu {
    id: Option<String>,
    items: Rc<RefCell<Vec<MenuItem>>>,
}

impl ContextMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn item(self, item: MenuItem) -> Self {
        self.add_item(item);
        self
    }

    pub fn add_item(&self, item: MenuItem) {
        self.items.borrow_mut().push(item);
    }

    #[must_use]
    pub fn items(&self) -> Vec<MenuItem> {
        self.items.borrow().clone()
    }
}

impl NamedChildren for ContextMenu {
    fn named_children(&self) -> Vec<NamedChild> {
        self.items.borrow().iter().map(MenuItem::as_named_child).collect()
    }
}

impl Control for ContextMenu {
    fn kind(&self) -> &'static str {
        "ContextMenu"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn as_named_children(&self) -> Option<&dyn NamedChildren> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_children_share_item_text() {
        let menu = Menu::new("File")
            .item(MenuItem::new("Open").with_id("open"))
            .item(MenuItem::new("---"));

        let children = menu.named_children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].id.as_deref(), Some("open"));
        assert_eq!(children[1].id, None);

        children[0].text.set("Abrir".into());
        assert_eq!(menu.items()[0].text(), "Abrir");
    }

    #[test]
    fn context_menu_has_no_text() {
        let menu = ContextMenu::new().item(MenuItem::new("Copy").with_id("copy"));
        let control: &dyn Control = &menu;
        assert!(control.as_text().is_none());
        assert_eq!(control.as_named_children().map(|c| c.named_children().len()), Some(1));
    }
}
