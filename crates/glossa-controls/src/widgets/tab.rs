#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glossa_runtime::StringProperty;

use super::Tooltip;
use crate::capability::{Control, TextHolder, TooltipHolder};

/// A tab header: a label plus an optional tooltip.
#[derive(Debug, Clone, Default)]
pub struct Tab {
    id: Option<String>,
    text: StringProperty,
    tooltip: Rc<RefCell<Option<Tooltip>>>,
}

impl Tab {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: StringProperty::new(text.into()),
            tooltip: Rc::new(RefCell::new(None)),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_tooltip(self, tooltip: Tooltip) -> Self {
        self.set_tooltip(tooltip);
        self
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.get()
    }
}

impl TextHolder for Tab {
    fn text_property(&self) -> &StringProperty {
        &self.text
    }
}

impl TooltipHolder for Tab {
    fn tooltip(&self) -> Option<Tooltip> {
        self.tooltip.borrow().clone()
    }

    fn set_tooltip(&self, tooltip: Tooltip) {
        *self.tooltip.borrow_mut() = Some(tooltip);
    }
}

impl Control for Tab {
    fn kind(&self) -> &'static str {
        "Tab"
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn as_text(&self) -> Option<&dyn TextHolder> {
        Some(self)
    }

    fn as_tooltip(&self) -> Option<&dyn TooltipHolder> {
        Some(self)
    }
}
