#![forbid(unsafe_code)]

//! Capability traits: the only view binders have of a control.
//!
//! A binder never asks "is this a tab?". It asks "does this control hold a
//! tooltip?" through [`Control::as_tooltip`]. Host toolkits implement
//! [`Control`] for their widgets and return the capabilities they support;
//! every accessor defaults to `None`.

use glossa_runtime::StringProperty;

use crate::item_list::ItemList;
use crate::widgets::{Tooltip, TreeItem};

/// A control with a primary display text.
pub trait TextHolder {
    fn text_property(&self) -> &StringProperty;
}

/// A text input with placeholder text.
pub trait PromptHolder {
    fn prompt_property(&self) -> &StringProperty;
}

/// A control that can carry a tooltip.
pub trait TooltipHolder {
    /// The installed tooltip, if any.
    fn tooltip(&self) -> Option<Tooltip>;

    /// Install `tooltip`, replacing any previous one.
    fn set_tooltip(&self, tooltip: Tooltip);
}

/// A collection of elements addressed by index.
pub trait IndexedStringList {
    /// The elements, when they are strings. Non-string collections return
    /// `None` and are left alone.
    fn string_items(&self) -> Option<ItemList<String>>;

    /// Placeholder shown while nothing is selected, for collections that
    /// have one.
    fn prompt_property(&self) -> Option<&StringProperty> {
        None
    }
}

/// A tree whose node values may be strings.
pub trait StringTree {
    /// The root node, when the tree has one and its values are strings.
    fn string_root(&self) -> Option<TreeItem<String>>;
}

/// One child of a [`NamedChildren`] container.
#[derive(Debug, Clone)]
pub struct NamedChild {
    /// Identifier used to build the child's key. Children without one are
    /// not bound.
    pub id: Option<String>,
    /// The child's display text.
    pub text: StringProperty,
}

/// A container whose children are keyed by identifier (menus).
pub trait NamedChildren {
    fn named_children(&self) -> Vec<NamedChild>;
}

/// A bindable control.
///
/// Implementors return `Some(self)` from the accessors for every capability
/// they have. [`kind`](Control::kind) and [`id`](Control::id) are for logs
/// and reports only; dispatch never looks at them.
pub trait Control {
    /// Short type name, e.g. `"Label"`.
    fn kind(&self) -> &'static str;

    /// Identifier of the control, if it has one.
    fn id(&self) -> Option<&str> {
        None
    }

    fn as_text(&self) -> Option<&dyn TextHolder> {
        None
    }

    fn as_prompt(&self) -> Option<&dyn PromptHolder> {
        None
    }

    fn as_tooltip(&self) -> Option<&dyn TooltipHolder> {
        None
    }

    fn as_indexed(&self) -> Option<&dyn IndexedStringList> {
        None
    }

    fn as_tree(&self) -> Option<&dyn StringTree> {
        None
    }

    fn as_named_children(&self) -> Option<&dyn NamedChildren> {
        None
    }
}

impl std::fmt::Debug for dyn Control + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("kind", &self.kind())
            .field("id", &self.id())
            .finish()
    }
}
