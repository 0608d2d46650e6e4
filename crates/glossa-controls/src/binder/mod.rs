#![forbid(unsafe_code)]

//! Control binders and the ordered registry that dispatches to them.
//!
//! A [`ControlBinder`] recognizes one control shape through the capability
//! accessors of [`Control`] and wires that shape's text to the store. The
//! [`BinderRegistry`] tries binders in order and uses the first one whose
//! [`supports`](ControlBinder::supports) returns `true`.
//!
//! # Standard order
//!
//! | # | Binder | Matches | Keys |
//! |---|--------|---------|------|
//! | 1 | [`TabBinder`] | text + tooltip | `key`, `key.tooltip` |
//! | 2 | [`MenuBinder`] | named children | `key`, `key.<child id>` |
//! | 3 | [`IndexedListBinder`] | indexed elements | `key.<i>`, prompt `key` |
//! | 4 | [`TreeBinder`] | string tree | `key.0`, `key.0.<i>`, ... |
//! | 5 | [`PromptBinder`] | placeholder | `key.prompt` |
//! | 6 | [`LabeledBinder`] | text | `key` |
//!
//! Specific shapes come first: a tab also holds text, so the labeled binder
//! must not see it before the tab binder does.
//!
//! # Fallbacks
//!
//! Every binder uses the text a target holds at bind time as its fallback,
//! so a key missing from a catalog keeps showing what the control was
//! created with.

mod indexed;
mod labeled;
mod menu;
mod prompt;
mod tab;
mod tree;

pub use indexed::IndexedListBinder;
pub use labeled::LabeledBinder;
pub use menu::MenuBinder;
pub use prompt::PromptBinder;
pub use tab::TabBinder;
pub use tree::TreeBinder;

use std::fmt;

use glossa_runtime::{StringProperty, TranslationStore};
use tracing::debug;

use crate::capability::Control;

/// Strategy that binds one control shape.
pub trait ControlBinder {
    /// Name used in logs and bind reports.
    fn name(&self) -> &'static str;

    /// Whether this binder handles `control`.
    fn supports(&self, control: &dyn Control) -> bool;

    /// Bind `control`'s localized text under `key`.
    ///
    /// Only called after [`supports`](Self::supports) returned `true`.
    /// Binding never fails: targets that cannot be bound are skipped and
    /// logged.
    fn bind(&self, control: &dyn Control, key: &str, store: &TranslationStore);
}

/// Ordered set of binders; first match wins.
pub struct BinderRegistry {
    binders: Vec<Box<dyn ControlBinder>>,
}

impl Default for BinderRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for BinderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinderRegistry")
            .field("binders", &self.names())
            .finish()
    }
}

impl BinderRegistry {
    /// A registry with no binders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            binders: Vec::new(),
        }
    }

    /// The built-in binders in standard order.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(TabBinder);
        registry.register(MenuBinder);
        registry.register(IndexedListBinder);
        registry.register(TreeBinder);
        registry.register(PromptBinder);
        registry.register(LabeledBinder);
        registry
    }

    /// Add `binder` with the lowest priority.
    pub fn register(&mut self, binder: impl ControlBinder + 'static) -> &mut Self {
        self.binders.push(Box::new(binder));
        self
    }

    /// Add `binder` with the highest priority.
    pub fn register_first(&mut self, binder: impl ControlBinder + 'static) -> &mut Self {
        self.binders.insert(0, Box::new(binder));
        self
    }

    /// The first binder that supports `control`.
    #[must_use]
    pub fn find(&self, control: &dyn Control) -> Option<&dyn ControlBinder> {
        self.binders
            .iter()
            .map(Box::as_ref)
            .find(|binder| binder.supports(control))
    }

    /// Bind `control` with the first matching binder, returning its name.
    pub fn dispatch(
        &self,
        control: &dyn Control,
        key: &str,
        store: &TranslationStore,
    ) -> Option<&'static str> {
        let Some(binder) = self.find(control) else {
            debug!(kind = control.kind(), key, "no binder supports control");
            return None;
        };
        debug!(kind = control.kind(), key, binder = binder.name(), "binding control");
        binder.bind(control, key, store);
        Some(binder.name())
    }

    /// Binder names in priority order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.binders.iter().map(|b| b.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.binders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.binders.is_empty()
    }
}

/// Bind `property` to `key`, falling back to its current text.
pub(crate) fn bind_live(property: &StringProperty, key: &str, store: &TranslationStore) {
    let fallback = property.get();
    property.bind(&store.bind(key, fallback));
}
