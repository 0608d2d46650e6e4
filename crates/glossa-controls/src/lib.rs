#![forbid(unsafe_code)]

//! Capability-based control binding for glossa.
//!
//! # Role in glossa
//! `glossa-controls` connects UI controls to a
//! [`TranslationStore`](glossa_runtime::TranslationStore). Controls are seen
//! only through the capability traits in [`capability`]; the
//! [`BinderRegistry`] picks the binder for each control shape, and the
//! [`AutoBinder`] drives the registry from a view's declared fields.
//!
//! A reference widget set lives in [`widgets`] for hosts without a toolkit
//! of their own, and for tests.
//!
//! ```rust,ignore
//! let binder = AutoBinder::new(store.clone());
//! binder.auto_bind(&settings_view);
//! binder.auto_bind_field(Some(&late_label as &dyn Control), "status.ready")?;
//! store.switch_locale("de")?; // every bound control now shows German text
//! ```

pub mod auto;
pub mod binder;
pub mod capability;
pub mod item_list;
pub mod widgets;

pub use auto::{
    AsControl, AutoBinder, BindError, BindReport, Bindable, BoundField, FieldDescriptor, Markers,
    SkipReason, SkippedField,
};
pub use binder::{
    BinderRegistry, ControlBinder, IndexedListBinder, LabeledBinder, MenuBinder, PromptBinder,
    TabBinder, TreeBinder,
};
pub use capability::{
    Control, IndexedStringList, NamedChild, NamedChildren, PromptHolder, StringTree, TextHolder,
    TooltipHolder,
};
pub use item_list::{ItemList, ItemWriter};
