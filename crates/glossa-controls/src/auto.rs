#![forbid(unsafe_code)]

//! Field-driven auto-binding.
//!
//! A view type lists its bindable fields once, through [`Bindable`] (usually
//! generated with [`bindable_fields!`](crate::bindable_fields)). Each field
//! carries markers:
//!
//! - `ui`: participates, keyed by the field name.
//! - `bind` / `bind("custom.key")`: participates, keyed by the custom key
//!   when it is non-blank, by the field name otherwise.
//! - `ignore`: never bound, whatever else is set.
//!
//! [`AutoBinder::auto_bind`] walks the fields in declaration order and hands
//! each eligible, present control to the first matching binder of its
//! [`BinderRegistry`]. Nothing here fails the host: unbindable fields are
//! logged and listed in the returned [`BindReport`].
//!
//! ```rust,ignore
//! struct SettingsView {
//!     title: Label,
//!     search: TextField,
//!     advanced: Option<Tab>,
//!     debug_info: Label,
//! }
//!
//! bindable_fields! {
//!     impl Bindable for SettingsView {
//!         #[ui] title,
//!         #[bind("settings.search")] search,
//!         #[ui] advanced,
//!         #[ui] #[ignore] debug_info,
//!     }
//! }
//!
//! let report = AutoBinder::new(store).auto_bind(&view);
//! ```

use std::fmt;

use glossa_runtime::TranslationStore;
use tracing::{debug, warn};

use crate::binder::BinderRegistry;
use crate::capability::Control;

/// Field markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    pub ui: bool,
    pub bind: bool,
    pub key: Option<&'static str>,
    pub ignore: bool,
}

impl Markers {
    /// Whether a field with these markers takes part in auto-binding.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        (self.ui || self.bind) && !self.ignore
    }
}

/// One declared field of a [`Bindable`] type.
#[derive(Clone, Copy)]
pub struct FieldDescriptor<'a> {
    name: &'static str,
    control: Option<&'a dyn Control>,
    markers: Markers,
}

impl<'a> FieldDescriptor<'a> {
    /// A field with no markers.
    #[must_use]
    pub fn new(name: &'static str, control: Option<&'a dyn Control>) -> Self {
        Self {
            name,
            control,
            markers: Markers::default(),
        }
    }

    #[must_use]
    pub fn ui(mut self) -> Self {
        self.markers.ui = true;
        self
    }

    #[must_use]
    pub fn bind(mut self) -> Self {
        self.markers.bind = true;
        self
    }

    /// Participate under `key` instead of the field name.
    #[must_use]
    pub fn bind_as(mut self, key: &'static str) -> Self {
        self.markers.bind = true;
        self.markers.key = Some(key);
        self
    }

    #[must_use]
    pub fn ignore(mut self) -> Self {
        self.markers.ignore = true;
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn control(&self) -> Option<&'a dyn Control> {
        self.control
    }

    #[must_use]
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// The custom key when non-blank, the field name otherwise.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self.markers.key {
            Some(key) if !key.trim().is_empty() => key,
            _ => self.name,
        }
    }
}

impl fmt::Debug for FieldDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("control", &self.control.map(Control::kind))
            .field("markers", &self.markers)
            .finish()
    }
}

/// A type whose fields can be auto-bound.
pub trait Bindable {
    /// Declared fields, in declaration order.
    fn bindable_fields(&self) -> Vec<FieldDescriptor<'_>>;
}

/// Conversion of a field value into an optional control.
///
/// Implemented for every [`Control`] and for `Option` of one, so fields
/// that are not created yet can be declared too.
pub trait AsControl {
    fn as_control(&self) -> Option<&dyn Control>;
}

impl<C: Control> AsControl for C {
    fn as_control(&self) -> Option<&dyn Control> {
        Some(self)
    }
}

impl<C: Control> AsControl for Option<C> {
    fn as_control(&self) -> Option<&dyn Control> {
        self.as_ref().map(|control| control as &dyn Control)
    }
}

/// Why a field was not bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Carries neither `ui` nor `bind`.
    NotMarked,
    /// Carries `ignore`.
    Ignored,
    /// The field holds no control.
    Absent,
    /// No binder supports the control.
    NoBinder,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMarked => write!(f, "not marked"),
            Self::Ignored => write!(f, "ignored"),
            Self::Absent => write!(f, "no control"),
            Self::NoBinder => write!(f, "no binder"),
        }
    }
}

/// A field that was bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundField {
    pub field: &'static str,
    pub key: &'static str,
    pub binder: &'static str,
}

/// A field that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    pub field: &'static str,
    pub reason: SkipReason,
}

/// Outcome of [`AutoBinder::auto_bind`], in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    pub bound: Vec<BoundField>,
    pub skipped: Vec<SkippedField>,
}

impl BindReport {
    /// Whether `field` was bound.
    #[must_use]
    pub fn is_bound(&self, field: &str) -> bool {
        self.bound.iter().any(|b| b.field == field)
    }

    /// Why `field` was skipped, if it was.
    #[must_use]
    pub fn skip_reason(&self, field: &str) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.reason)
    }

    fn skip(&mut self, field: &'static str, reason: SkipReason) {
        self.skipped.push(SkippedField { field, reason });
    }
}

/// Errors from [`AutoBinder::auto_bind_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The key is empty or whitespace.
    InvalidKey(String),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid binding key {key:?}"),
        }
    }
}

impl std::error::Error for BindError {}

/// Binds declared fields through a [`BinderRegistry`].
#[derive(Debug)]
pub struct AutoBinder {
    store: TranslationStore,
    registry: BinderRegistry,
}

impl AutoBinder {
    /// Bind against `store` with the standard binders.
    #[must_use]
    pub fn new(store: TranslationStore) -> Self {
        Self::with_registry(store, BinderRegistry::standard())
    }

    #[must_use]
    pub fn with_registry(store: TranslationStore, registry: BinderRegistry) -> Self {
        Self { store, registry }
    }

    /// Bind against the thread's default store.
    #[must_use]
    pub fn global() -> Self {
        Self::new(TranslationStore::global())
    }

    #[must_use]
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    #[must_use]
    pub fn registry(&self) -> &BinderRegistry {
        &self.registry
    }

    /// Add or reorder binders.
    pub fn registry_mut(&mut self) -> &mut BinderRegistry {
        &mut self.registry
    }

    /// Bind every eligible field of `target`.
    pub fn auto_bind(&self, target: &dyn Bindable) -> BindReport {
        let mut report = BindReport::default();
        for field in target.bindable_fields() {
            let markers = field.markers();
            if markers.ignore {
                debug!(field = field.name(), "field ignored");
                report.skip(field.name(), SkipReason::Ignored);
                continue;
            }
            if !markers.is_eligible() {
                report.skip(field.name(), SkipReason::NotMarked);
                continue;
            }
            let Some(control) = field.control() else {
                warn!(field = field.name(), "bindable field holds no control, skipping");
                report.skip(field.name(), SkipReason::Absent);
                continue;
            };

            let key = field.key();
            match self.registry.dispatch(control, key, &self.store) {
                Some(binder) => report.bound.push(BoundField {
                    field: field.name(),
                    key,
                    binder,
                }),
                None => report.skip(field.name(), SkipReason::NoBinder),
            }
        }
        debug!(
            bound = report.bound.len(),
            skipped = report.skipped.len(),
            "auto-bind finished"
        );
        report
    }

    /// Bind one control created at runtime.
    ///
    /// Returns the name of the binder used, or `None` when `control` is
    /// absent or no binder supports it. An absent control is a no-op whatever
    /// the key; a present control with a blank key is an error.
    pub fn auto_bind_field(
        &self,
        control: Option<&dyn Control>,
        key: &str,
    ) -> Result<Option<&'static str>, BindError> {
        let Some(control) = control else {
            warn!(key, "no control to bind");
            return Ok(None);
        };
        if key.trim().is_empty() {
            return Err(BindError::InvalidKey(key.to_string()));
        }
        Ok(self.registry.dispatch(control, key, &self.store))
    }
}

/// Implement [`Bindable`] from a list of marked fields.
///
/// Markers are attributes before each field: `#[ui]`, `#[bind]`,
/// `#[bind("custom.key")]` and `#[ignore]`. Unmarked fields may be listed
/// too; they are reported as not marked. Field types must implement
/// [`AsControl`].
///
/// ```rust,ignore
/// bindable_fields! {
///     impl Bindable for LoginView {
///         #[ui] user_label,
///         #[bind("login.password")] password,
///         #[ui] #[ignore] version,
///     }
/// }
/// ```
#[macro_export]
macro_rules! bindable_fields {
    (
        impl Bindable for $ty:ty {
            $( $( #[$marker:ident $( ( $key:literal ) )?] )* $field:ident ),* $(,)?
        }
    ) => {
        impl $crate::auto::Bindable for $ty {
            fn bindable_fields(&self) -> ::std::vec::Vec<$crate::auto::FieldDescriptor<'_>> {
                ::std::vec![
                    $({
                        #[allow(unused_mut)]
                        let mut field = $crate::auto::FieldDescriptor::new(
                            ::core::stringify!($field),
                            $crate::auto::AsControl::as_control(&self.$field),
                        );
                        $( field = $crate::bindable_fields!(@marker field, $marker $(, $key)?); )*
                        field
                    }),*
                ]
            }
        }
    };
    (@marker $field:ident, ui) => {
        $field.ui()
    };
    (@marker $field:ident, bind) => {
        $field.bind()
    };
    (@marker $field:ident, bind, $key:literal) => {
        $field.bind_as($key)
    };
    (@marker $field:ident, ignore) => {
        $field.ignore()
    };
}
