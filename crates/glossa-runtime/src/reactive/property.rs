#![forbid(unsafe_code)]

//! Bindable properties.
//!
//! A [`Property<T>`] is the settable, observable slot a control keeps its
//! text (or any other value) in. It can be *bound* to a [`ValueSource`]: the
//! property takes the source's current value immediately and follows every
//! later change until it is unbound or rebound.
//!
//! # Invariants
//!
//! 1. A property has at most one source. Binding again replaces the previous
//!    source; the old subscription is dropped first.
//! 2. `unbind()` keeps the last received value.
//! 3. `set()` on a bound property writes through, but the next change of the
//!    source overwrites it.

use std::cell::RefCell;
use std::rc::Rc;

use super::binding::ValueSource;
use super::observable::{Observable, Subscription};

/// Observable value slot that can follow a [`ValueSource`].
pub struct Property<T> {
    value: Observable<T>,
    bound: Rc<RefCell<Option<Subscription>>>,
}

/// The common case: a text property.
pub type StringProperty = Property<String>;

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            bound: Rc::clone(&self.bound),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.value)
            .field("bound", &self.bound.borrow().is_some())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    /// Create an unbound property holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value: Observable::new(value),
            bound: Rc::new(RefCell::new(None)),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Write a value directly.
    pub fn set(&self, value: T) {
        self.value.set(value);
    }

    /// Follow `source`: take its current value now and every change after.
    pub fn bind(&self, source: &dyn ValueSource<T>) {
        // Drop any previous source before the new one can fire.
        self.bound.borrow_mut().take();
        let target = self.value.clone();
        let sub = source.watch(Box::new(move |v| target.set(v)));
        self.value.set(source.current());
        *self.bound.borrow_mut() = Some(sub);
    }

    /// Stop following the current source, keeping the last value.
    pub fn unbind(&self) {
        self.bound.borrow_mut().take();
    }

    /// Whether the property currently follows a source.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound.borrow().is_some()
    }

    /// Watch this property's own changes.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.value.subscribe(callback)
    }

    /// Change counter of the underlying value.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.value.version()
    }
}

impl<T: Clone + PartialEq + 'static> ValueSource<T> for Property<T> {
    fn current(&self) -> T {
        self.get()
    }

    fn watch(&self, callback: Box<dyn Fn(T)>) -> Subscription {
        self.value.watch(callback)
    }
}
