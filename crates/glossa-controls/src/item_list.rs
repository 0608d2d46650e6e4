#![forbid(unsafe_code)]

//! Observable element lists for collection controls.
//!
//! [`ItemList<T>`] is the shared backing store of choice boxes, combo boxes
//! and list views. Elements are plain values, not bindable properties, so
//! localized elements are rewritten in place by listeners that the list
//! itself keeps alive (see [`ItemList::hold`] and
//! [`ItemList::replace_localizer`]).
//!
//! # Invariants
//!
//! 1. Clones share elements and listeners.
//! 2. Out-of-range writes are ignored.
//! 3. An [`ItemWriter`] never keeps listeners alive, so a listener may own a
//!    writer to its own list without creating a cycle.
//! 4. At most one localizer is installed; installing another drops the
//!    previous one.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use glossa_runtime::{BindingScope, Observable, Subscription};

/// Shared, observable list of elements.
pub struct ItemList<T> {
    values: Observable<Vec<T>>,
    listeners: Rc<RefCell<BindingScope>>,
    localizer: Rc<RefCell<Option<Subscription>>>,
}

impl<T> Clone for ItemList<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            listeners: Rc::clone(&self.listeners),
            localizer: Rc::clone(&self.localizer),
        }
    }
}

impl<T> ItemList<T> {
    /// Number of listeners kept alive by the list, localizer included.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().binding_count() + usize::from(self.localizer.borrow().is_some())
    }
}

impl<T: fmt::Debug> fmt::Debug for ItemList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemList")
            .field("values", &self.values)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Default for ItemList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Clone + PartialEq + 'static> From<Vec<T>> for ItemList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone + PartialEq + 'static> ItemList<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            values: Observable::new(items),
            listeners: Rc::new(RefCell::new(BindingScope::new())),
            localizer: Rc::new(RefCell::new(None)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.with(Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.with(Vec::is_empty)
    }

    /// Element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.with(|items| items.get(index).cloned())
    }

    /// Snapshot of all elements.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.values.get()
    }

    /// Replace the element at `index`. Returns `false` when out of range.
    pub fn set(&self, index: usize, value: T) -> bool {
        self.writer().set(index, value)
    }

    pub fn push(&self, value: T) {
        self.values.update(|items| items.push(value));
    }

    /// Replace every element.
    pub fn replace_all(&self, items: Vec<T>) {
        self.values.set(items);
    }

    /// Watch element changes.
    pub fn subscribe(&self, callback: impl Fn(&Vec<T>) + 'static) -> Subscription {
        self.values.subscribe(callback)
    }

    /// Keep `listener` alive for as long as the list exists.
    pub fn hold(&self, listener: Subscription) {
        self.listeners.borrow_mut().hold(listener);
    }

    /// Install the listener that keeps elements localized, dropping the one
    /// installed before.
    pub fn replace_localizer(&self, listener: Subscription) {
        let previous = self.localizer.borrow_mut().replace(listener);
        drop(previous);
    }

    /// A handle that can rewrite elements without owning the listeners.
    #[must_use]
    pub fn writer(&self) -> ItemWriter<T> {
        ItemWriter {
            values: self.values.clone(),
        }
    }
}

/// Element-rewriting handle to an [`ItemList`].
pub struct ItemWriter<T> {
    values: Observable<Vec<T>>,
}

impl<T> Clone for ItemWriter<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ItemWriter<T> {
    /// Replace the element at `index`. Returns `false` when out of range.
    pub fn set(&self, index: usize, value: T) -> bool {
        if index >= self.values.with(Vec::len) {
            return false;
        }
        self.values.update(|items| items[index] = value);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.with(Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.with(Vec::is_empty)
    }
}
