#![forbid(unsafe_code)]

//! Value sources and binding lifecycle management.
//!
//! A [`ValueSource<T>`] is anything a [`Property`](super::Property) can be
//! bound to: it has a current value and can push new values to a watcher.
//! [`Observable<T>`] is the basic source; derived sources such as
//! [`TranslationBinding`](crate::TranslationBinding) recompute their value
//! from shared state whenever that state changes.
//!
//! [`BindingScope`] collects the [`Subscription`]s created for one logical
//! owner (a control, a view) so they are released together.
//!
//! # Invariants
//!
//! 1. `ValueSource::current()` always returns the up-to-date value.
//! 2. A watcher registered through `ValueSource::watch()` stops firing once
//!    its `Subscription` is dropped.
//! 3. Dropping a `BindingScope` releases every held subscription.

use super::observable::{Observable, Subscription};

/// A readable, watchable value.
pub trait ValueSource<T> {
    /// Current value.
    fn current(&self) -> T;

    /// Call `callback` with the new value every time it changes.
    fn watch(&self, callback: Box<dyn Fn(T)>) -> Subscription;
}

impl<T: Clone + PartialEq + 'static> ValueSource<T> for Observable<T> {
    fn current(&self) -> T {
        self.get()
    }

    fn watch(&self, callback: Box<dyn Fn(T)>) -> Subscription {
        self.subscribe(move |value| callback(value.clone()))
    }
}

// ---------------------------------------------------------------------------
// BindingScope — lifecycle management
// ---------------------------------------------------------------------------

/// Collects subscriptions for a logical scope (e.g., a control).
///
/// When the scope is dropped, all held subscriptions are released, cleanly
/// disconnecting every listener associated with that scope.
///
/// # Invariants
///
/// 1. After drop, no callbacks from this scope will fire.
/// 2. `clear()` releases all subscriptions immediately (reusable scope).
/// 3. Binding count is always accurate.
#[derive(Default)]
pub struct BindingScope {
    subscriptions: Vec<Subscription>,
}

impl BindingScope {
    /// Create an empty binding scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `sub` alive until the scope is dropped or cleared.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe to an observable within this scope.
    ///
    /// Returns a reference to the scope for chaining.
    pub fn subscribe<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        let sub = source.subscribe(callback);
        self.subscriptions.push(sub);
        self
    }

    /// Number of active subscriptions in this scope.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the scope holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release all subscriptions immediately (scope becomes empty but reusable).
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}

impl std::fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingScope")
            .field("binding_count", &self.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn observable_as_value_source() {
        let obs = Observable::new(3);
        assert_eq!(obs.current(), 3);

        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        let _sub = obs.watch(Box::new(move |v| s.set(v)));
        obs.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn scope_drop_releases_subscriptions() {
        let obs = Observable::new(0);
        let seen = Rc::new(Cell::new(0));

        {
            let mut scope = BindingScope::new();
            let s = Rc::clone(&seen);
            scope.subscribe(&obs, move |v| s.set(*v));
            obs.set(1);
            assert_eq!(seen.get(), 1);
        }

        obs.set(99);
        assert_eq!(seen.get(), 1, "callback should not fire after scope dropped");
    }

    #[test]
    fn scope_clear_releases() {
        let obs = Observable::new(0);
        let seen = Rc::new(Cell::new(0));

        let mut scope = BindingScope::new();
        let s = Rc::clone(&seen);
        scope.subscribe(&obs, move |v| s.set(*v));
        assert_eq!(scope.binding_count(), 1);

        scope.clear();
        assert!(scope.is_empty());

        obs.set(42);
        assert_eq!(seen.get(), 0, "callback should not fire after clear");
    }

    #[test]
    fn scope_hold_external_subscription() {
        let obs = Observable::new(0);
        let seen = Rc::new(Cell::new(0));

        let mut scope = BindingScope::new();
        let s = Rc::clone(&seen);
        scope.hold(obs.subscribe(move |v| s.set(*v)));

        obs.set(5);
        assert_eq!(seen.get(), 5);

        drop(scope);
        obs.set(99);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn scope_debug_format() {
        let mut scope = BindingScope::new();
        let obs = Observable::new(0);
        scope.subscribe(&obs, |_| {}).subscribe(&obs, |_| {});
        assert!(format!("{scope:?}").contains("binding_count: 2"));
    }
}
