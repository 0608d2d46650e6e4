#![forbid(unsafe_code)]

//! Reactive primitives the binding engine is built on.
//!
//! - [`Observable`]: a shared, version-tracked value wrapper with change
//!   notification via subscriber callbacks.
//! - [`Subscription`]: RAII guard that automatically unsubscribes on drop.
//! - [`Property`]: a settable slot that can follow any [`ValueSource`].
//! - [`BindingScope`]: holds a group of subscriptions for one owner.
//!
//! # Architecture
//!
//! `Observable<T>` uses `Rc<RefCell<..>>` for single-threaded shared
//! ownership. Subscribers are stored as `Weak` function pointers and cleaned
//! up lazily during notification. Everything here is `!Send` and meant to
//! live on the UI thread.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per mutation that changes the value.
//! 2. Subscribers are notified in registration order.
//! 3. Setting a value equal to the current value is a no-op (no version bump,
//!    no notifications).
//! 4. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.

pub mod binding;
pub mod observable;
pub mod property;

pub use binding::{BindingScope, ValueSource};
pub use observable::{Observable, Subscription};
pub use property::{Property, StringProperty};
