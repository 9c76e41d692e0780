//! Synchronous state-change notification.
//!
//! The engine owns one `ObserverRegistry`. After every committed mutation it
//! builds a single `GameSnapshot` and hands it to each observer in
//! registration order, on the caller's thread, before returning.
//!
//! Observers receive a shared reference to a freshly built copy; cloning it
//! is the way to keep it. While the callback runs the engine is exclusively
//! borrowed, so an observer cannot call back into `move` or `undo`.

pub mod registry;

pub use registry::{GameObserver, ObserverRegistry, SubscriptionId};
