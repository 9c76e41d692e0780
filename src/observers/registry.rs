//! Observer registry.

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Create a new subscription ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Receives a snapshot after every committed change.
///
/// Implemented for any `FnMut(&GameSnapshot)` closure.
pub trait GameObserver {
    /// Called once per committed change, in registration order.
    fn on_change(&mut self, snapshot: &GameSnapshot);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameSnapshot),
{
    fn on_change(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}

/// Ordered list of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(SubscriptionId, Box<dyn GameObserver>)>,
    next_id: u32,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer at the end of the notification order.
    pub fn register(&mut self, observer: Box<dyn GameObserver>) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if the id is unknown.
    pub fn unregister(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Deliver a snapshot to one observer.
    ///
    /// Returns false if the id is unknown.
    pub fn notify_one(&mut self, id: SubscriptionId, snapshot: &GameSnapshot) -> bool {
        match self.observers.iter_mut().find(|(sid, _)| *sid == id) {
            Some((_, observer)) => {
                observer.on_change(snapshot);
                true
            }
            None => false,
        }
    }

    /// Deliver a snapshot to every observer in registration order.
    pub fn notify_all(&mut self, snapshot: &GameSnapshot) {
        for (_, observer) in &mut self.observers {
            observer.on_change(snapshot);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}
