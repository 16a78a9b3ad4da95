//! Observable shared state.
//!
//! An [`Entity`] wraps a value behind a `RwLock` and notifies subscribers every
//! time it is written. Pages use entities for the data they share (session,
//! drafts) and the router uses one as the outlet that holds the current view.

use std::sync::{Arc, RwLock};
use tokio::sync::watch;

/// Shared state wrapper with RwLock for concurrent access.
pub type SharedState<T> = Arc<RwLock<T>>;

/// Entity handle with change notification.
pub struct Entity<T: Send + Sync> {
    inner: SharedState<T>,
    tx: watch::Sender<()>,
}

impl<T: Send + Sync> Entity<T> {
    /// Create a new entity with the given initial value.
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(());
        Self {
            inner: Arc::new(RwLock::new(value)),
            tx,
        }
    }

    /// Update the inner value using a closure and notify subscribers.
    pub fn update<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.write().map_err(|_| crate::Error::LockPoisoned)?;
        let res = f(&mut *guard);
        drop(guard);
        let _ = self.tx.send(());
        Ok(res)
    }

    /// Replace the inner value and notify subscribers.
    pub fn set(&self, value: T) -> crate::Result<()> {
        self.update(|inner| *inner = value)
    }

    /// Read the inner value using a closure.
    pub fn read<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.read().map_err(|_| crate::Error::LockPoisoned)?;
        Ok(f(&*guard))
    }

    /// Subscribe to changes of this entity.
    pub fn subscribe(&self) -> watch::Receiver<()> {
        self.tx.subscribe()
    }
}

impl<T: Send + Sync + Default> Default for Entity<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Send + Sync> Clone for Entity<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            tx: watch::Sender::clone(&self.tx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let entity = Entity::new(1);
        let other = entity.clone();
        other.update(|v| *v += 41).unwrap();
        assert_eq!(entity.read(|v| *v).unwrap(), 42);
    }

    #[test]
    fn test_update_notifies_subscribers() {
        let entity = Entity::new(String::new());
        let mut rx = entity.subscribe();
        assert!(!rx.has_changed().unwrap());

        entity.set("changed".to_string()).unwrap();
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_update_from_another_task() {
        let entity = Entity::new(0u32);
        let mut rx = entity.subscribe();
        let writer = entity.clone();

        tokio::spawn(async move {
            writer.update(|v| *v = 7).unwrap();
        });

        rx.changed().await.unwrap();
        assert_eq!(entity.read(|v| *v).unwrap(), 7);
    }
}
