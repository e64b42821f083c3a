#![forbid(unsafe_code)]

//! Synchronous change listeners.
//!
//! [`ChangeListeners`] is a subscription list that delivers events on the
//! emitting thread. The registry lock is only held while the listener list
//! is copied, never while a listener runs, so a listener may subscribe,
//! unsubscribe, or trigger further events without deadlocking.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use styled_label_core::ChangeListeners;
//!
//! let listeners = ChangeListeners::<u32>::new();
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&seen);
//! let id = listeners.subscribe(move |value| {
//!     counter.fetch_add(*value as usize, Ordering::SeqCst);
//! });
//!
//! listeners.emit(&3);
//! assert_eq!(seen.load(Ordering::SeqCst), 3);
//!
//! assert!(listeners.unsubscribe(id));
//! listeners.emit(&3);
//! assert_eq!(seen.load(Ordering::SeqCst), 3);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle returned by [`ChangeListeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Registry<E> {
    next_id: u64,
    entries: Vec<(ListenerId, Listener<E>)>,
}

/// An ordered list of listeners for events of type `E`.
///
/// Listeners are called in subscription order.
pub struct ChangeListeners<E> {
    registry: Mutex<Registry<E>>,
}

impl<E> ChangeListeners<E> {
    /// Create an empty listener list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry<E>> {
        // A panicking listener never runs under this lock, so the list is
        // still consistent after a poison.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener. Returns an id usable with [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was unknown.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut registry = self.lock();
        let before = registry.entries.len();
        registry.entries.retain(|(entry, _)| *entry != id);
        registry.entries.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Check if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` to every listener on the calling thread.
    pub fn emit(&self, event: &E) {
        let listeners: Vec<Listener<E>> = self
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }
}

impl<E> Default for ChangeListeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ChangeListeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("listeners", &self.len())
            .finish()
    }
}
