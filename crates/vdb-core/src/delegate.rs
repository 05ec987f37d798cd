//! Multicast delegates for change notification.
//!
//! A [`MulticastDelegate`] is an ordered list of handlers invoked
//! synchronously by [`MulticastDelegate::broadcast`]. Handlers run in the
//! order they were added.

use std::fmt;

/// Identifies a handler bound to a [`MulticastDelegate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelegateHandle(u64);

type Handler<T> = Box<dyn FnMut(T) + Send>;

/// An ordered list of event handlers sharing one payload type.
pub struct MulticastDelegate<T: Copy> {
    handlers: Vec<(DelegateHandle, Handler<T>)>,
    next_id: u64,
}

impl<T: Copy> MulticastDelegate<T> {
    /// Creates a delegate with no handlers bound.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Binds a handler and returns the handle used to remove it.
    pub fn add(&mut self, handler: impl FnMut(T) + Send + 'static) -> DelegateHandle {
        let handle = DelegateHandle(self.next_id);
        self.next_id += 1;
        self.handlers.push((handle, Box::new(handler)));
        handle
    }

    /// Removes a handler. Returns false if the handle was not bound.
    pub fn remove(&mut self, handle: DelegateHandle) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != handle);
        self.handlers.len() != before
    }

    /// Removes all handlers.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of bound handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns true if at least one handler is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Invokes every handler with `payload`, in subscription order.
    pub fn broadcast(&mut self, payload: T) {
        for (_, handler) in &mut self.handlers {
            handler(payload);
        }
    }
}

impl<T: Copy> Default for MulticastDelegate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> fmt::Debug for MulticastDelegate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MulticastDelegate")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
