//! Typed change notifications.
//!
//! Each observable component defines an event enum and a matching `Kind`
//! enum. Observers register a callback for one kind and are called, in
//! registration order, every time an event of that kind is emitted.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// An event with a discriminating kind.
pub trait Event: 'static {
    /// The payload-free discriminant used to register observers.
    type Kind: Copy + Eq + Hash + fmt::Debug;

    /// Returns the kind of this event.
    fn kind(&self) -> Self::Kind;
}

type Callback<E> = Box<dyn FnMut(&E) + Send>;

/// A set of observers keyed by event kind.
pub struct Listeners<E: Event> {
    by_kind: HashMap<E::Kind, Vec<Callback<E>>>,
}

impl<E: Event> Listeners<E> {
    /// Creates an empty listener set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_kind: HashMap::new(),
        }
    }

    /// Registers `callback` for events of `kind`.
    pub fn subscribe<F>(&mut self, kind: E::Kind, callback: F)
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.by_kind.entry(kind).or_default().push(Box::new(callback));
    }

    /// Calls every observer registered for the event's kind.
    pub fn emit(&mut self, event: &E) {
        if let Some(callbacks) = self.by_kind.get_mut(&event.kind()) {
            for callback in callbacks {
                callback(event);
            }
        }
    }
}

impl<E: Event> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, callbacks) in &self.by_kind {
            map.entry(kind, &callbacks.len());
        }
        map.finish()
    }
}
