// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronous change notification.
//!
//! [`Notifier`] is a tiny ordered observer list. Handlers run synchronously,
//! in registration order, for every published event; nothing is coalesced or
//! deduplicated.
//!
//! ```
//! use understory_camera::notify::Notifier;
//! use std::{cell::RefCell, rc::Rc};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut notifier = Notifier::new();
//!
//! let log = seen.clone();
//! let sub = notifier.subscribe(move |v: &u32| log.borrow_mut().push(*v));
//! notifier.publish(&1);
//! assert!(notifier.unsubscribe(sub));
//! notifier.publish(&2);
//!
//! assert_eq!(*seen.borrow(), [1]);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::state::{CameraState, Dimensions};

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Entry<E> {
    subscription: Subscription,
    handler: Box<dyn FnMut(&E)>,
}

/// Ordered list of event handlers.
pub struct Notifier<E> {
    entries: Vec<Entry<E>>,
    next: u64,
}

impl<E> Notifier<E> {
    /// Creates a notifier with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next: 0,
        }
    }

    /// Registers `handler`; it runs after every handler registered before it.
    pub fn subscribe(&mut self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let subscription = Subscription(self.next);
        self.next += 1;
        self.entries.push(Entry {
            subscription,
            handler: Box::new(handler),
        });
        subscription
    }

    /// Removes a handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.subscription != subscription);
        self.entries.len() != before
    }

    /// Calls every handler with `event`.
    pub fn publish(&mut self, event: &E) {
        for entry in &mut self.entries {
            (entry.handler)(event);
        }
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("handlers", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// Which camera notifications a handler is interested in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// The camera state changed; see [`CameraEvent::Updated`].
    Updated,
    /// The surface dimensions changed; see [`CameraEvent::Resized`].
    Resized,
}

/// A camera notification and its snapshot payload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CameraEvent {
    /// Fired by every `set_state`, carrying the full new state.
    Updated(CameraState),
    /// Fired by every `resize`, carrying the new dimensions.
    Resized(Dimensions),
}

impl CameraEvent {
    /// The topic this event is published under.
    #[must_use]
    pub fn topic(&self) -> Topic {
        match self {
            Self::Updated(_) => Topic::Updated,
            Self::Resized(_) => Topic::Resized,
        }
    }
}
