// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use core::fmt;

/// Identifies one requested frame callback.
///
/// Ids are handed out in increasing order and never reused by the
/// [`FrameQueue`] that issued them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(u64);

impl FrameId {
    /// Creates an id from its raw value.
    ///
    /// Hosts that implement their own [`FrameScheduler`](crate::FrameScheduler)
    /// use this to wrap their native callback handles.
    #[must_use]
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of this id.
    #[must_use]
    #[inline]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FrameId").field(&self.0).finish()
    }
}

/// FIFO of requested frames.
///
/// Frames are delivered in request order. Cancelled frames are removed
/// immediately and never delivered.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    pending: VecDeque<FrameId>,
    next: u64,
}

impl FrameQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a new frame and returns its id.
    pub fn push(&mut self) -> FrameId {
        let id = FrameId(self.next);
        self.next += 1;
        self.pending.push_back(id);
        id
    }

    /// Cancels a pending frame.
    ///
    /// Returns `false` if `id` was already delivered, cancelled, or never
    /// issued by this queue.
    pub fn cancel(&mut self, id: FrameId) -> bool {
        match self.pending.iter().position(|&p| p == id) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the oldest pending frame.
    pub fn pop(&mut self) -> Option<FrameId> {
        self.pending.pop_front()
    }

    /// Removes every pending frame, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = FrameId> + '_ {
        self.pending.drain(..)
    }

    /// Returns `true` if `id` is still pending.
    #[must_use]
    pub fn contains(&self, id: FrameId) -> bool {
        self.pending.contains(&id)
    }

    /// Number of pending frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no frames are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
