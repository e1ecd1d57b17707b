// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use log::trace;

use crate::clock::{Clock, ManualClock};
use crate::queue::{FrameId, FrameQueue};

/// Next‑frame scheduling capability supplied by the host.
///
/// A component that animates holds a scheduler, requests a frame when it wants
/// to run again and is later handed that [`FrameId`] back by the host. The
/// scheduler itself never calls into the component.
pub trait FrameScheduler {
    /// Current time of the clock frames are timed against.
    fn now(&self) -> Duration;

    /// Requests a callback on the next frame.
    fn request_frame(&mut self) -> FrameId;

    /// Cancels a previously requested frame.
    ///
    /// Returns `false` if the frame was already delivered or cancelled.
    fn cancel_frame(&mut self, id: FrameId) -> bool;
}

/// A [`FrameScheduler`] that queues requests until the host collects them.
///
/// Each host tick, call [`take_frames`](Self::take_frames) (or
/// [`next_frame`](Self::next_frame) in a loop) and deliver the ids to the
/// component that requested them. Frames requested while delivering land in
/// the queue for the next tick.
#[derive(Clone, Debug, Default)]
pub struct QueuedScheduler<C> {
    clock: C,
    queue: FrameQueue,
}

/// Virtual‑time scheduler for tests and headless hosts.
pub type ManualScheduler = QueuedScheduler<ManualClock>;

impl<C: Clock> QueuedScheduler<C> {
    /// Creates a scheduler timed against `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            queue: FrameQueue::new(),
        }
    }
}

impl<C> QueuedScheduler<C> {
    /// Removes and returns the oldest pending frame.
    pub fn next_frame(&mut self) -> Option<FrameId> {
        self.queue.pop()
    }

    /// Removes every frame pending right now, oldest first.
    pub fn take_frames(&mut self) -> Vec<FrameId> {
        self.queue.drain().collect()
    }

    /// Number of frames waiting for delivery.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if `id` is waiting for delivery.
    #[must_use]
    pub fn is_pending(&self, id: FrameId) -> bool {
        self.queue.contains(id)
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the clock mutably.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl QueuedScheduler<ManualClock> {
    /// Advances the virtual clock by `by`.
    pub fn advance(&mut self, by: Duration) {
        self.clock.advance(by);
    }
}

impl<C: Clock> FrameScheduler for QueuedScheduler<C> {
    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn request_frame(&mut self) -> FrameId {
        let id = self.queue.push();
        trace!("requested frame {id:?}");
        id
    }

    fn cancel_frame(&mut self, id: FrameId) -> bool {
        let cancelled = self.queue.cancel(id);
        trace!("cancel frame {id:?}: {cancelled}");
        cancelled
    }
}
