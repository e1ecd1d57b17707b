// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host‑agnostic clock and frame scheduling primitives.
//!
//! UI components that animate need two things from their host: a monotonic
//! notion of "now" and a way to ask for "call me back on the next frame".
//! This crate models both without assuming any event loop:
//!
//! - [`Clock`]: a monotonic time source expressed as a [`Duration`](core::time::Duration) since an
//!   arbitrary origin. [`ManualClock`] is driven explicitly (tests, replay,
//!   headless rendering); `StdClock` reads `std::time::Instant`.
//! - [`FrameScheduler`]: request and cancel next‑frame callbacks, identified by
//!   [`FrameId`]s.
//! - [`FrameQueue`]: FIFO bookkeeping of requested frames with cancellation.
//! - [`QueuedScheduler`]: a [`FrameScheduler`] over a [`FrameQueue`] and a
//!   [`Clock`]. The host pops ready frames once per tick and delivers them to
//!   whoever requested them. [`ManualScheduler`] is the virtual‑time variant.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_timing::{FrameScheduler, ManualScheduler};
//!
//! let mut scheduler = ManualScheduler::default();
//! let a = scheduler.request_frame();
//! let b = scheduler.request_frame();
//! assert!(scheduler.cancel_frame(a));
//!
//! scheduler.advance(Duration::from_millis(16));
//! assert_eq!(scheduler.now(), Duration::from_millis(16));
//! assert_eq!(scheduler.take_frames(), vec![b]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`; `StdClock` requires the `std`
//! feature.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod clock;
mod queue;
mod scheduler;

#[cfg(feature = "std")]
pub use clock::StdClock;
pub use clock::{Clock, ManualClock};
pub use queue::{FrameId, FrameQueue};
pub use scheduler::{FrameScheduler, ManualScheduler, QueuedScheduler};
