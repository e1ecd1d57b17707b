// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_camera --heading-base-level=0

//! Understory Camera: an animated 2D camera for graph surfaces.
//!
//! A [`Camera`] tracks which part of an infinite graph plane is visible on a
//! rendering surface:
//! - [`CameraState`]: the graph‑space center (`x`, `y`), rotation (`angle`,
//!   radians) and zoom `ratio` (graph units per display unit).
//! - [`Dimensions`]: the surface size in display units (pixels).
//!
//! It converts points between display and graph space, animates between
//! states over time with pluggable easing curves, and notifies observers
//! (typically a renderer) whenever the state or the surface size changes.
//!
//! It does **not** own a render loop, do hit testing, or validate state
//! values. Callers are expected to:
//! - Call [`Camera::resize`] when the surface size changes.
//! - Drive the camera from input at a higher layer with
//!   [`Camera::set_state`] and [`Camera::animate`].
//! - Deliver frames requested through the injected
//!   [`FrameScheduler`](understory_timing::FrameScheduler) to
//!   [`Camera::on_frame`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_camera::{AnimationOptions, Camera, CameraStatePatch, Dimensions};
//! use understory_timing::ManualScheduler;
//!
//! let mut camera = Camera::new(ManualScheduler::default());
//! camera.resize(Dimensions::new(800.0, 600.0));
//!
//! // The graph origin sits at the surface center.
//! let p = camera.graph_to_display(0.0, 0.0);
//! assert_eq!((p.x, p.y), (400.0, 300.0));
//!
//! // Animate to ratio 2 over 100ms of virtual time.
//! camera
//!     .animate(
//!         CameraStatePatch::default().with_ratio(2.0),
//!         AnimationOptions::default().with_duration(Duration::from_millis(100)),
//!     )
//!     .unwrap();
//!
//! while camera.is_animated() {
//!     camera.scheduler_mut().advance(Duration::from_millis(16));
//!     for frame in camera.scheduler_mut().take_frames() {
//!         camera.on_frame(frame);
//!     }
//! }
//! assert_eq!(camera.state().ratio, 2.0);
//! ```
//!
//! ## Animations
//!
//! At most one animation is in flight. Starting another one cancels the
//! pending frame of the previous animation, whose target is then never
//! applied. Each frame interpolates only the fields present in the target;
//! the final frame applies the target exactly. [`Camera::animate`] returns an
//! [`AnimationId`] that can be passed to [`Camera::cancel_animation`].
//!
//! ## Notifications
//!
//! [`Camera::subscribe`] (or [`Camera::on_updated`] / [`Camera::on_resized`])
//! registers observers. Every [`Camera::set_state`] publishes one
//! [`CameraEvent::Updated`] and every [`Camera::resize`] one
//! [`CameraEvent::Resized`], synchronously and before the call returns, even
//! when no value changed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod camera;
pub mod notify;
mod state;
pub mod transform;

pub use animation::{
    AnimateError, AnimationId, AnimationOptions, DEFAULT_DURATION, DEFAULT_ZOOMING_RATIO,
    EasingChoice,
};
pub use camera::{Camera, CameraDebugInfo};
pub use notify::{CameraEvent, Subscription, Topic};
pub use state::{CameraState, CameraStatePatch, Dimensions, DimensionsPatch};
