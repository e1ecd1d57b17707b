// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};
use log::{debug, trace};
use understory_easing::EasingRegistry;
use understory_timing::{FrameId, FrameScheduler};

use crate::animation::{AnimateError, Animation, AnimationId, AnimationOptions, EasingChoice};
use crate::notify::{CameraEvent, Notifier, Subscription, Topic};
use crate::state::{CameraState, CameraStatePatch, Dimensions, DimensionsPatch};
use crate::transform;

/// Camera over an infinite graph plane, rendered onto a surface of
/// [`Dimensions`].
///
/// A `Camera` owns:
/// - the current [`CameraState`] (position, angle, ratio),
/// - the surface [`Dimensions`],
/// - at most one animation in flight, paced by the injected
///   [`FrameScheduler`] `S`,
/// - an [`EasingRegistry`] used to resolve easing names,
/// - the observers of `updated` / `resized` notifications.
///
/// Every state change, direct or animated, goes through
/// [`set_state`](Self::set_state), which publishes one
/// [`CameraEvent::Updated`] per call.
pub struct Camera<S> {
    state: CameraState,
    previous: Option<CameraState>,
    dimensions: Dimensions,
    animation: Option<Animation>,
    next_animation: u64,
    easings: EasingRegistry,
    scheduler: S,
    events: Notifier<CameraEvent>,
}

impl<S: FrameScheduler> Camera<S> {
    /// Creates a camera at the default state with a `0 × 0` surface and the
    /// built‑in easing curves.
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self::with_easings(scheduler, EasingRegistry::new())
    }

    /// Creates a camera that resolves easing names through `easings`.
    #[must_use]
    pub fn with_easings(scheduler: S, easings: EasingRegistry) -> Self {
        Self {
            state: CameraState::default(),
            previous: None,
            dimensions: Dimensions::default(),
            animation: None,
            next_animation: 0,
            easings,
            scheduler,
            events: Notifier::new(),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Returns the state as it was before the most recent
    /// [`set_state`](Self::set_state), if there has been one.
    #[must_use]
    pub fn previous_state(&self) -> Option<CameraState> {
        self.previous
    }

    /// Returns a snapshot of the surface dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns `true` while an animation is waiting for its next frame.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    /// Returns the animation in flight, if any.
    #[must_use]
    pub fn current_animation(&self) -> Option<AnimationId> {
        self.animation.as_ref().map(|a| a.id)
    }

    /// Writes the fields present in `patch` and notifies `updated` observers.
    ///
    /// Observers are notified even if no value changed.
    pub fn set_state(&mut self, patch: impl Into<CameraStatePatch>) -> &mut Self {
        let patch = patch.into();
        self.previous = Some(self.state);
        self.state.apply(&patch);
        self.events.publish(&CameraEvent::Updated(self.state));
        self
    }

    /// Writes the fields present in `patch` and notifies `resized` observers.
    pub fn resize(&mut self, patch: impl Into<DimensionsPatch>) -> &mut Self {
        self.dimensions.apply(&patch.into());
        self.events.publish(&CameraEvent::Resized(self.dimensions));
        self
    }

    /// Maps a display‑space offset from the viewport center into graph space.
    ///
    /// See [`transform::display_to_graph`]; this is not the inverse of
    /// [`graph_to_display`](Self::graph_to_display).
    #[must_use]
    pub fn display_to_graph(&self, x: f64, y: f64) -> Point {
        transform::display_to_graph(self.state, x, y)
    }

    /// Maps a graph‑space point onto the surface.
    #[must_use]
    pub fn graph_to_display(&self, x: f64, y: f64) -> Point {
        transform::graph_to_display(self.state, self.dimensions, x, y)
    }

    /// The current graph → display mapping as an [`Affine`].
    #[must_use]
    pub fn graph_to_display_affine(&self) -> Affine {
        transform::graph_to_display_affine(self.state, self.dimensions)
    }

    /// Starts animating toward `target`, replacing any animation in flight.
    ///
    /// Only the fields present in `target` are interpolated; the others are
    /// never written. The first frame is requested from the scheduler and the
    /// call returns immediately. When the duration has elapsed, `target` is
    /// applied exactly.
    ///
    /// Fails without touching the running animation if the easing name is
    /// not registered.
    pub fn animate(
        &mut self,
        target: impl Into<CameraStatePatch>,
        options: AnimationOptions,
    ) -> Result<AnimationId, AnimateError> {
        let easing = match options.easing {
            EasingChoice::Name(name) => self.easings.resolve(&name)?,
            EasingChoice::Curve(curve) => curve,
        };

        if let Some(previous) = self.animation.take() {
            self.scheduler.cancel_frame(previous.frame);
            debug!("animation {:?} superseded", previous.id);
        }

        let id = AnimationId::new(self.next_animation);
        self.next_animation += 1;
        let start = self.scheduler.now();
        let frame = self.scheduler.request_frame();
        debug!(
            "animation {id:?} started: {easing:?} over {:?}",
            options.duration
        );
        self.animation = Some(Animation {
            id,
            frame,
            start,
            duration: options.duration,
            initial: self.state,
            target: target.into(),
            easing,
        });
        Ok(id)
    }

    /// Zooms in by `factor` (the ratio is divided by it), animated with
    /// default options.
    pub fn animated_zoom(&mut self, factor: f64) -> Result<AnimationId, AnimateError> {
        self.animated_zoom_with(factor, AnimationOptions::default())
    }

    /// Zooms in by `factor` with the given options.
    pub fn animated_zoom_with(
        &mut self,
        factor: f64,
        options: AnimationOptions,
    ) -> Result<AnimationId, AnimateError> {
        let ratio = self.state.ratio / factor;
        self.animate(CameraStatePatch::default().with_ratio(ratio), options)
    }

    /// Zooms out by `factor` (the ratio is multiplied by it), animated with
    /// default options.
    pub fn animated_unzoom(&mut self, factor: f64) -> Result<AnimationId, AnimateError> {
        self.animated_unzoom_with(factor, AnimationOptions::default())
    }

    /// Zooms out by `factor` with the given options.
    pub fn animated_unzoom_with(
        &mut self,
        factor: f64,
        options: AnimationOptions,
    ) -> Result<AnimationId, AnimateError> {
        let ratio = self.state.ratio * factor;
        self.animate(CameraStatePatch::default().with_ratio(ratio), options)
    }

    /// Animates back to [`CameraState::default`] with default options.
    pub fn animated_reset(&mut self) -> Result<AnimationId, AnimateError> {
        self.animated_reset_with(AnimationOptions::default())
    }

    /// Animates back to [`CameraState::default`] with the given options.
    pub fn animated_reset_with(
        &mut self,
        options: AnimationOptions,
    ) -> Result<AnimationId, AnimateError> {
        self.animate(CameraState::default(), options)
    }

    /// Advances the animation in flight; call when frame `frame` fires.
    ///
    /// Frames other than the one the current animation is waiting for are
    /// ignored, so hosts may deliver cancelled or stale ids safely. Returns
    /// `true` if the frame was consumed.
    pub fn on_frame(&mut self, frame: FrameId) -> bool {
        let animation = match self.animation.take() {
            Some(animation) if animation.frame == frame => animation,
            other => {
                self.animation = other;
                debug!("ignoring stale frame {frame:?}");
                return false;
            }
        };

        let t = animation.progress(self.scheduler.now());
        if t >= 1.0 {
            debug!("animation {:?} finished", animation.id);
            self.set_state(animation.target);
            return true;
        }

        let coefficient = animation.easing.apply(t);
        trace!(
            "animation {:?}: t = {t}, coefficient = {coefficient}",
            animation.id
        );
        let step = animation.interpolate(coefficient);
        self.set_state(step);
        let next = self.scheduler.request_frame();
        self.animation = Some(Animation {
            frame: next,
            ..animation
        });
        true
    }

    /// Cancels animation `id` if it is still in flight.
    ///
    /// The state stays wherever the last frame left it. Returns `false` if
    /// `id` already finished or was superseded.
    pub fn cancel_animation(&mut self, id: AnimationId) -> bool {
        if self.current_animation() != Some(id) {
            return false;
        }
        self.stop_animation()
    }

    /// Cancels whatever animation is in flight. Returns `false` if there was none.
    pub fn stop_animation(&mut self) -> bool {
        match self.animation.take() {
            Some(animation) => {
                self.scheduler.cancel_frame(animation.frame);
                debug!("animation {:?} cancelled", animation.id);
                true
            }
            None => false,
        }
    }

    /// Registers `handler` for notifications on `topic`.
    ///
    /// Handlers for both topics share one registration order.
    pub fn subscribe(
        &mut self,
        topic: Topic,
        mut handler: impl FnMut(&CameraEvent) + 'static,
    ) -> Subscription {
        self.events.subscribe(move |event| {
            if event.topic() == topic {
                handler(event);
            }
        })
    }

    /// Registers `handler` for state updates.
    pub fn on_updated(&mut self, mut handler: impl FnMut(CameraState) + 'static) -> Subscription {
        self.subscribe(Topic::Updated, move |event| {
            if let CameraEvent::Updated(state) = event {
                handler(*state);
            }
        })
    }

    /// Registers `handler` for surface resizes.
    pub fn on_resized(&mut self, mut handler: impl FnMut(Dimensions) + 'static) -> Subscription {
        self.subscribe(Topic::Resized, move |event| {
            if let CameraEvent::Resized(dimensions) = event {
                handler(*dimensions);
            }
        })
    }

    /// Removes a handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.events.unsubscribe(subscription)
    }

    /// The registry easing names are resolved against.
    #[must_use]
    pub fn easings(&self) -> &EasingRegistry {
        &self.easings
    }

    /// Mutable access to the easing registry, e.g. to register custom curves.
    pub fn easings_mut(&mut self) -> &mut EasingRegistry {
        &mut self.easings
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler.
    ///
    /// Cancelling the camera's pending frame through this handle stalls the
    /// animation; use [`stop_animation`](Self::stop_animation) instead.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Snapshot of the camera for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            state: self.state,
            previous_state: self.previous,
            dimensions: self.dimensions,
            animation: self.current_animation(),
            pending_frame: self.animation.as_ref().map(|a| a.frame),
            subscribers: self.events.len(),
        }
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for Camera<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Camera")
            .field("state", &self.state)
            .field("previous", &self.previous)
            .field("dimensions", &self.dimensions)
            .field("animation", &self.animation)
            .field("easings", &self.easings)
            .field("scheduler", &self.scheduler)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// Debug snapshot of a [`Camera`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraDebugInfo {
    /// Current state.
    pub state: CameraState,
    /// State before the most recent update.
    pub previous_state: Option<CameraState>,
    /// Surface dimensions.
    pub dimensions: Dimensions,
    /// Animation in flight, if any.
    pub animation: Option<AnimationId>,
    /// Frame the animation is waiting for, if any.
    pub pending_frame: Option<FrameId>,
    /// Number of registered observers across all topics.
    pub subscribers: usize,
}
