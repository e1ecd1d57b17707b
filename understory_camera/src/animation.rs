// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation options and the per‑animation record driven by [`Camera`](crate::Camera).

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use core::time::Duration;

use understory_easing::{Curve, Easing, UnknownEasing};
use understory_timing::FrameId;

use crate::state::{CameraState, CameraStatePatch};

/// Duration used when [`AnimationOptions`] does not override it.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(150);

/// Zoom factor hosts typically pass to
/// [`Camera::animated_zoom`](crate::Camera::animated_zoom) and
/// [`Camera::animated_unzoom`](crate::Camera::animated_unzoom).
pub const DEFAULT_ZOOMING_RATIO: f64 = 1.5;

/// How an animation picks its easing curve.
#[derive(Clone, Debug)]
pub enum EasingChoice {
    /// Look the curve up by name in the camera's easing registry when the
    /// animation starts.
    Name(Cow<'static, str>),
    /// Use this curve directly.
    Curve(Curve),
}

impl Default for EasingChoice {
    fn default() -> Self {
        Self::Name(Cow::Borrowed(Easing::QuadraticInOut.name()))
    }
}

impl From<&'static str> for EasingChoice {
    fn from(name: &'static str) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

impl From<String> for EasingChoice {
    fn from(name: String) -> Self {
        Self::Name(Cow::Owned(name))
    }
}

impl From<Easing> for EasingChoice {
    fn from(easing: Easing) -> Self {
        Self::Curve(Curve::Named(easing))
    }
}

impl From<Curve> for EasingChoice {
    fn from(curve: Curve) -> Self {
        Self::Curve(curve)
    }
}

/// Options for [`Camera::animate`](crate::Camera::animate).
///
/// Defaults to the `"quadraticInOut"` curve over [`DEFAULT_DURATION`].
#[derive(Clone, Debug)]
pub struct AnimationOptions {
    /// Easing curve, by name or by value.
    pub easing: EasingChoice,
    /// Total animation time. A zero duration completes on the first frame.
    pub duration: Duration,
}

impl AnimationOptions {
    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: impl Into<EasingChoice>) -> Self {
        self.easing = easing.into();
        self
    }

    /// Sets the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            easing: EasingChoice::default(),
            duration: DEFAULT_DURATION,
        }
    }
}

/// Identifies one call to [`Camera::animate`](crate::Camera::animate).
///
/// Pass it to [`Camera::cancel_animation`](crate::Camera::cancel_animation)
/// to stop that animation without affecting a newer one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

impl AnimationId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Error returned by [`Camera::animate`](crate::Camera::animate).
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnimateError {
    /// The easing name is not registered with the camera.
    UnknownEasing(UnknownEasing),
}

impl fmt::Display for AnimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEasing(err) => write!(f, "cannot start animation: {err}"),
        }
    }
}

impl core::error::Error for AnimateError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::UnknownEasing(err) => Some(err),
        }
    }
}

impl From<UnknownEasing> for AnimateError {
    fn from(err: UnknownEasing) -> Self {
        Self::UnknownEasing(err)
    }
}

/// An animation in flight: where it started, where it goes and the frame it
/// is waiting for.
#[derive(Clone, Debug)]
pub(crate) struct Animation {
    pub(crate) id: AnimationId,
    pub(crate) frame: FrameId,
    pub(crate) start: Duration,
    pub(crate) duration: Duration,
    pub(crate) initial: CameraState,
    pub(crate) target: CameraStatePatch,
    pub(crate) easing: Curve,
}

impl Animation {
    /// Normalized elapsed time at `now`; `>= 1.0` means done.
    pub(crate) fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        now.saturating_sub(self.start).as_secs_f64() / self.duration.as_secs_f64()
    }

    /// The targeted fields, `coefficient` of the way from the initial state.
    pub(crate) fn interpolate(&self, coefficient: f64) -> CameraStatePatch {
        let lerp = |from: f64, to: Option<f64>| to.map(|to| from + (to - from) * coefficient);
        CameraStatePatch {
            x: lerp(self.initial.x, self.target.x),
            y: lerp(self.initial.y, self.target.y),
            angle: lerp(self.initial.angle, self.target.angle),
            ratio: lerp(self.initial.ratio, self.target.ratio),
        }
    }
}
