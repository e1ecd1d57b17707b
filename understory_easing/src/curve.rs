// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Built‑in easing curves.
///
/// Every curve maps `0.0 → 0.0` and `1.0 → 1.0` and is monotonic on `[0, 1]`.
/// Inputs outside that range are not clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Accelerates from zero velocity.
    QuadraticIn,
    /// Decelerates to zero velocity.
    QuadraticOut,
    /// Accelerates until halfway, then decelerates.
    #[default]
    QuadraticInOut,
    /// Cubic acceleration from zero velocity.
    CubicIn,
    /// Cubic deceleration to zero velocity.
    CubicOut,
    /// Cubic acceleration until halfway, then cubic deceleration.
    CubicInOut,
}

impl Easing {
    /// All built‑in curves, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Linear,
        Self::QuadraticIn,
        Self::QuadraticOut,
        Self::QuadraticInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
    ];

    /// Returns the registry name of this curve, e.g. `"quadraticInOut"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadraticIn => "quadraticIn",
            Self::QuadraticOut => "quadraticOut",
            Self::QuadraticInOut => "quadraticInOut",
            Self::CubicIn => "cubicIn",
            Self::CubicOut => "cubicOut",
            Self::CubicInOut => "cubicInOut",
        }
    }

    /// Looks up a built‑in curve by its registry name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Evaluates the curve at normalized time `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => t * (2.0 - t),
            Self::QuadraticInOut => {
                let k = t * 2.0;
                if k < 1.0 {
                    0.5 * k * k
                } else {
                    let k = k - 1.0;
                    -0.5 * (k * (k - 2.0) - 1.0)
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let k = t - 1.0;
                k * k * k + 1.0
            }
            Self::CubicInOut => {
                let k = t * 2.0;
                if k < 1.0 {
                    0.5 * k * k * k
                } else {
                    let k = k - 2.0;
                    0.5 * (k * k * k + 2.0)
                }
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownEasing::new(s))
    }
}

/// Error returned when an easing name does not resolve to a curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownEasing {
    name: String,
}

impl UnknownEasing {
    /// Creates an error for the given unresolved name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown easing curve `{}`", self.name)
    }
}

impl core::error::Error for UnknownEasing {}

/// An easing curve: a built‑in [`Easing`] or a caller supplied function.
///
/// Cloning is cheap; custom functions are shared behind an `Rc`.
#[derive(Clone)]
pub enum Curve {
    /// One of the built‑in curves.
    Named(Easing),
    /// An application supplied curve.
    Custom(Rc<dyn Fn(f64) -> f64>),
}

impl Curve {
    /// Wraps a function as a custom curve.
    pub fn custom(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    /// Evaluates the curve at normalized time `t`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Named(easing) => easing.apply(t),
            Self::Custom(f) => f(t),
        }
    }

    /// Returns the built‑in curve, if this is one.
    #[must_use]
    pub fn as_named(&self) -> Option<Easing> {
        match self {
            Self::Named(easing) => Some(*easing),
            Self::Custom(_) => None,
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::Named(Easing::default())
    }
}

impl From<Easing> for Curve {
    fn from(easing: Easing) -> Self {
        Self::Named(easing)
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(easing) => f.debug_tuple("Named").field(easing).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
