// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use hashbrown::HashMap;

use crate::curve::{Curve, Easing, UnknownEasing};

/// Name → [`Curve`] lookup used to resolve easing names at animation time.
///
/// A new registry contains every built‑in [`Easing`] under its
/// [`Easing::name`]. Registering a curve under an existing name replaces it.
#[derive(Clone)]
pub struct EasingRegistry {
    curves: HashMap<String, Curve>,
}

impl EasingRegistry {
    /// Creates a registry preloaded with the built‑in curves.
    #[must_use]
    pub fn new() -> Self {
        let mut curves = HashMap::with_capacity(Easing::ALL.len());
        for easing in Easing::ALL {
            curves.insert(easing.name().into(), Curve::Named(easing));
        }
        Self { curves }
    }

    /// Creates a registry with no curves at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            curves: HashMap::new(),
        }
    }

    /// Registers `curve` under `name`, returning the curve it replaced, if any.
    pub fn register(&mut self, name: impl Into<String>, curve: impl Into<Curve>) -> Option<Curve> {
        self.curves.insert(name.into(), curve.into())
    }

    /// Removes the curve registered under `name`.
    pub fn unregister(&mut self, name: &str) -> Option<Curve> {
        self.curves.remove(name)
    }

    /// Returns the curve registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Curve> {
        self.curves.get(name)
    }

    /// Returns a clone of the curve registered under `name`, or an error naming it.
    pub fn resolve(&self, name: &str) -> Result<Curve, UnknownEasing> {
        self.get(name).cloned().ok_or_else(|| UnknownEasing::new(name))
    }

    /// Returns `true` if a curve is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Iterates over registered names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.curves.keys().map(String::as_str)
    }

    /// Number of registered curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns `true` if no curves are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl Default for EasingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EasingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.curves.keys()).finish()
    }
}
