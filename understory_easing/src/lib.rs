// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_easing --heading-base-level=0

//! Understory Easing: named easing curves for UI animation.
//!
//! An easing curve maps normalized elapsed time in `[0, 1]` to a normalized
//! progress coefficient, usually also in `[0, 1]`. Animation drivers compute
//! `t = elapsed / duration`, pass it through a curve and interpolate with the
//! result.
//!
//! This crate provides:
//! - [`Easing`]: the built‑in polynomial curves, addressable by name
//!   (`"linear"`, `"quadraticInOut"`, …).
//! - [`Curve`]: either a built‑in [`Easing`] or an application supplied
//!   function.
//! - [`EasingRegistry`]: a name → [`Curve`] lookup, preloaded with the
//!   built‑ins, which hosts can extend with their own curves.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_easing::{Curve, Easing, EasingRegistry};
//!
//! let ease: Easing = "quadraticInOut".parse().unwrap();
//! assert_eq!(ease.apply(0.5), 0.5);
//!
//! let mut registry = EasingRegistry::new();
//! registry.register("snap", Curve::custom(|t| if t < 1.0 { 0.0 } else { 1.0 }));
//! assert_eq!(registry.resolve("snap").unwrap().apply(0.9), 0.0);
//! assert!(registry.resolve("bounce").is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod curve;
mod registry;

pub use curve::{Curve, Easing, UnknownEasing};
pub use registry::EasingRegistry;
