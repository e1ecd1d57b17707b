// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between display space (surface pixels) and graph space.
//!
//! These are pure functions of a [`CameraState`] and, for the graph → display
//! direction, the surface [`Dimensions`]. [`Camera`](crate::Camera) exposes
//! them over its live state.
//!
//! The two directions are **not** inverses of each other:
//! [`display_to_graph`] treats its input as an offset from the viewport
//! center and neither subtracts the surface center nor the camera position,
//! while [`graph_to_display`] centers the camera position on the surface.
//! Callers that need a round trip must account for that themselves.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`/`cos`
use kurbo::{Affine, Point};

use crate::state::{CameraState, Dimensions};

/// Maps a display‑space offset into graph space.
///
/// Rotates `(x, y)` by the camera angle and scales by the camera ratio:
/// `((x·cos − y·sin)·ratio, (y·cos + x·sin)·ratio)`.
#[must_use]
pub fn display_to_graph(state: CameraState, x: f64, y: f64) -> Point {
    let cos = state.angle.cos();
    let sin = state.angle.sin();
    Point::new(
        (x * cos - y * sin) * state.ratio,
        (y * cos + x * sin) * state.ratio,
    )
}

/// Maps a graph‑space point onto the surface.
///
/// The camera position lands on the surface center; rotation and ratio are
/// applied around it.
#[must_use]
pub fn graph_to_display(state: CameraState, dimensions: Dimensions, x: f64, y: f64) -> Point {
    let (rel_cos, rel_sin, x_offset, y_offset) = coefficients(state, dimensions);
    Point::new(
        x * rel_cos + y * rel_sin + x_offset,
        y * rel_cos + x * rel_sin + y_offset,
    )
}

/// The [`graph_to_display`] mapping as a kurbo [`Affine`].
///
/// Useful for handing a single matrix to a renderer.
#[must_use]
pub fn graph_to_display_affine(state: CameraState, dimensions: Dimensions) -> Affine {
    let (rel_cos, rel_sin, x_offset, y_offset) = coefficients(state, dimensions);
    Affine::new([rel_cos, rel_sin, rel_sin, rel_cos, x_offset, y_offset])
}

fn coefficients(state: CameraState, dimensions: Dimensions) -> (f64, f64, f64, f64) {
    let cos = state.angle.cos();
    let sin = state.angle.sin();
    let rel_cos = cos / state.ratio;
    let rel_sin = sin / state.ratio;
    let x_offset = dimensions.width / 2.0 - state.x * rel_cos - state.y * rel_sin;
    let y_offset = dimensions.height / 2.0 - state.y * rel_cos + state.x * rel_sin;
    (rel_cos, rel_sin, x_offset, y_offset)
}
