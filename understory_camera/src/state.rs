// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera state and dimension values, plus their sparse patch forms.

/// The camera transform at one instant.
///
/// `x`/`y` is the graph‑space point shown at the center of the surface,
/// `angle` the rotation in radians and `ratio` the zoom factor in graph units
/// per display unit (larger is further out). `ratio` is expected to be
/// finite and non‑zero; nothing here enforces that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Graph‑space X of the viewport center.
    pub x: f64,
    /// Graph‑space Y of the viewport center.
    pub y: f64,
    /// Rotation in radians.
    pub angle: f64,
    /// Graph units per display unit.
    pub ratio: f64,
}

impl CameraState {
    /// Creates a state from its four fields.
    #[must_use]
    pub const fn new(x: f64, y: f64, angle: f64, ratio: f64) -> Self {
        Self { x, y, angle, ratio }
    }

    /// Overwrites every field present in `patch`.
    pub fn apply(&mut self, patch: &CameraStatePatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(angle) = patch.angle {
            self.angle = angle;
        }
        if let Some(ratio) = patch.ratio {
            self.ratio = ratio;
        }
    }

    /// Returns a copy of `self` with `patch` applied.
    #[must_use]
    pub fn merged(mut self, patch: &CameraStatePatch) -> Self {
        self.apply(patch);
        self
    }
}

impl Default for CameraState {
    /// Origin‑centered, unrotated, at ratio `1.0`.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// A partial [`CameraState`]: `Some` fields are written, `None` fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraStatePatch {
    /// New X, if any.
    pub x: Option<f64>,
    /// New Y, if any.
    pub y: Option<f64>,
    /// New angle, if any.
    pub angle: Option<f64>,
    /// New ratio, if any.
    pub ratio: Option<f64>,
}

impl CameraStatePatch {
    /// A patch that changes nothing.
    pub const EMPTY: Self = Self {
        x: None,
        y: None,
        angle: None,
        ratio: None,
    };

    /// Sets `x`.
    #[must_use]
    pub const fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Sets `y`.
    #[must_use]
    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    /// Sets both `x` and `y`.
    #[must_use]
    pub const fn with_position(self, x: f64, y: f64) -> Self {
        self.with_x(x).with_y(y)
    }

    /// Sets `angle`.
    #[must_use]
    pub const fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Sets `ratio`.
    #[must_use]
    pub const fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }

    /// Returns `true` if no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.angle.is_none() && self.ratio.is_none()
    }
}

impl From<CameraState> for CameraStatePatch {
    fn from(state: CameraState) -> Self {
        Self {
            x: Some(state.x),
            y: Some(state.y),
            angle: Some(state.angle),
            ratio: Some(state.ratio),
        }
    }
}

/// Pixel size of the rendering surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    /// Width in display units.
    pub width: f64,
    /// Height in display units.
    pub height: f64,
}

impl Dimensions {
    /// Creates dimensions of `width × height`.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Overwrites every field present in `patch`.
    pub fn apply(&mut self, patch: &DimensionsPatch) {
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
    }
}

/// A partial [`Dimensions`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DimensionsPatch {
    /// New width, if any.
    pub width: Option<f64>,
    /// New height, if any.
    pub height: Option<f64>,
}

impl DimensionsPatch {
    /// Sets `width`.
    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets `height`.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

impl From<Dimensions> for DimensionsPatch {
    fn from(dimensions: Dimensions) -> Self {
        Self {
            width: Some(dimensions.width),
            height: Some(dimensions.height),
        }
    }
}
