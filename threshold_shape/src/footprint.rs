// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placed shapes: offset + rotation applied to a [`Shape`].

use kurbo::{Affine, BezPath, Rect, Shape as _, Vec2};

use crate::shape::Shape;

/// A shape placed on the floor plan.
///
/// The offset is in whole plan units and the rotation in degrees, matching
/// how object definitions store them. The placement transform rotates the
/// shape about its local origin and then moves it by the offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Representation {
    /// Shape in local coordinates.
    pub shape: Shape,
    /// Horizontal and vertical offset applied after rotation.
    pub offset: (i32, i32),
    /// Rotation in degrees around the local origin.
    pub rotation: f64,
}

impl Representation {
    /// Creates a representation with no offset and no rotation.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            offset: (0, 0),
            rotation: 0.0,
        }
    }

    /// Returns a copy with the given offset.
    #[must_use]
    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset = (x, y);
        self
    }

    /// Returns a copy with the given rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// The placement transform: `translate(offset) * rotate(radians)`.
    #[must_use]
    pub fn transform(&self) -> Affine {
        let offset = Vec2::new(f64::from(self.offset.0), f64::from(self.offset.1));
        Affine::translate(offset) * Affine::rotate(self.rotation.to_radians())
    }

    /// Applies the placement transform to the shape.
    #[must_use]
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.transform() * self.shape.to_path())
    }
}

/// A transformed outline together with its axis-aligned bounding box.
#[derive(Clone, Debug)]
pub struct Footprint {
    path: BezPath,
    bounds: Rect,
}

impl Footprint {
    /// Wraps an already transformed path.
    #[must_use]
    pub fn new(path: BezPath) -> Self {
        let bounds = if path.elements().is_empty() {
            Rect::ZERO
        } else {
            path.bounding_box()
        };
        Self { path, bounds }
    }

    /// The transformed outline.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Bounding box of the transformed outline.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}
