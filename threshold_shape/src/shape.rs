// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape descriptions as they appear in object and zone definitions.

use alloc::vec::Vec;

use kurbo::{BezPath, Ellipse, Point, Rect, Shape as _};

use crate::intersect::FLATTEN_TOLERANCE;

/// A closed outline in local (untransformed) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A polygon given by its vertices; the outline closes back to the first point.
    Polygon(Vec<Point>),
    /// An axis-aligned rectangle.
    Rectangle(Rect),
    /// An ellipse inscribed in the given rectangle.
    Ellipse(Rect),
}

impl Shape {
    /// Converts the description into a closed [`BezPath`].
    ///
    /// A polygon with no vertices produces an empty path, which intersects nothing.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        match self {
            Self::Polygon(points) => {
                let mut path = BezPath::new();
                let mut iter = points.iter().copied();
                if let Some(first) = iter.next() {
                    path.move_to(first);
                    for pt in iter {
                        path.line_to(pt);
                    }
                    path.close_path();
                }
                path
            }
            Self::Rectangle(rect) => rect.to_path(FLATTEN_TOLERANCE),
            Self::Ellipse(rect) => Ellipse::from_rect(*rect).to_path(FLATTEN_TOLERANCE),
        }
    }

    /// Returns the axis-aligned bounds of the untransformed shape.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rectangle(rect) | Self::Ellipse(rect) => rect.abs(),
            Self::Polygon(_) => self.to_path().bounding_box(),
        }
    }
}
