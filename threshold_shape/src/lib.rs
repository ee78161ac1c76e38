// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Threshold Shape: footprints for objects placed on a floor plan.
//!
//! This crate converts the static shape descriptions found in object and zone
//! definitions into [`kurbo`] paths, applies a representation's offset and
//! rotation, and answers the one spatial question gate evaluation needs:
//! does a zone outline intersect the bounding box of a gate footprint?
//!
//! It focuses on three small pieces:
//! - [`Shape`]: a polygon, rectangle, or ellipse as stored in a definition.
//! - [`Representation`]: a shape placed with an integer offset and a rotation
//!   in degrees; [`Representation::footprint`] yields a transformed [`Footprint`].
//! - [`intersects_rect`]: interior intersection between a closed outline and an
//!   axis-aligned rectangle.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use threshold_shape::{Representation, Shape, intersects_rect};
//!
//! // A 10x2 door leaf, moved to (95, 40) and rotated by 90 degrees.
//! let door = Representation::new(Shape::Rectangle(Rect::new(0.0, 0.0, 10.0, 2.0)))
//!     .with_offset(95, 40)
//!     .with_rotation(90.0);
//! let footprint = door.footprint();
//!
//! let kitchen = Shape::Polygon(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 0.0),
//!     Point::new(100.0, 100.0),
//!     Point::new(0.0, 100.0),
//! ])
//! .to_path();
//!
//! assert!(intersects_rect(&kitchen, footprint.bounds()));
//! ```
//!
//! Gate evaluation tests zone outlines against the footprint's *bounding box*,
//! not its exact outline.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod footprint;
mod intersect;
mod shape;

pub use footprint::{Footprint, Representation};
pub use intersect::{FLATTEN_TOLERANCE, intersects_rect};
pub use shape::Shape;
