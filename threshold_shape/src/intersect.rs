// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline/rectangle intersection.

use kurbo::{BezPath, PathEl, Point, Rect, Shape as _};
use smallvec::SmallVec;

/// Tolerance used when curves are flattened into line segments.
pub const FLATTEN_TOLERANCE: f64 = 0.1;

type Ring = SmallVec<[Point; 8]>;

/// Returns `true` if the interior of the closed outline `path` intersects the
/// interior of `rect`.
///
/// Rectangles with zero width or height never intersect anything. Curved
/// segments are flattened with [`FLATTEN_TOLERANCE`] first. The outline uses
/// the non-zero winding rule.
///
/// The test succeeds when any of these holds:
/// - some outline edge passes through the open interior of `rect`, including
///   edges that start or end on the border of `rect`,
/// - the outline contains the center of `rect` (covers `rect` lying entirely
///   inside the outline).
///
/// Edges running along the border of `rect`, or touching it in a single point,
/// do not count.
#[must_use]
pub fn intersects_rect(path: &BezPath, rect: Rect) -> bool {
    let rect = rect.abs();
    if rect.width() <= 0.0 || rect.height() <= 0.0 || path.elements().is_empty() {
        return false;
    }
    let outer = path.bounding_box();
    if outer.x1 <= rect.x0 || outer.x0 >= rect.x1 || outer.y1 <= rect.y0 || outer.y0 >= rect.y1 {
        return false;
    }

    for ring in rings(path) {
        let n = ring.len();
        for (i, &a) in ring.iter().enumerate() {
            let b = ring[(i + 1) % n];
            if enters_interior(rect, a, b) {
                return true;
            }
        }
    }

    path.contains(rect.center())
}

fn strictly_inside(rect: Rect, pt: Point) -> bool {
    pt.x > rect.x0 && pt.x < rect.x1 && pt.y > rect.y0 && pt.y < rect.y1
}

/// Clips `a..b` to the closed `rect` (Liang-Barsky) and checks whether the
/// midpoint of the clipped part lies in the open interior.
///
/// The open interior is convex, so a clipped part with an interior midpoint
/// is exactly a segment that passes through it.
fn enters_interior(rect: Rect, a: Point, b: Point) -> bool {
    let d = b - a;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-d.x, a.x - rect.x0),
        (d.x, rect.x1 - a.x),
        (-d.y, a.y - rect.y0),
        (d.y, rect.y1 - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return false;
        }
    }
    strictly_inside(rect, a.lerp(b, 0.5 * (t0 + t1)))
}

/// Splits a path into closed polylines.
fn rings(path: &BezPath) -> alloc::vec::Vec<Ring> {
    let mut out = alloc::vec::Vec::new();
    let mut current = Ring::new();
    kurbo::flatten(path.iter(), FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            if current.len() > 1 {
                out.push(core::mem::take(&mut current));
            }
            current.clear();
            current.push(p);
        }
        PathEl::LineTo(p) => current.push(p),
        PathEl::ClosePath => {
            if current.len() > 1 {
                out.push(core::mem::take(&mut current));
            }
            current.clear();
        }
        // `flatten` only emits move/line/close.
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    if current.len() > 1 {
        out.push(current);
    }
    out
}
