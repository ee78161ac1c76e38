// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which zones does a gate footprint touch?

use kurbo::Rect;
use threshold_shape::intersects_rect;
use threshold_zone::{Zone, ZoneId, ZoneRegistry};

/// Result of scanning the registry for zones under a gate footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjacency {
    /// No room intersects the footprint.
    Isolated,
    /// Exactly one distinct room was hit; the gate would connect it to itself.
    Degenerate(ZoneId),
    /// The gate connects two distinct rooms.
    Connects {
        /// First room hit in registry order.
        from: ZoneId,
        /// Last room hit in registry order.
        to: ZoneId,
    },
}

impl Adjacency {
    /// `(from, to)` as stored on the gate.
    #[must_use]
    pub fn endpoints(self) -> (Option<ZoneId>, Option<ZoneId>) {
        match self {
            Self::Isolated => (None, None),
            Self::Degenerate(zone) => (Some(zone), Some(zone)),
            Self::Connects { from, to } => (Some(from), Some(to)),
        }
    }
}

/// Scans every room in registry order against the footprint bounds.
///
/// The first hit becomes both `from` and `to`; every later hit replaces `to`.
/// With three or more hits the rooms between the first and the last are
/// dropped.
pub fn scan<R: ZoneRegistry>(zones: &R, bounds: Rect) -> Adjacency {
    let mut from = None;
    let mut to = None;
    for (id, zone) in zones.rooms() {
        if intersects_rect(Zone::outline(zone), bounds) {
            if from.is_none() {
                from = Some(id);
            }
            to = Some(id);
        }
    }
    match (from, to) {
        (Some(from), Some(to)) if from != to => Adjacency::Connects { from, to },
        (Some(zone), _) => Adjacency::Degenerate(zone),
        _ => Adjacency::Isolated,
    }
}
