// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone capability and registry traits.

use alloc::boxed::Box;

use kurbo::BezPath;

use crate::{GateId, ZoneId};

/// What a passage needs from a zone.
pub trait Zone {
    /// Display name, used in descriptions and diagnostics.
    fn name(&self) -> &str;

    /// Closed outline of the zone in floor-plan coordinates.
    fn outline(&self) -> &BezPath;

    /// Whether the zone is room-like and takes part in passage evaluation
    /// and reachability. Defaults to `true`.
    fn is_room(&self) -> bool {
        true
    }

    /// Records that `gate` leads into or out of this zone.
    fn add_gate(&mut self, gate: GateId);

    /// Forgets a gate previously passed to [`Zone::add_gate`].
    fn remove_gate(&mut self, gate: GateId);

    /// Recomputes which zones are reachable from this one.
    fn visit(&mut self);

    /// Refreshes the zone's textual description.
    fn update_description(&mut self);
}

impl<Z: Zone + ?Sized> Zone for Box<Z> {
    fn name(&self) -> &str {
        (**self).name()
    }
    fn outline(&self) -> &BezPath {
        (**self).outline()
    }
    fn is_room(&self) -> bool {
        (**self).is_room()
    }
    fn add_gate(&mut self, gate: GateId) {
        (**self).add_gate(gate);
    }
    fn remove_gate(&mut self, gate: GateId) {
        (**self).remove_gate(gate);
    }
    fn visit(&mut self) {
        (**self).visit();
    }
    fn update_description(&mut self) {
        (**self).update_description();
    }
}

/// Ordered access to the room-like zones of a floor plan.
///
/// Enumeration order is the registry's own and must be stable between
/// mutations: passage evaluation depends on it.
///
/// Implementations are not expected to tolerate mutation of the zone set
/// while a pass is iterating; callers sharing a registry across threads
/// hold a lock for the duration of a pass.
pub trait ZoneRegistry {
    /// Concrete zone type.
    type Zone: Zone + ?Sized;

    /// Room-like zones in registry order.
    fn rooms(&self) -> impl Iterator<Item = (ZoneId, &Self::Zone)>;

    /// Looks up a room by id.
    fn room(&self, id: ZoneId) -> Option<&Self::Zone>;

    /// Looks up a room by id for mutation.
    fn room_mut(&mut self, id: ZoneId) -> Option<&mut Self::Zone>;

    /// Calls `f` on every room in registry order.
    fn for_each_room_mut(&mut self, f: impl FnMut(ZoneId, &mut Self::Zone));
}

impl<R: ZoneRegistry> ZoneRegistry for &mut R {
    type Zone = R::Zone;

    fn rooms(&self) -> impl Iterator<Item = (ZoneId, &Self::Zone)> {
        (**self).rooms()
    }

    fn room(&self, id: ZoneId) -> Option<&Self::Zone> {
        (**self).room(id)
    }

    fn room_mut(&mut self, id: ZoneId) -> Option<&mut Self::Zone> {
        (**self).room_mut(id)
    }

    fn for_each_room_mut(&mut self, f: impl FnMut(ZoneId, &mut Self::Zone)) {
        (**self).for_each_room_mut(f);
    }
}
