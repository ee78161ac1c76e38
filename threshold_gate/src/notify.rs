// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change propagation: zone refresh passes and the generic change event.

use threshold_behavior::Params;
use threshold_zone::{GateId, Zone, ZoneRegistry};

use crate::state::GateState;

/// The generic "object changed" notification.
#[derive(Clone, Copy, Debug)]
pub struct GateChange<'a> {
    /// Gate that changed.
    pub gate: GateId,
    /// Gate name.
    pub name: &'a str,
    /// State after the change.
    pub state: GateState,
    /// Whether the zone passes ran for this notification.
    pub changed: bool,
    /// Parameters of the stimulus that caused the change, unchanged.
    pub params: &'a Params,
}

/// Receives [`GateChange`] notifications.
pub trait ChangeSink {
    /// Called once per notification, after any zone passes.
    fn object_changed(&mut self, change: &GateChange<'_>);
}

impl<F> ChangeSink for F
where
    F: FnMut(&GateChange<'_>),
{
    fn object_changed(&mut self, change: &GateChange<'_>) {
        self(change);
    }
}

/// Sink that drops every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl ChangeSink for Discard {
    fn object_changed(&mut self, _change: &GateChange<'_>) {}
}

/// Counts from one pair of refresh passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Rooms whose reachability was recomputed.
    pub visited: usize,
    /// Rooms whose description was refreshed.
    pub described: usize,
}

/// Runs the two full-registry passes: every room's [`Zone::visit`], then every
/// room's [`Zone::update_description`].
///
/// The passes never interleave, so descriptions see the settled reachability.
pub fn refresh_zones<R: ZoneRegistry>(zones: &mut R) -> RefreshReport {
    let mut report = RefreshReport::default();
    zones.for_each_room_mut(|_, zone| {
        Zone::visit(zone);
        report.visited += 1;
    });
    zones.for_each_room_mut(|_, zone| {
        Zone::update_description(zone);
        report.described += 1;
    });
    report
}
