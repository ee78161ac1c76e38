// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gate object: construction, adjacency, and change notification.

use threshold_behavior::{BooleanBehavior, Params, RangedIntBehavior};
use threshold_shape::{Footprint, Representation};
use threshold_zone::{GateId, Zone, ZoneId, ZoneRegistry};
use tracing::{debug, info, warn};

use crate::adjacency::{self, Adjacency};
use crate::definition::GateDefinition;
use crate::error::GateError;
use crate::guard::ActionExecutor;
use crate::notify::{self, ChangeSink, GateChange};
use crate::state::{GateState, GateView};

/// Description of a gate that connects nothing.
pub const UNCONNECTED_DESCRIPTION: &str = "Connects no rooms";

/// A passage between two zones.
///
/// The gate owns its canonical state and the two behaviors that expose it,
/// and is handed its collaborators at construction:
/// - `Z`: the zone registry it evaluates against and refreshes,
/// - `X`: the guard that accepts or refuses each action,
/// - `S`: the sink for "object changed" notifications.
#[derive(Debug)]
pub struct Gate<Z, X, S> {
    id: GateId,
    name: String,
    kind: String,
    representations: Vec<Representation>,
    pub(crate) open: BooleanBehavior,
    pub(crate) openness: RangedIntBehavior,
    pub(crate) view: GateView,
    description: String,
    from: Option<ZoneId>,
    to: Option<ZoneId>,
    registered: bool,
    pub(crate) zones: Z,
    pub(crate) executor: X,
    sink: S,
}

impl<Z, X, S> Gate<Z, X, S>
where
    Z: ZoneRegistry,
    X: ActionExecutor,
    S: ChangeSink,
{
    /// Builds a closed gate and evaluates which zones it connects.
    pub fn new(
        definition: GateDefinition,
        zones: Z,
        executor: X,
        sink: S,
    ) -> Result<Self, GateError> {
        let GateDefinition {
            id,
            name,
            kind,
            representations,
            open_behavior,
            openness_behavior,
            openness_step,
        } = definition;

        if representations.is_empty() {
            return Err(GateError::MissingRepresentation(name));
        }
        if open_behavior == openness_behavior {
            return Err(GateError::DuplicateBehaviorName {
                gate: name,
                behavior: open_behavior,
            });
        }

        let mut gate = Self {
            id,
            name,
            kind,
            representations,
            open: BooleanBehavior::new(open_behavior),
            openness: RangedIntBehavior::new(openness_behavior, 0, 100).with_step(openness_step),
            view: GateView::Closed,
            description: UNCONNECTED_DESCRIPTION.into(),
            from: None,
            to: None,
            registered: false,
            zones,
            executor,
            sink,
        };
        gate.evaluate_gate();
        Ok(gate)
    }

    /// Transformed outline of the first representation.
    #[must_use]
    pub fn footprint(&self) -> Footprint {
        self.representations[0].footprint()
    }

    /// Binds `from`/`to` to the rooms under the footprint and registers the
    /// gate with them.
    ///
    /// Any registration left from an earlier evaluation is withdrawn first,
    /// so this may be called again after the geometry or the registry changes.
    /// Only the first representation is considered.
    pub fn evaluate_gate(&mut self) -> Adjacency {
        self.deregister();
        let adjacency = adjacency::scan(&self.zones, self.footprint().bounds());
        (self.from, self.to) = adjacency.endpoints();

        match adjacency {
            Adjacency::Connects { from, to } => {
                for zone in [from, to] {
                    if let Some(room) = self.zones.room_mut(zone) {
                        room.add_gate(self.id);
                    }
                }
                self.registered = true;
                self.refresh_description();
            }
            Adjacency::Degenerate(_) => {
                let zone = self.zone_name(self.from);
                warn!(
                    "The gate '{}' connects the same zones [{}; {}]. This is not possible.",
                    self.name, zone, zone
                );
            }
            Adjacency::Isolated => {}
        }
        info!(
            "The gate '{}' connects {} to {}",
            self.name,
            self.zone_name(self.from),
            self.zone_name(self.to)
        );
        adjacency
    }

    /// Withdraws the gate from the zones it registered with and forgets
    /// `from`/`to`.
    pub fn deregister(&mut self) {
        if self.registered {
            for zone in [self.from, self.to].into_iter().flatten() {
                if let Some(room) = self.zones.room_mut(zone) {
                    room.remove_gate(self.id);
                }
            }
            self.registered = false;
        }
        self.from = None;
        self.to = None;
        self.description = UNCONNECTED_DESCRIPTION.into();
    }

    /// Notifies the world that the gate changed.
    ///
    /// With `changed == true` every room recomputes its reachability, then
    /// every room refreshes its description, then the gate refreshes its own.
    /// The change event is emitted in both cases, after the passes.
    pub fn set_changed(&mut self, changed: bool, params: &Params) {
        if changed {
            let report = notify::refresh_zones(&mut self.zones);
            debug!(
                "gate '{}': refreshed {} rooms, described {}",
                self.name,
                report.visited,
                report.described
            );
            self.refresh_description();
        }
        let change = GateChange {
            gate: self.id,
            name: &self.name,
            state: self.state(),
            changed,
            params,
        };
        self.sink.object_changed(&change);
    }

    fn refresh_description(&mut self) {
        if self.registered {
            self.description = format!(
                "Connects {} to {}",
                self.zone_name(self.from),
                self.zone_name(self.to)
            );
        }
    }

    fn zone_name(&self, zone: Option<ZoneId>) -> &str {
        zone.and_then(|id| self.zones.room(id))
            .map_or("nothing", |room| Zone::name(room))
    }
}

impl<Z, X, S> Gate<Z, X, S> {
    /// Identifier used when registering with zones.
    #[must_use]
    pub fn id(&self) -> GateId {
        self.id
    }

    /// Object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type label.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Visual representations; the first is the footprint.
    #[must_use]
    pub fn representations(&self) -> &[Representation] {
        &self.representations
    }

    /// Boolean behavior.
    #[must_use]
    pub fn open_behavior(&self) -> &BooleanBehavior {
        &self.open
    }

    /// Ranged behavior.
    #[must_use]
    pub fn openness_behavior(&self) -> &RangedIntBehavior {
        &self.openness
    }

    /// Whether the gate is open (fully or partially).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.value()
    }

    /// Openness in percent.
    #[must_use]
    pub fn openness(&self) -> u8 {
        u8::try_from(self.openness.value()).unwrap_or(0)
    }

    /// Selected presentation.
    #[must_use]
    pub fn current_view(&self) -> GateView {
        self.view
    }

    /// Canonical state snapshot.
    #[must_use]
    pub fn state(&self) -> GateState {
        GateState {
            is_open: self.is_open(),
            openness: self.openness(),
            view: self.view,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// First room the footprint touches, if any.
    #[must_use]
    pub fn from(&self) -> Option<ZoneId> {
        self.from
    }

    /// Last room the footprint touches, if any.
    #[must_use]
    pub fn to(&self) -> Option<ZoneId> {
        self.to
    }

    /// Whether the gate is registered with its two rooms.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// The injected zone registry.
    #[must_use]
    pub fn zones(&self) -> &Z {
        &self.zones
    }

    /// The injected zone registry, mutably.
    ///
    /// Call [`Gate::evaluate_gate`] after changing the zone set.
    pub fn zones_mut(&mut self) -> &mut Z {
        &mut self.zones
    }

    /// The injected action guard.
    #[must_use]
    pub fn executor(&self) -> &X {
        &self.executor
    }

    /// The injected action guard, mutably.
    pub fn executor_mut(&mut self) -> &mut X {
        &mut self.executor
    }

    /// The injected change sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Replaces the representations; call [`Gate::evaluate_gate`] afterwards.
    ///
    /// An empty list is ignored, since the first representation is required.
    pub fn set_representations(&mut self, representations: Vec<Representation>) {
        if !representations.is_empty() {
            self.representations = representations;
        }
    }
}
