// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=threshold_gate --heading-base-level=0

//! Threshold Gate: passages between floor-plan zones.
//!
//! A [`Gate`] is a door, gate, or any other passage that connects two
//! adjacent zones. It carries two behaviors describing the same physical
//! state, a boolean `open` flag and a `0..=100` `openness` value, and keeps
//! them consistent:
//!
//! | state   | `is_open` | `openness` | view                  |
//! |---------|-----------|------------|-----------------------|
//! | closed  | `false`   | `0`        | [`GateView::Closed`]  |
//! | open    | `true`    | `100`      | [`GateView::Open`]    |
//! | partial | `true`    | `1..=99`   | [`GateView::Partial`] |
//!
//! Every transition is first submitted to an [`ActionExecutor`] under one of
//! the names `"close"`, `"open"`, or `"measured open"`. A refusal is not an
//! error: nothing changes and nobody is notified. An accepted transition
//! updates all three fields together, asks every room to recompute its
//! reachability, then every room to refresh its description, and finally
//! emits a [`GateChange`] to the [`ChangeSink`].
//!
//! At construction the gate also works out which rooms it connects: the
//! first representation is placed with its offset and rotation, and every
//! room whose outline intersects the bounding box of that footprint is a
//! candidate. See [`Adjacency`] for the possible outcomes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{BezPath, Rect, Shape as _};
//! use threshold_behavior::Params;
//! use threshold_gate::{AcceptAll, Discard, Gate, GateDefinition, GateView};
//! use threshold_shape::{Representation, Shape};
//! use threshold_zone::{Environment, GateId, Zone};
//!
//! struct Room {
//!     name: &'static str,
//!     outline: BezPath,
//!     gates: Vec<GateId>,
//! }
//!
//! impl Zone for Room {
//!     fn name(&self) -> &str { self.name }
//!     fn outline(&self) -> &BezPath { &self.outline }
//!     fn add_gate(&mut self, gate: GateId) { self.gates.push(gate); }
//!     fn remove_gate(&mut self, gate: GateId) { self.gates.retain(|g| *g != gate); }
//!     fn visit(&mut self) {}
//!     fn update_description(&mut self) {}
//! }
//!
//! let room = |name, x0| Room {
//!     name,
//!     outline: Rect::new(x0, 0.0, x0 + 100.0, 100.0).to_path(0.1),
//!     gates: Vec::new(),
//! };
//! let mut env = Environment::new();
//! env.insert(room("Kitchen", 0.0));
//! env.insert(room("Hallway", 100.0));
//!
//! // A 10x20 door leaf straddling the shared wall at x = 100.
//! let definition = GateDefinition::builder(GateId(1), "Kitchen door")
//!     .representation(
//!         Representation::new(Shape::Rectangle(Rect::new(0.0, 0.0, 10.0, 20.0)))
//!             .with_offset(95, 40),
//!     )
//!     .build();
//!
//! let mut door = Gate::new(definition, &mut env, AcceptAll, Discard).unwrap();
//! assert_eq!(door.description(), "Connects Kitchen to Hallway");
//!
//! assert!(door.set_openness(30, &Params::new()));
//! assert!(door.is_open());
//! assert_eq!(door.current_view(), GateView::Partial);
//!
//! assert!(door.close(&Params::new()));
//! assert_eq!(door.openness(), 0);
//! ```
//!
//! ## Commands
//!
//! Automation rules address the gate with `behavior`/`value` properties such
//! as `open = "opposite"` or `openness = "next"`; see [`Gate::handle_command`]
//! and the standard [`Gate::commands`] and [`Gate::triggers`].
//!
//! ## Logging
//!
//! The crate logs through [`tracing`]: an `info` record for every adjacency
//! evaluation, a `warn` record for a gate that touches a single room, and
//! `debug` records for accepted and refused actions. No subscriber is
//! installed.

mod adjacency;
mod catalog;
mod definition;
mod error;
mod gate;
mod guard;
mod notify;
mod state;
mod sync;

pub use adjacency::{Adjacency, scan};
pub use catalog::{
    BEHAVIOR_REQUEST_CHANNEL, CHANGE_CHANNEL, CLICKED_CHANNEL, CommandTemplate, EVENT_OBJECT,
    EVENT_VALUE, TriggerTemplate,
};
pub use definition::{
    DEFAULT_KIND, DEFAULT_OPEN_BEHAVIOR, DEFAULT_OPENNESS_BEHAVIOR, GateDefinition,
    GateDefinitionBuilder,
};
pub use error::GateError;
pub use gate::{Gate, UNCONNECTED_DESCRIPTION};
pub use guard::{AcceptAll, ActionExecutor, GuardedAction};
pub use notify::{ChangeSink, Discard, GateChange, RefreshReport, refresh_zones};
pub use state::{GateState, GateView};
