// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=threshold_zone --heading-base-level=0

//! Threshold Zone: zone capabilities and an ordered zone registry.
//!
//! A floor plan is made of *zones* (rooms, gardens, outdoor areas). Passages
//! such as doors and gates register themselves with the zones they connect,
//! and ask every room to recompute its reachability when they open or close.
//!
//! This crate does **not** know how reachability is computed or how a zone
//! describes itself; those belong to the zone implementation. It provides:
//!
//! - [`Zone`]: the capability set a passage needs from a zone.
//! - [`ZoneRegistry`]: ordered enumeration of the room-like zones plus mutable
//!   access by id. Filtering out zones that are not rooms happens here, so
//!   callers never need to inspect zone kinds themselves.
//! - [`Environment`]: a `Vec`-backed registry that keeps insertion order.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{BezPath, Rect, Shape};
//! use threshold_zone::{Environment, GateId, Zone, ZoneRegistry};
//!
//! struct Area {
//!     name: &'static str,
//!     outline: BezPath,
//!     indoor: bool,
//!     gates: Vec<GateId>,
//! }
//!
//! impl Zone for Area {
//!     fn name(&self) -> &str { self.name }
//!     fn outline(&self) -> &BezPath { &self.outline }
//!     fn is_room(&self) -> bool { self.indoor }
//!     fn add_gate(&mut self, gate: GateId) { self.gates.push(gate); }
//!     fn remove_gate(&mut self, gate: GateId) { self.gates.retain(|g| *g != gate); }
//!     fn visit(&mut self) {}
//!     fn update_description(&mut self) {}
//! }
//!
//! let area = |name, x0, indoor| Area {
//!     name,
//!     outline: Rect::new(x0, 0.0, x0 + 100.0, 100.0).to_path(0.1),
//!     indoor,
//!     gates: Vec::new(),
//! };
//!
//! let mut env = Environment::new();
//! env.insert(area("Kitchen", 0.0, true));
//! env.insert(area("Garden", 100.0, false));
//! env.insert(area("Hallway", 200.0, true));
//!
//! // Only rooms are enumerated, in insertion order.
//! let names: Vec<_> = env.rooms().map(|(_, z)| z.name()).collect();
//! assert_eq!(names, ["Kitchen", "Hallway"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod environment;
mod ids;
mod zone;

pub use environment::Environment;
pub use ids::{GateId, ZoneId};
pub use zone::{Zone, ZoneRegistry};
