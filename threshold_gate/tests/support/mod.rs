// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test doubles: recording rooms, a scripted guard, a recording sink,
//! and log capture.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use kurbo::{BezPath, Rect, Shape as _};
use threshold_behavior::Params;
use threshold_gate::{
    ActionExecutor, ChangeSink, Gate, GateChange, GateDefinition, GateState, GuardedAction,
};
use threshold_shape::{Representation, Shape};
use threshold_zone::{Environment, GateId, Zone};
use tracing_subscriber::fmt::MakeWriter;

/// One call made on a room, in the order it happened across all rooms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Visit(String),
    Describe(String),
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

#[derive(Debug)]
pub struct TestRoom {
    pub name: String,
    pub outline: BezPath,
    pub room: bool,
    pub gates: Vec<GateId>,
    pub journal: Journal,
}

impl Zone for TestRoom {
    fn name(&self) -> &str {
        &self.name
    }
    fn outline(&self) -> &BezPath {
        &self.outline
    }
    fn is_room(&self) -> bool {
        self.room
    }
    fn add_gate(&mut self, gate: GateId) {
        self.gates.push(gate);
    }
    fn remove_gate(&mut self, gate: GateId) {
        self.gates.retain(|g| *g != gate);
    }
    fn visit(&mut self) {
        self.journal.borrow_mut().push(Call::Visit(self.name.clone()));
    }
    fn update_description(&mut self) {
        self.journal
            .borrow_mut()
            .push(Call::Describe(self.name.clone()));
    }
}

/// Builds rooms sharing one journal.
#[derive(Default)]
pub struct Plan {
    pub env: Environment<TestRoom>,
    pub journal: Journal,
}

impl Plan {
    pub fn room(mut self, name: &str, rect: Rect) -> Self {
        self.insert(name, rect, true);
        self
    }

    pub fn outdoor(mut self, name: &str, rect: Rect) -> Self {
        self.insert(name, rect, false);
        self
    }

    fn insert(&mut self, name: &str, rect: Rect, room: bool) {
        self.env.insert(TestRoom {
            name: name.into(),
            outline: rect.to_path(0.1),
            room,
            gates: Vec::new(),
            journal: self.journal.clone(),
        });
    }
}

/// Kitchen `0..100`, Hallway `100..200`, Bedroom `200..300`, all `0..100` tall.
pub fn three_rooms() -> Plan {
    Plan::default()
        .room("Kitchen", Rect::new(0.0, 0.0, 100.0, 100.0))
        .room("Hallway", Rect::new(100.0, 0.0, 200.0, 100.0))
        .room("Bedroom", Rect::new(200.0, 0.0, 300.0, 100.0))
}

/// A `width x 20` leaf placed at `(x, 40)`.
pub fn leaf_at(x: i32, width: f64) -> Representation {
    Representation::new(Shape::Rectangle(Rect::new(0.0, 0.0, width, 20.0))).with_offset(x, 40)
}

pub fn door(representation: Representation) -> GateDefinition {
    GateDefinition::builder(GateId(7), "Front door")
        .kind("Door")
        .representation(representation)
        .build()
}

/// Guard that answers from a flag and records every question.
#[derive(Debug)]
pub struct ScriptedGuard {
    pub accept: bool,
    pub calls: Vec<(GuardedAction, Params)>,
}

impl ScriptedGuard {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            calls: Vec::new(),
        }
    }

    pub fn refusing() -> Self {
        Self {
            accept: false,
            calls: Vec::new(),
        }
    }

    pub fn actions(&self) -> Vec<&'static str> {
        self.calls.iter().map(|(a, _)| a.name()).collect()
    }
}

impl ActionExecutor for ScriptedGuard {
    fn execute(&mut self, action: GuardedAction, params: &Params) -> bool {
        self.calls.push((action, params.clone()));
        self.accept
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub state: GateState,
    pub changed: bool,
    pub params: Params,
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub seen: Vec<Seen>,
}

impl ChangeSink for RecordingSink {
    fn object_changed(&mut self, change: &GateChange<'_>) {
        self.seen.push(Seen {
            state: change.state,
            changed: change.changed,
            params: change.params.clone(),
        });
    }
}

pub type TestGate = Gate<Environment<TestRoom>, ScriptedGuard, RecordingSink>;

pub fn build(plan: Plan, definition: GateDefinition, guard: ScriptedGuard) -> (TestGate, Journal) {
    let journal = plan.journal.clone();
    let gate = Gate::new(definition, plan.env, guard, RecordingSink::default())
        .expect("definition is valid");
    (gate, journal)
}

pub fn room_names(gate: &TestGate) -> (Option<String>, Option<String>) {
    let name = |id| {
        gate.zones()
            .get(id)
            .map(|room: &TestRoom| room.name.clone())
    };
    (gate.from().and_then(name), gate.to().and_then(name))
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local fmt subscriber and returns what it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().expect("log buffer").clone();
    (out, String::from_utf8_lossy(&bytes).into_owned())
}
