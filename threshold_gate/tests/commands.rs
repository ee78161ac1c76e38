// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the command catalog and textual command handling.

mod support;

use support::{ScriptedGuard, TestGate, build, door, leaf_at, three_rooms};
use threshold_behavior::{BehaviorRequest, Params, RequestError};
use threshold_gate::{
    BEHAVIOR_REQUEST_CHANNEL, CHANGE_CHANNEL, CLICKED_CHANNEL, EVENT_OBJECT, EVENT_VALUE,
    GateError, GateState,
};

fn gate() -> TestGate {
    build(three_rooms(), door(leaf_at(95, 10.0)), ScriptedGuard::accepting()).0
}

fn command(behavior: &str, value: &str) -> Params {
    Params::new()
        .with("object", "Front door")
        .with("behavior", behavior)
        .with("value", value)
}

#[test]
fn catalog_lists_thirteen_commands_and_three_triggers() {
    let gate = gate();
    let commands = gate.commands();
    assert_eq!(commands.len(), 13);
    assert!(
        commands
            .iter()
            .all(|c| c.receiver == BEHAVIOR_REQUEST_CHANNEL)
    );

    let open = commands
        .iter()
        .find(|c| c.name == "Open Front door")
        .expect("open command");
    assert_eq!(open.description, "Door opens");
    assert_eq!(open.properties.get("object"), Some("Front door"));
    assert_eq!(open.properties.get("behavior"), Some("open"));
    assert_eq!(open.properties.get("value"), Some("true"));

    let targeted = commands
        .iter()
        .filter(|c| c.properties.get("object") == Some(EVENT_OBJECT))
        .count();
    assert_eq!(targeted, 7);
    assert!(
        commands
            .iter()
            .any(|c| c.properties.get("value") == Some(EVENT_VALUE))
    );

    let triggers = gate.triggers();
    let channels: Vec<_> = triggers.iter().map(|t| t.channel).collect();
    assert_eq!(channels, [CLICKED_CHANNEL, CHANGE_CHANNEL, CHANGE_CHANNEL]);
    assert_eq!(triggers[0].payload.get("click"), Some("SINGLE_CLICK"));
    assert_eq!(triggers[1].payload.get("open"), Some("true"));
    assert_eq!(triggers[2].payload.get("open"), Some("false"));
    assert!(
        triggers
            .iter()
            .all(|t| t.payload.get("object.name") == Some("Front door"))
    );
}

#[test]
fn catalog_follows_custom_behavior_names() {
    let definition = threshold_gate::GateDefinition::builder(threshold_zone::GateId(2), "Hatch")
        .representation(leaf_at(95, 10.0))
        .open_behavior("state")
        .openness_behavior("level")
        .build();
    let (gate, _) = build(three_rooms(), definition, ScriptedGuard::accepting());
    let behaviors: Vec<_> = gate
        .commands()
        .iter()
        .filter_map(|c| c.properties.get("behavior").map(str::to_owned))
        .collect();
    assert!(behaviors.iter().all(|b| b == "state" || b == "level"));
    assert_eq!(behaviors.iter().filter(|b| *b == "level").count(), 7);
    assert_eq!(gate.triggers()[1].payload.get("state"), Some("true"));
}

#[test]
fn catalog_commands_drive_the_gate() {
    let mut gate = gate();
    let by_name = |gate: &TestGate, name: &str| {
        gate.commands()
            .into_iter()
            .find(|c| c.name == name)
            .expect("command exists")
            .properties
    };

    let properties = by_name(&gate, "Set Front door openness to 50%");
    assert_eq!(gate.handle_command(&properties), Ok(true));
    assert_eq!(gate.state(), GateState::partial(50).unwrap());

    let properties = by_name(&gate, "Increase Front door openness");
    assert_eq!(gate.handle_command(&properties), Ok(true));
    assert_eq!(gate.openness(), 51);

    let properties = by_name(&gate, "Switch Front door open state");
    assert_eq!(gate.handle_command(&properties), Ok(true));
    assert_eq!(gate.state(), GateState::CLOSED);

    let properties = by_name(&gate, "Open Front door");
    assert_eq!(gate.handle_command(&properties), Ok(true));
    assert_eq!(gate.state(), GateState::OPEN);

    // The event is passed through with every property intact.
    let last = gate.sink().seen.last().unwrap();
    assert_eq!(last.params.get("object"), Some("Front door"));
}

#[test]
fn keywords_are_case_insensitive() {
    let mut gate = gate();
    assert_eq!(gate.handle_command(&command("open", "TRUE")), Ok(true));
    assert!(gate.is_open());
    assert_eq!(gate.handle_command(&command("open", "Opposite")), Ok(true));
    assert!(!gate.is_open());
}

#[test]
fn refused_command_is_not_an_error() {
    let mut gate = gate();
    gate.executor_mut().accept = false;
    assert_eq!(gate.handle_command(&command("openness", "30")), Ok(false));
    assert_eq!(gate.state(), GateState::CLOSED);
}

#[test]
fn unknown_behavior_is_reported() {
    let mut gate = gate();
    let err = gate.handle_command(&command("lock", "true")).unwrap_err();
    assert_eq!(
        err,
        GateError::UnknownBehavior {
            gate: "Front door".into(),
            behavior: "lock".into()
        }
    );
    assert!(gate.executor().calls.is_empty());
}

#[test]
fn mismatched_values_are_reported() {
    let mut gate = gate();
    let err = gate.handle_command(&command("open", "50")).unwrap_err();
    assert!(matches!(
        err,
        GateError::ValueMismatch { found: "ranged", .. }
    ));
    let err = gate
        .handle_command(&command("openness", "opposite"))
        .unwrap_err();
    assert!(matches!(
        err,
        GateError::ValueMismatch {
            found: "boolean",
            ..
        }
    ));
    assert!(gate.executor().calls.is_empty());
}

#[test]
fn malformed_commands_are_reported() {
    let mut gate = gate();
    let err = gate
        .handle_command(&Params::new().with("value", "true"))
        .unwrap_err();
    assert_eq!(
        err,
        GateError::Request(RequestError::MissingProperty("behavior"))
    );

    // Placeholders must be resolved by the rules engine before dispatch.
    let err = gate
        .handle_command(&command("openness", EVENT_VALUE))
        .unwrap_err();
    assert!(matches!(
        err,
        GateError::Request(RequestError::InvalidValue { .. })
    ));
    assert!(err.to_string().contains(EVENT_VALUE));
}

#[test]
fn typed_requests_bypass_parsing() {
    let mut gate = gate();
    let request = BehaviorRequest::parse("openness", "previous").unwrap();
    // Already at the lower bound: stepping down asks to close again.
    assert_eq!(gate.handle_request(&request, &Params::new()), Ok(true));
    assert_eq!(gate.executor().actions(), ["close"]);
}
