// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standard commands and triggers a gate offers to the automation rules.
//!
//! These are descriptors only. Storing them and matching events against
//! triggers is the rules engine's business.

use threshold_behavior::Params;

use crate::gate::Gate;

/// Receiver of behavior request commands.
pub const BEHAVIOR_REQUEST_CHANNEL: &str = "app.events.sensors.behavior.request.objects";
/// Channel of object click events.
pub const CLICKED_CHANNEL: &str = "app.event.sensor.object.behavior.clicked";
/// Channel of behavior change events.
pub const CHANGE_CHANNEL: &str = "app.event.sensor.object.behavior.change";
/// Placeholder resolved by the rules engine to the name of the event's object.
pub const EVENT_OBJECT: &str = "@event.object.name";
/// Placeholder resolved by the rules engine to the event's value.
pub const EVENT_VALUE: &str = "@event.value";

/// A command the rules engine can send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandTemplate {
    /// Human-readable name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Channel the command is sent to.
    pub receiver: &'static str,
    /// `object`, `behavior`, and `value` properties.
    pub properties: Params,
}

/// An event pattern the rules engine can react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerTemplate {
    /// Human-readable name.
    pub name: String,
    /// Channel the event arrives on.
    pub channel: &'static str,
    /// Statements the event payload must satisfy.
    pub payload: Params,
}

fn command(
    name: String,
    description: String,
    object: &str,
    behavior: &str,
    value: &str,
) -> CommandTemplate {
    CommandTemplate {
        name,
        description,
        receiver: BEHAVIOR_REQUEST_CHANNEL,
        properties: Params::new()
            .with("object", object)
            .with("behavior", behavior)
            .with("value", value),
    }
}

impl<Z, X, S> Gate<Z, X, S> {
    /// The standard commands addressing this gate's behaviors.
    ///
    /// Commands worded with "its"/"this" target [`EVENT_OBJECT`] and are meant
    /// for rules reacting to an event about some gate.
    #[must_use]
    pub fn commands(&self) -> Vec<CommandTemplate> {
        let name = self.name();
        let kind = self.kind();
        let open = self.open_behavior().name();
        let openness = self.openness_behavior().name();

        vec![
            command(
                format!("Set {name} openness to 50%"),
                format!("the {name} changes its openness"),
                name,
                openness,
                "50",
            ),
            command(
                format!("Increase {name} openness"),
                format!("increases {name} openness of one step"),
                name,
                openness,
                "next",
            ),
            command(
                format!("Decrease {name} openness"),
                format!("decreases {name} openness of one step"),
                name,
                openness,
                "previous",
            ),
            command(
                "Set its openness to 50%".into(),
                "set its openness to 50%".into(),
                EVENT_OBJECT,
                openness,
                "50",
            ),
            command(
                "Increase its openness".into(),
                "increases its openness of one step".into(),
                EVENT_OBJECT,
                openness,
                "next",
            ),
            command(
                "Decrease its openness".into(),
                "decreases its openness of one step".into(),
                EVENT_OBJECT,
                openness,
                "previous",
            ),
            command(
                "Set its openness to the value in the event".into(),
                "set its openness to the value in the event".into(),
                EVENT_OBJECT,
                openness,
                EVENT_VALUE,
            ),
            command(
                format!("Open {name}"),
                format!("{kind} opens"),
                name,
                open,
                "true",
            ),
            command(
                format!("Close {name}"),
                format!("{kind} closes"),
                name,
                open,
                "false",
            ),
            command(
                format!("Switch {name} open state"),
                format!("closes/opens {name}"),
                name,
                open,
                "opposite",
            ),
            command(
                "Open this gate".into(),
                "this gate is opened".into(),
                EVENT_OBJECT,
                open,
                "true",
            ),
            command(
                "Close this gate".into(),
                "this gate is closed".into(),
                EVENT_OBJECT,
                open,
                "false",
            ),
            command(
                "Switch its open state".into(),
                "opens/closes the gate in the event".into(),
                EVENT_OBJECT,
                open,
                "opposite",
            ),
        ]
    }

    /// The standard triggers about this gate.
    #[must_use]
    pub fn triggers(&self) -> Vec<TriggerTemplate> {
        let name = self.name();
        let open = self.open_behavior().name();
        vec![
            TriggerTemplate {
                name: format!("When {name} is clicked"),
                channel: CLICKED_CHANNEL,
                payload: Params::new()
                    .with("object.name", name)
                    .with("click", "SINGLE_CLICK"),
            },
            TriggerTemplate {
                name: format!("{name} becomes open"),
                channel: CHANGE_CHANNEL,
                payload: Params::new().with("object.name", name).with(open, "true"),
            },
            TriggerTemplate {
                name: format!("{name} becomes closed"),
                channel: CHANGE_CHANNEL,
                payload: Params::new().with("object.name", name).with(open, "false"),
            },
        ]
    }
}
