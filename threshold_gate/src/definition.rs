// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static gate definitions, as loaded from the object catalog.

use threshold_shape::Representation;
use threshold_zone::GateId;

/// Default name of the boolean behavior.
pub const DEFAULT_OPEN_BEHAVIOR: &str = "open";
/// Default name of the ranged behavior.
pub const DEFAULT_OPENNESS_BEHAVIOR: &str = "openness";
/// Default type label used in command descriptions.
pub const DEFAULT_KIND: &str = "Gate";

/// Everything needed to build a [`Gate`](crate::Gate).
///
/// Only the first representation takes part in adjacency evaluation; the
/// others exist for presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct GateDefinition {
    /// Identifier the gate registers with zones under.
    pub id: GateId,
    /// Object name.
    pub name: String,
    /// Type label, e.g. `"Door"`.
    pub kind: String,
    /// Visual representations; the first one is the footprint.
    pub representations: Vec<Representation>,
    /// Name of the boolean behavior.
    pub open_behavior: String,
    /// Name of the `0..=100` behavior.
    pub openness_behavior: String,
    /// Step used by "next"/"previous" openness requests.
    pub openness_step: i32,
}

impl GateDefinition {
    /// Starts a builder with default behavior names and a step of one.
    #[must_use]
    pub fn builder(id: GateId, name: impl Into<String>) -> GateDefinitionBuilder {
        GateDefinitionBuilder {
            definition: Self {
                id,
                name: name.into(),
                kind: DEFAULT_KIND.into(),
                representations: Vec::new(),
                open_behavior: DEFAULT_OPEN_BEHAVIOR.into(),
                openness_behavior: DEFAULT_OPENNESS_BEHAVIOR.into(),
                openness_step: 1,
            },
        }
    }
}

/// Builder for [`GateDefinition`].
#[derive(Clone, Debug)]
pub struct GateDefinitionBuilder {
    definition: GateDefinition,
}

impl GateDefinitionBuilder {
    /// Sets the type label.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.definition.kind = kind.into();
        self
    }

    /// Appends a representation.
    #[must_use]
    pub fn representation(mut self, representation: Representation) -> Self {
        self.definition.representations.push(representation);
        self
    }

    /// Renames the boolean behavior.
    #[must_use]
    pub fn open_behavior(mut self, name: impl Into<String>) -> Self {
        self.definition.open_behavior = name.into();
        self
    }

    /// Renames the ranged behavior.
    #[must_use]
    pub fn openness_behavior(mut self, name: impl Into<String>) -> Self {
        self.definition.openness_behavior = name.into();
        self
    }

    /// Sets the openness step.
    #[must_use]
    pub fn openness_step(mut self, step: i32) -> Self {
        self.definition.openness_step = step;
        self
    }

    /// Finishes the definition. Validation happens in [`Gate::new`](crate::Gate::new).
    #[must_use]
    pub fn build(self) -> GateDefinition {
        self.definition
    }
}
