// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boolean behavior: an on/off flag with `on_true` / `on_false` listeners.

use alloc::string::String;

use crate::Params;

/// Receives the outcome of a routed boolean request.
///
/// Each method returns whether the listener accepted the transition.
pub trait BooleanListener {
    /// The behavior was asked to become `true`.
    fn on_true(&mut self, params: &Params) -> bool;
    /// The behavior was asked to become `false`.
    fn on_false(&mut self, params: &Params) -> bool;
}

/// A request addressed to a [`BooleanBehavior`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BooleanRequest {
    /// Become the given value.
    Set(bool),
    /// Become the opposite of the current value.
    Toggle,
}

/// The single event a boolean request resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BooleanEvent {
    /// Fires [`BooleanListener::on_true`].
    True,
    /// Fires [`BooleanListener::on_false`].
    False,
}

impl BooleanEvent {
    /// Fires exactly one listener method and returns its result.
    pub fn dispatch<L: BooleanListener + ?Sized>(self, listener: &mut L, params: &Params) -> bool {
        match self {
            Self::True => listener.on_true(params),
            Self::False => listener.on_false(params),
        }
    }
}

/// A named boolean behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanBehavior {
    name: String,
    value: bool,
}

impl BooleanBehavior {
    /// Creates a behavior with value `false`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: false,
        }
    }

    /// Behavior name, as addressed by commands.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> bool {
        self.value
    }

    /// Overwrites the current value without notifying anyone.
    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    /// Resolves a request against the current value.
    #[must_use]
    pub fn route(&self, request: BooleanRequest) -> BooleanEvent {
        let target = match request {
            BooleanRequest::Set(value) => value,
            BooleanRequest::Toggle => !self.value,
        };
        if target {
            BooleanEvent::True
        } else {
            BooleanEvent::False
        }
    }
}
