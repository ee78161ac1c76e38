// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranged integer behavior with lower-bound / upper-bound / interior listeners.

use alloc::string::String;

use crate::Params;

/// Receives the outcome of a routed ranged request.
///
/// Each method returns whether the listener accepted the transition.
pub trait RangedListener {
    /// The request resolved to the lower bound.
    fn on_lower_bound(&mut self, params: &Params) -> bool;
    /// The request resolved to the upper bound.
    fn on_upper_bound(&mut self, params: &Params) -> bool;
    /// The request resolved to a value strictly between the bounds.
    fn on_range_value(&mut self, value: i32, params: &Params) -> bool;
}

/// A request addressed to a [`RangedIntBehavior`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangedRequest {
    /// Become the given value (clamped into the range).
    Set(i32),
    /// Move one step up from the current value.
    Next,
    /// Move one step down from the current value.
    Previous,
}

/// The single event a ranged request resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangedEvent {
    /// Fires [`RangedListener::on_lower_bound`].
    LowerBound,
    /// Fires [`RangedListener::on_upper_bound`].
    UpperBound,
    /// Fires [`RangedListener::on_range_value`] with the value.
    Interior(i32),
}

impl RangedEvent {
    /// Fires exactly one listener method and returns its result.
    pub fn dispatch<L: RangedListener + ?Sized>(self, listener: &mut L, params: &Params) -> bool {
        match self {
            Self::LowerBound => listener.on_lower_bound(params),
            Self::UpperBound => listener.on_upper_bound(params),
            Self::Interior(value) => listener.on_range_value(value, params),
        }
    }
}

/// A named integer behavior bounded by `min..=max`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangedIntBehavior {
    name: String,
    value: i32,
    min: i32,
    max: i32,
    step: i32,
}

impl RangedIntBehavior {
    /// Creates a behavior at `min` with a step of one.
    ///
    /// Bounds given in the wrong order are swapped.
    #[must_use]
    pub fn new(name: impl Into<String>, min: i32, max: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            name: name.into(),
            value: min,
            min,
            max,
            step: 1,
        }
    }

    /// Returns a copy with the given step; non-positive steps become one.
    #[must_use]
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step.max(1);
        self
    }

    /// Behavior name, as addressed by commands.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Step used by [`RangedRequest::Next`] and [`RangedRequest::Previous`].
    #[must_use]
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Overwrites the current value (clamped) without notifying anyone.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Resolves a request against the current value.
    #[must_use]
    pub fn route(&self, request: RangedRequest) -> RangedEvent {
        let target = match request {
            RangedRequest::Set(value) => value,
            RangedRequest::Next => self.value.saturating_add(self.step),
            RangedRequest::Previous => self.value.saturating_sub(self.step),
        }
        .clamp(self.min, self.max);

        if target == self.min {
            RangedEvent::LowerBound
        } else if target == self.max {
            RangedEvent::UpperBound
        } else {
            RangedEvent::Interior(target)
        }
    }
}
