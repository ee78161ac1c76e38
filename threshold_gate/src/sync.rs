// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping the open flag and the openness value in step.
//!
//! Every stimulus, whichever behavior it addresses, ends in one of three
//! requests: [`Gate::request_closed`], [`Gate::request_open`], or
//! [`Gate::request_openness`]. Each asks the guard first; only an accepted
//! action updates the flag, the value, and the view together and starts the
//! change notification. A refused action leaves everything untouched.

use threshold_behavior::{
    BehaviorRequest, BooleanListener, BooleanRequest, Params, RangedListener, RangedRequest,
    RequestValue,
};
use threshold_zone::ZoneRegistry;
use tracing::debug;

use crate::error::GateError;
use crate::gate::Gate;
use crate::guard::ActionExecutor;
use crate::notify::ChangeSink;
use crate::state::{GateState, Transition};

impl<Z, X, S> Gate<Z, X, S>
where
    Z: ZoneRegistry,
    X: ActionExecutor,
    S: ChangeSink,
{
    /// Attempts the `"close"` action.
    ///
    /// Returns `true` if the guard accepted it.
    pub fn request_closed(&mut self, params: &Params) -> bool {
        self.attempt(Transition::Close, params)
    }

    /// Attempts the `"open"` action.
    ///
    /// Returns `true` if the guard accepted it. Already being open does not
    /// skip the guard.
    pub fn request_open(&mut self, params: &Params) -> bool {
        self.attempt(Transition::Open, params)
    }

    /// Attempts the `"measured open"` action for an interior value.
    ///
    /// Values outside `1..=99` are refused without consulting the guard; use
    /// [`Gate::set_openness`] to have bounds mapped onto open/close.
    pub fn request_openness(&mut self, value: i32, params: &Params) -> bool {
        let Some(partial) = u8::try_from(value)
            .ok()
            .filter(|v| GateState::partial(*v).is_some())
        else {
            debug!(
                "gate '{}': openness {} is not an interior value",
                self.name(),
                value
            );
            return false;
        };
        self.attempt(Transition::Partial(partial), params)
    }

    fn attempt(&mut self, transition: Transition, params: &Params) -> bool {
        let action = transition.action();
        if !self.executor.execute(action, params) {
            debug!("gate '{}': action '{}' refused", self.name(), action.name());
            return false;
        }
        let target = transition.target();
        self.open.set_value(target.is_open);
        self.openness.set_value(i32::from(target.openness));
        self.view = target.view;
        debug!(
            "gate '{}': action '{}' accepted, now {:?} at {}%",
            self.name(),
            action.name(),
            target.view,
            target.openness
        );
        self.set_changed(true, params);
        true
    }

    /// Asks the boolean behavior to become `true`.
    pub fn open(&mut self, params: &Params) -> bool {
        self.route_open(BooleanRequest::Set(true), params)
    }

    /// Asks the boolean behavior to become `false`.
    pub fn close(&mut self, params: &Params) -> bool {
        self.route_open(BooleanRequest::Set(false), params)
    }

    /// Flips the boolean behavior.
    pub fn toggle(&mut self, params: &Params) -> bool {
        self.route_open(BooleanRequest::Toggle, params)
    }

    /// Asks the ranged behavior for `value`; `0` closes, `100` opens, and
    /// anything between is a partial opening. Values outside the range clamp.
    pub fn set_openness(&mut self, value: i32, params: &Params) -> bool {
        self.route_openness(RangedRequest::Set(value), params)
    }

    /// Moves the ranged behavior one step up or down.
    pub fn step_openness(&mut self, up: bool, params: &Params) -> bool {
        let request = if up {
            RangedRequest::Next
        } else {
            RangedRequest::Previous
        };
        self.route_openness(request, params)
    }

    /// Handles a parsed command addressed to one of the gate's behaviors.
    ///
    /// Returns whether the resulting action was accepted.
    pub fn handle_request(
        &mut self,
        request: &BehaviorRequest,
        params: &Params,
    ) -> Result<bool, GateError> {
        if request.behavior == self.open.name() {
            match request.value {
                RequestValue::Boolean(req) => Ok(self.route_open(req, params)),
                RequestValue::Ranged(_) => Err(GateError::ValueMismatch {
                    behavior: request.behavior.clone(),
                    found: "ranged",
                }),
            }
        } else if request.behavior == self.openness.name() {
            match request.value {
                RequestValue::Ranged(req) => Ok(self.route_openness(req, params)),
                RequestValue::Boolean(_) => Err(GateError::ValueMismatch {
                    behavior: request.behavior.clone(),
                    found: "boolean",
                }),
            }
        } else {
            Err(GateError::UnknownBehavior {
                gate: self.name().into(),
                behavior: request.behavior.clone(),
            })
        }
    }

    /// Parses the `behavior`/`value` properties of `params` and handles them.
    pub fn handle_command(&mut self, params: &Params) -> Result<bool, GateError> {
        let request = BehaviorRequest::from_params(params)?;
        self.handle_request(&request, params)
    }

    fn route_open(&mut self, request: BooleanRequest, params: &Params) -> bool {
        let event = self.open.route(request);
        event.dispatch(self, params)
    }

    fn route_openness(&mut self, request: RangedRequest, params: &Params) -> bool {
        let event = self.openness.route(request);
        event.dispatch(self, params)
    }
}

impl<Z, X, S> BooleanListener for Gate<Z, X, S>
where
    Z: ZoneRegistry,
    X: ActionExecutor,
    S: ChangeSink,
{
    fn on_true(&mut self, params: &Params) -> bool {
        self.request_open(params)
    }

    fn on_false(&mut self, params: &Params) -> bool {
        self.request_closed(params)
    }
}

impl<Z, X, S> RangedListener for Gate<Z, X, S>
where
    Z: ZoneRegistry,
    X: ActionExecutor,
    S: ChangeSink,
{
    fn on_lower_bound(&mut self, params: &Params) -> bool {
        self.request_closed(params)
    }

    fn on_upper_bound(&mut self, params: &Params) -> bool {
        self.request_open(params)
    }

    fn on_range_value(&mut self, value: i32, params: &Params) -> bool {
        self.request_openness(value, params)
    }
}
