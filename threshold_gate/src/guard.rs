// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The external "may this action run" check.

use threshold_behavior::Params;

/// Actions a gate asks permission for before changing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardedAction {
    /// `"close"`
    Close,
    /// `"open"`
    Open,
    /// `"measured open"`
    MeasuredOpen,
}

impl GuardedAction {
    /// Action name as known to the automation rules.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Open => "open",
            Self::MeasuredOpen => "measured open",
        }
    }
}

/// Executes (or refuses) a guarded action.
///
/// Refusal is a normal outcome, not an error. Implementations run
/// synchronously; the gate consumes the answer immediately.
pub trait ActionExecutor {
    /// Returns `true` if the action was accepted and executed.
    fn execute(&mut self, action: GuardedAction, params: &Params) -> bool;
}

impl<F> ActionExecutor for F
where
    F: FnMut(GuardedAction, &Params) -> bool,
{
    fn execute(&mut self, action: GuardedAction, params: &Params) -> bool {
        self(action, params)
    }
}

/// Executor that accepts every action.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl ActionExecutor for AcceptAll {
    fn execute(&mut self, _action: GuardedAction, _params: &Params) -> bool {
        true
    }
}
