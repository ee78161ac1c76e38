// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for gate construction and command handling.
//!
//! Refused actions, gates that touch a single zone, and gates that touch no
//! zone at all are *not* errors; they are reported through return values and
//! log records only.

use threshold_behavior::RequestError;

/// Failures surfaced by [`Gate`](crate::Gate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// The definition has no visual representation to evaluate.
    #[error("gate `{0}` has no representation")]
    MissingRepresentation(String),
    /// Both behaviors were given the same name, so commands could not tell
    /// them apart.
    #[error("gate `{gate}` uses `{behavior}` for both behaviors")]
    DuplicateBehaviorName {
        /// Gate name.
        gate: String,
        /// The shared behavior name.
        behavior: String,
    },
    /// A request addressed a behavior this gate does not have.
    #[error("gate `{gate}` has no behavior named `{behavior}`")]
    UnknownBehavior {
        /// Gate name.
        gate: String,
        /// Requested behavior.
        behavior: String,
    },
    /// A boolean value was sent to the ranged behavior, or the reverse.
    #[error("behavior `{behavior}` does not accept {found} values")]
    ValueMismatch {
        /// Addressed behavior.
        behavior: String,
        /// Kind of value received, `"boolean"` or `"ranged"`.
        found: &'static str,
    },
    /// The command properties could not be parsed.
    #[error(transparent)]
    Request(#[from] RequestError),
}
