// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing behavior requests out of command properties.

use alloc::string::{String, ToString};

use crate::{BooleanRequest, Params, RangedRequest};

/// Property naming the addressed behavior.
const BEHAVIOR_KEY: &str = "behavior";
/// Property carrying the requested value.
const VALUE_KEY: &str = "value";

/// Failure to turn command properties into a [`BehaviorRequest`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// A required property is absent.
    #[error("missing `{0}` property")]
    MissingProperty(&'static str),
    /// The value is neither a boolean keyword, a ranged keyword, nor an integer.
    #[error("invalid value `{value}` for behavior `{behavior}`")]
    InvalidValue {
        /// Addressed behavior.
        behavior: String,
        /// Offending value.
        value: String,
    },
}

/// The typed value of a behavior request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestValue {
    /// For boolean behaviors: `"true"`, `"false"`, or `"opposite"`.
    Boolean(BooleanRequest),
    /// For ranged behaviors: an integer, `"next"`, or `"previous"`.
    Ranged(RangedRequest),
}

/// A request addressed to one named behavior of an object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BehaviorRequest {
    /// Name of the addressed behavior.
    pub behavior: String,
    /// What the behavior is asked to do.
    pub value: RequestValue,
}

impl BehaviorRequest {
    /// Builds a request from an already typed value.
    #[must_use]
    pub fn new(behavior: impl Into<String>, value: RequestValue) -> Self {
        Self {
            behavior: behavior.into(),
            value,
        }
    }

    /// Parses a textual command value.
    ///
    /// Keywords are matched case-insensitively; surrounding whitespace is ignored.
    pub fn parse(behavior: &str, value: &str) -> Result<Self, RequestError> {
        let trimmed = value.trim();
        let parsed = if trimmed.eq_ignore_ascii_case("true") {
            RequestValue::Boolean(BooleanRequest::Set(true))
        } else if trimmed.eq_ignore_ascii_case("false") {
            RequestValue::Boolean(BooleanRequest::Set(false))
        } else if trimmed.eq_ignore_ascii_case("opposite") {
            RequestValue::Boolean(BooleanRequest::Toggle)
        } else if trimmed.eq_ignore_ascii_case("next") {
            RequestValue::Ranged(RangedRequest::Next)
        } else if trimmed.eq_ignore_ascii_case("previous") {
            RequestValue::Ranged(RangedRequest::Previous)
        } else {
            let number = trimmed
                .parse::<i32>()
                .map_err(|_| RequestError::InvalidValue {
                    behavior: behavior.to_string(),
                    value: value.to_string(),
                })?;
            RequestValue::Ranged(RangedRequest::Set(number))
        };
        Ok(Self::new(behavior, parsed))
    }

    /// Parses the `behavior` and `value` properties of a command.
    pub fn from_params(params: &Params) -> Result<Self, RequestError> {
        let behavior = params
            .get(BEHAVIOR_KEY)
            .ok_or(RequestError::MissingProperty(BEHAVIOR_KEY))?;
        let value = params
            .get(VALUE_KEY)
            .ok_or(RequestError::MissingProperty(VALUE_KEY))?;
        Self::parse(behavior, value)
    }
}
