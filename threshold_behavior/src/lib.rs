// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Threshold Behavior: observable object behaviors with threshold listeners.
//!
//! Automation objects expose their state through named *behaviors*. This crate
//! models the two kinds a passage needs:
//!
//! - [`BooleanBehavior`]: an on/off flag. Requests resolve to exactly one
//!   [`BooleanEvent`], which fires [`BooleanListener::on_true`] or
//!   [`BooleanListener::on_false`].
//! - [`RangedIntBehavior`]: an integer bounded by `min..=max`. Requests resolve
//!   to exactly one [`RangedEvent`]: the lower bound, the upper bound, or an
//!   interior value, firing the matching [`RangedListener`] method.
//!
//! A behavior never changes its own value when routing a request. The owning
//! object decides, usually after some external check, whether to accept the
//! transition and then writes the new value back with `set_value`.
//!
//! ## Minimal example
//!
//! ```rust
//! use threshold_behavior::{Params, RangedEvent, RangedIntBehavior, RangedListener, RangedRequest};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl RangedListener for Log {
//!     fn on_lower_bound(&mut self, _: &Params) -> bool {
//!         self.0.push("closed".into());
//!         true
//!     }
//!     fn on_upper_bound(&mut self, _: &Params) -> bool {
//!         self.0.push("open".into());
//!         true
//!     }
//!     fn on_range_value(&mut self, value: i32, _: &Params) -> bool {
//!         self.0.push(format!("at {value}"));
//!         true
//!     }
//! }
//!
//! let openness = RangedIntBehavior::new("openness", 0, 100);
//! let mut log = Log::default();
//!
//! let event = openness.route(RangedRequest::Set(40));
//! assert_eq!(event, RangedEvent::Interior(40));
//! event.dispatch(&mut log, &Params::new());
//!
//! // Out-of-range requests are clamped onto the bounds.
//! openness.route(RangedRequest::Set(250)).dispatch(&mut log, &Params::new());
//! assert_eq!(log.0, ["at 40", "open"]);
//! ```
//!
//! ## Requests from automation rules
//!
//! Commands address a behavior by name and carry a textual value such as
//! `"true"`, `"opposite"`, `"50"`, or `"next"`. [`BehaviorRequest::parse`] and
//! [`BehaviorRequest::from_params`] turn those into typed requests.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod boolean;
mod params;
mod ranged;
mod request;

pub use boolean::{BooleanBehavior, BooleanEvent, BooleanListener, BooleanRequest};
pub use params::Params;
pub use ranged::{RangedEvent, RangedIntBehavior, RangedListener, RangedRequest};
pub use request::{BehaviorRequest, RequestError, RequestValue};
