// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles for zones and gates.

/// Identifier of a zone inside a registry.
///
/// Ids are handed out by the registry and never reused by it, so a stale id
/// simply stops resolving after its zone is removed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ZoneId(pub(crate) u32);

impl ZoneId {
    /// Builds an id from its raw value, for registries implemented elsewhere.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Identifier of a passage (gate, door) registered with zones.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GateId(pub u32);
