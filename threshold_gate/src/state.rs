// Copyright 2025 the Threshold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical gate state and the transitions between its three classes.

use crate::guard::GuardedAction;

/// Presentation selected for the gate; the discriminant is the index of the
/// view in the object's representation list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GateView {
    /// Fully closed.
    #[default]
    Closed = 0,
    /// Fully open.
    Open = 1,
    /// Partially open.
    Partial = 2,
}

impl GateView {
    /// Index of the view in the representation list.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Snapshot of the canonical state.
///
/// Only three shapes are reachable:
/// - closed: `is_open == false`, `openness == 0`, view [`GateView::Closed`]
/// - open: `is_open == true`, `openness == 100`, view [`GateView::Open`]
/// - partial: `is_open == true`, `openness` in `1..=99`, view [`GateView::Partial`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GateState {
    /// Boolean behavior value.
    pub is_open: bool,
    /// Ranged behavior value, `0..=100`.
    pub openness: u8,
    /// Selected presentation.
    pub view: GateView,
}

impl Default for GateState {
    fn default() -> Self {
        Self::CLOSED
    }
}

impl GateState {
    /// Fully closed.
    pub const CLOSED: Self = Self {
        is_open: false,
        openness: 0,
        view: GateView::Closed,
    };

    /// Fully open.
    pub const OPEN: Self = Self {
        is_open: true,
        openness: 100,
        view: GateView::Open,
    };

    /// Partially open at `openness`, or `None` outside `1..=99`.
    #[must_use]
    pub const fn partial(openness: u8) -> Option<Self> {
        if openness >= 1 && openness <= 99 {
            Some(Self {
                is_open: true,
                openness,
                view: GateView::Partial,
            })
        } else {
            None
        }
    }

    /// Returns `true` if the snapshot is one of the three reachable shapes.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self.view {
            GateView::Closed => *self == Self::CLOSED,
            GateView::Open => *self == Self::OPEN,
            GateView::Partial => Self::partial(self.openness) == Some(*self),
        }
    }
}

/// A transition the gate may attempt; each maps to one guarded action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Transition {
    Close,
    Open,
    /// Interior openness; always in `1..=99`.
    Partial(u8),
}

impl Transition {
    pub(crate) const fn action(self) -> GuardedAction {
        match self {
            Self::Close => GuardedAction::Close,
            Self::Open => GuardedAction::Open,
            Self::Partial(_) => GuardedAction::MeasuredOpen,
        }
    }

    pub(crate) fn target(self) -> GateState {
        match self {
            Self::Close => GateState::CLOSED,
            Self::Open => GateState::OPEN,
            Self::Partial(v) => GateState::partial(v).unwrap_or(GateState::OPEN),
        }
    }
}
