// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

/// Error returned by [`DragController::on_drag_start`](crate::DragController::on_drag_start).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragError<K> {
    /// Neither the event target nor any of its ancestors is marked draggable.
    NoDraggableAncestor {
        /// The target of the rejected start event.
        target: K,
    },
    /// A gesture is already active and the controller rejects overlapping gestures.
    GestureInProgress {
        /// The element of the gesture that is still active.
        active: K,
    },
}

impl<K: fmt::Debug> fmt::Display for DragError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDraggableAncestor { target } => {
                write!(f, "no draggable element at or above {target:?}")
            }
            Self::GestureInProgress { active } => {
                write!(f, "a drag of {active:?} is already in progress")
            }
        }
    }
}

impl<K: fmt::Debug> core::error::Error for DragError<K> {}

/// A host could not initialize the drag payload.
///
/// Some platforms reject particular payload configurations. The controller
/// logs this error and carries on, since no recovery is possible.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PayloadError {
    reason: &'static str,
}

impl PayloadError {
    /// Create an error with a short static description.
    pub const fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// The description passed to [`PayloadError::new`].
    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drag payload rejected: {}", self.reason)
    }
}

impl core::error::Error for PayloadError {}
