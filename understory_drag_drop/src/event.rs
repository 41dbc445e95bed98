// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native drag event model.
//!
//! Hosts translate their toolkit's drag-start / drag-over / drag-end events
//! into [`DragEvent`] values before handing them to the
//! [`DragController`](crate::DragController). After the controller returns,
//! the host reads [`DragEvent::is_propagation_stopped`] and
//! [`DragEvent::is_default_prevented`] back and applies them to the native
//! event.

use kurbo::Point;

/// The three native phases a binding listens to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// Drag gesture begins on a drag source.
    Start,
    /// Pointer moves over a bound element during a gesture.
    Over,
    /// Drag gesture ends (drop or release).
    End,
}

/// A drag event as seen by the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct DragEvent<K> {
    target: K,
    position: Point,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl<K> DragEvent<K> {
    /// Create an event targeting `target` at absolute pointer `position`.
    pub fn new(target: K, position: Point) -> Self {
        Self {
            target,
            position,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// The innermost element the native event was delivered to.
    pub fn target(&self) -> &K {
        &self.target
    }

    /// Absolute pointer position (client coordinates).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Ask the host to stop delivering this event to further listeners.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Ask the host to skip its default navigation/drop behavior.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` once [`stop_propagation`](Self::stop_propagation) was called.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Returns `true` once [`prevent_default`](Self::prevent_default) was called.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
