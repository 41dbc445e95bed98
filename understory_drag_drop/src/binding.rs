// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element binding configuration and the side-table record behind it.

use core::fmt;

use crate::handler::HandlerSpec;

/// Options for binding drag-and-drop behavior to one element.
///
/// ```
/// use understory_drag_drop::{BindingConfig, DragContext, HandlerSpec};
///
/// let config = BindingConfig::<u32>::default();
/// assert!(config.allow_over);
/// assert!(config.handler.is_none());
///
/// let config = BindingConfig::<u32>::default()
///     .with_allow_over(false)
///     .with_handler(HandlerSpec::callback(|_: &DragContext<'_, u32>| {}));
/// assert!(!config.allow_over);
/// ```
pub struct BindingConfig<K> {
    /// Install the move-phase listener. When `false`, neither drag
    /// handlers nor the repositioning fallback run for this element.
    pub allow_over: bool,
    /// Dispatch table for this element.
    pub handler: Option<HandlerSpec<K>>,
    /// Mark the element as a drag source on attach (and unmark it on detach).
    pub draggable: bool,
}

impl<K> BindingConfig<K> {
    /// Set [`allow_over`](Self::allow_over).
    pub fn with_allow_over(mut self, allow_over: bool) -> Self {
        self.allow_over = allow_over;
        self
    }

    /// Set [`handler`](Self::handler).
    pub fn with_handler(mut self, handler: HandlerSpec<K>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Set [`draggable`](Self::draggable).
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }
}

impl<K> Default for BindingConfig<K> {
    fn default() -> Self {
        Self {
            allow_over: true,
            handler: None,
            draggable: false,
        }
    }
}

impl<K> fmt::Debug for BindingConfig<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingConfig")
            .field("allow_over", &self.allow_over)
            .field("handler", &self.handler)
            .field("draggable", &self.draggable)
            .finish()
    }
}

/// Everything the controller created for one bound element.
///
/// Dropping the record from the side table is the whole teardown apart from
/// handing the listener tokens back to the host.
pub(crate) struct Binding<K, L> {
    pub(crate) handler: Option<HandlerSpec<K>>,
    pub(crate) start: Option<L>,
    pub(crate) over: Option<L>,
    pub(crate) end: Option<L>,
    pub(crate) marked_draggable: bool,
}

impl<K, L> Binding<K, L> {
    pub(crate) fn new(handler: Option<HandlerSpec<K>>) -> Self {
        Self {
            handler,
            start: None,
            over: None,
            end: None,
            marked_draggable: false,
        }
    }

    /// Take every listener token still held, in install order.
    pub(crate) fn take_listeners(&mut self) -> impl Iterator<Item = L> {
        [self.start.take(), self.over.take(), self.end.take()]
            .into_iter()
            .flatten()
    }
}

impl<K, L> fmt::Debug for Binding<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("handler", &self.handler)
            .field("start", &self.start.is_some())
            .field("over", &self.over.is_some())
            .field("end", &self.end.is_some())
            .field("marked_draggable", &self.marked_draggable)
            .finish()
    }
}
