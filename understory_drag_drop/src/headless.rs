// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory [`DragHost`] for tests, tools, and headless scenes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_drag_drop::{DragHost, DragPhase, HeadlessHost};
//!
//! let mut host = HeadlessHost::new();
//! host.insert("list", None);
//! host.insert("item", Some("list"));
//! host.set_draggable(&"item", true);
//!
//! let token = host.add_listener(&"list", DragPhase::Over);
//! assert!(host.has_listener(&"list", DragPhase::Over));
//! host.remove_listener(&"list", token);
//! assert_eq!(host.listener_count(&"list"), 0);
//!
//! assert_eq!(host.offset(&"item"), None);
//! host.set_offset(&"item", Vec2::new(4.0, 2.0));
//! assert_eq!(host.offset(&"item"), Some(Vec2::new(4.0, 2.0)));
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use kurbo::Vec2;

use crate::error::PayloadError;
use crate::event::DragPhase;
use crate::host::DragHost;

/// Listener token handed out by [`HeadlessHost`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A parent map plus the per-element state a [`DragHost`] exposes.
#[derive(Debug)]
pub struct HeadlessHost<K> {
    parents: HashMap<K, K>,
    draggable: HashSet<K>,
    offsets: HashMap<K, Vec2>,
    listeners: HashMap<ListenerId, (K, DragPhase)>,
    next_listener: u64,
    drag_images: Vec<K>,
    payload_error: Option<PayloadError>,
}

impl<K> Default for HeadlessHost<K> {
    fn default() -> Self {
        Self {
            parents: HashMap::new(),
            draggable: HashSet::new(),
            offsets: HashMap::new(),
            listeners: HashMap::new(),
            next_listener: 0,
            drag_images: Vec::new(),
            payload_error: None,
        }
    }
}

impl<K: Clone + Eq + Hash> HeadlessHost<K> {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node` under `parent` (or as a root).
    pub fn insert(&mut self, node: K, parent: Option<K>) {
        match parent {
            Some(parent) => {
                self.parents.insert(node, parent);
            }
            None => {
                self.parents.remove(&node);
            }
        }
    }

    /// Make every following [`prepare_payload`](DragHost::prepare_payload) fail with `error`.
    pub fn set_payload_error(&mut self, error: Option<PayloadError>) {
        self.payload_error = error;
    }

    /// Whether a listener for `phase` is installed on `node`.
    pub fn has_listener(&self, node: &K, phase: DragPhase) -> bool {
        self.listeners
            .values()
            .any(|(n, p)| n == node && *p == phase)
    }

    /// Number of listeners installed on `node`.
    pub fn listener_count(&self, node: &K) -> usize {
        self.listeners.values().filter(|(n, _)| n == node).count()
    }

    /// Targets that received a drag-image placeholder, oldest first.
    pub fn drag_images(&self) -> &[K] {
        &self.drag_images
    }
}

impl<K: Clone + Eq + Hash> DragHost<K> for HeadlessHost<K> {
    type Listener = ListenerId;

    fn parent(&self, node: &K) -> Option<K> {
        self.parents.get(node).cloned()
    }

    fn is_draggable(&self, node: &K) -> bool {
        self.draggable.contains(node)
    }

    fn set_draggable(&mut self, node: &K, draggable: bool) {
        if draggable {
            self.draggable.insert(node.clone());
        } else {
            self.draggable.remove(node);
        }
    }

    fn offset(&self, node: &K) -> Option<Vec2> {
        self.offsets.get(node).copied()
    }

    fn set_offset(&mut self, node: &K, offset: Vec2) {
        self.offsets.insert(node.clone(), offset);
    }

    fn add_listener(&mut self, node: &K, phase: DragPhase) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, (node.clone(), phase));
        id
    }

    fn remove_listener(&mut self, node: &K, listener: ListenerId) {
        if let Some((owner, _)) = self.listeners.get(&listener) {
            debug_assert!(owner == node, "listener removed from a different node");
            self.listeners.remove(&listener);
        }
    }

    fn prepare_payload(&mut self, _source: &K) -> Result<(), PayloadError> {
        match self.payload_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn install_drag_image(&mut self, target: &K) {
        self.drag_images.push(target.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_ids_are_unique_per_install() {
        let mut host = HeadlessHost::new();
        let a = host.add_listener(&1_u32, DragPhase::Start);
        let b = host.add_listener(&1, DragPhase::Start);
        assert_ne!(a, b);
        assert_eq!(host.listener_count(&1), 2);

        host.remove_listener(&1, a);
        assert_eq!(host.listener_count(&1), 1);
        assert!(host.has_listener(&1, DragPhase::Start));
    }

    #[test]
    fn removing_unknown_listener_is_noop() {
        let mut host = HeadlessHost::<u32>::new();
        let id = host.add_listener(&1, DragPhase::End);
        host.remove_listener(&1, id);
        host.remove_listener(&1, id);
        assert_eq!(host.listener_count(&1), 0);
    }

    #[test]
    fn reinserting_as_root_clears_parent() {
        let mut host = HeadlessHost::new();
        host.insert(2_u32, Some(1));
        assert_eq!(host.parent(&2), Some(1));
        host.insert(2, None);
        assert_eq!(host.parent(&2), None);
    }

    #[test]
    fn payload_error_is_reported_until_cleared() {
        let mut host = HeadlessHost::new();
        assert!(host.prepare_payload(&1_u32).is_ok());

        host.set_payload_error(Some(PayloadError::new("legacy")));
        assert_eq!(host.prepare_payload(&1), Err(PayloadError::new("legacy")));

        host.set_payload_error(None);
        assert!(host.prepare_payload(&1).is_ok());
    }
}
