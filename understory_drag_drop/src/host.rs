// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host toolkit as seen by the controller.
//!
//! The controller does not own an element tree, deliver native events, or
//! render anything. It asks the host for those through [`DragHost`].
//! [`HeadlessHost`](crate::HeadlessHost) is an in-memory implementation.

use kurbo::Vec2;

use crate::error::PayloadError;
use crate::event::DragPhase;

/// Element tree, listener registry and drag plumbing of a UI toolkit.
pub trait DragHost<K> {
    /// Token returned when a native listener is installed.
    type Listener;

    /// Parent of `node`, or `None` for a root.
    fn parent(&self, node: &K) -> Option<K>;

    /// Whether `node` is marked as a drag source.
    fn is_draggable(&self, node: &K) -> bool;

    /// Mark or unmark `node` as a drag source.
    fn set_draggable(&mut self, node: &K, draggable: bool);

    /// Visual offset of `node`, or `None` if it was never set.
    fn offset(&self, node: &K) -> Option<Vec2>;

    /// Set the visual offset of `node`.
    fn set_offset(&mut self, node: &K, offset: Vec2);

    /// Install the native listener for `phase` on `node`.
    fn add_listener(&mut self, node: &K, phase: DragPhase) -> Self::Listener;

    /// Remove a listener previously returned by [`add_listener`](Self::add_listener).
    fn remove_listener(&mut self, node: &K, listener: Self::Listener);

    /// Initialize the drag payload for a gesture starting on `source`.
    ///
    /// Errors are logged by the controller and otherwise ignored.
    fn prepare_payload(&mut self, source: &K) -> Result<(), PayloadError> {
        let _ = source;
        Ok(())
    }

    /// Install the transient drag-image placeholder next to `target`.
    fn install_drag_image(&mut self, target: &K) {
        let _ = target;
    }
}

/// Nearest ancestor of `node` (inclusive) that is marked draggable.
pub fn draggable_ancestor<K, H>(host: &H, node: &K) -> Option<K>
where
    K: Clone,
    H: DragHost<K> + ?Sized,
{
    let mut current = node.clone();
    loop {
        if host.is_draggable(&current) {
            return Some(current);
        }
        current = host.parent(&current)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeadlessHost;

    #[test]
    fn ancestor_search_is_inclusive() {
        let mut host = HeadlessHost::new();
        host.insert(1_u32, None);
        host.insert(2, Some(1));
        host.set_draggable(&2, true);

        assert_eq!(draggable_ancestor(&host, &2), Some(2));
    }

    #[test]
    fn ancestor_search_walks_up() {
        let mut host = HeadlessHost::new();
        host.insert(1_u32, None);
        host.insert(2, Some(1));
        host.insert(3, Some(2));
        host.insert(4, Some(3));
        host.set_draggable(&2, true);

        assert_eq!(draggable_ancestor(&host, &4), Some(2));
    }

    #[test]
    fn ancestor_search_stops_at_root() {
        let mut host = HeadlessHost::new();
        host.insert(1_u32, None);
        host.insert(2, Some(1));

        assert_eq!(draggable_ancestor(&host, &2), None);
    }
}
