// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the dragged element plus its last observed pointer position.
//!
//! ## Usage
//!
//! 1) Create a session with [`DragSession::new`] when a gesture starts.
//! 2) On each move, read [`DragSession::delta_to`] for the movement since the
//!    previous move, dispatch it, then call [`DragSession::set_origin`].
//! 3) Optionally call [`DragSession::total_offset`] for the cumulative offset
//!    from the start position.
//! 4) Drop the session when the gesture ends.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag_drop::DragSession;
//!
//! let mut session = DragSession::new("card", Point::new(100.0, 100.0));
//!
//! let delta = session.delta_to(Point::new(130.0, 80.0));
//! assert_eq!(delta, Vec2::new(30.0, -20.0));
//! session.set_origin(Point::new(130.0, 80.0));
//!
//! // Deltas are incremental: the next move is measured from (130, 80).
//! assert_eq!(session.delta_to(Point::new(131.0, 80.0)), Vec2::new(1.0, 0.0));
//! assert_eq!(session.total_offset(Point::new(131.0, 80.0)), Vec2::new(31.0, -20.0));
//! ```

use kurbo::{Point, Vec2};

/// State of one drag gesture, from start to end.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<K> {
    dragged: K,
    start: Point,
    origin: Point,
}

impl<K> DragSession<K> {
    /// Begin tracking `dragged` from pointer position `pos`.
    pub fn new(dragged: K, pos: Point) -> Self {
        Self {
            dragged,
            start: pos,
            origin: pos,
        }
    }

    /// The element being dragged. Stable for the whole gesture.
    pub fn dragged(&self) -> &K {
        &self.dragged
    }

    /// Pointer position the next delta is measured from.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pointer position at drag start.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Movement from the current origin to `pos`.
    pub fn delta_to(&self, pos: Point) -> Vec2 {
        pos - self.origin
    }

    /// Move the origin to `pos`; later deltas are measured from here.
    pub fn set_origin(&mut self, pos: Point) {
        self.origin = pos;
    }

    /// Cumulative offset from the drag start position.
    pub fn total_offset(&self, pos: Point) -> Vec2 {
        pos - self.start
    }

    /// Consume the session, returning the dragged element.
    pub fn into_dragged(self) -> K {
        self.dragged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_origin_at_start() {
        let session = DragSession::new(1_u32, Point::new(10.0, 20.0));
        assert_eq!(session.origin(), Point::new(10.0, 20.0));
        assert_eq!(session.start(), session.origin());
        assert_eq!(*session.dragged(), 1);
    }

    #[test]
    fn delta_does_not_move_origin() {
        let session = DragSession::new(1_u32, Point::new(10.0, 20.0));
        assert_eq!(session.delta_to(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
        assert_eq!(session.origin(), Point::new(10.0, 20.0));
    }

    #[test]
    fn consecutive_moves_track_incremental_deltas() {
        let mut session = DragSession::new(1_u32, Point::ZERO);

        let moves = [
            (Point::new(5.0, 3.0), Vec2::new(5.0, 3.0)),
            (Point::new(8.0, 7.0), Vec2::new(3.0, 4.0)),
            (Point::new(10.0, 10.0), Vec2::new(2.0, 3.0)),
        ];
        for (pos, expected) in moves {
            assert_eq!(session.delta_to(pos), expected);
            session.set_origin(pos);
        }
        assert_eq!(session.total_offset(Point::new(10.0, 10.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn negative_and_zero_deltas() {
        let mut session = DragSession::new(1_u32, Point::new(100.0, 100.0));
        assert_eq!(
            session.delta_to(Point::new(90.0, 85.0)),
            Vec2::new(-10.0, -15.0)
        );
        session.set_origin(Point::new(90.0, 85.0));
        assert_eq!(session.delta_to(Point::new(90.0, 85.0)), Vec2::ZERO);
    }

    #[test]
    fn fractional_coordinates() {
        let session = DragSession::new(1_u32, Point::new(1.5, 2.7));
        let delta = session.delta_to(Point::new(3.2, 4.1));
        assert!((delta.x - 1.7).abs() < f64::EPSILON * 10.0);
        assert!((delta.y - 1.4).abs() < f64::EPSILON * 10.0);
    }

    #[test]
    fn into_dragged_returns_element() {
        let session = DragSession::new(9_u32, Point::ZERO);
        assert_eq!(session.into_dragged(), 9);
    }
}
