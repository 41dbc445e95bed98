// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag_drop --heading-base-level=0

//! Understory Drag Drop: drag-and-drop bindings for UI elements.
//!
//! This crate binds drag behavior to elements of a host UI toolkit. A bound
//! element gets three native listeners (start, over, end). While a gesture
//! is active, every move produces an incremental pointer delta that is
//! handed to at most one user handler, chosen by a matching rule. If no
//! handler claims a move, the dragged element is simply repositioned by the
//! delta.
//!
//! The crate does not own an element tree or deliver events. Hosts implement
//! [`DragHost`] (parent lookup, drag-source marks, offsets, listener
//! registration) and forward their native events to a [`DragController`].
//!
//! ## Handlers
//!
//! Each bound element may carry a [`HandlerSpec`]:
//!
//! - [`HandlerSpec::Callback`] is drag-only shorthand. It always matches on
//!   move and never on drop.
//! - [`HandlerSpec::Rules`] is an ordered list of [`Rule`]s. The first rule
//!   with a callback for the phase whose matcher accepts the dragged element
//!   wins.
//! - [`HandlerSpec::Rule`] is a lone rule. It never dispatches; wrap it in
//!   a list instead.
//!
//! The dragged element's own handler is always tried before the handler of
//! the element whose listener received the event, so per-item handlers
//! shadow container-wide ones.
//!
//! ## Deltas
//!
//! Deltas are measured from the previous move event, not from drag start.
//! Each sample stands on its own, which keeps handlers simple even when the
//! pointer crosses several elements between samples.
//! [`DragSession::total_offset`] gives the cumulative value when needed.
//!
//! ## Example
//!
//! ```rust
//! use core::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Vec2};
//! use understory_drag_drop::{
//!     BindingConfig, DragContext, DragController, DragEvent, DragHost, EndOutcome, HandlerSpec,
//!     HeadlessHost, ListenerId, MoveOutcome, Rule, Scope,
//! };
//!
//! // A list (1) holding a draggable row (2).
//! let mut host = HeadlessHost::new();
//! host.insert(1_u32, None);
//! host.insert(2, Some(1));
//! host.set_draggable(&2, true);
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let (on_drag, on_drop) = (log.clone(), log.clone());
//! let rows = HandlerSpec::rules([Rule::new()
//!     .matching(|id: &u32| *id == 2)
//!     .on_drag(move |c: &DragContext<'_, u32>| on_drag.borrow_mut().push(("drag", c.delta)))
//!     .on_drop(move |c: &DragContext<'_, u32>| on_drop.borrow_mut().push(("drop", c.delta)))]);
//!
//! let mut dnd = DragController::<u32, ListenerId>::new();
//! dnd.attach(&mut host, 1, BindingConfig::default().with_handler(rows));
//!
//! // The list receives every event its rows produce.
//! dnd.on_drag_start(&mut host, &1, &mut DragEvent::new(2, Point::new(0.0, 0.0)))
//!     .unwrap();
//! let moved = dnd.on_drag_over(&mut host, &1, &mut DragEvent::new(1, Point::new(4.0, 0.0)));
//! assert_eq!(moved, MoveOutcome::Dispatched(Scope::Container));
//! let dropped = dnd.on_drag_end(&1, &mut DragEvent::new(2, Point::new(4.0, 3.0)));
//! assert_eq!(dropped, EndOutcome::Dropped(Scope::Container));
//!
//! assert_eq!(
//!     *log.borrow(),
//!     [("drag", Vec2::new(4.0, 0.0)), ("drop", Vec2::new(0.0, 3.0))]
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and `tracing` against the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod controller;
mod error;
mod event;
mod handler;
mod headless;
mod host;
mod session;

pub use binding::BindingConfig;
pub use controller::{DragController, EndOutcome, MoveOutcome, OverlapPolicy, Scope, StartOutcome};
pub use error::{DragError, PayloadError};
pub use event::{DragEvent, DragPhase};
pub use handler::{DragContext, DragFn, HandlerSpec, MatchFn, Rule, resolve_drag, resolve_drop};
pub use headless::{HeadlessHost, ListenerId};
pub use host::{DragHost, draggable_ancestor};
pub use session::DragSession;
