// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: binds elements and turns native drag events into handler calls.
//!
//! ## Phases
//!
//! - **Start** on a bound element stops propagation, prepares the payload,
//!   resolves the nearest draggable ancestor of the target, installs the
//!   drag-image placeholder, and opens a [`DragSession`].
//! - **Over** prevents the default action, computes the delta since the
//!   previous move, and dispatches it: first to the dragged element's own
//!   handler, then to the bound element's handler. When neither matches, the
//!   delta is added to the dragged element's offset. The session origin then
//!   moves to the current pointer position.
//! - **End** stops propagation, prevents the default action, closes the
//!   session, and dispatches the drop with the same scope precedence. There
//!   is no fallback for unmatched drops.
//!
//! Events delivered to an element without the matching listener are
//! reported as `Unbound` and leave both the event and the controller alone.
//!
//! ## Gestures
//!
//! A controller tracks at most one gesture. A start that arrives while a
//! gesture is active either replaces it ([`OverlapPolicy::Replace`], the
//! default) or is rejected ([`OverlapPolicy::Reject`]). Independent
//! controllers never share a session.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag_drop::{
//!     BindingConfig, DragController, DragEvent, DragHost, HeadlessHost, ListenerId, MoveOutcome,
//! };
//!
//! let mut host = HeadlessHost::new();
//! host.insert("board", None);
//! host.insert("card", Some("board"));
//!
//! let mut dnd = DragController::<&str, ListenerId>::new();
//! dnd.attach(&mut host, "board", BindingConfig::default());
//! dnd.attach(&mut host, "card", BindingConfig::default().with_draggable(true));
//!
//! let mut start = DragEvent::new("card", Point::new(100.0, 100.0));
//! dnd.on_drag_start(&mut host, &"card", &mut start).unwrap();
//!
//! // No handlers anywhere: the card is repositioned by the pointer delta.
//! let mut over = DragEvent::new("board", Point::new(130.0, 80.0));
//! let outcome = dnd.on_drag_over(&mut host, &"board", &mut over);
//! assert_eq!(outcome, MoveOutcome::Repositioned(Vec2::new(30.0, -20.0)));
//! assert_eq!(host.offset(&"card"), Some(Vec2::new(30.0, -20.0)));
//!
//! let mut end = DragEvent::new("card", Point::new(130.0, 80.0));
//! dnd.on_drag_end(&"card", &mut end);
//! assert!(dnd.session().is_none());
//! ```

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Vec2;
use tracing::{debug, trace, warn};

use crate::binding::{Binding, BindingConfig};
use crate::error::DragError;
use crate::event::{DragEvent, DragPhase};
use crate::handler::{DragContext, HandlerSpec, resolve_drag, resolve_drop};
use crate::host::{DragHost, draggable_ancestor};
use crate::session::DragSession;

/// What to do when a gesture starts while another one is active.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Drop the active gesture without a drop dispatch and start the new one.
    #[default]
    Replace,
    /// Keep the active gesture and reject the new start.
    Reject,
}

/// Which handler matched a drag or drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// The handler bound on the dragged element itself.
    Dragged,
    /// The handler bound on the element whose listener received the event.
    Container,
}

/// Result of a start event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartOutcome<K> {
    /// The element has no start listener; nothing happened.
    Unbound,
    /// A gesture began.
    Started {
        /// The element being dragged.
        dragged: K,
        /// The element of a gesture that was still active and got replaced.
        replaced: Option<K>,
    },
}

/// Result of a move event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The element has no move listener; nothing happened.
    Unbound,
    /// No gesture is active.
    Idle,
    /// A drag handler in the given scope fired.
    Dispatched(Scope),
    /// No handler matched; the dragged element's offset is now this value.
    Repositioned(Vec2),
}

/// Result of an end event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndOutcome {
    /// The element has no end listener; nothing happened.
    Unbound,
    /// No gesture was active.
    Idle,
    /// A drop handler in the given scope fired.
    Dropped(Scope),
    /// The gesture ended without a matching drop handler.
    Unmatched,
}

/// Owns per-element bindings and the active drag session.
///
/// `K` identifies elements; `L` is the host's listener token type.
pub struct DragController<K, L> {
    bindings: HashMap<K, Binding<K, L>>,
    session: Option<DragSession<K>>,
    overlap: OverlapPolicy,
}

impl<K, L> Default for DragController<K, L> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
            session: None,
            overlap: OverlapPolicy::default(),
        }
    }
}

impl<K: fmt::Debug, L> fmt::Debug for DragController<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("bindings", &self.bindings)
            .field("session", &self.session)
            .field("overlap", &self.overlap)
            .finish()
    }
}

impl<K, L> DragController<K, L>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    /// Create a controller with no bindings and the default [`OverlapPolicy`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [`OverlapPolicy`].
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap = policy;
        self
    }

    /// The configured [`OverlapPolicy`].
    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.overlap
    }

    /// Whether `node` is currently bound.
    pub fn is_bound(&self, node: &K) -> bool {
        self.bindings.contains_key(node)
    }

    /// Number of bound elements.
    pub fn bound_count(&self) -> usize {
        self.bindings.len()
    }

    /// The handler bound on `node`, if any.
    pub fn handler(&self, node: &K) -> Option<&HandlerSpec<K>> {
        self.bindings.get(node)?.handler.as_ref()
    }

    /// The active session, if a gesture is in progress.
    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// The element being dragged, if a gesture is in progress.
    pub fn dragged(&self) -> Option<&K> {
        self.session.as_ref().map(DragSession::dragged)
    }

    /// Bind drag-and-drop behavior to `node`.
    ///
    /// Installs the start and end listeners, and the move listener when
    /// [`allow_over`](BindingConfig::allow_over) is set. Binding an element
    /// that is already bound replaces the previous binding.
    pub fn attach<H>(&mut self, host: &mut H, node: K, config: BindingConfig<K>)
    where
        H: DragHost<K, Listener = L> + ?Sized,
    {
        if self.bindings.contains_key(&node) {
            self.detach(host, &node);
        }

        let BindingConfig {
            allow_over,
            handler,
            draggable,
        } = config;
        if handler.as_ref().is_some_and(|h| !h.is_dispatchable()) {
            warn!(?node, "a lone rule never dispatches; wrap it in a rule list");
        }

        let mut binding = Binding::new(handler);
        binding.start = Some(host.add_listener(&node, DragPhase::Start));
        if allow_over {
            binding.over = Some(host.add_listener(&node, DragPhase::Over));
        }
        binding.end = Some(host.add_listener(&node, DragPhase::End));
        if draggable && !host.is_draggable(&node) {
            host.set_draggable(&node, true);
            binding.marked_draggable = true;
        }

        debug!(?node, allow_over, draggable, "attached drag binding");
        self.bindings.insert(node, binding);
    }

    /// Remove everything [`attach`](Self::attach) created for `node`.
    ///
    /// Returns `false` if `node` was not bound.
    pub fn detach<H>(&mut self, host: &mut H, node: &K) -> bool
    where
        H: DragHost<K, Listener = L> + ?Sized,
    {
        let Some(mut binding) = self.bindings.remove(node) else {
            return false;
        };
        for listener in binding.take_listeners() {
            host.remove_listener(node, listener);
        }
        if binding.marked_draggable {
            host.set_draggable(node, false);
        }
        debug!(?node, "detached drag binding");
        true
    }

    /// Handle a drag-start event delivered to the bound element `bound`.
    pub fn on_drag_start<H>(
        &mut self,
        host: &mut H,
        bound: &K,
        event: &mut DragEvent<K>,
    ) -> Result<StartOutcome<K>, DragError<K>>
    where
        H: DragHost<K, Listener = L> + ?Sized,
    {
        if !self.bindings.get(bound).is_some_and(|b| b.start.is_some()) {
            return Ok(StartOutcome::Unbound);
        }
        event.stop_propagation();

        if let (Some(active), OverlapPolicy::Reject) = (&self.session, self.overlap) {
            return Err(DragError::GestureInProgress {
                active: active.dragged().clone(),
            });
        }

        if let Err(err) = host.prepare_payload(event.target()) {
            debug!(%err, "ignoring drag payload error");
        }

        let dragged = draggable_ancestor(&*host, event.target()).ok_or_else(|| {
            DragError::NoDraggableAncestor {
                target: event.target().clone(),
            }
        })?;
        host.install_drag_image(event.target());

        let replaced = self
            .session
            .replace(DragSession::new(dragged.clone(), event.position()))
            .map(DragSession::into_dragged);
        if let Some(previous) = &replaced {
            warn!(?previous, ?dragged, "drag started before the previous one ended");
        }
        trace!(?dragged, position = ?event.position(), "drag started");

        Ok(StartOutcome::Started { dragged, replaced })
    }

    /// Handle a drag-over event delivered to the bound element `bound`.
    pub fn on_drag_over<H>(
        &mut self,
        host: &mut H,
        bound: &K,
        event: &mut DragEvent<K>,
    ) -> MoveOutcome
    where
        H: DragHost<K, Listener = L> + ?Sized,
    {
        if !self.bindings.get(bound).is_some_and(|b| b.over.is_some()) {
            return MoveOutcome::Unbound;
        }
        event.prevent_default();

        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::Idle;
        };
        let event: &DragEvent<K> = event;
        let position = event.position();
        let ctx = DragContext {
            dragged: session.dragged(),
            container: event.target(),
            delta: session.delta_to(position),
            event,
        };

        let outcome = match dispatch(&mut self.bindings, bound, &ctx, resolve_drag) {
            Some(scope) => {
                trace!(?scope, delta = ?ctx.delta, "drag dispatched");
                MoveOutcome::Dispatched(scope)
            }
            None => {
                let offset = host.offset(ctx.dragged).unwrap_or(Vec2::ZERO) + ctx.delta;
                host.set_offset(ctx.dragged, offset);
                trace!(dragged = ?ctx.dragged, ?offset, "drag repositioned");
                MoveOutcome::Repositioned(offset)
            }
        };
        session.set_origin(position);
        outcome
    }

    /// Handle a drag-end event delivered to the bound element `bound`.
    ///
    /// The session is closed before the drop handler runs.
    pub fn on_drag_end(&mut self, bound: &K, event: &mut DragEvent<K>) -> EndOutcome {
        if !self.bindings.get(bound).is_some_and(|b| b.end.is_some()) {
            return EndOutcome::Unbound;
        }
        event.stop_propagation();
        event.prevent_default();

        let Some(session) = self.session.take() else {
            return EndOutcome::Idle;
        };
        let event: &DragEvent<K> = event;
        let ctx = DragContext {
            dragged: session.dragged(),
            container: event.target(),
            delta: session.delta_to(event.position()),
            event,
        };

        match dispatch(&mut self.bindings, bound, &ctx, resolve_drop) {
            Some(scope) => {
                trace!(?scope, "drop dispatched");
                EndOutcome::Dropped(scope)
            }
            None => {
                trace!(dragged = ?ctx.dragged, "drop unmatched");
                EndOutcome::Unmatched
            }
        }
    }

    /// Abandon the active gesture without a drop dispatch.
    ///
    /// Hosts call this for their cancel-equivalent event. Returns the element
    /// that was being dragged.
    pub fn cancel(&mut self) -> Option<K> {
        let dragged = self.session.take().map(DragSession::into_dragged);
        if let Some(dragged) = &dragged {
            debug!(?dragged, "drag cancelled");
        }
        dragged
    }
}

type Resolve<K> = fn(Option<&mut HandlerSpec<K>>, &DragContext<'_, K>) -> bool;

/// Try the dragged element's handler, then the bound element's.
fn dispatch<K, L>(
    bindings: &mut HashMap<K, Binding<K, L>>,
    bound: &K,
    ctx: &DragContext<'_, K>,
    resolve: Resolve<K>,
) -> Option<Scope>
where
    K: Eq + Hash,
{
    let own = bindings.get_mut(ctx.dragged).and_then(|b| b.handler.as_mut());
    if resolve(own, ctx) {
        return Some(Scope::Dragged);
    }
    // Same table; it already declined.
    if bound == ctx.dragged {
        return None;
    }
    let container = bindings.get_mut(bound).and_then(|b| b.handler.as_mut());
    resolve(container, ctx).then_some(Scope::Container)
}
