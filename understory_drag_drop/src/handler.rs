// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handler specifications and their resolution.
//!
//! A bound element may carry a [`HandlerSpec`] in one of three shapes:
//!
//! - [`HandlerSpec::Callback`]: a bare drag callback that always matches in
//!   the drag phase and never in the drop phase.
//! - [`HandlerSpec::Rules`]: an ordered list of [`Rule`]s. The first rule
//!   whose phase callback is present and whose matcher accepts the dragged
//!   element wins; later rules are not consulted.
//! - [`HandlerSpec::Rule`]: a single unwrapped rule. It is accepted for
//!   compatibility but dispatches in neither phase; wrap it with
//!   [`HandlerSpec::rules`] to make it live.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Vec2};
//! use understory_drag_drop::{DragContext, DragEvent, HandlerSpec, Rule};
//!
//! let hits = Rc::new(Cell::new(0));
//! let seen = hits.clone();
//! let mut spec = HandlerSpec::rules([
//!     Rule::new().matching(|id: &u32| *id >= 100),
//!     Rule::new().on_drag(move |_: &DragContext<'_, u32>| seen.set(seen.get() + 1)),
//! ]);
//!
//! let event = DragEvent::new(1_u32, Point::new(5.0, 5.0));
//! let ctx = DragContext { dragged: &7, container: &1, delta: Vec2::new(1.0, 0.0), event: &event };
//!
//! // The first rule has no drag callback, so the second one handles it.
//! assert!(spec.resolve_drag(&ctx));
//! assert_eq!(hits.get(), 1);
//! // Nothing handles drops.
//! assert!(!spec.resolve_drop(&ctx));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Vec2;

use crate::event::DragEvent;

/// Values handed to drag and drop callbacks.
#[derive(Debug)]
pub struct DragContext<'a, K> {
    /// The element being dragged.
    pub dragged: &'a K,
    /// The element the pointer is currently over (the event target).
    pub container: &'a K,
    /// Pointer movement since the previous move event.
    pub delta: Vec2,
    /// The triggering event.
    pub event: &'a DragEvent<K>,
}

/// Callback invoked for a matched drag or drop.
pub type DragFn<K> = Box<dyn FnMut(&DragContext<'_, K>)>;

/// Predicate deciding whether a rule applies to a dragged element.
pub type MatchFn<K> = Box<dyn Fn(&K) -> bool>;

/// One entry of a rule-based handler.
///
/// A rule without a matcher applies to every dragged element. A rule missing
/// a phase callback is skipped for that phase.
pub struct Rule<K> {
    matcher: Option<MatchFn<K>>,
    on_drag: Option<DragFn<K>>,
    on_drop: Option<DragFn<K>>,
}

impl<K> Rule<K> {
    /// An empty rule: matches everything, handles nothing.
    pub fn new() -> Self {
        Self {
            matcher: None,
            on_drag: None,
            on_drop: None,
        }
    }

    /// Restrict the rule to dragged elements accepted by `matcher`.
    pub fn matching(mut self, matcher: impl Fn(&K) -> bool + 'static) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Set the drag-phase callback.
    pub fn on_drag(mut self, f: impl FnMut(&DragContext<'_, K>) + 'static) -> Self {
        self.on_drag = Some(Box::new(f));
        self
    }

    /// Set the drop-phase callback.
    pub fn on_drop(mut self, f: impl FnMut(&DragContext<'_, K>) + 'static) -> Self {
        self.on_drop = Some(Box::new(f));
        self
    }

    /// Whether the matcher accepts `dragged`. Rules without a matcher accept all.
    pub fn matches(&self, dragged: &K) -> bool {
        accepts(self.matcher.as_ref(), dragged)
    }

    /// Returns `true` if the rule has a drag-phase callback.
    pub fn handles_drag(&self) -> bool {
        self.on_drag.is_some()
    }

    /// Returns `true` if the rule has a drop-phase callback.
    pub fn handles_drop(&self) -> bool {
        self.on_drop.is_some()
    }
}

impl<K> Default for Rule<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Rule<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("matcher", &self.matcher.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_drop", &self.on_drop.is_some())
            .finish()
    }
}

fn accepts<K>(matcher: Option<&MatchFn<K>>, dragged: &K) -> bool {
    matcher.is_none_or(|m| m(dragged))
}

/// The dispatch table attached to a bound element.
pub enum HandlerSpec<K> {
    /// Drag-only shorthand: always matches on drag, never on drop.
    Callback(DragFn<K>),
    /// A lone rule. Never dispatched; see the module docs.
    Rule(Rule<K>),
    /// Ordered rules, first match wins.
    Rules(Vec<Rule<K>>),
}

impl<K> HandlerSpec<K> {
    /// Wrap a bare drag callback.
    pub fn callback(f: impl FnMut(&DragContext<'_, K>) + 'static) -> Self {
        Self::Callback(Box::new(f))
    }

    /// Wrap a single rule without a sequence.
    ///
    /// This shape never dispatches. Prefer [`HandlerSpec::rules`].
    pub fn rule(rule: Rule<K>) -> Self {
        Self::Rule(rule)
    }

    /// Build an ordered rule list.
    pub fn rules(rules: impl IntoIterator<Item = Rule<K>>) -> Self {
        Self::Rules(rules.into_iter().collect())
    }

    /// Returns `false` for shapes that can never dispatch in either phase.
    pub fn is_dispatchable(&self) -> bool {
        !matches!(self, Self::Rule(_))
    }

    /// Run the drag phase. Returns `true` if a callback fired.
    ///
    /// Callback panics propagate to the caller.
    pub fn resolve_drag(&mut self, ctx: &DragContext<'_, K>) -> bool {
        match self {
            Self::Callback(f) => {
                f(ctx);
                true
            }
            Self::Rule(_) => false,
            Self::Rules(rules) => {
                for rule in rules.iter_mut() {
                    let Rule {
                        matcher, on_drag, ..
                    } = rule;
                    if let Some(on_drag) = on_drag
                        && accepts(matcher.as_ref(), ctx.dragged)
                    {
                        on_drag(ctx);
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Run the drop phase. Returns `true` if a callback fired.
    ///
    /// Bare callbacks are drag-only and never match here.
    pub fn resolve_drop(&mut self, ctx: &DragContext<'_, K>) -> bool {
        match self {
            Self::Callback(_) | Self::Rule(_) => false,
            Self::Rules(rules) => {
                for rule in rules.iter_mut() {
                    let Rule {
                        matcher, on_drop, ..
                    } = rule;
                    if let Some(on_drop) = on_drop
                        && accepts(matcher.as_ref(), ctx.dragged)
                    {
                        on_drop(ctx);
                        return true;
                    }
                }
                false
            }
        }
    }
}

impl<K> From<Vec<Rule<K>>> for HandlerSpec<K> {
    fn from(rules: Vec<Rule<K>>) -> Self {
        Self::Rules(rules)
    }
}

impl<K> fmt::Debug for HandlerSpec<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::Rule(rule) => f.debug_tuple("Rule").field(rule).finish(),
            Self::Rules(rules) => f.debug_tuple("Rules").field(rules).finish(),
        }
    }
}

/// Drag-phase resolution for an optional spec. An absent spec never matches.
pub fn resolve_drag<K>(spec: Option<&mut HandlerSpec<K>>, ctx: &DragContext<'_, K>) -> bool {
    spec.is_some_and(|spec| spec.resolve_drag(ctx))
}

/// Drop-phase resolution for an optional spec. An absent spec never matches.
pub fn resolve_drop<K>(spec: Option<&mut HandlerSpec<K>>, ctx: &DragContext<'_, K>) -> bool {
    spec.is_some_and(|spec| spec.resolve_drop(ctx))
}
