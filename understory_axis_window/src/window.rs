// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendered window: a slot arena plus a visual order permutation.

use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;

use crate::{ItemSpan, Scalar};

/// Contiguous run of item spans to render for one axis.
///
/// Spans live in `items`, addressed by *slot*. `order` lists slots front to
/// back, so the visual sequence is `items[order[0]], items[order[1]], ...`.
/// Recombination overwrites a few slots and permutes `order` instead of
/// shifting span data around.
///
/// Invariants:
/// - `order` is a permutation of `0..items.len()`.
/// - Visually adjacent spans have consecutive indices and touch exactly
///   (`a.end() == b.start()`).
#[derive(Clone, Debug, PartialEq)]
pub struct Window<S: Scalar> {
    items: Vec<ItemSpan<S>>,
    order: Vec<usize>,
}

impl<S: Scalar> Default for Window<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> Window<S> {
    /// Creates an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Creates a window whose visual order matches slot order.
    pub(crate) fn from_spans(items: Vec<ItemSpan<S>>) -> Self {
        let order = (0..items.len()).collect();
        Self { items, order }
    }

    /// Number of spans in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the window holds no spans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visually first span.
    #[must_use]
    pub fn first(&self) -> Option<&ItemSpan<S>> {
        self.get(0)
    }

    /// Visually last span.
    #[must_use]
    pub fn last(&self) -> Option<&ItemSpan<S>> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Span at visual position `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&ItemSpan<S>> {
        self.order.get(position).map(|&slot| &self.items[slot])
    }

    /// Spans in slot order.
    #[must_use]
    pub fn items(&self) -> &[ItemSpan<S>] {
        &self.items
    }

    /// Slots in visual order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Iterates spans front to back.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ItemSpan<S>> + DoubleEndedIterator + '_ {
        self.order.iter().map(|&slot| &self.items[slot])
    }

    /// Returns `true` if item `index` is part of the window.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => (first.index()..=last.index()).contains(&index),
            _ => false,
        }
    }

    /// Iterates spans that intersect the half-open pixel range
    /// `offset..offset + extent`.
    ///
    /// A window built for a viewport may hold one trailing span that starts
    /// exactly on the viewport edge; this filters it out for callers that only
    /// want on-screen items.
    pub fn visible(&self, offset: S, extent: S) -> impl Iterator<Item = &ItemSpan<S>> + '_ {
        let end = offset + extent;
        self.iter()
            .filter(move |span| span.end() > offset && span.start() < end)
    }

    /// Replaces the span at visual position `position` in place.
    pub(crate) fn overwrite(&mut self, position: usize, span: ItemSpan<S>) {
        let slot = self.order[position];
        self.items[slot] = span;
    }

    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    /// Keeps the first `keep` spans in visual order.
    ///
    /// Surviving spans stored in slots `>= keep` are moved into slots freed by
    /// dropped spans, so `order` stays a permutation of `0..keep`.
    pub(crate) fn truncate(&mut self, keep: usize) {
        if keep >= self.len() {
            return;
        }
        // Dropped entries holding a slot below `keep` are exactly as many as
        // kept entries holding a slot at or above it.
        let mut free = keep;
        for position in 0..keep {
            let slot = self.order[position];
            if slot < keep {
                continue;
            }
            while self.order[free] >= keep {
                free += 1;
            }
            let target = self.order[free];
            free += 1;
            self.items[target] = self.items[slot];
            self.order[position] = target;
        }
        self.order.truncate(keep);
        self.items.truncate(keep);
    }

    /// Appends spans produced by [`fill_gap`](crate::fill_gap).
    pub(crate) fn append(&mut self, fill: GapFill<S>) {
        debug_assert_eq!(
            fill.first_slot,
            self.items.len(),
            "gap fill was computed for a different window"
        );
        self.order.extend(fill.slots());
        self.items.extend(fill.items);
    }
}

/// Spans that extend a window's tail, with the slots they occupy.
///
/// Produced by [`fill_gap`](crate::fill_gap). The slots start right after the
/// window's highest used slot and are appended to the visual order in the
/// same sequence as the spans.
#[derive(Clone, Debug, PartialEq)]
pub struct GapFill<S: Scalar> {
    pub(crate) items: SmallVec<[ItemSpan<S>; 8]>,
    pub(crate) first_slot: usize,
}

impl<S: Scalar> GapFill<S> {
    /// Additional spans, front to back.
    #[must_use]
    pub fn items(&self) -> &[ItemSpan<S>] {
        &self.items
    }

    /// Slots the spans should be stored in.
    #[must_use]
    pub fn slots(&self) -> Range<usize> {
        self.first_slot..self.first_slot + self.items.len()
    }

    /// Number of additional spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the window needed no extension.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
