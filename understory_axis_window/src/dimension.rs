// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item sizing along one axis.
//!
//! [`AxisDimension`] stores a default item size plus a sparse map of per-item
//! overrides. It keeps a sorted index of where each override item begins so
//! that pixel-to-item lookups cost `O(log K)` in the number of overrides
//! rather than `O(N)` in the number of items.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{ItemSpan, Scalar, WindowError};

/// Sizing information for a single scrollable axis of `len` items.
///
/// Items without an override are `origin_item_size` pixels large. Every
/// mutation re-derives the position index and the real size, so the derived
/// state can never disagree with the overrides it was built from.
#[derive(Clone, Debug)]
pub struct AxisDimension<S: Scalar> {
    len: usize,
    origin_item_size: S,
    size_overrides: HashMap<usize, S>,
    /// Start coordinate of every override item below `len`, ascending.
    position_index: Vec<S>,
    /// Resolved span for each entry of `position_index`.
    position_entries: Vec<ItemSpan<S>>,
    real_size: S,
}

impl<S: Scalar> AxisDimension<S> {
    /// Creates a uniform axis of `len` items, each `origin_item_size` pixels.
    ///
    /// Returns [`WindowError::InvalidOriginSize`] unless the size is finite and
    /// greater than zero.
    pub fn new(len: usize, origin_item_size: S) -> Result<Self, WindowError> {
        if !origin_item_size.is_positive_finite() {
            return Err(WindowError::InvalidOriginSize);
        }
        Ok(Self {
            len,
            origin_item_size,
            size_overrides: HashMap::new(),
            position_index: Vec::new(),
            position_entries: Vec::new(),
            real_size: origin_item_size.times(len),
        })
    }

    /// Number of items on the axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the axis has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Default size of an item with no override.
    #[must_use]
    pub fn origin_item_size(&self) -> S {
        self.origin_item_size
    }

    /// Total pixel extent of all items.
    #[must_use]
    pub fn real_size(&self) -> S {
        self.real_size
    }

    /// Sparse map of per-item size overrides.
    ///
    /// Overrides at indices `>= len` are retained but have no effect until the
    /// axis grows to include them.
    #[must_use]
    pub fn size_overrides(&self) -> &HashMap<usize, S> {
        &self.size_overrides
    }

    /// Ascending start coordinates of the override items.
    #[must_use]
    pub fn position_index(&self) -> &[S] {
        &self.position_index
    }

    /// Resolved spans parallel to [`position_index`](Self::position_index).
    #[must_use]
    pub fn position_entries(&self) -> &[ItemSpan<S>] {
        &self.position_entries
    }

    /// Size of item `index`: its override, or the default size.
    #[must_use]
    pub fn item_size(&self, index: usize) -> S {
        self.size_overrides
            .get(&index)
            .copied()
            .unwrap_or(self.origin_item_size)
    }

    /// Changes the number of items on the axis.
    pub fn set_len(&mut self, len: usize) {
        if self.len != len {
            self.len = len;
            self.reindex();
        }
    }

    /// Overrides the size of item `index`.
    ///
    /// Only the overrides from `index` onward are re-derived. When writing
    /// back many measurements at once, [`set_sizes`](Self::set_sizes) does a
    /// single pass instead.
    pub fn set_size(&mut self, index: usize, size: S) -> Result<(), WindowError> {
        if !size.is_positive_finite() {
            return Err(WindowError::InvalidItemSize { index });
        }
        self.size_overrides.insert(index, size);
        self.reindex_from(index);
        Ok(())
    }

    /// Overrides several item sizes with a single re-index.
    ///
    /// The batch is applied atomically: if any size is invalid, no override
    /// is changed.
    pub fn set_sizes(
        &mut self,
        sizes: impl IntoIterator<Item = (usize, S)>,
    ) -> Result<(), WindowError> {
        let sizes: Vec<(usize, S)> = sizes.into_iter().collect();
        if let Some(&(index, _)) = sizes.iter().find(|(_, size)| !size.is_positive_finite()) {
            return Err(WindowError::InvalidItemSize { index });
        }
        self.size_overrides.extend(sizes);
        self.reindex();
        Ok(())
    }

    /// Removes the override for item `index`, returning it if present.
    pub fn clear_size(&mut self, index: usize) -> Option<S> {
        let removed = self.size_overrides.remove(&index);
        if removed.is_some() {
            self.reindex_from(index);
        }
        removed
    }

    /// Removes every override, making the axis uniform again.
    pub fn clear_sizes(&mut self) {
        if !self.size_overrides.is_empty() {
            self.size_overrides.clear();
            self.reindex();
        }
    }

    /// Returns the span of item `index`, or `None` past the end of the axis.
    #[must_use]
    pub fn span_of(&self, index: usize) -> Option<ItemSpan<S>> {
        (index < self.len).then(|| self.span_at(index))
    }

    /// Returns the span directly after `span`, or `None` past the last item.
    #[must_use]
    pub fn span_after(&self, span: &ItemSpan<S>) -> Option<ItemSpan<S>> {
        self.span_of(span.index() + 1)
    }

    /// Returns the span directly before `span`, or `None` at index 0.
    #[must_use]
    pub fn span_before(&self, span: &ItemSpan<S>) -> Option<ItemSpan<S>> {
        let index = span.index().checked_sub(1)?;
        self.span_of(index)
    }

    /// Span of item `index`, extrapolated with the default size past `len`.
    ///
    /// Every span handed out by this crate comes from here, so a span for a
    /// given item is bit-identical however it was reached.
    pub(crate) fn span_at(&self, index: usize) -> ItemSpan<S> {
        ItemSpan::new(index, self.boundary(index), self.boundary(index + 1))
    }

    /// Coordinate where item `index` begins. `boundary(len)` is the real size.
    fn boundary(&self, index: usize) -> S {
        let place = self
            .position_entries
            .partition_point(|entry| entry.index() < index);
        match place.checked_sub(1).map(|p| self.position_entries[p]) {
            None => self.origin_item_size.times(index),
            Some(entry) => entry.end() + self.origin_item_size.times(index - entry.index() - 1),
        }
    }

    fn reindex(&mut self) {
        let mut overrides: Vec<usize> = self
            .size_overrides
            .keys()
            .copied()
            .filter(|&index| index < self.len)
            .collect();
        overrides.sort_unstable();

        self.position_index.clear();
        self.position_entries.clear();
        self.extend_index(overrides);
    }

    /// Re-derives the entries at and after item `index`, keeping those before.
    fn reindex_from(&mut self, index: usize) {
        let place = self
            .position_entries
            .partition_point(|entry| entry.index() < index);
        let mut tail = Vec::with_capacity(self.position_entries.len() - place + 1);
        if index < self.len && self.size_overrides.contains_key(&index) {
            tail.push(index);
        }
        tail.extend(
            self.position_entries[place..]
                .iter()
                .map(ItemSpan::index)
                .filter(|&other| other != index),
        );

        self.position_index.truncate(place);
        self.position_entries.truncate(place);
        self.extend_index(tail);
    }

    /// Appends entries for the ascending override `indices`, which all lie
    /// after the existing entries, then recomputes the real size.
    fn extend_index(&mut self, indices: Vec<usize>) {
        let origin = self.origin_item_size;
        let (mut cursor, mut next) = self
            .position_entries
            .last()
            .map_or((S::zero(), 0), |entry| (entry.end(), entry.index() + 1));
        for index in indices {
            let start = cursor + origin.times(index - next);
            let entry = ItemSpan::with_size(index, start, self.item_size(index));
            self.position_index.push(entry.start());
            self.position_entries.push(entry);
            cursor = entry.end();
            next = index + 1;
        }
        self.real_size = cursor + origin.times(self.len - next);
    }
}
