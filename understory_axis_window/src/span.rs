// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Scalar;

/// Pixel extent of one item on the axis.
///
/// A span is immutable: moving to a different item produces a new span. The
/// only place spans are replaced in place is inside a [`Window`](crate::Window)
/// slot during recombination.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemSpan<S: Scalar> {
    index: usize,
    start: S,
    end: S,
}

impl<S: Scalar> ItemSpan<S> {
    /// Creates a span for item `index` covering `start..end`.
    ///
    /// `end` must be greater than `start`.
    #[must_use]
    pub fn new(index: usize, start: S, end: S) -> Self {
        debug_assert!(end > start, "item {index} has an empty or inverted span");
        Self { index, start, end }
    }

    /// Creates a span for item `index` of `size` pixels starting at `start`.
    #[must_use]
    pub fn with_size(index: usize, start: S, size: S) -> Self {
        Self::new(index, start, start + size)
    }

    /// Logical index of the item.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// First pixel covered by the item.
    #[must_use]
    pub fn start(&self) -> S {
        self.start
    }

    /// Pixel just past the item; equal to the next item's `start`.
    #[must_use]
    pub fn end(&self) -> S {
        self.end
    }

    /// Pixel extent of the item (`end - start`).
    #[must_use]
    pub fn size(&self) -> S {
        self.end - self.start
    }

    /// Returns `true` if `position` lies within `start..=end`.
    ///
    /// Both ends are inclusive, so a position on a boundary belongs to the
    /// items on either side of it.
    #[must_use]
    pub fn contains(&self, position: S) -> bool {
        position >= self.start && position <= self.end
    }
}
