// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observing which path a window update took.
//!
//! [`update_window_with_trace`](crate::update_window_with_trace) reports each
//! decision to a [`WindowTrace`] sink. Hosts can use this to verify that
//! scrolling stays on the incremental path, and tests use [`UpdateCounter`]
//! to assert that no full rebuild happened.

use crate::ShiftDirection;

/// Why a window was built from scratch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RebuildReason {
    /// There was no previous window, or it was empty.
    NoPreviousWindow,
    /// The previous window could not be recombined for the new position.
    Inapplicable,
}

/// A callback sink for window updates.
///
/// All methods default to doing nothing; `()` is the no-op sink.
pub trait WindowTrace {
    /// The first visible item did not change and the previous window was reused.
    fn unchanged(&mut self, first_index: usize) {
        let _ = first_index;
    }

    /// The previous window was recombined for a shift of `shift` items.
    fn recombined(&mut self, direction: ShiftDirection, shift: usize) {
        let _ = (direction, shift);
    }

    /// `removed` trailing spans were dropped from a recombined window.
    fn trimmed(&mut self, removed: usize) {
        let _ = removed;
    }

    /// `added` spans were appended to a recombined window.
    fn filled(&mut self, added: usize) {
        let _ = added;
    }

    /// A fresh window of `len` spans was built.
    fn rebuilt(&mut self, reason: RebuildReason, len: usize) {
        let _ = (reason, len);
    }
}

impl WindowTrace for () {}

/// Counts update paths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateCounter {
    /// Updates that reused the previous window unchanged.
    pub unchanged: usize,
    /// Updates that went through recombination.
    pub recombined: usize,
    /// Spans dropped by tail trimming, summed over all updates.
    pub trimmed_items: usize,
    /// Spans appended by gap filling, summed over all updates.
    pub filled_items: usize,
    /// Updates that built a fresh window.
    pub rebuilt: usize,
    /// Rebuilds caused by an inapplicable recombination.
    pub inapplicable: usize,
}

impl UpdateCounter {
    /// Creates a counter with everything at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all counts to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl WindowTrace for UpdateCounter {
    fn unchanged(&mut self, _first_index: usize) {
        self.unchanged += 1;
    }

    fn recombined(&mut self, _direction: ShiftDirection, _shift: usize) {
        self.recombined += 1;
    }

    fn trimmed(&mut self, removed: usize) {
        self.trimmed_items += removed;
    }

    fn filled(&mut self, added: usize) {
        self.filled_items += added;
    }

    fn rebuilt(&mut self, reason: RebuildReason, _len: usize) {
        self.rebuilt += 1;
        if reason == RebuildReason::Inapplicable {
            self.inapplicable += 1;
        }
    }
}
