// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{AxisDimension, ItemSpan, Scalar, Window};

/// Iterator over contiguous spans starting at a given item.
///
/// Yields while the next span starts at or before `limit` and fewer than
/// `remaining` spans have been produced, and stops after the last item of the
/// axis. Spans are resolved through the dimension, so they match
/// [`AxisDimension::span_of`] exactly.
#[derive(Debug)]
pub(crate) struct SpanRun<'a, S: Scalar> {
    dimension: &'a AxisDimension<S>,
    index: usize,
    limit: S,
    remaining: usize,
}

impl<'a, S: Scalar> SpanRun<'a, S> {
    pub(crate) fn new(
        dimension: &'a AxisDimension<S>,
        index: usize,
        limit: S,
        remaining: usize,
    ) -> Self {
        Self {
            dimension,
            index,
            limit,
            remaining,
        }
    }
}

impl<S: Scalar> Iterator for SpanRun<'_, S> {
    type Item = ItemSpan<S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let span = self.dimension.span_of(self.index)?;
        if span.start() > self.limit {
            self.remaining = 0;
            return None;
        }
        self.index += 1;
        self.remaining -= 1;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Builds a fresh window starting at item `start_index`, located at `start`.
///
/// Items are added while the pixels accumulated so far are at most
/// `pixel_budget` and fewer than `count_budget` items were produced. The check
/// is inclusive and happens before each item is added, so the last item may
/// extend past the budget: a viewport is never left short by a fraction of an
/// item at its trailing edge.
///
/// `start` anchors the pixel budget and is normally the start of item
/// `start_index`; the spans themselves always come from `dimension`. The
/// window stops after the last item, whose end is
/// [`AxisDimension::real_size`].
#[must_use]
pub fn build_window<S: Scalar>(
    start_index: usize,
    start: S,
    pixel_budget: S,
    count_budget: usize,
    dimension: &AxisDimension<S>,
) -> Window<S> {
    let run = SpanRun::new(dimension, start_index, start + pixel_budget, count_budget);
    Window::from_spans(run.collect())
}
