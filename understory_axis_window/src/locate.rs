// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{AxisDimension, ItemSpan, Scalar};

/// Maps a scroll `position` to the span of the item containing it.
///
/// With no size overrides this is a division by the default item size.
/// Otherwise the override whose start is the last one at or before
/// `position` is found by binary search: if `position` falls inside it, that
/// override is returned as is; if not, the item is found by counting default
/// sized items past the override's end.
///
/// A position on a boundary between two items resolves to the later item.
/// Positions at or beyond [`AxisDimension::real_size`] yield indices past the
/// last item; callers clamp the count budget accordingly.
#[must_use]
pub fn locate<S: Scalar>(position: S, dimension: &AxisDimension<S>) -> ItemSpan<S> {
    let origin = dimension.origin_item_size();
    let place = dimension
        .position_index()
        .partition_point(|&boundary| boundary <= position);

    let guess = match place.checked_sub(1).map(|p| dimension.position_entries()[p]) {
        None => (position / origin).floor_to_usize(),
        Some(entry) if position < entry.end() => return entry,
        Some(entry) => (entry.index() + 1)
            .saturating_add(((position - entry.end()) / origin).floor_to_usize()),
    };
    // Far past the end every index is equally out of range.
    let guess = guess.min(dimension.len());

    // The division can round across a boundary; settle on the canonical span.
    let span = dimension.span_at(guess);
    if position < span.start() && guess > 0 {
        dimension.span_at(guess - 1)
    } else if position >= span.end() {
        dimension.span_at(guess + 1)
    } else {
        span
    }
}
