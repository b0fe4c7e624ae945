// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    AxisDimension, RebuildReason, Scalar, ShiftDirection, Window, WindowError, WindowTrace,
    build_window, fill_gap, locate, recombine,
};

/// Computes the window for scroll `position`, reusing `previous` when possible.
///
/// `real_count` is the number of real items on the axis (at most
/// [`AxisDimension::len`]); the window never extends past it.
/// `viewport_extent` is the pixel budget measured from the start of the item
/// under `position`.
///
/// The update proceeds as follows:
///
/// 1. [`locate`] the item under `position`.
/// 2. If that item is already first in `previous`, return `previous` as is.
/// 3. Otherwise try to [`recombine`] `previous`. On success, drop trailing
///    spans a fresh build would not contain, then [`fill_gap`].
/// 4. If there is nothing to reuse, [`build_window`] from scratch.
///
/// Either path yields the same spans for the same inputs; only the slot
/// layout differs.
pub fn update_window<S: Scalar>(
    position: S,
    previous: Option<&Window<S>>,
    real_count: usize,
    viewport_extent: S,
    dimension: &AxisDimension<S>,
) -> Result<Window<S>, WindowError> {
    update_window_with_trace(
        position,
        previous,
        real_count,
        viewport_extent,
        dimension,
        &mut (),
    )
}

/// Like [`update_window`], reporting the path taken to `trace`.
pub fn update_window_with_trace<S: Scalar, T: WindowTrace + ?Sized>(
    position: S,
    previous: Option<&Window<S>>,
    real_count: usize,
    viewport_extent: S,
    dimension: &AxisDimension<S>,
    trace: &mut T,
) -> Result<Window<S>, WindowError> {
    if !position.is_non_negative_finite() {
        return Err(WindowError::InvalidPosition);
    }
    if !viewport_extent.is_non_negative_finite() {
        return Err(WindowError::InvalidViewportExtent);
    }
    if real_count > dimension.len() {
        return Err(WindowError::CountOutOfRange {
            count: real_count,
            len: dimension.len(),
        });
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "update_window",
        position = ?position,
        viewport = ?viewport_extent,
        real_count
    )
    .entered();

    let target = locate(position, dimension);
    let count_budget = real_count.saturating_sub(target.index());

    let mut reason = RebuildReason::NoPreviousWindow;
    if let Some(previous) = previous
        && let Some(&first) = previous.first()
    {
        if target.index() == first.index() {
            trace.unchanged(first.index());
            return Ok(previous.clone());
        }

        let direction = if target.index() > first.index() {
            ShiftDirection::Forward
        } else {
            ShiftDirection::Backward
        };
        let shift = target.index().abs_diff(first.index());
        reason = RebuildReason::Inapplicable;

        if let Some(mut window) = recombine(previous, &target, direction, shift, dimension) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?direction, shift, "recombined window");
            trace.recombined(direction, shift);

            if let Some(&first) = window.first() {
                let limit = first.start() + viewport_extent;
                let keep = window
                    .iter()
                    .take(count_budget)
                    .take_while(|span| span.start() <= limit)
                    .count();
                if keep < window.len() {
                    trace.trimmed(window.len() - keep);
                    window.truncate(keep);
                }

                let fill = fill_gap(&window, &first, viewport_extent, count_budget, dimension);
                if !fill.is_empty() {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(added = fill.len(), "filled window tail");
                    trace.filled(fill.len());
                    window.append(fill);
                }
            }
            if !window.is_empty() {
                return Ok(window);
            }
        }
    }

    let window = build_window(
        target.index(),
        target.start(),
        viewport_extent,
        count_budget,
        dimension,
    );
    #[cfg(feature = "tracing")]
    tracing::trace!(?reason, len = window.len(), "rebuilt window");
    trace.rebuilt(reason, window.len());
    Ok(window)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{update_window, update_window_with_trace};
    use crate::{AxisDimension, ItemSpan, UpdateCounter, Window, WindowError, build_window};

    fn indices(window: &Window<f64>) -> Vec<usize> {
        window.iter().map(ItemSpan::index).collect()
    }

    fn spans(window: &Window<f64>) -> Vec<ItemSpan<f64>> {
        window.iter().copied().collect()
    }

    #[test]
    fn rejects_malformed_input() {
        let dim = AxisDimension::new(10, 20.0_f64).unwrap();
        assert_eq!(
            update_window(-1.0, None, 10, 100.0, &dim),
            Err(WindowError::InvalidPosition)
        );
        assert_eq!(
            update_window(f64::NAN, None, 10, 100.0, &dim),
            Err(WindowError::InvalidPosition)
        );
        assert_eq!(
            update_window(0.0, None, 10, -5.0, &dim),
            Err(WindowError::InvalidViewportExtent)
        );
        assert_eq!(
            update_window(0.0, None, 11, 100.0, &dim),
            Err(WindowError::CountOutOfRange { count: 11, len: 10 })
        );
    }

    #[test]
    fn first_update_builds() {
        let dim = AxisDimension::new(1000, 20.0_f64).unwrap();
        let mut counter = UpdateCounter::new();
        let window = update_window_with_trace(0.0, None, 1000, 100.0, &dim, &mut counter).unwrap();

        assert_eq!(indices(&window), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(counter.rebuilt, 1);
        assert_eq!(counter.inapplicable, 0);

        // An empty previous window is the same as none.
        counter.reset();
        let empty = Window::new();
        let again = update_window_with_trace(0.0, Some(&empty), 1000, 100.0, &dim, &mut counter)
            .unwrap();
        assert_eq!(again, window);
        assert_eq!(counter.rebuilt, 1);
    }

    #[test]
    fn same_leading_item_is_a_no_op() {
        let dim = AxisDimension::new(1000, 20.0_f64).unwrap();
        let first = update_window(0.0, None, 1000, 100.0, &dim).unwrap();
        let mut counter = UpdateCounter::new();

        let second =
            update_window_with_trace(19.0, Some(&first), 1000, 100.0, &dim, &mut counter).unwrap();
        assert_eq!(second, first);
        assert_eq!(counter.unchanged, 1);
        assert_eq!(counter.rebuilt, 0);
        assert_eq!(counter.recombined, 0);
    }

    #[test]
    fn small_scroll_recombines_without_rebuilding() {
        let dim = AxisDimension::new(1000, 20.0_f64).unwrap();
        let first = update_window(0.0, None, 1000, 100.0, &dim).unwrap();
        let mut counter = UpdateCounter::new();

        let second =
            update_window_with_trace(25.0, Some(&first), 1000, 100.0, &dim, &mut counter).unwrap();
        assert_eq!(second.first(), Some(&ItemSpan::new(1, 20.0, 40.0)));
        assert_eq!(counter.recombined, 1);
        assert_eq!(counter.rebuilt, 0);
        assert_eq!(
            spans(&second),
            spans(&build_window(1, 20.0, 100.0, 999, &dim))
        );
    }

    #[test]
    fn trims_when_new_items_are_larger() {
        let mut dim = AxisDimension::new(100, 20.0_f64).unwrap();
        dim.set_size(6, 200.0).unwrap();
        let first = update_window(0.0, None, 100, 100.0, &dim).unwrap();
        assert_eq!(indices(&first), vec![0, 1, 2, 3, 4, 5]);

        let mut counter = UpdateCounter::new();
        // Item 2 starts at 40; the window must end with the 200px item 6.
        let second =
            update_window_with_trace(40.0, Some(&first), 100, 100.0, &dim, &mut counter).unwrap();
        assert_eq!(indices(&second), vec![2, 3, 4, 5, 6]);
        assert_eq!(counter.trimmed_items, 1);
        assert_eq!(counter.rebuilt, 0);
        assert_eq!(spans(&second), spans(&build_window(2, 40.0, 100.0, 98, &dim)));
    }

    #[test]
    fn large_jump_falls_back_to_rebuild() {
        let dim = AxisDimension::new(1000, 20.0_f64).unwrap();
        let first = update_window(0.0, None, 1000, 100.0, &dim).unwrap();
        let mut counter = UpdateCounter::new();

        let second =
            update_window_with_trace(500.0, Some(&first), 1000, 100.0, &dim, &mut counter).unwrap();
        assert_eq!(counter.rebuilt, 1);
        assert_eq!(counter.inapplicable, 1);
        assert_eq!(second, build_window(25, 500.0, 100.0, 975, &dim));
    }

    #[test]
    fn position_past_the_end_yields_empty_window() {
        let dim = AxisDimension::new(10, 20.0_f64).unwrap();
        let first = update_window(120.0, None, 10, 100.0, &dim).unwrap();
        assert_eq!(indices(&first), vec![6, 7, 8, 9]);

        let past = update_window(200.0, Some(&first), 10, 100.0, &dim).unwrap();
        assert!(past.is_empty());
    }
}
