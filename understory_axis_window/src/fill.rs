// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::build::SpanRun;
use crate::{AxisDimension, GapFill, ItemSpan, Scalar, Window};

/// Computes the spans needed to top up `window` after a recombination.
///
/// The window already covers `last.end() - first.start()` pixels and
/// `window.len()` items, where `first` is the visually first span. If that is
/// still within `pixel_budget` and below `count_budget`, the builder runs from
/// the item after the window's last span with what is left of both budgets,
/// using the same inclusive check as [`build_window`](crate::build_window).
///
/// The returned spans are meant for the slots right after the window's
/// highest used slot.
#[must_use]
pub fn fill_gap<S: Scalar>(
    window: &Window<S>,
    first: &ItemSpan<S>,
    pixel_budget: S,
    count_budget: usize,
    dimension: &AxisDimension<S>,
) -> GapFill<S> {
    let first_slot = window.items().len();
    let items = match window.last() {
        Some(last) if window.len() < count_budget => SpanRun::new(
            dimension,
            last.index() + 1,
            first.start() + pixel_budget,
            count_budget - window.len(),
        )
        .collect(),
        _ => SmallVec::new(),
    };
    GapFill { items, first_slot }
}

#[cfg(test)]
mod tests {
    use super::fill_gap;
    use crate::{AxisDimension, ItemSpan, ShiftDirection, build_window, recombine};

    #[test]
    fn tops_up_when_items_shrink() {
        let mut dim = AxisDimension::new(100, 20.0_f64).unwrap();
        dim.set_size(0, 80.0).unwrap();
        let previous = build_window(0, 0.0, 100.0, 100, &dim);
        // 80 + 20 covers the budget inclusively with one more item.
        assert_eq!(previous.len(), 3);

        let target = dim.span_of(1).unwrap();
        let mut window = recombine(&previous, &target, ShiftDirection::Forward, 1, &dim).unwrap();
        let first = *window.first().unwrap();
        let fill = fill_gap(&window, &first, 100.0, 99, &dim);

        // Window covers 80..140; starts at 140, 160 and 180 are all within 80 + 100.
        assert_eq!(
            fill.items(),
            &[
                ItemSpan::new(4, 140.0, 160.0),
                ItemSpan::new(5, 160.0, 180.0),
                ItemSpan::new(6, 180.0, 200.0),
            ]
        );
        assert_eq!(fill.slots(), 3..6);

        window.append(fill);
        assert_eq!(window.len(), 6);
        assert_eq!(window.last(), Some(&ItemSpan::new(6, 180.0, 200.0)));
    }

    #[test]
    fn nothing_to_add_when_budget_is_covered() {
        let dim = AxisDimension::new(100, 20.0_f64).unwrap();
        let window = build_window(0, 0.0, 100.0, 100, &dim);
        let first = *window.first().unwrap();
        assert!(fill_gap(&window, &first, 100.0, 100, &dim).is_empty());
    }

    #[test]
    fn count_budget_limits_additions() {
        let dim = AxisDimension::new(100, 20.0_f64).unwrap();
        let window = build_window(0, 0.0, 20.0, 2, &dim);
        let first = *window.first().unwrap();
        assert!(fill_gap(&window, &first, 1000.0, 2, &dim).is_empty());
        assert_eq!(fill_gap(&window, &first, 1000.0, 5, &dim).len(), 3);
    }
}
