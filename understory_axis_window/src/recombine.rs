// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental window reuse.
//!
//! When the scroll position moves by fewer items than the window holds, most
//! of the previous window is still valid. [`recombine`] keeps those spans where
//! they are, writes the newly exposed spans into the slots of the spans that
//! scrolled out, and rotates the visual order so the rewritten slots land on
//! the opposite end. The cost is `O(shift)` span computations plus one
//! in-place rotation of the slot order.

use crate::{AxisDimension, ItemSpan, Scalar, Window};

/// Which way the first visible item moved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// Toward higher item indices.
    Forward,
    /// Toward lower item indices.
    Backward,
}

/// Reuses `previous` for a first visible item `shift` items away.
///
/// `target` is the span of the item `shift` items away from the window's
/// first item in `direction`, as returned by [`locate`](crate::locate).
///
/// Returns `None` when recombination is inapplicable and the caller must
/// rebuild: the shift is larger than the window, nothing of the window would
/// survive, or the result would not start at `target`.
///
/// Going forward, spans after the current last item are written over the
/// spans leaving the front, then the first `shift` slots of the order move to
/// the back. Going backward is the mirror image. If the axis ends (or index 0
/// is reached going backward) before `shift` spans were produced, the spans
/// that left but could not be replaced are dropped and the window comes out
/// shorter.
///
/// `previous` is left untouched; the result is a separate snapshot.
#[must_use]
pub fn recombine<S: Scalar>(
    previous: &Window<S>,
    target: &ItemSpan<S>,
    direction: ShiftDirection,
    shift: usize,
    dimension: &AxisDimension<S>,
) -> Option<Window<S>> {
    let len = previous.len();
    if len == 0 || shift > len {
        return None;
    }

    let mut window = previous.clone();
    let mut written = 0;
    match direction {
        ShiftDirection::Forward => {
            let mut last = *previous.last()?;
            while written < shift {
                let Some(next) = dimension.span_after(&last) else {
                    break;
                };
                window.overwrite(written, next);
                last = next;
                written += 1;
            }
            window.order_mut().rotate_left(shift);
        }
        ShiftDirection::Backward => {
            let mut first = *previous.first()?;
            while written < shift {
                let Some(prev) = dimension.span_before(&first) else {
                    break;
                };
                window.overwrite(len - 1 - written, prev);
                first = prev;
                written += 1;
            }
            window.order_mut().rotate_right(written);
        }
    }
    window.truncate(len - (shift - written));

    // A `target` that disagrees with `direction` and `shift` is not reusable.
    let starts_at_target = window.first()? == target;
    starts_at_target.then_some(window)
}
