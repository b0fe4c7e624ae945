// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_axis_window --heading-base-level=0

//! Understory Axis Window: incremental 1D windowing for virtualized lists.
//!
//! Given a scroll position along one axis of a virtualized list or grid, this
//! crate computes the contiguous run of items that must be rendered, and keeps
//! that run up to date as the position changes without recomputing it from
//! scratch on every scroll event.
//!
//! The core concepts are:
//!
//! - [`AxisDimension`]: `len` items of a default size, with sparse per-item
//!   [size overrides](AxisDimension::set_size) and a sorted index over them.
//! - [`ItemSpan`]: the pixel extent and logical index of one item.
//! - [`Window`]: the rendered run, stored as a slot arena plus a visual
//!   [`order`](Window::order) permutation so it can be rotated cheaply.
//! - [`update_window`]: the entry point. It [`locate`]s the item under the
//!   scroll position, tries to [`recombine`] the previous window by
//!   overwriting only the spans that scrolled out, tops it up with
//!   [`fill_gap`], and falls back to [`build_window`] when nothing can be
//!   reused.
//! - [`WindowedAxis`]: a small controller owning a dimension, viewport, scroll
//!   offset, and the current window.
//!
//! The crate does **not** render anything, listen to scroll events, or
//! measure items. Host frameworks are responsible for:
//!
//! - Feeding scroll offsets in, typically once per frame at most.
//! - Walking [`Window::iter`] (or the raw [`Window::items`] and
//!   [`Window::order`]) to place item views.
//! - Writing measured sizes back via [`AxisDimension::set_size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_axis_window::{AxisDimension, ItemSpan, UpdateCounter, update_window,
//!     update_window_with_trace};
//!
//! // 1000 rows, 20px each, with row 3 measured at 50px.
//! let mut dimension = AxisDimension::new(1000, 20.0_f64).unwrap();
//! dimension.set_size(3, 50.0).unwrap();
//!
//! let window = update_window(0.0, None, 1000, 100.0, &dimension).unwrap();
//! assert_eq!(window.first(), Some(&ItemSpan::new(0, 0.0, 20.0)));
//!
//! // Scrolling a little reuses most of the window.
//! let mut counter = UpdateCounter::new();
//! let window = update_window_with_trace(
//!     65.0,
//!     Some(&window),
//!     1000,
//!     100.0,
//!     &dimension,
//!     &mut counter,
//! )
//! .unwrap();
//! assert_eq!(window.first(), Some(&ItemSpan::new(3, 60.0, 110.0)));
//! assert_eq!(counter.rebuilt, 0);
//! ```
//!
//! ## Budgets
//!
//! A window is filled while the pixels accumulated *before* each item are at
//! most the viewport extent. The last item may therefore hang past the
//! viewport, and an item starting exactly on the viewport edge is included.
//! Use [`Window::visible`] to iterate only the items that intersect the
//! viewport.
//!
//! All coordinates are expected to be finite and non-negative; the public
//! entry points reject anything else with a [`WindowError`].
//!
//! With the `tracing` feature, each update runs inside a `debug` span and
//! emits `trace` events describing the path taken.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod build;
mod dimension;
mod error;
mod fill;
mod locate;
mod recombine;
mod scalar;
mod span;
mod trace;
mod update;
mod window;

pub use axis::WindowedAxis;
pub use build::build_window;
pub use dimension::AxisDimension;
pub use error::WindowError;
pub use fill::fill_gap;
pub use locate::locate;
pub use recombine::{ShiftDirection, recombine};
pub use scalar::Scalar;
pub use span::ItemSpan;
pub use trace::{RebuildReason, UpdateCounter, WindowTrace};
pub use update::{update_window, update_window_with_trace};
pub use window::{GapFill, Window};
