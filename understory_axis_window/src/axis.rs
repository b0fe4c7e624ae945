// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful controller around [`update_window`](crate::update_window).

use crate::{
    AxisDimension, Scalar, Window, WindowError, WindowTrace, update_window_with_trace,
};

/// Owns an axis, its viewport, and the window for the current scroll offset.
///
/// Scroll changes go through the incremental path. Changes that invalidate
/// the previous window (viewport extent, item sizes, item count) rebuild it
/// at the current offset.
///
/// ```rust
/// use understory_axis_window::{AxisDimension, WindowedAxis};
///
/// let mut dimension = AxisDimension::new(1000, 20.0_f64).unwrap();
/// dimension.set_size(3, 50.0).unwrap();
/// let mut axis = WindowedAxis::new(dimension, 100.0).unwrap();
///
/// let window = axis.set_scroll_offset(65.0).unwrap();
/// assert_eq!(window.first().map(|span| span.index()), Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct WindowedAxis<S: Scalar> {
    dimension: AxisDimension<S>,
    viewport_extent: S,
    scroll_offset: S,
    window: Window<S>,
}

impl<S: Scalar> WindowedAxis<S> {
    /// Creates a controller scrolled to the start of the axis.
    pub fn new(dimension: AxisDimension<S>, viewport_extent: S) -> Result<Self, WindowError> {
        let mut axis = Self {
            dimension,
            viewport_extent,
            scroll_offset: S::zero(),
            window: Window::new(),
        };
        axis.rebuild()?;
        Ok(axis)
    }

    /// The axis sizing.
    #[must_use]
    pub fn dimension(&self) -> &AxisDimension<S> {
        &self.dimension
    }

    /// The window for the current scroll offset.
    #[must_use]
    pub fn window(&self) -> &Window<S> {
        &self.window
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> S {
        self.scroll_offset
    }

    /// Current viewport extent.
    #[must_use]
    pub fn viewport_extent(&self) -> S {
        self.viewport_extent
    }

    /// Largest scroll offset that still fills the viewport, or zero when the
    /// content is smaller than the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self) -> S {
        let real_size = self.dimension.real_size();
        if real_size > self.viewport_extent {
            real_size - self.viewport_extent
        } else {
            S::zero()
        }
    }

    /// Scrolls to `offset` and returns the updated window.
    pub fn set_scroll_offset(&mut self, offset: S) -> Result<&Window<S>, WindowError> {
        self.set_scroll_offset_with_trace(offset, &mut ())
    }

    /// Like [`set_scroll_offset`](Self::set_scroll_offset), reporting the
    /// update path to `trace`.
    pub fn set_scroll_offset_with_trace<T: WindowTrace + ?Sized>(
        &mut self,
        offset: S,
        trace: &mut T,
    ) -> Result<&Window<S>, WindowError> {
        self.window = update_window_with_trace(
            offset,
            Some(&self.window),
            self.dimension.len(),
            self.viewport_extent,
            &self.dimension,
            trace,
        )?;
        self.scroll_offset = offset;
        Ok(&self.window)
    }

    /// Scrolls so that item `index` starts at the top of the viewport.
    ///
    /// The offset is clamped to [`max_scroll_offset`](Self::max_scroll_offset),
    /// so items near the end scroll only as far as the content allows.
    pub fn scroll_to_index(&mut self, index: usize) -> Result<&Window<S>, WindowError> {
        let max = self.max_scroll_offset();
        let offset = match self.dimension.span_of(index) {
            Some(span) if span.start() < max => span.start(),
            _ => max,
        };
        self.set_scroll_offset(offset)
    }

    /// Changes the viewport extent and rebuilds the window.
    pub fn set_viewport_extent(&mut self, extent: S) -> Result<&Window<S>, WindowError> {
        if !extent.is_non_negative_finite() {
            return Err(WindowError::InvalidViewportExtent);
        }
        self.viewport_extent = extent;
        self.rebuild()
    }

    /// Mutates the axis sizing through `f`, then rebuilds the window at the
    /// current scroll offset.
    ///
    /// ```rust
    /// use understory_axis_window::{AxisDimension, WindowedAxis};
    ///
    /// let dimension = AxisDimension::new(10, 20.0_f32).unwrap();
    /// let mut axis = WindowedAxis::new(dimension, 50.0).unwrap();
    /// axis.update_dimension(|dim| dim.set_size(0, 60.0))
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(axis.window().len(), 1);
    /// ```
    pub fn update_dimension<R>(
        &mut self,
        f: impl FnOnce(&mut AxisDimension<S>) -> R,
    ) -> Result<R, WindowError> {
        let result = f(&mut self.dimension);
        self.rebuild()?;
        Ok(result)
    }

    /// Rebuilds the window from scratch at the current scroll offset.
    pub fn rebuild(&mut self) -> Result<&Window<S>, WindowError> {
        self.window = update_window_with_trace(
            self.scroll_offset,
            None,
            self.dimension.len(),
            self.viewport_extent,
            &self.dimension,
            &mut (),
        )?;
        Ok(&self.window)
    }
}
