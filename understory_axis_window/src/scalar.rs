// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for pixel coordinates along an axis.
//!
//! Only implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for item sizes, pixel offsets, and scroll positions.
///
/// The trait is deliberately minimal and geared toward floating-point
/// coordinates; integer pixel grids are represented exactly by either float
/// type for any realistic axis length.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Floors a non-negative value and converts it to `usize`.
    ///
    /// Values beyond `usize::MAX` saturate.
    fn floor_to_usize(self) -> usize;

    /// Returns `true` for finite values strictly greater than zero.
    ///
    /// NaN is never positive.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }

    /// Returns `true` for finite values greater than or equal to zero.
    fn is_non_negative_finite(self) -> bool {
        self.is_finite() && self >= Self::zero()
    }

    /// Computes `self * count` where `count` is an item count.
    fn times(self, count: usize) -> Self {
        self * Self::from_usize(count)
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to usize casts saturate and truncate toward zero, which floors non-negative values"
        )]
        {
            self as usize
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to usize casts saturate and truncate toward zero, which floors non-negative values"
        )]
        {
            self as usize
        }
    }
}
