// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precondition failures reported at the public boundary.

use core::fmt;

/// Error returned when a caller supplies input that would corrupt a window.
///
/// Windows are read by a renderer that has no way to tell a wrong item from a
/// right one, so malformed input is rejected up front instead of being
/// silently clamped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WindowError {
    /// The default item size is zero, negative, or not finite.
    InvalidOriginSize,
    /// A size override is zero, negative, or not finite.
    InvalidItemSize {
        /// Index of the offending item.
        index: usize,
    },
    /// The scroll position is negative or not finite.
    InvalidPosition,
    /// The viewport extent is negative or not finite.
    InvalidViewportExtent,
    /// The real item count is larger than the axis.
    CountOutOfRange {
        /// The count that was supplied.
        count: usize,
        /// Number of items on the axis.
        len: usize,
    },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOriginSize => {
                f.write_str("default item size must be finite and greater than zero")
            }
            Self::InvalidItemSize { index } => write!(
                f,
                "size override for item {index} must be finite and greater than zero"
            ),
            Self::InvalidPosition => f.write_str("scroll position must be finite and non-negative"),
            Self::InvalidViewportExtent => {
                f.write_str("viewport extent must be finite and non-negative")
            }
            Self::CountOutOfRange { count, len } => {
                write!(f, "real count {count} exceeds axis length {len}")
            }
        }
    }
}

impl core::error::Error for WindowError {}
