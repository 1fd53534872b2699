// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::either::Variant;
use core::fmt;

/// Returned when a checked extraction finds the other variant
///
/// The payload that was actually held is kept in `found` so it is not lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariantError<T> {
    expected: Variant,
    found: T,
}

impl<T> VariantError<T> {
    #[inline]
    pub(crate) const fn new(expected: Variant, found: T) -> Self {
        Self { expected, found }
    }

    /// The variant the caller asked for
    #[inline]
    pub const fn expected(&self) -> Variant {
        self.expected
    }

    /// The variant that was actually held
    #[inline]
    pub const fn actual(&self) -> Variant {
        match self.expected {
            Variant::Left => Variant::Right,
            Variant::Right => Variant::Left,
        }
    }

    /// Moves out the payload of the variant that was held
    #[inline]
    pub fn into_found(self) -> T {
        self.found
    }
}

impl<T> fmt::Display for VariantError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} variant, found {}",
            self.expected,
            self.actual()
        )
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Debug> std::error::Error for VariantError<T> {}
