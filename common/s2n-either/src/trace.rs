// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Hooks for observing short-circuits with `tracing`
//!
//! Enabled with the `branch-tracing` feature. Otherwise every hook expands to
//! nothing.

#[cfg(feature = "branch-tracing")]
#[doc(hidden)]
pub use tracing::trace as _trace;

#[cfg(not(feature = "branch-tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __tracing_noop__ {
    ($($fmt:tt)*) => {};
}

#[cfg(not(feature = "branch-tracing"))]
#[doc(hidden)]
pub use crate::__tracing_noop__ as _trace;

/// Records that `$op` was skipped because the value was a `Left`
#[macro_export]
#[doc(hidden)]
macro_rules! __trace_short_circuit__ {
    ($op:literal) => {
        $crate::trace::_trace!(
            target: "s2n_either::short_circuit",
            op = $op,
            "left value short-circuited"
        )
    };
}

pub use crate::__trace_short_circuit__ as short_circuit;
