// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! A two-case sum type for composing fallible computations.
//!
//! [`Either`] holds either a `Left` value, conventionally an error, or a
//! `Right` value, conventionally a result. The combinators ([`Either::map`],
//! [`Either::apply`], [`Either::flat_map`]) only touch the `Right` case and
//! pass a `Left` through untouched, so a chain of steps stops at the first
//! failure without any explicit checks in between.
//!
//! ```
//! use s2n_either::{left, right, Either};
//!
//! fn parse(input: &str) -> Either<&'static str, u32> {
//!     input.parse::<u32>().map_err(|_| "not a number").into()
//! }
//!
//! fn halve(value: u32) -> Either<&'static str, u32> {
//!     if value % 2 == 0 {
//!         right(value / 2)
//!     } else {
//!         left("odd")
//!     }
//! }
//!
//! assert_eq!(parse("8").flat_map(halve), right(4));
//! assert_eq!(parse("7").flat_map(halve), left("odd"));
//! assert_eq!(parse("x").flat_map(halve).get_or_else(0), 0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(feature = "testing", test))]
#[macro_use]
pub mod testing;

#[macro_use]
pub mod trace;

pub mod classify;
pub mod either;
pub mod error;
pub mod iter;

pub use classify::{is_either, is_left, is_none, is_right, Classify};
pub use either::{left, pack, right, Either, Variant};
pub use error::VariantError;

/// The constructors and predicates bundled into a single import
pub mod prelude {
    pub use crate::{
        classify::{is_either, is_left, is_none, is_right, Classify},
        either::{left, pack, right, Either},
    };
}
