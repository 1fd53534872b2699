// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Runtime classification of arbitrary values
//!
//! [`Classify`] answers two questions about a value: is it a null-like
//! absence marker, and is it an [`Either`]. The free predicates build on
//! those answers.
//!
//! Note that [`is_left`] and [`is_right`] also inspect the payload: an
//! `Either` holding a null-like payload is classified as neither.
//!
//! ```
//! use s2n_either::prelude::*;
//!
//! assert!(is_left(&left::<_, ()>("e")));
//! assert!(!is_left(&left::<_, ()>(None::<&str>)));
//! assert!(!is_either(&42));
//! ```

use crate::either::Either;

/// Values that can be inspected by the classification predicates
///
/// Both methods are provided. A type that is neither an [`Either`] nor an
/// absence marker opts in with an empty impl:
///
/// ```
/// use s2n_either::{is_either, is_right, right, Classify, Either};
///
/// struct Packet;
///
/// impl Classify for Packet {}
///
/// assert!(!is_either(&Packet));
/// assert!(is_right(&right::<(), _>(Packet)));
/// ```
pub trait Classify {
    /// Returns `true` if the value represents the absence of a value
    #[inline]
    fn is_none(&self) -> bool {
        false
    }

    /// Exposes the held payload if the value is an [`Either`]
    #[inline]
    fn as_either(&self) -> Option<Either<&dyn Classify, &dyn Classify>> {
        None
    }
}

/// Returns `true` if `value` is a null-like absence marker
#[inline]
pub fn is_none<T: Classify + ?Sized>(value: &T) -> bool {
    value.is_none()
}

/// Returns `true` if `value` is an [`Either`] of any variant
#[inline]
pub fn is_either<T: Classify + ?Sized>(value: &T) -> bool {
    value.as_either().is_some()
}

/// Returns `true` if `value` is a `Left` holding a present payload
#[inline]
pub fn is_left<T: Classify + ?Sized>(value: &T) -> bool {
    value
        .as_either()
        .is_some_and(|either| either.fold(|l| !l.is_none(), |_| false))
}

/// Returns `true` if `value` is a `Right` holding a present payload
#[inline]
pub fn is_right<T: Classify + ?Sized>(value: &T) -> bool {
    value
        .as_either()
        .is_some_and(|either| either.fold(|_| false, |r| !r.is_none()))
}

impl<L: Classify, R: Classify> Classify for Either<L, R> {
    #[inline]
    fn as_either(&self) -> Option<Either<&dyn Classify, &dyn Classify>> {
        Some(self.as_ref().bimap(
            |l| l as &dyn Classify,
            |r| r as &dyn Classify,
        ))
    }
}

impl<T> Classify for Option<T> {
    #[inline]
    fn is_none(&self) -> bool {
        Option::is_none(self)
    }
}

impl<T: ?Sized> Classify for *const T {
    #[inline]
    fn is_none(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Classify for *mut T {
    #[inline]
    fn is_none(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

macro_rules! impl_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Classify for $ty {}
        )*
    };
}

impl_value!(
    (),
    bool,
    char,
    str,
    u8,
    i8,
    u16,
    i16,
    u32,
    i32,
    u64,
    i64,
    u128,
    i128,
    usize,
    isize,
    f32,
    f64,
    core::cmp::Ordering,
    core::num::NonZeroU8,
    core::num::NonZeroI8,
    core::num::NonZeroU16,
    core::num::NonZeroI16,
    core::num::NonZeroU32,
    core::num::NonZeroI32,
    core::num::NonZeroU64,
    core::num::NonZeroI64,
    core::num::NonZeroU128,
    core::num::NonZeroI128,
    core::num::NonZeroUsize,
    core::num::NonZeroIsize,
    core::time::Duration,
);

impl<T> Classify for [T] {}

impl<T, const N: usize> Classify for [T; N] {}

impl<T, E> Classify for Result<T, E> {}

impl<T> Classify for core::num::Wrapping<T> {}

impl<T: ?Sized> Classify for core::marker::PhantomData<T> {}

impl<T> Classify for core::ops::Range<T> {}

impl<T> Classify for core::ops::RangeInclusive<T> {}

/// Implements `Classify` for tuples and `fn` pointers of every arity up to the
/// number of idents given
macro_rules! impl_arity {
    () => {
        impl<Ret> Classify for fn() -> Ret {}
    };
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> Classify for ($head, $($tail,)*) {}

        impl<Ret, $head $(, $tail)*> Classify for fn($head $(, $tail)*) -> Ret {}

        impl_arity!($($tail),*);
    };
}

impl_arity!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);

macro_rules! impl_forward {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Classify for $ty {
                #[inline]
                fn is_none(&self) -> bool {
                    (**self).is_none()
                }

                #[inline]
                fn as_either(&self) -> Option<Either<&dyn Classify, &dyn Classify>> {
                    (**self).as_either()
                }
            }
        )*
    };
}

impl_forward!(
    ['a, T: Classify + ?Sized] &'a T,
    ['a, T: Classify + ?Sized] &'a mut T,
);

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::*;
    use alloc::{
        borrow::{Cow, ToOwned},
        boxed::Box,
        collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
        rc::Rc,
        string::String,
        sync::Arc,
        vec::Vec,
    };

    impl_value!(String);

    impl<T> Classify for Vec<T> {}

    impl<T> Classify for VecDeque<T> {}

    impl<T> Classify for LinkedList<T> {}

    impl<T> Classify for BinaryHeap<T> {}

    impl<T> Classify for BTreeSet<T> {}

    impl<K, V> Classify for BTreeMap<K, V> {}

    impl_forward!(
        [T: Classify + ?Sized] Box<T>,
        [T: Classify + ?Sized] Rc<T>,
        [T: Classify + ?Sized] Arc<T>,
        ['a, B: Classify + ToOwned + ?Sized] Cow<'a, B>,
    );
}

#[cfg(feature = "std")]
mod std_impls {
    use super::*;
    use std::collections::{HashMap, HashSet};

    impl<K, V, S> Classify for HashMap<K, V, S> {}

    impl<T, S> Classify for HashSet<T, S> {}
}
