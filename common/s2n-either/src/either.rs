// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{error::VariantError, trace};
use core::fmt;

#[cfg(test)]
mod tests;

/// A value that is either a `Left(L)` or a `Right(R)`
///
/// `Left` conventionally carries an error and `Right` a valid result. The
/// combinators operate on the `Right` case and pass a `Left` through
/// unchanged, never invoking the supplied function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    any(test, feature = "generator"),
    derive(bolero_generator::TypeGenerator)
)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

/// Names a variant of [`Either`] without its payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    any(test, feature = "generator"),
    derive(bolero_generator::TypeGenerator)
)]
pub enum Variant {
    Left,
    Right,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Wraps `value` in the `Left` variant
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Wraps `value` in the `Right` variant
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Lifts a bare value into the success case. Same as [`right`].
#[inline]
pub const fn pack<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    /// Lifts a bare value into the success case
    #[inline]
    pub const fn pack(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns the variant of the value
    #[inline]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Left(_) => Variant::Left,
            Self::Right(_) => Variant::Right,
        }
    }

    /// Returns `true` if the value is a `Left`
    ///
    /// Only the tag is checked. See [`crate::is_left`] for the
    /// payload-sensitive predicate.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if the value is a `Right`
    ///
    /// Only the tag is checked. See [`crate::is_right`] for the
    /// payload-sensitive predicate.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Borrows the held payload
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Mutably borrows the held payload
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Applies `f` to a `Right` payload
    ///
    /// A `Left` is returned unchanged and `f` is not called. If `f` itself can
    /// fail, have it return an `Either` and use [`Self::flat_map`] instead.
    #[inline]
    #[doc(alias = "<$>")]
    pub fn map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(l) => {
                trace::short_circuit!("map");
                Either::Left(l)
            }
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    /// Alias of [`Self::map`]
    #[inline]
    pub fn fmap<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.map(f)
    }

    /// Applies `f` to a `Left` payload, leaving a `Right` unchanged
    #[inline]
    pub fn map_left<U, F>(self, f: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Applies `on_left` or `on_right` to whichever payload is present
    #[inline]
    pub fn bimap<A, B, F, G>(self, on_left: F, on_right: G) -> Either<A, B>
    where
        F: FnOnce(L) -> A,
        G: FnOnce(R) -> B,
    {
        match self {
            Self::Left(l) => Either::Left(on_left(l)),
            Self::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Passes a `Right` payload to `f` and returns its result directly
    ///
    /// A `Left` is returned unchanged and `f` is not called.
    #[inline]
    #[doc(alias = ">>=")]
    pub fn flat_map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(l) => {
                trace::short_circuit!("flat_map");
                Either::Left(l)
            }
            Self::Right(r) => f(r),
        }
    }

    /// Alias of [`Self::flat_map`]
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        self.flat_map(f)
    }

    /// Alias of [`Self::flat_map`]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        self.flat_map(f)
    }

    /// Applies a boxed function to a boxed argument
    ///
    /// The receiver is checked first: if it is a `Left` it is returned and
    /// `arg` is dropped without being inspected. Otherwise a `Left` argument
    /// is returned, and only when both are `Right` is the function called.
    #[inline]
    #[doc(alias = "<*>")]
    pub fn apply<A, U>(self, arg: Either<L, A>) -> Either<L, U>
    where
        R: FnOnce(A) -> U,
    {
        // the receiver's Left takes precedence over the argument's
        let f = match self {
            Self::Left(l) => {
                trace::short_circuit!("apply");
                return Either::Left(l);
            }
            Self::Right(f) => f,
        };

        match arg {
            Either::Left(l) => {
                trace::short_circuit!("apply");
                Either::Left(l)
            }
            Either::Right(a) => Either::Right(f(a)),
        }
    }

    /// Alias of [`Self::apply`]
    #[inline]
    pub fn ap<A, U>(self, arg: Either<L, A>) -> Either<L, U>
    where
        R: FnOnce(A) -> U,
    {
        self.apply(arg)
    }

    /// Calls exactly one of the functions with the held payload
    ///
    /// This is the way out of the `Either` context that handles both cases.
    #[inline]
    #[doc(alias = "match")]
    pub fn fold<U, F, G>(self, on_left: F, on_right: G) -> U
    where
        F: FnOnce(L) -> U,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// Returns `self` if it is a `Right`, otherwise `default`
    ///
    /// Calls can be chained to try several fallbacks in order:
    /// `a.or_else(b).or_else(c)`.
    #[inline]
    pub fn or_else(self, default: Self) -> Self {
        match self {
            Self::Left(_) => default,
            Self::Right(_) => self,
        }
    }

    /// Returns the `Right` payload, or `default` for a `Left`
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(r) => r,
        }
    }

    /// Returns the `Right` payload, or computes one from the `Left` payload
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => r,
        }
    }

    /// Moves out the payload of whichever variant is held
    ///
    /// This should be used with caution. Nothing about the returned value
    /// says which variant it came from, so callers must already know what they
    /// hold (from [`Self::fold`], a `match` or one of the predicates). Prefer
    /// [`Self::try_into_left`] and [`Self::try_into_right`] where the variant
    /// is not known.
    #[inline]
    pub fn get_value<V>(self) -> V
    where
        L: Into<V>,
        R: Into<V>,
    {
        match self {
            Self::Left(l) => l.into(),
            Self::Right(r) => r.into(),
        }
    }

    /// Converts into an `Option` of the `Left` payload
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option` of the `Right` payload
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Returns the `Left` payload, or the `Right` payload as an error
    #[inline]
    pub fn try_into_left(self) -> Result<L, VariantError<R>> {
        match self {
            Self::Left(l) => Ok(l),
            Self::Right(r) => Err(VariantError::new(Variant::Left, r)),
        }
    }

    /// Returns the `Right` payload, or the `Left` payload as an error
    #[inline]
    pub fn try_into_right(self) -> Result<R, VariantError<L>> {
        match self {
            Self::Left(l) => Err(VariantError::new(Variant::Right, l)),
            Self::Right(r) => Ok(r),
        }
    }

    /// Exchanges the variants, keeping the payload
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }

    /// Converts into a `Result`, mapping `Right` to `Ok` and `Left` to `Err`
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(l) => Err(l),
            Self::Right(r) => Ok(r),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.flat_map(|inner| inner)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(value: Either<L, R>) -> Self {
        value.into_result()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => l.fmt(f),
            Self::Right(r) => r.fmt(f),
        }
    }
}
