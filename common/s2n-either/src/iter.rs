// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{either::Either, trace};

/// Collects `Right` payloads, stopping at the first `Left`
///
/// Items after the first `Left` are never pulled from the iterator.
///
/// ```
/// use s2n_either::{left, right, Either};
///
/// let all: Either<&str, Vec<u8>> = [right(1), right(2)].into_iter().collect();
/// assert_eq!(all, right(vec![1, 2]));
///
/// let first: Either<&str, Vec<u8>> = [right(1), left("a"), left("b")].into_iter().collect();
/// assert_eq!(first, left("a"));
/// ```
impl<L, R, V> FromIterator<Either<L, R>> for Either<L, V>
where
    V: FromIterator<R>,
{
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
        let mut error = None;

        let values = iter
            .into_iter()
            .map_while(|item| match item {
                Either::Left(l) => {
                    error = Some(l);
                    None
                }
                Either::Right(r) => Some(r),
            })
            .collect();

        match error {
            Some(l) => {
                trace::short_circuit!("collect");
                Either::Left(l)
            }
            None => Either::Right(values),
        }
    }
}

/// Splits the payloads into two collections by variant
#[inline]
pub fn partition<L, R, I, A, B>(iter: I) -> (A, B)
where
    I: IntoIterator<Item = Either<L, R>>,
    A: Default + Extend<L>,
    B: Default + Extend<R>,
{
    let mut lefts = A::default();
    let mut rights = B::default();

    for item in iter {
        match item {
            Either::Left(l) => lefts.extend(Some(l)),
            Either::Right(r) => rights.extend(Some(r)),
        }
    }

    (lefts, rights)
}

/// Iterates over the `Left` payloads, skipping every `Right`
#[inline]
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::left)
}

/// Iterates over the `Right` payloads, skipping every `Left`
#[inline]
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::right)
}
