// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::either::Either;
use core::{cell::Cell, fmt};

/// Identifies which algebraic law a value failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Law {
    FunctorIdentity,
    FunctorComposition,
    ApplicativeIdentity,
    ApplicativeHomomorphism,
    MonadLeftIdentity,
    MonadRightIdentity,
    MonadAssociativity,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FunctorIdentity => "functor identity",
            Self::FunctorComposition => "functor composition",
            Self::ApplicativeIdentity => "applicative identity",
            Self::ApplicativeHomomorphism => "applicative homomorphism",
            Self::MonadLeftIdentity => "monad left identity",
            Self::MonadRightIdentity => "monad right identity",
            Self::MonadAssociativity => "monad associativity",
        };
        write!(f, "{name} law does not hold")
    }
}

impl std::error::Error for Law {}

pub type Error = Law;

#[macro_export]
macro_rules! assert_functor_laws {
    ($value:expr, $f:expr, $g:expr) => {{
        $crate::testing::ensure_functor_laws($value, $f, $g).unwrap()
    }};
}

#[macro_export]
macro_rules! assert_applicative_laws {
    ($value:expr, $x:expr, $f:expr) => {{
        $crate::testing::ensure_applicative_laws($value, $x, $f).unwrap()
    }};
}

#[macro_export]
macro_rules! assert_monad_laws {
    ($value:expr, $x:expr, $f:expr, $g:expr) => {{
        $crate::testing::ensure_monad_laws($value, $x, $f, $g).unwrap()
    }};
}

/// Checks `map(id) == self` and `map(f).map(g) == map(g . f)`
pub fn ensure_functor_laws<L, R, A, B, F, G>(value: Either<L, R>, f: F, g: G) -> Result<(), Error>
where
    L: Clone + PartialEq,
    R: Clone + PartialEq,
    B: PartialEq,
    F: Fn(R) -> A,
    G: Fn(A) -> B,
{
    if value.clone().map(|v| v) != value {
        return Err(Law::FunctorIdentity);
    }

    let chained = value.clone().map(&f).map(&g);
    let composed = value.map(|v| g(f(v)));
    if chained != composed {
        return Err(Law::FunctorComposition);
    }

    Ok(())
}

/// Checks `pack(id).apply(v) == v` and `pack(f).apply(pack(x)) == pack(f(x))`
pub fn ensure_applicative_laws<L, R, A, F>(value: Either<L, R>, x: R, f: F) -> Result<(), Error>
where
    L: Clone + PartialEq,
    R: Clone + PartialEq,
    A: PartialEq,
    F: Fn(R) -> A,
{
    let identity: Either<L, fn(R) -> R> = Either::pack(|v| v);
    if identity.apply(value.clone()) != value {
        return Err(Law::ApplicativeIdentity);
    }

    let applied = Either::<L, _>::pack(&f).apply(Either::pack(x.clone()));
    if applied != Either::pack(f(x)) {
        return Err(Law::ApplicativeHomomorphism);
    }

    Ok(())
}

/// Checks the left identity, right identity, and associativity laws
pub fn ensure_monad_laws<L, R, A, B, F, G>(
    value: Either<L, R>,
    x: R,
    f: F,
    g: G,
) -> Result<(), Error>
where
    L: Clone + PartialEq,
    R: Clone + PartialEq,
    A: PartialEq,
    B: PartialEq,
    F: Fn(R) -> Either<L, A>,
    G: Fn(A) -> Either<L, B>,
{
    if Either::pack(x.clone()).flat_map(&f) != f(x) {
        return Err(Law::MonadLeftIdentity);
    }

    if value.clone().flat_map(Either::pack) != value {
        return Err(Law::MonadRightIdentity);
    }

    let chained = value.clone().flat_map(&f).flat_map(&g);
    let nested = value.flat_map(|v| f(v).flat_map(&g));
    if chained != nested {
        return Err(Law::MonadAssociativity);
    }

    Ok(())
}

/// Counts how many times the functions it tracks are invoked
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Wraps `f` so each call is recorded before delegating to it
    pub fn track<'a, A, B, F>(&'a self, f: F) -> impl FnOnce(A) -> B + 'a
    where
        F: FnOnce(A) -> B + 'a,
    {
        move |a| {
            self.calls.set(self.calls.get() + 1);
            f(a)
        }
    }
}
