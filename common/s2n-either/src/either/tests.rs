// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::testing::{ensure_functor_laws, ensure_monad_laws, CallCounter, Law};
use bolero::check;

type Value = Either<u16, u32>;

fn half(value: u32) -> Either<u16, u32> {
    if value % 2 == 0 {
        right(value / 2)
    } else {
        left(1)
    }
}

fn non_zero(value: u32) -> Either<u16, u64> {
    match value {
        0 => left(2),
        v => right(v as u64 * 3),
    }
}

#[test]
#[cfg_attr(kani, kani::proof)]
fn functor_laws() {
    check!().with_type::<Value>().cloned().for_each(|value| {
        assert_functor_laws!(value, |v: u32| v.wrapping_add(1), |v: u32| v as u64 * 2);
    });
}

#[test]
#[cfg_attr(kani, kani::proof)]
fn applicative_laws() {
    check!()
        .with_type::<(Value, u32)>()
        .cloned()
        .for_each(|(value, x)| {
            assert_applicative_laws!(value, x, |v: u32| v.rotate_left(3));
        });
}

#[test]
#[cfg_attr(kani, kani::proof)]
fn monad_laws() {
    check!()
        .with_type::<(Value, u32)>()
        .cloned()
        .for_each(|(value, x)| {
            assert_monad_laws!(value, x, half, non_zero);
        });
}

#[test]
fn law_helpers_report_failures() {
    let calls = core::cell::Cell::new(0u8);
    let impure = |_: u8| {
        calls.set(calls.get() + 1);
        calls.get()
    };

    assert_eq!(
        ensure_functor_laws(right::<(), u8>(1), impure, |v: u8| v),
        Err(Law::FunctorComposition)
    );
    // a Left never reaches the impure function
    assert_eq!(
        ensure_functor_laws(left::<u8, u8>(1), impure, |v: u8| v),
        Ok(())
    );
    assert_eq!(calls.get(), 2);

    assert_eq!(
        ensure_monad_laws(
            right::<u8, u8>(1),
            1,
            |v: u8| right::<u8, u8>(v),
            |v: u8| right::<u8, u8>(v)
        ),
        Ok(())
    );
}

#[test]
fn map_right() {
    assert_eq!(right::<&str, _>(3).map(|v| v * 2), right(6));
    assert_eq!(right::<&str, _>(3).fmap(|v| v + 1), right(4));
}

#[test]
#[cfg_attr(kani, kani::proof)]
fn left_absorbs() {
    check!().with_type::<u16>().cloned().for_each(|e| {
        let value: Value = left(e);
        let counter = CallCounter::new();

        assert_eq!(value.map(counter.track(|v: u32| v + 1)), left(e));
        assert_eq!(value.fmap(counter.track(|v: u32| v + 1)), left(e));
        assert_eq!(value.flat_map(counter.track(half)), left(e));
        assert_eq!(value.bind(counter.track(half)), left(e));
        assert_eq!(value.and_then(counter.track(half)), left(e));

        let function: Either<u16, fn(u32) -> u32> = left(e);
        assert_eq!(function.apply(right(5)), left(e));

        let function: Either<u16, fn(u32) -> u32> = left(e);
        assert_eq!(function.ap(left(e.wrapping_add(1))), left(e));

        let function = right::<u16, _>(counter.track(|v: u32| v + 1));
        assert_eq!(function.apply(left::<u16, u32>(e)), left(e));

        assert_eq!(counter.calls(), 0);
    });
}

#[test]
fn monad_identities() {
    let increment = |x: i32| right::<&str, _>(x + 1);
    assert_eq!(right(5).flat_map(increment), right(6));
    assert_eq!(right(5).flat_map(increment), increment(5));

    let m = right::<&str, i32>(5);
    assert_eq!(m.flat_map(right), m);
    assert_eq!(m.flat_map(pack), m);
    assert_eq!(m.flat_map(Either::pack), m);
}

#[test]
fn flat_map_does_not_double_wrap() {
    let nested: Either<&str, Either<&str, u8>> = right(left("inner"));
    assert_eq!(nested.flatten(), left("inner"));

    let value: Either<&str, u8> = right(4).flat_map(|_| left("step failed"));
    assert_eq!(value, left("step failed"));
}

#[test]
fn apply_precedence() {
    let function: Either<&str, fn(u8) -> u8> = left("fn-error");
    assert_eq!(function.apply(left("arg-error")), left("fn-error"));

    let increment: fn(u8) -> u8 = |v| v + 1;
    let function: Either<&str, fn(u8) -> u8> = right(increment);
    assert_eq!(function.apply(left("arg-error")), left("arg-error"));
    assert_eq!(function.apply(right(1)), right(2));
    assert_eq!(function.ap(right(1)), right(2));
}

#[test]
fn apply_curried() {
    let add = |a: u32| move |b: u32| a + b;

    let sum = right::<&str, _>(add).apply(right(2)).apply(right(3));
    assert_eq!(sum, right(5));

    let sum = right::<&str, _>(add).apply(left("a")).apply(right(3));
    assert_eq!(sum, left("a"));

    let sum = right::<&str, _>(add).apply(right(2)).apply(left("b"));
    assert_eq!(sum, left("b"));
}

#[test]
fn defaults() {
    assert_eq!(right::<&str, i32>(3).or_else(right(9)), right(3));
    assert_eq!(left::<&str, i32>("e").or_else(right(9)), right(9));
    assert_eq!(left::<&str, i32>("e").get_or_else(0), 0);
    assert_eq!(right::<&str, i32>(3).get_or_else(0), 3);

    assert_eq!(
        left::<&str, i32>("a").or_else(left("b")).or_else(right(1)),
        right(1)
    );
    assert_eq!(
        left::<&str, i32>("a").or_else(left("b")).or_else(left("c")),
        left("c")
    );

    assert_eq!(left::<&str, usize>("abc").get_or_else_with(str::len), 3);
    assert_eq!(right::<&str, usize>(7).get_or_else_with(str::len), 7);
}

#[test]
fn fold_dispatch() {
    let value = right::<&str, i32>(3).fold(|_| "L".to_string(), |v| format!("R:{v}"));
    assert_eq!(value, "R:3");

    let value = left::<&str, i32>("e").fold(|v| format!("L:{v}"), |_| "R".to_string());
    assert_eq!(value, "L:e");
}

#[test]
#[cfg_attr(kani, kani::proof)]
fn fold_calls_exactly_one() {
    check!().with_type::<Value>().cloned().for_each(|value| {
        let on_left = CallCounter::new();
        let on_right = CallCounter::new();

        let variant = value.fold(
            on_left.track(|_: u16| Variant::Left),
            on_right.track(|_: u32| Variant::Right),
        );

        assert_eq!(variant, value.variant());
        assert_eq!(on_left.calls() + on_right.calls(), 1);
    });
}

#[test]
fn get_value() {
    let value: u32 = left::<u16, u32>(4).get_value();
    assert_eq!(value, 4);

    let value: u32 = right::<u16, u32>(5).get_value();
    assert_eq!(value, 5);

    let value: &str = right::<&str, &str>("ok").get_value();
    assert_eq!(value, "ok");
}

#[test]
fn accessors() {
    let mut value: Either<&str, u8> = right(1);
    assert_eq!(value.as_ref(), right(&1));
    assert_eq!(value.right(), Some(1));
    assert_eq!(value.left(), None);
    assert_eq!(value.try_into_right(), Ok(1));

    if let Either::Right(r) = value.as_mut() {
        *r += 1;
    }
    assert_eq!(value, right(2));

    let value: Either<&str, u8> = left("e");
    assert_eq!(value.left(), Some("e"));
    assert_eq!(value.try_into_left(), Ok("e"));
    assert_eq!(value.swap(), right("e"));
    assert_eq!(value.map_left(str::len), left(1));
    assert_eq!(value.bimap(str::len, |v| v as usize), left(1));
}

#[test]
#[cfg_attr(kani, kani::proof)]
fn tag_is_stable() {
    check!().with_type::<Value>().cloned().for_each(|value| {
        assert_ne!(value.is_left(), value.is_right());
        assert_eq!(value.swap().variant() == Variant::Left, value.is_right());
        assert_eq!(value.map(|v| v as u64).variant(), value.variant());
        assert_eq!(value.map_left(|v| v as u64).variant(), value.variant());
        assert_eq!(value.swap().swap(), value);
    });
}

#[test]
#[cfg_attr(kani, kani::proof)]
fn result_conversion() {
    check!().with_type::<Value>().cloned().for_each(|value| {
        let result: Result<u32, u16> = value.into();
        assert_eq!(result.is_ok(), value.is_right());
        assert_eq!(Either::from(result), value);
        assert_eq!(value.into_result(), result);
    });
}

#[test]
fn display() {
    assert_eq!(left::<&str, u8>("oops").to_string(), "oops");
    assert_eq!(right::<&str, u8>(7).to_string(), "7");
    assert_eq!(Variant::Right.to_string(), "Right");
}
