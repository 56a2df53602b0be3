//! Algebraic laws of the combinators, verified with call-counting spies.

use std::cell::Cell;

use two_track::Track;

fn step(x: i32) -> Track<i32, &'static str> {
    if x < 0 {
        Track::Failure("negative")
    } else {
        Track::Success(x + 1)
    }
}

#[test]
fn bind_left_identity() {
    for x in [-2, 0, 7] {
        assert_eq!(Track::lift(x).bind(step), step(x));
    }
}

#[test]
fn bind_short_circuits_without_invoking_step() {
    let calls = Cell::new(0u32);
    let spied = |x: i32| {
        calls.set(calls.get() + 1);
        step(x)
    };

    let t: Track<i32, &str> = Track::Failure("boom");
    assert_eq!(t.bind(spied), Track::Failure("boom"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_identity_law() {
    let ok: Track<i32, &str> = Track::Success(42);
    assert_eq!(ok.clone().map(|x| x), ok);

    let err: Track<i32, &str> = Track::Failure("boom");
    assert_eq!(err.clone().map(|x| x), err);
}

#[test]
fn map_failure_passthrough_never_invokes_transform() {
    let calls = Cell::new(0u32);
    let err: Track<i32, &str> = Track::Failure("boom");

    let mapped = err.map(|x| {
        calls.set(calls.get() + 1);
        x * 2
    });

    assert_eq!(mapped, Track::Failure("boom"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn tee_does_not_interfere_and_fires_exactly_once_on_success() {
    let calls = Cell::new(0u32);

    let ok: Track<i32, &str> = Track::Success(42);
    let observed = ok.clone().tee(|_| calls.set(calls.get() + 1));
    assert_eq!(observed, ok);
    assert_eq!(calls.get(), 1);

    let err: Track<i32, &str> = Track::Failure("boom");
    let observed = err.clone().tee(|_| calls.set(calls.get() + 1));
    assert_eq!(observed, err);
    assert_eq!(calls.get(), 1);
}

#[test]
fn tee_failure_does_not_interfere_and_fires_exactly_once_on_failure() {
    let calls = Cell::new(0u32);

    let err: Track<i32, &str> = Track::Failure("boom");
    let observed = err.clone().tee_failure(|_| calls.set(calls.get() + 1));
    assert_eq!(observed, err);
    assert_eq!(calls.get(), 1);

    let ok: Track<i32, &str> = Track::Success(42);
    let observed = ok.clone().tee_failure(|_| calls.set(calls.get() + 1));
    assert_eq!(observed, ok);
    assert_eq!(calls.get(), 1);
}

#[test]
fn merge_invokes_exactly_one_arm_and_returns_its_result() {
    let success_calls = Cell::new(0u32);
    let failure_calls = Cell::new(0u32);

    let ok: Track<i32, &str> = Track::Success(42);
    let merged = ok.merge(
        |n| {
            success_calls.set(success_calls.get() + 1);
            n
        },
        |_| {
            failure_calls.set(failure_calls.get() + 1);
            -1
        },
    );
    assert_eq!(merged, 42);
    assert_eq!((success_calls.get(), failure_calls.get()), (1, 0));

    let err: Track<i32, &str> = Track::Failure("boom");
    let merged = err.merge(
        |n| {
            success_calls.set(success_calls.get() + 1);
            n
        },
        |_| {
            failure_calls.set(failure_calls.get() + 1);
            -1
        },
    );
    assert_eq!(merged, -1);
    assert_eq!((success_calls.get(), failure_calls.get()), (1, 1));
}
