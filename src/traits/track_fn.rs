//! Deferred composition over track functions.
//!
//! A *track function* is any `Fn(A) -> Track<B, E>`. This module provides
//! [`TrackFnExt`], a blanket extension trait that composes track functions
//! into new track functions without running any step, plus [`switch`] for
//! adapting an infallible transform into a track function.
//!
//! Composition is closed: the closure returned by every combinator is
//! itself a track function and composes further. Nothing executes until
//! the fully composed function is applied to an initial input.
//!
//! # Examples
//!
//! ```
//! use two_track::{Track, TrackFnExt};
//!
//! fn parse(s: &str) -> Track<i32, String> {
//!     match s.parse() {
//!         Ok(n) => Track::Success(n),
//!         Err(_) => Track::Failure(format!("not a number: {s}")),
//!     }
//! }
//!
//! let pipeline = parse
//!     .bind(|n: i32| {
//!         if n >= 0 {
//!             Track::Success(n)
//!         } else {
//!             Track::Failure("negative".to_string())
//!         }
//!     })
//!     .map(|n| n * 2);
//!
//! assert_eq!(pipeline("21"), Track::Success(42));
//! assert_eq!(pipeline("-3"), Track::Failure("negative".to_string()));
//! assert!(pipeline("x").is_failure());
//! ```

use crate::types::Track;

/// Extension trait that lifts the [`Track`] combinators to track functions.
///
/// Implemented for every `Fn(A) -> Track<B, E>` via a blanket impl, so any
/// function item or closure of that shape picks these methods up. Each
/// method returns a new closure; the wrapped steps run only when that
/// closure is finally applied.
///
/// # Type Parameters
///
/// * `A` - The input type of the track function
/// * `B` - Its success payload type
/// * `E` - Its failure payload type
///
/// # Examples
///
/// ```
/// use two_track::{Track, TrackFnExt};
///
/// fn nonzero(n: i32) -> Track<i32, &'static str> {
///     if n == 0 {
///         Track::Failure("zero")
///     } else {
///         Track::Success(n)
///     }
/// }
///
/// let describe = nonzero.merge(|n| format!("ok: {n}"), |e| format!("err: {e}"));
/// assert_eq!(describe(7), "ok: 7");
/// assert_eq!(describe(0), "err: zero");
/// ```
pub trait TrackFnExt<A, B, E>: Sized {
    /// Sequences a further fallible step along the success track.
    ///
    /// The returned track function applies `self`, and only if that
    /// produced `Success`, applies `step` to the unwrapped payload. A
    /// `Failure` from `self` propagates without invoking `step`.
    fn bind<C, G>(self, step: G) -> impl Fn(A) -> Track<C, E>
    where
        G: Fn(B) -> Track<C, E>;

    /// Appends an infallible transform of the success payload.
    fn map<C, G>(self, transform: G) -> impl Fn(A) -> Track<C, E>
    where
        G: Fn(B) -> C;

    /// Attaches a success observer; the underlying result is returned
    /// unchanged.
    fn tee<G>(self, action: G) -> impl Fn(A) -> Track<B, E>
    where
        G: Fn(&B);

    /// Attaches a failure observer; the underlying result is returned
    /// unchanged.
    fn tee_failure<G>(self, action: G) -> impl Fn(A) -> Track<B, E>
    where
        G: Fn(&E);

    /// Converts the track function into an effect-only consumer that runs
    /// the matching handler on each invocation.
    fn handle<S, G>(self, on_success: S, on_failure: G) -> impl Fn(A)
    where
        S: Fn(B),
        G: Fn(E);

    /// Effect-only consumer handling only the success track; failures are
    /// silently dropped, as with [`Track::handle_success`].
    fn handle_success<S>(self, on_success: S) -> impl Fn(A)
    where
        S: Fn(B);

    /// Converts the track function into a plain function by reconciling
    /// both tracks into one output type.
    fn merge<D, S, G>(self, on_success: S, on_failure: G) -> impl Fn(A) -> D
    where
        S: Fn(B) -> D,
        G: Fn(E) -> D;
}

impl<F, A, B, E> TrackFnExt<A, B, E> for F
where
    F: Fn(A) -> Track<B, E>,
{
    #[inline]
    fn bind<C, G>(self, step: G) -> impl Fn(A) -> Track<C, E>
    where
        G: Fn(B) -> Track<C, E>,
    {
        move |input| self(input).bind(&step)
    }

    #[inline]
    fn map<C, G>(self, transform: G) -> impl Fn(A) -> Track<C, E>
    where
        G: Fn(B) -> C,
    {
        move |input| self(input).map(&transform)
    }

    #[inline]
    fn tee<G>(self, action: G) -> impl Fn(A) -> Track<B, E>
    where
        G: Fn(&B),
    {
        move |input| self(input).tee(&action)
    }

    #[inline]
    fn tee_failure<G>(self, action: G) -> impl Fn(A) -> Track<B, E>
    where
        G: Fn(&E),
    {
        move |input| self(input).tee_failure(&action)
    }

    #[inline]
    fn handle<S, G>(self, on_success: S, on_failure: G) -> impl Fn(A)
    where
        S: Fn(B),
        G: Fn(E),
    {
        move |input| self(input).handle(&on_success, &on_failure)
    }

    #[inline]
    fn handle_success<S>(self, on_success: S) -> impl Fn(A)
    where
        S: Fn(B),
    {
        move |input| self(input).handle_success(&on_success)
    }

    #[inline]
    fn merge<D, S, G>(self, on_success: S, on_failure: G) -> impl Fn(A) -> D
    where
        S: Fn(B) -> D,
        G: Fn(E) -> D,
    {
        move |input| self(input).merge(&on_success, &on_failure)
    }
}

/// Adapts an infallible transform `A -> B` into a track function
/// `A -> Track<B, E>` that always lands on the success track.
///
/// # Arguments
///
/// * `transform` - The transform to adapt
///
/// # Examples
///
/// ```
/// use two_track::{switch, Track};
///
/// let double = switch(|n: i32| n * 2);
/// let t: Track<i32, &str> = double(21);
/// assert_eq!(t, Track::Success(42));
/// ```
#[inline]
pub fn switch<A, B, E, F>(transform: F) -> impl Fn(A) -> Track<B, E>
where
    F: Fn(A) -> B,
{
    move |input| Track::Success(transform(input))
}
