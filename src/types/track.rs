#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A two-track result carrying either a success payload or a failure payload.
///
/// `Track<T, E>` is the data type of railway-oriented programming: a
/// computation rides either the success track or the failure track, never
/// both. Combinators branch only on the variant tag, never on payload
/// contents, so once a value lands on the failure track every subsequent
/// sequencing step is skipped and the failure propagates unchanged.
///
/// The payload types are unconstrained; in particular the failure type is
/// whatever the caller chooses, with no structure imposed on it.
///
/// There is no unchecked extraction method. Payloads are reached through
/// exhaustive matching, the combinators, or the checked [`success`](Track::success)
/// / [`failure`](Track::failure) accessors, which keeps the short-circuit
/// discipline unavoidable.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The failure payload type
///
/// # Variants
///
/// * `Success(T)` - The computation stayed on the success track
/// * `Failure(E)` - The computation derailed onto the failure track
///
/// # Examples
///
/// ```
/// use two_track::Track;
///
/// let ok: Track<i32, &str> = Track::lift(21).map(|x| x * 2);
/// assert_eq!(ok, Track::Success(42));
///
/// let err: Track<i32, &str> = Track::Failure("boom").map(|x: i32| x * 2);
/// assert_eq!(err, Track::Failure("boom"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Track<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Track<T, E> {
    /// Lifts a plain value onto the success track.
    ///
    /// This is the entry point of the railway: any ordinary value becomes
    /// a `Success` and can then be chained with [`bind`](Track::bind) and
    /// friends.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<i32, &str> = Track::lift(42);
    /// assert!(t.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn lift(value: T) -> Self {
        Self::Success(value)
    }

    /// Applies a one-track transform to a plain value and lands the output
    /// on the success track.
    ///
    /// `switch` adapts a function that cannot fail into railway territory:
    /// the result is always `Success(transform(input))`.
    ///
    /// # Arguments
    ///
    /// * `input` - The plain input value
    /// * `transform` - A transform that always succeeds
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<usize, &str> = Track::switch("hello", str::len);
    /// assert_eq!(t, Track::Success(5));
    /// ```
    #[must_use]
    #[inline]
    pub fn switch<A, F>(input: A, transform: F) -> Self
    where
        F: FnOnce(A) -> T,
    {
        Self::Success(transform(input))
    }

    /// Returns `true` if the value rides the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<i32, &str> = Track::lift(42);
    /// assert!(t.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the value rides the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<i32, &str> = Track::Failure("boom");
    /// assert!(t.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success payload, if any.
    #[must_use]
    #[inline]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure payload, if any.
    #[must_use]
    #[inline]
    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the track, returning the success payload if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<i32, &str> = Track::lift(42);
    /// assert_eq!(t.into_success(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the track, returning the failure payload if present.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// On `Success(v)` the step runs with `v` and its result, success or
    /// failure, becomes the new track. On `Failure` the step is **never
    /// invoked** and the failure passes through unchanged. `bind` is the
    /// only combinator that can introduce a new failure mid-chain.
    ///
    /// # Arguments
    ///
    /// * `step` - The next fallible step of the chain
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// fn halve(x: i32) -> Track<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Track::Success(x / 2)
    ///     } else {
    ///         Track::Failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Track::lift(42).bind(halve), Track::Success(21));
    /// assert_eq!(Track::lift(21).bind(halve), Track::Failure("odd"));
    /// assert_eq!(Track::Failure("earlier").bind(halve), Track::Failure("earlier"));
    /// ```
    #[must_use]
    #[inline]
    pub fn bind<U, F>(self, step: F) -> Track<U, E>
    where
        F: FnOnce(T) -> Track<U, E>,
    {
        match self {
            Self::Success(value) => step(value),
            Self::Failure(error) => Track::Failure(error),
        }
    }

    /// Transforms the success payload with a step that cannot fail.
    ///
    /// A `Failure` passes through untouched and the transform never runs.
    ///
    /// # Arguments
    ///
    /// * `transform` - A transform applied to the success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<i32, &str> = Track::lift(21).map(|x| x * 2);
    /// assert_eq!(t, Track::Success(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Track<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Track::Success(transform(value)),
            Self::Failure(error) => Track::Failure(error),
        }
    }

    /// Observes the success payload for effect, returning the track unchanged.
    ///
    /// The action borrows the payload and runs only on `Success`; whatever
    /// it does, the original track is returned as-is. On `Failure` this is
    /// a no-op.
    ///
    /// # Arguments
    ///
    /// * `action` - An observer invoked with a borrow of the success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let mut seen = None;
    /// let t: Track<i32, &str> = Track::lift(42).tee(|v| seen = Some(*v));
    /// assert_eq!(t, Track::Success(42));
    /// assert_eq!(seen, Some(42));
    /// ```
    #[inline]
    pub fn tee<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Observes the failure payload for effect, returning the track unchanged.
    ///
    /// Symmetric to [`tee`](Track::tee): the action runs only on `Failure`
    /// and a `Success` passes through untouched.
    ///
    /// # Arguments
    ///
    /// * `action` - An observer invoked with a borrow of the failure payload
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let mut seen = None;
    /// let t: Track<i32, &str> = Track::Failure("boom").tee_failure(|e| seen = Some(*e));
    /// assert_eq!(t, Track::Failure("boom"));
    /// assert_eq!(seen, Some("boom"));
    /// ```
    #[inline]
    pub fn tee_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Terminal, effect-only exit: hands the payload to the matching handler.
    ///
    /// Exactly one of the two handlers runs. Nothing is returned; this is
    /// the end of the railway.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Consumer for the success payload
    /// * `on_failure` - Consumer for the failure payload
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<i32, &str> = Track::Failure("boom");
    /// t.handle(
    ///     |v| println!("got {v}"),
    ///     |e| eprintln!("failed: {e}"),
    /// );
    /// ```
    #[inline]
    pub fn handle<S, F>(self, on_success: S, on_failure: F)
    where
        S: FnOnce(T),
        F: FnOnce(E),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Terminal exit that handles only the success track.
    ///
    /// A `Failure` is **silently dropped**: no handler runs and the error
    /// payload is discarded. Use [`handle`](Track::handle) when the failure
    /// must be observed.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Consumer for the success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<i32, &str> = Track::lift(42);
    /// t.handle_success(|v| assert_eq!(v, 42));
    ///
    /// // The failure below is dropped without any handler running.
    /// let t: Track<i32, &str> = Track::Failure("boom");
    /// t.handle_success(|_| unreachable!());
    /// ```
    #[inline]
    pub fn handle_success<S>(self, on_success: S)
    where
        S: FnOnce(T),
    {
        if let Self::Success(value) = self {
            on_success(value);
        }
    }

    /// Terminal exit that unifies both tracks into a single output value.
    ///
    /// Exactly one of the two functions runs, and its result is returned.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Converts the success payload to the output type
    /// * `on_failure` - Converts the failure payload to the output type
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<i32, &str> = Track::lift(42);
    /// let n = t.merge(|v| v, |_| -1);
    /// assert_eq!(n, 42);
    ///
    /// let t: Track<i32, &str> = Track::Failure("boom");
    /// let n = t.merge(|v| v, |_| -1);
    /// assert_eq!(n, -1);
    /// ```
    #[inline]
    pub fn merge<D, S, F>(self, on_success: S, on_failure: F) -> D
    where
        S: FnOnce(T) -> D,
        F: FnOnce(E) -> D,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}
