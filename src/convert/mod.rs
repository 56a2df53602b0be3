//! Conversion helpers between [`Track`] and `core::result::Result`.
//!
//! These adapters make it straightforward to incrementally adopt the
//! railway style: wrap an existing `Result`-returning API onto a track, or
//! flatten a track back into a `Result` at the boundary with code that
//! expects `?`-style propagation. Both directions are checked conversions;
//! neither can panic.
//!
//! # Examples
//!
//! ```
//! use two_track::Track;
//!
//! let from_err: Track<i32, &str> = Track::from_result(Err("boom"));
//! assert!(from_err.is_failure());
//!
//! let back: Result<i32, &str> = Track::lift(42).into_result();
//! assert_eq!(back, Ok(42));
//! ```

use crate::types::Track;

impl<T, E> Track<T, E> {
    /// Wraps an existing `Result` onto the railway.
    ///
    /// `Ok` lands on the success track, `Err` on the failure track.
    ///
    /// # Arguments
    ///
    /// * `result` - The result to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t = Track::from_result("21".parse::<i32>());
    /// assert_eq!(t.map(|n| n * 2).into_success(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Leaves the railway, converting back into a plain `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use two_track::Track;
    ///
    /// let t: Track<i32, &str> = Track::Failure("boom");
    /// assert_eq!(t.into_result(), Err("boom"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Track<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Track<T, E>> for Result<T, E> {
    #[inline]
    fn from(track: Track<T, E>) -> Self {
        track.into_result()
    }
}
