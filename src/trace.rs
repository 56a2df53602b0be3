//! Tracing integration for observing a railway without leaving it.
//!
//! This module wires the observation combinators to the `tracing`
//! ecosystem: a success emits a `debug` event, a failure emits a `warn`
//! event, and the track passes through unchanged either way.
//!
//! This is strictly opt-in observation. It does not change the
//! silent-drop contract of [`Track::handle_success`]; attach `traced`
//! explicitly where visibility is wanted.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! two-track = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use crate::types::Track;

/// Extension trait adding structured-log observation to [`Track`].
///
/// # Examples
///
/// ```
/// use two_track::{Track, TrackTraceExt};
///
/// let t: Track<i32, &str> = Track::lift(42).traced("load_balance");
/// assert_eq!(t, Track::Success(42));
/// ```
pub trait TrackTraceExt<T, E>: Sized {
    /// Emits a `tracing` event for whichever track the value rides.
    ///
    /// Success payloads are logged at `debug`, failure payloads at
    /// `warn`, both rendered via `Debug`. The track is returned
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `operation` - A short label identifying the observed step
    fn traced(self, operation: &str) -> Self;
}

impl<T, E> TrackTraceExt<T, E> for Track<T, E>
where
    T: Debug,
    E: Debug,
{
    #[inline]
    fn traced(self, operation: &str) -> Self {
        self.tee(|value| tracing::debug!(operation, value = ?value, "success track"))
            .tee_failure(|error| tracing::warn!(operation, error = ?error, "failure track"))
    }
}
