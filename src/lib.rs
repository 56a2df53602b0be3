//! A two-track result type with railway-oriented combinators.
//!
//! A fallible computation rides one of two tracks: success or failure.
//! [`Track<T, E>`] is the value on the rails, and the combinators chain
//! fallible steps so that the first failure short-circuits everything
//! downstream while observation points ([`Track::tee`],
//! [`Track::tee_failure`]) watch the traffic without touching it.
//!
//! Every combinator comes in two forms:
//!
//! - **value-form**, a method on [`Track`] operating on an already
//!   produced result;
//! - **function-form**, a method on any `Fn(A) -> Track<B, E>` (via
//!   [`TrackFnExt`]) returning a new deferred track function. No step
//!   runs until the composed function is applied.
//!
//! # Examples
//!
//! ## Value-form chaining
//!
//! ```
//! use two_track::Track;
//!
//! fn checked_div(pair: (i32, i32)) -> Track<i32, &'static str> {
//!     match pair {
//!         (_, 0) => Track::Failure("division by zero"),
//!         (a, b) => Track::Success(a / b),
//!     }
//! }
//!
//! let result = Track::lift((84, 2))
//!     .bind(checked_div)
//!     .map(|n| n + 1)
//!     .merge(|n| format!("= {n}"), |e| format!("error: {e}"));
//!
//! assert_eq!(result, "= 43");
//! ```
//!
//! ## Deferred function-form pipelines
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
//! fn nonzero(n: i32) -> Track<i32, String> {
//!     if n == 0 {
//!         Track::Failure("zero".to_string())
//!     } else {
//!         Track::Success(n)
//!     }
//! }
//!
//! // Nothing runs here; `pipeline` is itself a track function.
//! let pipeline = parse.bind(nonzero).map(|n| 100 / n);
//!
//! assert_eq!(pipeline("4"), Track::Success(25));
//! assert_eq!(pipeline("0"), Track::Failure("zero".to_string()));
//! assert!(pipeline("x").is_failure());
//! ```
//!
//! ## Entering from `Result`
//!
//! ```
//! use two_track::track;
//!
//! let t = track!("21".parse::<i32>());
//! assert_eq!(t.map(|n| n * 2).into_success(), Some(42));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Track` and `Result`
pub mod convert;
/// Macros for entering the railway
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Function-form combinators over track functions
pub mod traits;
/// The two-track result type and its value-form combinators
pub mod types;

/// Tracing-based observation helpers (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use traits::{switch, TrackFnExt};
pub use types::Track;

#[cfg(feature = "tracing")]
pub use trace::TrackTraceExt;
