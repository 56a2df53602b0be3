//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use two_track::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Type**: [`Track`]
//! - **Traits**: [`TrackFnExt`] (and [`TrackTraceExt`](crate::trace::TrackTraceExt)
//!   with the `tracing` feature)
//! - **Functions**: [`switch`]
//! - **Macros**: [`track!`](crate::track)
//!
//! # Examples
//!
//! ```
//! use two_track::prelude::*;
//!
//! fn positive(n: i32) -> Track<i32, &'static str> {
//!     if n > 0 {
//!         Track::Success(n)
//!     } else {
//!         Track::Failure("not positive")
//!     }
//! }
//!
//! let run = positive.map(|n| n + 1);
//! assert_eq!(run(1), Track::Success(2));
//! ```

pub use crate::track;
pub use crate::traits::{switch, TrackFnExt};
pub use crate::types::Track;

#[cfg(feature = "tracing")]
pub use crate::trace::TrackTraceExt;
