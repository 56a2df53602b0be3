//! Function-form combinators over track functions.

pub mod track_fn;

pub use track_fn::{switch, TrackFnExt};
