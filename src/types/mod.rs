//! The two-track result type.

pub mod track;

pub use track::Track;
