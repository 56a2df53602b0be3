//! Ergonomic macros for entering the railway.

/// Wraps a `Result`-producing expression or block onto the railway.
///
/// Shorthand for [`Track::from_result`](crate::Track::from_result): `Ok`
/// becomes `Success`, `Err` becomes `Failure`.
///
/// # Syntax
///
/// - `track!(expr)` - Wraps a single `Result`-producing expression
/// - `track!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use two_track::track;
///
/// let t = track!("21".parse::<i32>());
/// assert_eq!(t.map(|n| n * 2).into_success(), Some(42));
///
/// let t = track!({
///     let parsed = "x".parse::<i32>();
///     parsed
/// });
/// assert!(t.is_failure());
/// ```
#[macro_export]
macro_rules! track {
    ($expr:expr $(,)?) => {
        $crate::Track::from_result($expr)
    };
}
