//! Free functions dispatching on presence of an [`Optional`] value.
//!
//! Neither of them ever accesses an absent value, so they're the sanctioned
//! way to work with a [`Maybe`] without checking it first.
//!
//! [`Maybe`]: crate::Maybe

use crate::spell::Optional;

/// Applies `f` to the held value, or returns the `default` if there is none.
///
/// `f` is never called if there is no value.
///
/// # Example
///
/// ```rust
/// # use maybe_core::{unwrap_or, Maybe};
/// #
/// assert_eq!(unwrap_or(0, |n| *n * 2, &Maybe::just(21)), 42);
/// assert_eq!(unwrap_or(0, |n| *n * 2, &Maybe::<i32>::nothing()), 0);
/// ```
pub fn unwrap_or<M, U, F>(default: U, f: F, maybe: &M) -> U
where
    M: Optional + ?Sized,
    F: FnOnce(&M::Value) -> U,
{
    match maybe.as_option() {
        Some(value) => f(value),
        None => default,
    }
}

/// Calls either `on_just` with the held value, or `on_nothing` if there is
/// none, returning its result.
///
/// Exactly one of them is called, exactly once.
///
/// # Example
///
/// ```rust
/// # use maybe_core::{match_or_else, Maybe};
/// #
/// let describe = |m: &Maybe<u8>| {
///     match_or_else(|n| format!("got {n}"), || "got nothing".into(), m)
/// };
///
/// assert_eq!(describe(&Maybe::just(1)), "got 1");
/// assert_eq!(describe(&Maybe::nothing()), "got nothing");
/// ```
pub fn match_or_else<M, R, J, N>(on_just: J, on_nothing: N, maybe: &M) -> R
where
    M: Optional + ?Sized,
    J: FnOnce(&M::Value) -> R,
    N: FnOnce() -> R,
{
    match maybe.as_option() {
        Some(value) => on_just(value),
        None => on_nothing(),
    }
}

/// Calls `f` with the held value, if there is one.
pub fn match_just<M, F>(f: F, maybe: &M)
where
    M: Optional + ?Sized,
    F: FnOnce(&M::Value),
{
    if let Some(value) = maybe.as_option() {
        f(value);
    }
}
