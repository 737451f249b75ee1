//! Errors of [`Maybe`] accessors.
//!
//! [`Maybe`]: crate::Maybe

use derive_more::{Display, Error};

/// Error of accessing a value of a [`Maybe`] holding nothing.
///
/// Returned by the checked [`Maybe::get()`] and [`Maybe::get_mut()`]
/// accessors.
///
/// [`Maybe`]: crate::Maybe
/// [`Maybe::get()`]: crate::Maybe::get
/// [`Maybe::get_mut()`]: crate::Maybe::get_mut
#[derive(Clone, Copy, Debug, Display, Eq, Error, Hash, PartialEq)]
#[display(fmt = "value is absent")]
pub struct Absent;

#[cfg(test)]
mod spec {
    use std::error::Error as _;

    use super::Absent;

    #[test]
    fn displays_message() {
        assert_eq!(Absent.to_string(), "value is absent");
    }

    #[test]
    fn has_no_source() {
        assert!(Absent.source().is_none());
    }
}
