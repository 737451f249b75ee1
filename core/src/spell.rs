//! Presence abstraction with a little bit of type magic 🪄.

use std::{fmt, marker::PhantomData, sync::atomic::AtomicPtr};

use derive_more::{Deref, DerefMut};
use sealed::sealed;

use crate::Maybe;

/// Value that is either present or absent.
///
/// This is what the [`algebra`] operates on, so it works the same way for a
/// [`Maybe`], an [`Option`], and the statically known [`Just`] and [`Nothing`].
///
/// [`algebra`]: crate::algebra
#[sealed]
pub trait Optional {
    /// Type of the value possibly held.
    type Value;

    /// Converts this [`Optional`] into an [`Option`].
    #[must_use]
    fn into_option(self) -> Option<Self::Value>;

    /// Borrows the held value (if any) as an [`Option`].
    #[must_use]
    fn as_option(&self) -> Option<&Self::Value>;
}

#[sealed]
impl<T> Optional for Maybe<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        Self::into_option(self)
    }

    #[inline]
    fn as_option(&self) -> Option<&T> {
        Self::as_option(self)
    }
}

#[sealed]
impl<T> Optional for Option<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Self {
        self
    }

    #[inline]
    fn as_option(&self) -> Option<&T> {
        self.as_ref()
    }
}

/// [`Optional`] value that is always present.
#[derive(Clone, Copy, Debug, Deref, DerefMut, Eq, Hash, PartialEq)]
pub struct Just<T>(pub T);

#[sealed]
impl<T> Optional for Just<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        Some(self.0)
    }

    #[inline]
    fn as_option(&self) -> Option<&T> {
        Some(&self.0)
    }
}

impl<T> From<Just<T>> for Maybe<T> {
    #[inline]
    fn from(just: Just<T>) -> Self {
        Self::just(just.0)
    }
}

/// [`Optional`] value that is always absent.
///
/// It's [`Send`], [`Sync`] and [`Copy`] regardless of `T`, as no `T` is ever
/// held.
pub struct Nothing<T: ?Sized>(PhantomData<AtomicPtr<Box<T>>>);

impl<T: ?Sized> Nothing<T> {
    /// Creates a new [`Nothing`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for Nothing<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Nothing<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Nothing<T> {}

impl<T: ?Sized> fmt::Debug for Nothing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nothing")
    }
}

#[sealed]
impl<T> Optional for Nothing<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        None
    }

    #[inline]
    fn as_option(&self) -> Option<&T> {
        None
    }
}

impl<T> From<Nothing<T>> for Maybe<T> {
    #[inline]
    fn from(_: Nothing<T>) -> Self {
        Self::nothing()
    }
}

#[cfg(test)]
mod spec {
    use std::{cell::Cell, rc::Rc};

    use static_assertions::assert_impl_all;

    use super::{Just, Nothing, Optional};
    use crate::Maybe;

    assert_impl_all!(Nothing<Rc<Cell<u8>>>: Copy, Send, Sync);

    #[test]
    fn maybe_as_optional() {
        assert_eq!(Optional::as_option(&Maybe::just(1)), Some(&1));
        assert_eq!(Optional::into_option(Maybe::just(1)), Some(1));
        assert_eq!(Optional::as_option(&Maybe::<u8>::nothing()), None);
    }

    #[test]
    fn markers_as_optional() {
        let just = Just(String::from("here"));
        assert_eq!(just.len(), 4);
        assert_eq!(just.as_option().map(String::as_str), Some("here"));
        assert_eq!(just.into_option().as_deref(), Some("here"));

        let nothing = Nothing::<String>::new();
        assert_eq!(nothing.as_option(), None);
        assert_eq!(nothing.into_option(), None);
        assert_eq!(format!("{nothing:?}"), "Nothing");
    }

    #[test]
    fn markers_into_maybe() {
        assert_eq!(Maybe::<i32>::from(Just(3)), Maybe::just(3));
        assert_eq!(Maybe::<u8>::from(Nothing::new()), Maybe::nothing());
    }
}
