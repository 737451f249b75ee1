//! [`Maybe`] container and its lifecycle.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop, MaybeUninit},
};

use ref_cast::RefCast as _;

use crate::{error::Absent, render::Rendered};

/// Optional value holding either exactly one `T` (`Just`) or nothing
/// (`Nothing`).
///
/// The payload is stored inline, right inside the [`Maybe`] itself, so no heap
/// allocation ever happens and `T` doesn't need to have any "empty" state.
///
/// A live `T` exists in the storage if and only if the [`Maybe`] is `Just`, and
/// it's dropped exactly once: either on [`Maybe::clear()`], on overwriting, or
/// when the [`Maybe`] itself is dropped.
///
/// # Example
///
/// ```rust
/// # use maybe_core::Maybe;
/// #
/// let answer = Maybe::just(42);
/// assert!(answer.is_just());
/// assert_eq!(*answer.unwrap(), 42);
///
/// let is_answer = answer.map(|n| n == 42);
/// assert_eq!(is_answer, Maybe::just(true));
///
/// let nothing = Maybe::<i32>::nothing();
/// assert!(nothing.map(|n| n == 42).is_nothing());
/// ```
pub struct Maybe<T> {
    /// Indicator whether the `value` is initialized.
    present: bool,

    /// Inline storage of the payload.
    value: MaybeUninit<T>,
}

impl<T> Maybe<T> {
    /// Creates a new [`Maybe`] holding nothing.
    #[inline]
    #[must_use]
    pub const fn nothing() -> Self {
        Self {
            present: false,
            value: MaybeUninit::uninit(),
        }
    }

    /// Creates a new [`Maybe`] holding the given `value`.
    ///
    /// To construct it out of a borrowed value, [`Clone`] it explicitly:
    /// `Maybe::just(value.clone())`.
    #[inline]
    #[must_use]
    pub const fn just(value: T) -> Self {
        Self {
            present: true,
            value: MaybeUninit::new(value),
        }
    }

    /// Indicates whether this [`Maybe`] holds a value.
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        self.present
    }

    /// Indicates whether this [`Maybe`] holds nothing.
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        !self.present
    }

    /// Borrows the held value.
    ///
    /// # Errors
    ///
    /// If this [`Maybe`] holds nothing.
    #[allow(unsafe_code)]
    #[inline]
    pub fn get(&self) -> Result<&T, Absent> {
        if self.present {
            // SAFETY: `present` is set only while `value` is initialized.
            Ok(unsafe { self.value.assume_init_ref() })
        } else {
            Err(Absent)
        }
    }

    /// Mutably borrows the held value.
    ///
    /// # Errors
    ///
    /// If this [`Maybe`] holds nothing.
    #[allow(unsafe_code)]
    #[inline]
    pub fn get_mut(&mut self) -> Result<&mut T, Absent> {
        if self.present {
            // SAFETY: `present` is set only while `value` is initialized.
            Ok(unsafe { self.value.assume_init_mut() })
        } else {
            Err(Absent)
        }
    }

    /// Borrows the held value.
    ///
    /// Use [`Maybe::get()`] or the [`algebra`] functions to avoid the panic.
    ///
    /// # Panics
    ///
    /// If this [`Maybe`] holds nothing.
    ///
    /// ```rust,should_panic
    /// # use maybe_core::Maybe;
    /// #
    /// let _ = Maybe::<u8>::nothing().unwrap();
    /// ```
    ///
    /// [`algebra`]: crate::algebra
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn unwrap(&self) -> &T {
        match self.get() {
            Ok(value) => value,
            Err(Absent) => unwrap_failed(),
        }
    }

    /// Mutably borrows the held value.
    ///
    /// # Panics
    ///
    /// If this [`Maybe`] holds nothing.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn unwrap_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Ok(value) => value,
            Err(Absent) => unwrap_failed(),
        }
    }

    /// Borrows the held value without checking whether there is one.
    ///
    /// # Safety
    ///
    /// This [`Maybe`] must hold a value, as checked by [`Maybe::is_just()`].
    #[allow(unsafe_code)]
    #[inline]
    #[must_use]
    pub unsafe fn unwrap_unchecked(&self) -> &T {
        debug_assert!(self.present, "`Maybe::unwrap_unchecked()` on `Nothing`");
        self.value.assume_init_ref()
    }

    /// Mutably borrows the held value without checking whether there is one.
    ///
    /// # Safety
    ///
    /// This [`Maybe`] must hold a value, as checked by [`Maybe::is_just()`].
    #[allow(unsafe_code)]
    #[inline]
    #[must_use]
    pub unsafe fn unwrap_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(
            self.present,
            "`Maybe::unwrap_unchecked_mut()` on `Nothing`",
        );
        self.value.assume_init_mut()
    }

    /// Drops the held value (if any), leaving nothing in its place.
    ///
    /// Calling it on an already empty [`Maybe`] is a no-op.
    #[allow(unsafe_code)]
    #[inline]
    pub fn clear(&mut self) {
        // Tag goes first, so a panicking `Drop` of `T` can't cause a double
        // drop later.
        if mem::replace(&mut self.present, false) {
            // SAFETY: `present` was set, so `value` is initialized, and it's
            //         not observable as initialized anymore.
            unsafe { self.value.assume_init_drop() }
        }
    }

    /// Replaces the current state of this [`Maybe`] with the `other` one.
    ///
    /// The currently held value (if any) is dropped before the `other`'s one
    /// is moved in.
    ///
    /// Assigning a [`Maybe`] to itself is rejected at compile time:
    /// ```rust,compile_fail
    /// # use maybe_core::Maybe;
    /// #
    /// let mut m = Maybe::just(String::from("self"));
    /// m.assign(m);
    /// ```
    #[inline]
    pub fn assign(&mut self, other: Self) {
        self.clear();
        *self = other;
    }

    /// Takes the held value (if any) out, leaving nothing in its place.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Puts the given `value` in, returning the previously held one (if any).
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Self::just(value))
    }

    /// Converts this [`Maybe`] into an [`Option`], moving the held value out.
    #[allow(unsafe_code)]
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        let mut this = ManuallyDrop::new(self);
        if mem::replace(&mut this.present, false) {
            // SAFETY: `present` was set, so `value` is initialized, and
            //         `ManuallyDrop` guarantees it won't be dropped by `this`.
            Some(unsafe { this.value.assume_init_read() })
        } else {
            None
        }
    }

    /// Borrows the held value (if any) as an [`Option`].
    #[inline]
    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        self.get().ok()
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    ///
    /// Useful for mapping over a borrowed [`Maybe`]:
    /// ```rust
    /// # use maybe_core::Maybe;
    /// #
    /// let name = Maybe::just(String::from("maybe"));
    /// let len = name.as_ref().map(String::len);
    ///
    /// assert_eq!(len, Maybe::just(5));
    /// assert!(name.is_just());
    /// ```
    #[inline]
    #[must_use]
    pub fn as_ref(&self) -> Maybe<&T> {
        self.get().map_or_else(|_| Maybe::nothing(), Maybe::just)
    }

    /// Converts `&mut Maybe<T>` into `Maybe<&mut T>`.
    #[inline]
    #[must_use]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        self.get_mut().map_or_else(|_| Maybe::nothing(), Maybe::just)
    }

    /// Maps the held value (if any) with the given function `f`.
    ///
    /// `f` is called exactly once if there is a value, and never otherwise.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_option() {
            Some(value) => Maybe::just(f(value)),
            None => Maybe::nothing(),
        }
    }

    /// Returns a [`Display`]able [`Rendered`] view of this [`Maybe`], which
    /// renders the held value, or `Nothing` if there is none.
    ///
    /// ```rust
    /// # use maybe_core::Maybe;
    /// #
    /// assert_eq!(Maybe::just(7).display().to_string(), "7");
    /// assert_eq!(Maybe::<u8>::nothing().display().to_string(), "Nothing");
    /// ```
    ///
    /// [`Display`]: fmt::Display
    #[inline]
    #[must_use]
    pub fn display(&self) -> &Rendered<T> {
        Rendered::ref_cast(self)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed() -> ! {
    panic!("called `Maybe::unwrap()` on a `Nothing` value")
}

impl<T> Drop for Maybe<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::nothing()
    }
}

impl<T: Clone> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        self.as_ref().map(T::clone)
    }

    /// Overwrites this [`Maybe`] with a copy of the `source` one.
    ///
    /// The currently held value (if any) is dropped before cloning. If cloning
    /// panics, this [`Maybe`] is left holding nothing.
    ///
    /// Assigning a [`Maybe`] to itself is rejected at compile time:
    /// ```rust,compile_fail
    /// # use maybe_core::Maybe;
    /// #
    /// let mut m = Maybe::just(String::from("self"));
    /// m.clone_from(&m);
    /// ```
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if let Ok(value) = source.get() {
            *self = Self::just(value.clone());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Ok(value) => f.debug_tuple("Just").field(value).finish(),
            Err(Absent) => f.write_str("Nothing"),
        }
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: PartialOrd> PartialOrd for Maybe<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_option().partial_cmp(&other.as_option())
    }
}

impl<T: Ord> Ord for Maybe<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_option().cmp(&other.as_option())
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl<T> From<T> for Maybe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::just(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::nothing, Self::just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
