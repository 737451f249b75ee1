//! Textual rendering of [`Optional`] values.

use std::{fmt, io};

use ref_cast::RefCast;

use crate::{spell::Optional, Maybe};

/// Rendering of an absent value.
pub const NOTHING: &str = "Nothing";

/// [`Display`]able view of a [`Maybe`].
///
/// Renders the held value as is, or [`NOTHING`] if there is none. Not a stable
/// serialization format, and intended for debug output and test fixtures
/// only.
///
/// Created by [`Maybe::display()`].
///
/// [`Display`]: fmt::Display
#[derive(RefCast)]
#[repr(transparent)]
pub struct Rendered<T>(Maybe<T>);

impl<T: fmt::Display> fmt::Display for Rendered<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_option() {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str(NOTHING),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Rendered<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rendered").field(&self.0).finish()
    }
}

/// Writes the held value into the given `writer`, or [`NOTHING`] if there is
/// none.
///
/// No line terminator is written.
///
/// # Errors
///
/// If writing into the `writer` fails.
///
/// # Example
///
/// ```rust
/// # use maybe_core::{render_to, Maybe};
/// #
/// let mut out = Vec::new();
/// render_to(&mut out, &Maybe::just(42))?;
/// render_to(&mut out, &Maybe::<i32>::nothing())?;
///
/// assert_eq!(out, b"42Nothing");
/// # Ok::<_, std::io::Error>(())
/// ```
pub fn render_to<W, M>(writer: &mut W, maybe: &M) -> io::Result<()>
where
    W: io::Write + ?Sized,
    M: Optional + ?Sized,
    M::Value: fmt::Display,
{
    match maybe.as_option() {
        Some(value) => write!(writer, "{value}"),
        None => writer.write_all(NOTHING.as_bytes()),
    }
}

#[cfg(test)]
mod spec {
    use std::io::{self, Write as _};

    use super::{render_to, NOTHING};
    use crate::Maybe;

    fn rendered<T: std::fmt::Display>(m: &Maybe<T>) -> String {
        let mut out = Vec::new();
        render_to(&mut out, m).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_payload() {
        assert_eq!(rendered(&Maybe::just(42)), "42");
        assert_eq!(rendered(&Maybe::just("str")), "str");
        assert_eq!(rendered(&Maybe::just(true)), "true");
    }

    #[test]
    fn renders_nothing_regardless_of_type() {
        assert_eq!(rendered(&Maybe::<i32>::nothing()), NOTHING);
        assert_eq!(rendered(&Maybe::<bool>::nothing()), "Nothing");
        assert_eq!(rendered(&Maybe::<String>::nothing()), "Nothing");
        assert_eq!(rendered(&Maybe::<f64>::nothing()), "Nothing");
    }

    #[test]
    fn renders_option_too() {
        let mut out = Vec::new();
        render_to(&mut out, &Some(1.5)).unwrap();
        render_to(&mut out, &None::<u8>).unwrap();

        assert_eq!(out, b"1.5Nothing");
    }

    #[test]
    fn display_matches_render_to() {
        for m in [Maybe::just(-3), Maybe::nothing()] {
            assert_eq!(m.display().to_string(), rendered(&m));
        }
        assert_eq!(format!("{:>8}", Maybe::just(5).display()), "       5");
    }

    #[test]
    fn maps_and_renders_each_line() {
        let numbers = [Maybe::nothing(), Maybe::just(42), Maybe::just(13)];
        let is_42: Vec<_> =
            numbers.iter().map(|m| m.as_ref().map(|n| *n == 42)).collect();

        assert_eq!(
            is_42,
            [Maybe::nothing(), Maybe::just(true), Maybe::just(false)],
        );

        let mut out = Vec::new();
        for m in &is_42 {
            render_to(&mut out, m).unwrap();
            writeln!(out).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "Nothing\ntrue\nfalse\n");
    }

    #[test]
    fn propagates_writer_errors() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = render_to(&mut Broken, &Maybe::<u8>::nothing()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = render_to(&mut Broken, &Maybe::just(1)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
