use crate::traits::Chained;
use crate::types::alloc_type::String;
use crate::types::Error;
use core::fmt::{self, Display, Write};

/// Leaf error holding only a message.
///
/// Two plain errors are equivalent under [`is`](crate::is) when their
/// messages are equal, so independently created sentinels still match.
///
/// # Examples
///
/// ```
/// use error_trail::{is, new};
///
/// assert!(is(&new("failed"), &new("failed")));
/// assert!(!is(&new("failed"), &new("oops")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainError {
    message: String,
}

impl PlainError {
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for PlainError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Chained for PlainError {
    #[inline]
    fn is_equivalent(&self, target: &Error) -> bool {
        renders_as(target, &self.message)
    }

    #[inline]
    fn as_any(&self) -> &dyn core::any::Any {
        self
    }
}

/// Checks the `Display` output of `value` against `expected` without
/// allocating the rendered string.
fn renders_as(value: &dyn Display, expected: &str) -> bool {
    struct Matcher<'a> {
        rest: &'a str,
    }

    impl Write for Matcher<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.rest = self.rest.strip_prefix(s).ok_or(fmt::Error)?;
            Ok(())
        }
    }

    let mut matcher = Matcher { rest: expected };
    write!(matcher, "{value}").is_ok() && matcher.rest.is_empty()
}
