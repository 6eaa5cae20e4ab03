use crate::chain;
use crate::traits::Chained;
use crate::types::alloc_type::String;
use crate::types::Error;
use core::fmt::{self, Display, Write};

/// A supplied error, usually a sentinel, paired with the error that caused it.
///
/// Unwrapping yields the supplied error; the original error is reachable only
/// through [`cause`](crate::cause). Matching with [`is`](crate::is) succeeds
/// against either side, transitively.
#[derive(Debug, Clone)]
pub struct CauseWrap {
    message: String,
    supplied: Error,
    cause: Error,
}

impl CauseWrap {
    pub fn new(cause: Error, supplied: Error) -> Self {
        let mut message = String::new();
        // Writing to a String only fails when a Display impl returns Err; the
        // message then keeps whatever was written before it.
        let _ = write!(message, "{supplied}: {cause}");
        Self { message, supplied, cause }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn supplied(&self) -> &Error {
        &self.supplied
    }
}

impl Display for CauseWrap {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Chained for CauseWrap {
    #[inline]
    fn inner(&self) -> Option<&Error> {
        Some(&self.supplied)
    }

    #[inline]
    fn cause(&self) -> Option<&Error> {
        Some(&self.cause)
    }

    fn is_equivalent(&self, target: &Error) -> bool {
        chain::is(&self.supplied, target) || chain::is(&self.cause, target)
    }

    #[inline]
    fn as_any(&self) -> &dyn core::any::Any {
        self
    }
}
