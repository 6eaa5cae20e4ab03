use crate::traits::Chained;
use crate::types::alloc_type::String;
use crate::types::Error;
use core::fmt::{self, Display, Write};

/// Error decorated with a prefix message.
///
/// The full message `"{prefix}: {inner}"` is rendered once, when the node is
/// built.
#[derive(Debug, Clone)]
pub struct MessageWrap {
    message: String,
    inner: Error,
}

impl MessageWrap {
    pub fn new<S: Display>(inner: Error, prefix: S) -> Self {
        let mut message = String::new();
        // Writing to a String only fails when a Display impl returns Err; the
        // message then keeps whatever was written before it.
        let _ = write!(message, "{prefix}: {inner}");
        Self { message, inner }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for MessageWrap {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Chained for MessageWrap {
    #[inline]
    fn inner(&self) -> Option<&Error> {
        Some(&self.inner)
    }

    #[inline]
    fn as_any(&self) -> &dyn core::any::Any {
        self
    }
}
