use crate::types::{Error, Value};
use core::fmt::{Debug, Display};

/// Capability set shared by every node of an error chain.
///
/// A node always renders a message through [`Display`]. Everything else is an
/// optional capability with a default that says "not supported here"; each
/// node overrides only what it actually has. Traversal in [`crate::chain`]
/// queries these capabilities instead of matching on concrete node types.
///
/// Implement this for your own sentinel types and turn them into a shared
/// handle with [`Error::from_chain`].
///
/// # Examples
///
/// ```
/// use error_trail::{is, wrap_error, Chained, Error};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct NotFound;
///
/// impl fmt::Display for NotFound {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("not found")
///     }
/// }
///
/// impl Chained for NotFound {
///     fn is_equivalent(&self, target: &Error) -> bool {
///         target.downcast_chain::<NotFound>().is_some()
///     }
///
///     fn as_any(&self) -> &dyn std::any::Any {
///         self
///     }
/// }
///
/// let err = wrap_error(Error::new("row 7 missing"), Error::from_chain(NotFound)).unwrap();
/// assert!(is(&err, &Error::from_chain(NotFound)));
/// ```
pub trait Chained: Display + Debug + Send + Sync + 'static {
    /// Single-step unwrap target.
    #[inline]
    fn inner(&self) -> Option<&Error> {
        None
    }

    /// Original error that triggered this one, kept off the unwrap chain.
    #[inline]
    fn cause(&self) -> Option<&Error> {
        None
    }

    /// Key-value pairs attached directly to this node.
    #[inline]
    fn key_values(&self) -> &[Value] {
        &[]
    }

    /// Node-specific equivalence test used by [`crate::is`].
    ///
    /// Identity is already checked by the caller; return `true` only for
    /// additional equivalences.
    #[inline]
    fn is_equivalent(&self, target: &Error) -> bool {
        let _ = target;
        false
    }

    /// Wrapped standard error, for nodes adapting a foreign error value.
    #[inline]
    fn as_std(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        None
    }

    /// Type-erased view used by [`Error::downcast_chain`].
    fn as_any(&self) -> &dyn core::any::Any;
}
