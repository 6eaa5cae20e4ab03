//! Shared, immutable handle over a chain node.

use crate::chain::{self, Chain};
use crate::traits::Chained;
use crate::types::alloc_type::{Arc, String};
use crate::types::report::{Report, ReportConfig};
use crate::types::{CauseWrap, EnrichedError, Fields, Foreign, KeyValues, MessageWrap, PlainError};
use core::fmt::{self, Debug, Display};

/// Reference-counted handle to one node of an error chain.
///
/// Cloning is cheap and never copies the node: every clone points at the same
/// immutable value, which is what identity matching in [`is`](crate::is)
/// relies on. Equality (`==`) is identity as well, see [`Error::ptr_eq`].
///
/// `Display` renders the node's message. The alternate form (`{:#}`) renders
/// the full [`Report`] with causes and fields.
///
/// # Examples
///
/// ```
/// use error_trail::Error;
///
/// let failed = Error::new("failed");
/// let err = failed.clone().wrap("loading block");
///
/// assert_eq!(err.to_string(), "loading block: failed");
/// assert_eq!(err.inner(), Some(&failed));
/// ```
#[must_use]
#[derive(Clone)]
pub struct Error {
    node: Arc<dyn Chained>,
}

impl Error {
    /// Creates a plain error holding only `message`.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::from_chain(PlainError::new(message))
    }

    /// Moves any chain node behind a shared handle.
    #[inline]
    pub fn from_chain<C: Chained>(node: C) -> Self {
        Self { node: Arc::new(node) }
    }

    /// Adapts a standard error so it can take part in a chain.
    ///
    /// The adapted error only matches itself in [`is`](crate::is); keep the
    /// returned handle around to use it as a sentinel.
    ///
    /// The adapted error is a leaf of the chain. Its own `source()` is not
    /// lifted into an unwrap step, since the source is borrowed rather than
    /// an owned [`Error`]: [`unwrap`](crate::unwrap) returns `None`, and the
    /// source stays reachable through [`downcast_ref`](Self::downcast_ref).
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::{is, wrap_error, Error};
    ///
    /// let timeout = Error::from_std(std::io::Error::from(std::io::ErrorKind::TimedOut));
    /// let err = wrap_error(timeout.clone(), Error::new("fetch failed")).unwrap();
    ///
    /// assert!(is(&err, &timeout));
    /// assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    /// ```
    #[inline]
    pub fn from_std<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::from_chain(Foreign::new(error))
    }

    /// Returns the node behind this handle.
    #[inline]
    pub fn node(&self) -> &dyn Chained {
        &*self.node
    }

    /// Returns `true` when both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.node), Arc::as_ptr(&other.node))
    }

    /// Decorates this error with a prefix message.
    ///
    /// Total counterpart of [`wrap`](crate::wrap).
    #[inline]
    pub fn wrap<S: Display>(self, message: S) -> Self {
        Self::from_chain(MessageWrap::new(self, message))
    }

    /// Associates this error, as the cause, with a supplied sentinel.
    ///
    /// Total counterpart of [`wrap_error`](crate::wrap_error).
    #[inline]
    pub fn wrap_error(self, supplied: Error) -> Self {
        Self::from_chain(CauseWrap::new(self, supplied))
    }

    /// Attaches key-value pairs, or returns `self` unchanged when the list has
    /// an odd length.
    ///
    /// Total counterpart of [`enrich`](crate::enrich).
    pub fn enrich<I>(self, key_values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<crate::Value>,
    {
        let pairs: KeyValues = key_values.into_iter().map(Into::into).collect();
        if pairs.len() % 2 != 0 {
            return self;
        }
        Self::from_chain(EnrichedError::new(self, pairs))
    }

    /// Single-step unwrap target.
    #[inline]
    pub fn inner(&self) -> Option<&Error> {
        self.node.inner()
    }

    /// Original error tracked by this node, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Error> {
        self.node.cause()
    }

    /// See [`is`](crate::is).
    #[inline]
    pub fn is(&self, target: &Error) -> bool {
        chain::is(self, target)
    }

    /// Every key-value pair reachable from this error, newest first.
    #[inline]
    pub fn tuples(&self) -> KeyValues {
        chain::tuples(self)
    }

    /// [`tuples`](Self::tuples) paired into named fields.
    #[inline]
    pub fn fields(&self) -> Fields {
        chain::fields(self)
    }

    /// Enriched view of this node, when it is one.
    #[inline]
    pub fn as_enriched(&self) -> Option<&EnrichedError> {
        self.downcast_chain::<EnrichedError>()
    }

    /// Iterates the unwrap chain, starting with this error.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Follows cause edges down to the error that started the failure.
    ///
    /// Walks the unwrap chain looking for the first node that tracks a cause,
    /// jumps to that cause and repeats. Returns `self` when no node in the
    /// chain tracks a cause.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Some(cause) = current.chain().find_map(Error::cause) {
            current = cause;
        }
        current
    }

    /// Downcasts the node behind this handle to a concrete chain type.
    #[inline]
    pub fn downcast_chain<T: Chained>(&self) -> Option<&T> {
        self.node.as_any().downcast_ref::<T>()
    }

    /// Downcasts an adapted standard error, see [`Error::from_std`].
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: core::error::Error + 'static,
    {
        self.node.as_std()?.downcast_ref::<E>()
    }

    /// Report builder with the default layout.
    #[inline]
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }

    /// Report builder with a custom layout.
    #[inline]
    pub fn report_with(&self, config: ReportConfig) -> Report<'_> {
        Report::new(self).config(config)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.report_with(ReportConfig::pretty()), f);
        }
        Display::fmt(&*self.node, f)
    }
}

impl Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.node, f)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.inner().map(|inner| inner as &(dyn core::error::Error + 'static))
    }
}

impl PartialEq for Error {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Error {}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
