//! Tracing integration for error-trail.
//!
//! Records error chains as `tracing` events and tags errors with the span they
//! surfaced in.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::Error;

/// Key under which [`in_span`] records the span name.
pub const SPAN_KEY: &str = "span";

/// Emits an `ERROR` event describing `err`.
///
/// The event carries the message, the causes rendered by
/// [`Error::report`] and the aggregated fields.
pub fn trace_error(err: &Error) {
    tracing::error!(
        error = %err,
        report = %err.report().show_fields(false),
        fields = ?err.fields(),
        "error chain recorded"
    );
}

/// Enriches `err` with the name of `span`.
///
/// A disabled span, e.g. when no subscriber is installed, is recorded as
/// `"unknown"`.
pub fn in_span(err: Error, span: &Span) -> Error {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    err.enrich([SPAN_KEY, name])
}

/// Extension trait for `Result` types to connect errors with tracing.
pub trait ResultSpanExt<T> {
    /// Enriches the error with the current span's name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use error_trail::tracing_ext::ResultSpanExt;
    /// use error_trail::Error;
    ///
    /// let err = Err::<(), _>(Error::new("failed")).with_current_span().unwrap_err();
    /// assert!(err.fields().contains_key("span"));
    /// ```
    fn with_current_span(self) -> Result<T, Error>;

    /// Enriches the error with the name of a specific span.
    fn with_span(self, span: &Span) -> Result<T, Error>;

    /// Emits an event for the error, see [`trace_error`], and passes the
    /// result through.
    fn trace_err(self) -> Result<T, Error>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn with_current_span(self) -> Result<T, Error> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Result<T, Error> {
        self.map_err(|e| in_span(e.into(), span))
    }

    fn trace_err(self) -> Result<T, Error> {
        self.map_err(|e| {
            let err: Error = e.into();
            trace_error(&err);
            err
        })
    }
}
