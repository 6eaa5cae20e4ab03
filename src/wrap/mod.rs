//! Constructors for every kind of chain node.
//!
//! Apart from [`new`] and [`newf`], every constructor accepts a possibly
//! absent error (`Error` or `Option<Error>`) and returns `Option<Error>`, so
//! callers can wrap whatever they got back without checking it first:
//!
//! - an absent error stays absent;
//! - [`wrap_error`] collapses to whichever side is present;
//! - [`enrich`] silently returns its input for an odd-length key-value list.
//!
//! When the error is known to be present, the methods on [`Error`] are the
//! total equivalents.
//!
//! # Examples
//!
//! ```
//! use error_trail::{enrich_wrap_error, is, new};
//!
//! let failed = new("failed");
//! let oops = new("oops");
//! let err = enrich_wrap_error!(failed.clone(), oops.clone(), "id", 5).unwrap();
//!
//! assert_eq!(err.to_string(), "oops: failed");
//! assert!(is(&err, &failed) && is(&err, &oops));
//! assert_eq!(err.tuples(), error_trail::kv!["id", 5]);
//! ```

use crate::types::alloc_type::{String, ToString};
use crate::types::{Error, Value};
use core::fmt::{self, Display};

/// Creates a plain error holding exactly `message`.
#[inline]
pub fn new<S: Into<String>>(message: S) -> Error {
    Error::new(message)
}

/// Creates a plain error from pre-formatted arguments.
///
/// Usually reached through the [`newf!`](crate::newf) macro.
///
/// # Examples
///
/// ```
/// use error_trail::newf;
///
/// assert_eq!(newf(format_args!("oops: {}", "failed")).to_string(), "oops: failed");
/// ```
#[inline]
pub fn newf(args: fmt::Arguments<'_>) -> Error {
    match args.as_str() {
        Some(message) => Error::new(message),
        None => Error::new(args.to_string()),
    }
}

/// Prefixes `err` with `message`, rendering `"{message}: {err}"`.
///
/// The new error unwraps to the very same `err` handle. Returns `None` when
/// `err` is absent.
///
/// # Examples
///
/// ```
/// use error_trail::{new, unwrap, wrap, Error};
///
/// let failed = new("failed");
/// let err = wrap(failed.clone(), "oops").unwrap();
///
/// assert_eq!(err.to_string(), "oops: failed");
/// assert!(unwrap(&err).unwrap().ptr_eq(&failed));
/// assert_eq!(wrap(None::<Error>, "oops"), None);
/// ```
#[inline]
pub fn wrap<E, S>(err: E, message: S) -> Option<Error>
where
    E: Into<Option<Error>>,
    S: Display,
{
    err.into().map(|err| err.wrap(message))
}

/// Like [`wrap`] with a formatted message.
///
/// Usually reached through the [`wrapf!`](crate::wrapf) macro. Nothing is
/// formatted when `err` is absent.
#[inline]
pub fn wrapf<E>(err: E, args: fmt::Arguments<'_>) -> Option<Error>
where
    E: Into<Option<Error>>,
{
    wrap(err, args)
}

/// Associates the original error `err` with a `supplied` error.
///
/// `supplied` is usually a sentinel describing the category of failure. The
/// result renders `"{supplied}: {err}"`, unwraps to `supplied` and reports
/// `err` as its [`cause`](crate::cause).
///
/// | `err`   | `supplied` | result            |
/// |---------|------------|-------------------|
/// | absent  | present    | `supplied` itself |
/// | present | absent     | `err` itself      |
/// | present | present    | new cause-wrap    |
/// | absent  | absent     | absent            |
///
/// # Examples
///
/// ```
/// use error_trail::{new, wrap_error, Error};
///
/// let sentinel = new("not found");
///
/// assert_eq!(wrap_error(None::<Error>, sentinel.clone()), Some(sentinel.clone()));
/// assert_eq!(wrap_error(None::<Error>, None::<Error>), None);
///
/// let err = wrap_error(new("row 7"), sentinel).unwrap();
/// assert_eq!(err.to_string(), "not found: row 7");
/// ```
pub fn wrap_error<E, S>(err: E, supplied: S) -> Option<Error>
where
    E: Into<Option<Error>>,
    S: Into<Option<Error>>,
{
    match (err.into(), supplied.into()) {
        (Some(err), Some(supplied)) => Some(err.wrap_error(supplied)),
        (None, supplied) => supplied,
        (err, None) => err,
    }
}

/// Attaches a flat key-value list to `err` without changing its message.
///
/// The list alternates keys and values: `["id", 5, "hash", "0X0"]`. When its
/// length is odd, enrichment quietly declines and `err` comes back unchanged.
/// Returns `None` when `err` is absent. Usually reached through the
/// [`enrich!`](crate::enrich) macro, which converts mixed value types.
///
/// # Examples
///
/// ```
/// use error_trail::{enrich, new, Value};
///
/// let failed = new("failed");
/// let err = enrich(failed.clone(), [Value::from("id"), Value::from(5)]).unwrap();
/// assert_eq!(err.to_string(), "failed");
/// assert!(err.as_enriched().is_some());
///
/// let same = enrich(failed.clone(), [Value::from("id")]).unwrap();
/// assert!(same.ptr_eq(&failed));
/// ```
#[inline]
pub fn enrich<E, I>(err: E, key_values: I) -> Option<Error>
where
    E: Into<Option<Error>>,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    err.into().map(|err| err.enrich(key_values))
}

/// Cause-wraps `err` with `supplied`, then enriches the result.
///
/// Same as `enrich(wrap_error(err, supplied), key_values)`.
#[inline]
pub fn enrich_wrap_error<E, S, I>(err: E, supplied: S, key_values: I) -> Option<Error>
where
    E: Into<Option<Error>>,
    S: Into<Option<Error>>,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    enrich(wrap_error(err, supplied), key_values)
}
