//! Extension trait for wrapping and enriching errors inside `Result`.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::Error;
//!
//! fn load(id: u64) -> Result<String, Error> {
//!     Err::<String, _>("connection reset")
//!         .wrap_err("loading block")
//!         .enrich_with(|| [("id", id)])
//! }
//!
//! let err = load(7).unwrap_err();
//! assert_eq!(err.to_string(), "loading block: connection reset");
//! assert_eq!(err.tuples(), error_trail::kv!["id", 7u64]);
//! ```

use crate::types::{Error, Value};
use core::fmt::Display;

/// Adds chain constructors to any `Result` whose error converts into [`Error`].
///
/// Standard errors are not converted implicitly; map them first with
/// `.map_err(Error::from_std)`.
///
/// Closures given to the `_with` methods run only on the error path.
pub trait ResultExt<T> {
    /// Prefixes the error with `message`, see [`wrap`](crate::wrap).
    fn wrap_err<S: Display>(self, message: S) -> Result<T, Error>;

    /// Prefixes the error with a lazily built message.
    fn wrap_err_with<S, F>(self, f: F) -> Result<T, Error>
    where
        S: Display,
        F: FnOnce() -> S;

    /// Makes the error the cause of `supplied`, see
    /// [`wrap_error`](crate::wrap_error).
    fn wrap_error(self, supplied: Error) -> Result<T, Error>;

    /// Enriches the error with lazily built pairs, see
    /// [`enrich`](crate::enrich()).
    ///
    /// Pairs are given as `(key, value)` tuples, so the list can never have
    /// an odd length.
    fn enrich_with<K, V, I, F>(self, f: F) -> Result<T, Error>
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
        F: FnOnce() -> I;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[inline]
    fn wrap_err<S: Display>(self, message: S) -> Result<T, Error> {
        self.map_err(|e| Into::<Error>::into(e).wrap(message))
    }

    #[inline]
    fn wrap_err_with<S, F>(self, f: F) -> Result<T, Error>
    where
        S: Display,
        F: FnOnce() -> S,
    {
        self.map_err(|e| Into::<Error>::into(e).wrap(f()))
    }

    #[inline]
    fn wrap_error(self, supplied: Error) -> Result<T, Error> {
        self.map_err(|e| Into::<Error>::into(e).wrap_error(supplied))
    }

    fn enrich_with<K, V, I, F>(self, f: F) -> Result<T, Error>
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
        F: FnOnce() -> I,
    {
        self.map_err(|e| {
            let pairs = f()
                .into_iter()
                .flat_map(|(key, value)| [Into::<Value>::into(key), value.into()]);
            Into::<Error>::into(e).enrich(pairs)
        })
    }
}
