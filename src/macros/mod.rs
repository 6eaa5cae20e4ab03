//! Ergonomic macros over the constructors in [`crate::wrap`].
//!
//! - [`macro@crate::newf`] / [`macro@crate::wrapf`] - `format!`-style
//!   messages for plain and wrapped errors.
//! - [`macro@crate::kv`] - builds a [`KeyValues`](crate::KeyValues) list from
//!   mixed key and value types.
//! - [`macro@crate::enrich`] / [`macro@crate::enrich_wrap_error`] - enrichment
//!   with inline key-value arguments.
//!
//! # Examples
//!
//! ```
//! use error_trail::{enrich, enrich_wrap_error, kv, newf, wrapf};
//!
//! let failed = newf!("block {} failed", 7);
//! let err = wrapf!(failed, "stream {}", "blocks").unwrap();
//! let err = enrich!(err, "block_hash", "0X0").unwrap();
//! let err = enrich_wrap_error!(newf!("oops"), err, "retries", 3u8).unwrap();
//!
//! assert_eq!(err.to_string(), "stream blocks: block 7 failed: oops");
//! assert_eq!(err.tuples(), kv!["retries", 3u8, "block_hash", "0X0"]);
//! ```

/// Creates a plain error with a `format!`-style message.
///
/// # Examples
///
/// ```
/// use error_trail::newf;
///
/// let err = newf!("oops: {}", "failed");
/// assert_eq!(err.to_string(), "oops: failed");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::newf(::core::format_args!($($arg)*))
    };
}

/// Wraps a possibly absent error with a `format!`-style message.
///
/// # Examples
///
/// ```
/// use error_trail::{new, wrapf};
///
/// let err = wrapf!(new("failed"), "oops id {}", 5).unwrap();
/// assert_eq!(err.to_string(), "oops id 5: failed");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrapf($err, ::core::format_args!($($arg)*))
    };
}

/// Builds a [`KeyValues`](crate::KeyValues) list, converting every element
/// with [`Value::from`](crate::Value).
///
/// # Examples
///
/// ```
/// use error_trail::{kv, Value};
///
/// let list = kv!["id", 5, "ok", true];
/// assert_eq!(list[1], Value::Int(5));
/// assert_eq!(list.len(), 4);
/// ```
#[macro_export]
macro_rules! kv {
    ($($item:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut list = $crate::KeyValues::new();
        $(list.push($crate::Value::from($item));)*
        list
    }};
}

/// Enriches a possibly absent error with inline key-value arguments.
///
/// Expands to [`enrich`](crate::enrich()) with a [`kv!`](crate::kv) list, so
/// an odd number of arguments returns the error unchanged.
///
/// # Examples
///
/// ```
/// use error_trail::{enrich, kv, new};
///
/// let err = enrich!(new("failed"), "number", 6, "hash", "0X0").unwrap();
/// assert_eq!(err.tuples(), kv!["number", 6, "hash", "0X0"]);
///
/// let declined = enrich!(new("failed"), "id", "5", 5).unwrap();
/// assert!(declined.as_enriched().is_none());
/// ```
#[macro_export]
macro_rules! enrich {
    ($err:expr $(, $item:expr)* $(,)?) => {
        $crate::enrich($err, $crate::kv![$($item),*])
    };
}

/// Cause-wraps then enriches, with inline key-value arguments.
///
/// # Examples
///
/// ```
/// use error_trail::{enrich_wrap_error, kv, new};
///
/// let err = enrich_wrap_error!(new("failed"), new("oops"), "id", 5).unwrap();
/// assert_eq!(err.to_string(), "oops: failed");
/// assert_eq!(err.tuples(), kv!["id", 5]);
/// ```
#[macro_export]
macro_rules! enrich_wrap_error {
    ($err:expr, $supplied:expr $(, $item:expr)* $(,)?) => {
        $crate::enrich_wrap_error($err, $supplied, $crate::kv![$($item),*])
    };
}
