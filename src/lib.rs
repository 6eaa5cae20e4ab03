//! Error chains with causes, sentinel matching and key-value enrichment.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_trail::*` or pick focused pieces as needed.
//!
//! An error chain is built from four kinds of immutable nodes behind a
//! shared [`Error`] handle:
//!
//! - **plain** errors hold a message ([`new`], [`newf!`]);
//! - **message wraps** prefix an inner error ([`wrap`], [`wrapf!`]);
//! - **cause wraps** pair a supplied sentinel with the error that caused it
//!   ([`wrap_error`]);
//! - **enriched** errors attach key-value pairs without changing the message
//!   ([`enrich!`], [`enrich_wrap_error!`]).
//!
//! Traversal: [`unwrap`] takes one step down the chain, [`cause`] reads the
//! side edge of a cause wrap, [`is`] matches sentinels and causes anywhere in
//! the graph, and [`tuples`] / [`fields`] gather every key-value pair.
//!
//! # Examples
//!
//! ## Sentinels and causes
//!
//! ```
//! use error_trail::{cause, is, new, unwrap, wrap_error, Error};
//!
//! let not_found = new("not found");
//! let io = Error::from_std(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
//!
//! let err = wrap_error(io.clone(), not_found.clone()).unwrap();
//!
//! assert_eq!(err.to_string(), "not found: unexpected end of file");
//! assert_eq!(unwrap(&err), Some(&not_found));
//! assert_eq!(cause(&err), Some(&io));
//! assert!(is(&err, &not_found) && is(&err, &io));
//! ```
//!
//! ## Enrichment
//!
//! ```
//! use error_trail::{enrich, enrich_wrap_error, kv, new, wrap};
//!
//! let stream = enrich!(wrap(new("failed"), "stream blocks"), "block_hash", "0X0").unwrap();
//! let err = enrich_wrap_error!(new("oops"), stream, "attempt", 2).unwrap();
//!
//! assert_eq!(err.to_string(), "stream blocks: failed: oops");
//! assert_eq!(err.tuples(), kv!["attempt", 2, "block_hash", "0X0"]);
//! ```
//!
//! ## Absent errors
//!
//! ```
//! use error_trail::{enrich, wrap, wrap_error, Error};
//!
//! let none: Option<Error> = None;
//! assert_eq!(wrap(none.clone(), "ctx"), None);
//! assert_eq!(enrich!(none.clone(), "id", 1), None);
//! assert_eq!(wrap_error(none, None::<Error>), None);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Traversal of error chains: unwrap, cause, is, tuples and fields
pub mod chain;
/// Formatting and enrichment macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability trait for chain nodes and `Result` extensions
pub mod traits;
/// Chain nodes, the shared error handle and key-value values
pub mod types;
/// Constructors for every kind of chain node
pub mod wrap;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::{cause, fields, is, tuples, unwrap, Chain};
pub use traits::*;
pub use types::{
    EnrichedError, Error, Fields, KeyValues, Report, ReportConfig, Value, MALFORMED_FIELDS,
};
pub use wrap::{enrich, enrich_wrap_error, new, newf, wrap, wrap_error, wrapf};
