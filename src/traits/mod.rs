//! Core traits of the error chain model.
//!
//! - [`Chained`]: capability set every chain node implements
//! - [`ResultExt`]: wrapping and enrichment directly on `Result`
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::{is, Error};
//!
//! let not_found = Error::new("not found");
//! let result: Result<(), Error> = Err(Error::new("row 7"));
//! let err = result.wrap_error(not_found.clone()).wrap_err("loading user").unwrap_err();
//!
//! assert_eq!(err.to_string(), "loading user: not found: row 7");
//! assert!(is(&err, &not_found));
//! ```

pub mod chained;
pub mod result_ext;

pub use chained::Chained;
pub use result_ext::ResultExt;
