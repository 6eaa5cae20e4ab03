//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn open(path: &str) -> Result<(), Error> {
//!     Err::<(), _>("permission denied").wrap_err_with(|| format!("opening {path}"))
//! }
//!
//! let err = open("/etc/shadow").unwrap_err();
//! assert!(is(&err, &new("permission denied")));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`newf!`], [`wrapf!`], [`enrich!`], [`enrich_wrap_error!`], [`kv!`]
//! - **Types**: [`Error`], [`Value`]
//! - **Functions**: [`new`], [`wrap`], [`wrap_error`], [`unwrap`], [`cause`], [`is`]
//! - **Traits**: [`ResultExt`]

// Macros
pub use crate::{enrich, enrich_wrap_error, kv, newf, wrapf};

// Core types
pub use crate::types::{Error, Value};

// Functions
pub use crate::chain::{cause, is, unwrap};
pub use crate::wrap::{new, wrap, wrap_error};

// Traits
pub use crate::traits::ResultExt;
