//! Error chain nodes and the values they carry.
//!
//! Every node is immutable once built and shared through the [`Error`]
//! handle:
//!
//! - [`PlainError`] - leaf holding only a message
//! - [`MessageWrap`] - prefix message over an inner error
//! - [`CauseWrap`] - supplied (sentinel) error paired with its cause
//! - [`EnrichedError`] - key-value pairs over an inner error
//! - [`Foreign`] - any standard error adapted into a chain
//!
//! # Examples
//!
//! ```
//! use error_trail::{Error, Value};
//!
//! let err = Error::new("failed")
//!     .wrap("stream blocks")
//!     .enrich(["block_hash", "0X0"]);
//!
//! assert_eq!(err.to_string(), "stream blocks: failed");
//! assert_eq!(err.fields()["block_hash"], Value::from("0X0"));
//! ```

pub mod alloc_type;
pub mod cause_wrap;
pub mod enriched;
pub mod error;
pub mod foreign;
pub mod message_wrap;
pub mod plain;
pub mod report;
pub mod value;

pub use cause_wrap::CauseWrap;
pub use enriched::EnrichedError;
pub use error::Error;
pub use foreign::Foreign;
pub use message_wrap::MessageWrap;
pub use plain::PlainError;
pub use report::{Report, ReportConfig};
pub use value::{pair_fields, Fields, KeyValues, Value, MALFORMED_FIELDS};
