//! Human-readable rendering of a whole error graph.
//!
//! `Display` on [`Error`] prints one message. A [`Report`] also prints the
//! cause chains and the aggregated fields:
//!
//! ```text
//! oops: failed | caused by: failed | {id=5}
//! ```
//!
//! or, with [`ReportConfig::pretty`] (also used by `{:#}`):
//!
//! ```text
//! oops: failed
//!   └─ caused by: failed
//! fields:
//!   id=5
//! ```

use crate::types::alloc_type::String;
use crate::types::Error;
use core::fmt::{self, Display};

/// Layout options for a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub separator: String,
    pub cause_prefix: String,
    pub indent: String,
    /// Indent nested causes by depth and list one field per line.
    pub multiline: bool,
    pub show_causes: bool,
    pub show_fields: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            separator: " | ".into(),
            cause_prefix: "caused by: ".into(),
            indent: "  ".into(),
            multiline: false,
            show_causes: true,
            show_fields: true,
        }
    }
}

impl ReportConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            cause_prefix: "└─ caused by: ".into(),
            multiline: true,
            ..Default::default()
        }
    }

    /// Message and fields only.
    #[inline]
    pub fn compact() -> Self {
        Self { show_causes: false, ..Default::default() }
    }

    #[inline]
    pub fn message_only() -> Self {
        Self { show_causes: false, show_fields: false, ..Default::default() }
    }
}

/// Builder rendering an [`Error`] with its causes and fields.
///
/// Created by [`Error::report`] or [`Error::report_with`].
///
/// # Examples
///
/// ```
/// use error_trail::{enrich_wrap_error, new};
///
/// let err = enrich_wrap_error!(new("failed"), new("oops"), "id", 5).unwrap();
///
/// assert_eq!(err.report().to_string(), "oops: failed | caused by: failed | {id=5}");
/// assert_eq!(err.report().show_fields(false).to_string(), "oops: failed | caused by: failed");
/// assert_eq!(
///     format!("{err:#}"),
///     "oops: failed\n  └─ caused by: failed\nfields:\n  id=5"
/// );
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Report<'a> {
    error: &'a Error,
    config: ReportConfig,
}

impl<'a> Report<'a> {
    #[inline]
    pub fn new(error: &'a Error) -> Self {
        Self { error, config: ReportConfig::default() }
    }

    #[inline]
    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn show_causes(mut self, show: bool) -> Self {
        self.config.show_causes = show;
        self
    }

    pub fn show_fields(mut self, show: bool) -> Self {
        self.config.show_fields = show;
        self
    }

    pub fn pretty(self) -> Self {
        self.config(ReportConfig::pretty())
    }

    pub fn compact(self) -> Self {
        self.config(ReportConfig::compact())
    }

    fn write_causes(&self, f: &mut fmt::Formatter<'_>, err: &Error, depth: usize) -> fmt::Result {
        for node in err.chain() {
            let Some(cause) = node.cause() else {
                continue;
            };

            f.write_str(&self.config.separator)?;
            if self.config.multiline {
                for _ in 0..depth {
                    f.write_str(&self.config.indent)?;
                }
            }
            f.write_str(&self.config.cause_prefix)?;
            write!(f, "{cause}")?;

            self.write_causes(f, cause, depth + 1)?;
        }
        Ok(())
    }

    fn write_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.error.fields();
        if fields.is_empty() {
            return Ok(());
        }

        f.write_str(&self.config.separator)?;
        if self.config.multiline {
            f.write_str("fields:")?;
            for (key, value) in &fields {
                f.write_str(&self.config.separator)?;
                f.write_str(&self.config.indent)?;
                write!(f, "{key}={value}")?;
            }
            return Ok(());
        }

        f.write_str("{")?;
        for (i, (key, value)) in fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if self.config.show_causes {
            self.write_causes(f, self.error, 1)?;
        }
        if self.config.show_fields {
            self.write_fields(f)?;
        }
        Ok(())
    }
}
