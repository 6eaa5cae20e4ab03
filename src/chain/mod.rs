//! Traversal of error chains.
//!
//! A chain is a directed acyclic graph with two kinds of edges per node:
//!
//! - the **unwrap** edge ([`Chained::inner`]), the standard single-step walk;
//! - the **cause** edge ([`Chained::cause`]), a side channel from a
//!   cause-wrap node back to the error that triggered it.
//!
//! Every walk here is depth-first and always follows the unwrap edge before
//! the cause edge.
//!
//! # Examples
//!
//! ```
//! use error_trail::{cause, is, new, unwrap, wrap_error};
//!
//! let failed = new("failed");
//! let oops = new("oops");
//! let err = wrap_error(failed.clone(), oops.clone()).unwrap();
//!
//! assert_eq!(unwrap(&err), Some(&oops));
//! assert_eq!(cause(&err), Some(&failed));
//! assert!(is(&err, &failed) && is(&err, &oops));
//! ```

use crate::traits::Chained;
use crate::types::value::pair_fields;
use crate::types::{Error, Fields, KeyValues};
use core::iter::FusedIterator;

/// Returns the error's single-step unwrap target, if it declares one.
#[inline]
pub fn unwrap(err: &Error) -> Option<&Error> {
    err.node().inner()
}

/// Returns the original error tracked by this node, if it tracks one.
///
/// Only the node itself is consulted; an absent cause is a valid answer, not
/// a failure.
#[inline]
pub fn cause(err: &Error) -> Option<&Error> {
    err.node().cause()
}

/// Reports whether `err`, or any error in its chain, is equivalent to `target`.
///
/// Walks the unwrap chain. A node matches when it is the very same node as
/// `target` or when its own [`Chained::is_equivalent`] says so:
///
/// - plain errors compare messages;
/// - cause-wrap nodes match whatever their supplied error or their cause
///   matches, recursively, so every sentinel and every original cause in the
///   graph is found however deep it sits.
///
/// # Examples
///
/// ```
/// use error_trail::{is, new, wrap, Error};
///
/// let err = wrap(new("failed"), "oops").unwrap();
/// assert!(is(&err, &new("failed")));
/// assert!(!is(&err, &Error::from_std(std::fmt::Error)));
/// ```
pub fn is(err: &Error, target: &Error) -> bool {
    err.chain()
        .any(|node| node.ptr_eq(target) || node.node().is_equivalent(target))
}

/// Collects every key-value pair reachable from `err`.
///
/// Order: pairs of the outermost enrichment first, then those found along the
/// unwrap chain, then those found along cause chains.
#[inline]
pub fn tuples(err: &Error) -> KeyValues {
    let mut tuples = KeyValues::new();
    collect_tuples(err.node(), &mut tuples);
    tuples
}

/// Named fields of every enrichment reachable from `err`.
///
/// Each node's own pairs go through
/// [`pair_fields`](crate::types::pair_fields), so a key repeated within one
/// list keeps its last value. Nodes are merged in [`tuples`] order and the
/// first node to set a key wins, so newer enrichments shadow older ones.
#[inline]
pub fn fields(err: &Error) -> Fields {
    let mut fields = Fields::new();
    collect_fields(err.node(), &mut fields);
    fields
}

/// Appends the pairs of `node` and of everything reachable from it.
///
/// A node without an unwrap target ends the walk, even if it tracks a cause.
pub(crate) fn collect_tuples(node: &dyn Chained, out: &mut KeyValues) {
    out.extend(node.key_values().iter().cloned());

    let Some(inner) = node.inner() else {
        return;
    };
    collect_tuples(inner.node(), out);

    if let Some(cause) = node.cause() {
        collect_tuples(cause.node(), out);
    }
}

/// Merges the fields of `node` and of everything reachable from it, walking
/// in the same order as [`collect_tuples`].
pub(crate) fn collect_fields(node: &dyn Chained, out: &mut Fields) {
    for (key, value) in pair_fields(node.key_values()) {
        out.entry(key).or_insert(value);
    }

    let Some(inner) = node.inner() else {
        return;
    };
    collect_fields(inner.node(), out);

    if let Some(cause) = node.cause() {
        collect_fields(cause.node(), out);
    }
}

/// Iterator over an unwrap chain, starting with the error it was created from.
///
/// Created by [`Error::chain`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(head: &'a Error) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.inner();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
