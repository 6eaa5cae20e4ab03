use crate::chain;
use crate::traits::Chained;
use crate::types::{Error, Fields, KeyValues, Value};
use core::fmt::{self, Display};

/// Error annotated with key-value pairs.
///
/// Enrichment never changes the rendered message. The pairs stored here are
/// local to this node; [`tuples`](Self::tuples) and [`fields`](Self::fields)
/// aggregate every pair reachable from it.
///
/// # Examples
///
/// ```
/// use error_trail::{enrich, kv, new};
///
/// let err = enrich!(enrich!(new("failed"), "id", 5).unwrap(), "number", 6).unwrap();
/// let enriched = err.as_enriched().unwrap();
///
/// assert_eq!(err.to_string(), "failed");
/// assert_eq!(enriched.tuples(), kv!["number", 6, "id", 5]);
/// ```
#[derive(Debug, Clone)]
pub struct EnrichedError {
    inner: Error,
    pairs: KeyValues,
}

impl EnrichedError {
    #[inline]
    pub(crate) fn new(inner: Error, pairs: KeyValues) -> Self {
        Self { inner, pairs }
    }

    /// Pairs attached by the enrichment that built this node.
    #[inline]
    pub fn local_tuples(&self) -> &[Value] {
        &self.pairs
    }

    /// Every pair reachable from this node: its own first, then the unwrap
    /// chain, then cause chains.
    pub fn tuples(&self) -> KeyValues {
        let mut tuples = KeyValues::new();
        chain::collect_tuples(self, &mut tuples);
        tuples
    }

    /// Named fields of this node and everything reachable from it, see
    /// [`fields`](crate::fields) for how repeated keys resolve.
    pub fn fields(&self) -> Fields {
        let mut fields = Fields::new();
        chain::collect_fields(self, &mut fields);
        fields
    }
}

impl Display for EnrichedError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Chained for EnrichedError {
    #[inline]
    fn inner(&self) -> Option<&Error> {
        Some(&self.inner)
    }

    #[inline]
    fn key_values(&self) -> &[Value] {
        &self.pairs
    }

    #[inline]
    fn as_any(&self) -> &dyn core::any::Any {
        self
    }
}
