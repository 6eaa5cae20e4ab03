//! Loosely-typed values carried by enriched errors.
//!
//! Enrichment takes a flat list alternating keys and values, e.g.
//! `["id", 5, "hash", "0X0"]`. Every element of that list is a [`Value`]:
//! keys are [`Value::Str`], values can be anything convertible into one.

use crate::types::alloc_type::{BTreeMap, String, ToString, Vec};
use core::fmt::{self, Display};
use smallvec::SmallVec;

/// Key reserved for the unpaired tail of a malformed key-value list.
pub const MALFORMED_FIELDS: &str = "malformedFields";

/// Flat, ordered key-value list attached to an error.
///
/// Uses inline storage for one pair to avoid heap allocations in the common
/// case of a single annotation.
pub type KeyValues = SmallVec<[Value; 2]>;

/// Key-value pairs keyed by name, as returned by [`fields`](crate::fields).
pub type Fields = BTreeMap<String, Value>;

/// A single element of a key-value list.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String value. The only variant accepted in key position.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Rendered form of an arbitrary `Display` value.
    Text(String),
    /// Sequence of values. Used for the malformed tail of a list.
    List(Vec<Value>),
}

impl Value {
    /// Captures the `Display` rendering of any value.
    ///
    /// The result is a [`Value::Text`], which never qualifies as a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::Value;
    ///
    /// let addr = std::net::Ipv4Addr::LOCALHOST;
    /// assert_eq!(Value::display(addr), Value::Text("127.0.0.1".into()));
    /// ```
    #[inline]
    pub fn display<T: Display>(value: T) -> Self {
        Self::Text(value.to_string())
    }

    /// Returns the string slice if this value can stand in key position.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Str(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) | Self::Text(s) => f.write_str(s),
            Self::Int(n) => Display::fmt(n, f),
            Self::Uint(n) => Display::fmt(n, f),
            Self::Float(n) => Display::fmt(n, f),
            Self::Bool(b) => Display::fmt(b, f),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_str("]")
            },
        }
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident($target:ty): $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int(i64): i8, i16, i32, i64, isize);
impl_from_int!(Uint(u64): u8, u16, u32, u64, usize);

/// Pairs a flat key-value list into named fields.
///
/// Keys must be non-empty [`Value::Str`]. The first element found in key
/// position that is not a valid key stops pairing, and the remaining tail is
/// stored as a [`Value::List`] under [`MALFORMED_FIELDS`]. A trailing key with
/// no value is stored the same way. When a key repeats, the last occurrence
/// wins.
///
/// # Examples
///
/// ```
/// use error_trail::{kv, types::pair_fields, Value};
///
/// let fields = pair_fields(&kv!["id", 5, 7, "x"]);
/// assert_eq!(fields["id"], Value::Int(5));
/// assert_eq!(
///     fields["malformedFields"],
///     Value::List(vec![Value::Int(7), Value::from("x")])
/// );
/// ```
pub fn pair_fields(tuples: &[Value]) -> Fields {
    let mut result = Fields::new();
    let mut label: Option<&str> = None;

    for (i, item) in tuples.iter().enumerate() {
        match label.take() {
            Some(key) => {
                result.insert(key.to_string(), item.clone());
            },
            None => match item.as_key() {
                Some(key) => label = Some(key),
                None => {
                    result.insert(MALFORMED_FIELDS.to_string(), Value::List(tuples[i..].to_vec()));
                    break;
                },
            },
        }
    }

    if let Some(key) = label {
        result.insert(MALFORMED_FIELDS.to_string(), Value::List(Vec::from([Value::from(key)])));
    }

    result
}
