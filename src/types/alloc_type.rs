#[cfg(feature = "std")]
pub type Box<T> = std::boxed::Box<T>;
#[cfg(not(feature = "std"))]
pub type Box<T> = alloc::boxed::Box<T>;

#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
pub use std::sync::Arc;
#[cfg(not(feature = "std"))]
pub use alloc::sync::Arc;

#[cfg(feature = "std")]
pub type BTreeMap<K, V> = std::collections::BTreeMap<K, V>;
#[cfg(not(feature = "std"))]
pub type BTreeMap<K, V> = alloc::collections::BTreeMap<K, V>;

#[cfg(feature = "std")]
pub use std::string::ToString;
#[cfg(not(feature = "std"))]
pub use alloc::string::ToString;
