use crate::traits::Chained;
use core::fmt::{self, Display};

/// Adapter letting a standard error value sit in a chain.
///
/// Built by [`Error::from_std`](crate::Error::from_std). The adapted error is
/// a leaf: its own `source()` chain is not followed.
#[derive(Debug)]
pub struct Foreign<E> {
    error: E,
}

impl<E> Foreign<E> {
    #[inline]
    pub fn new(error: E) -> Self {
        Self { error }
    }

    #[inline]
    pub fn get_ref(&self) -> &E {
        &self.error
    }
}

impl<E: Display> Display for Foreign<E> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl<E> Chained for Foreign<E>
where
    E: core::error::Error + Send + Sync + 'static,
{
    #[inline]
    fn as_std(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        Some(&self.error)
    }

    #[inline]
    fn as_any(&self) -> &dyn core::any::Any {
        self
    }
}
