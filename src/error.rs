use thiserror::Error;

/// Errors reported by [`TreeMap`](crate::TreeMap).
///
/// Looking up or removing a missing key is not an error; those operations
/// return `None`.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The ordering policy refused to accept a key for insertion.
    ///
    /// Returned by [`TreeMap::try_insert`](crate::TreeMap::try_insert) when
    /// [`Comparator::validate`](crate::Comparator::validate) fails.
    #[error("key rejected by ordering policy: {reason}")]
    UnorderableKey {
        /// Why the policy cannot order the key.
        reason: &'static str,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
